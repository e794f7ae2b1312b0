use thiserror::Error;

/// Errors raised at the decoder boundary, when raw slices are turned into
/// fixed-length fields. Lengths are never padded or truncated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Invalid length for {field}: expected {expected} bytes, got {got}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Invalid length for branch node {index}: expected 32 bytes, got {got}")]
    InvalidBranchNode { index: usize, got: usize },
}

/// Errors raised while rendering transcoded objects to JSON text or values.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
