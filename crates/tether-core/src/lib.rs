//! # Tether Core
//!
//! Canonical JSON encoding for beacon chain light client proofs.
//!
//! The relayer decodes checkpoints, sync committee updates and header
//! inclusion updates from their compact binary form into the types in
//! [`types::scale`]. This crate turns them into the JSON documents in
//! [`types::json`] that the downstream verifier consumes byte for byte.
//!
//! It performs **no verification**, **no hashing** and **no I/O**. Every
//! conversion is a pure function: the same input always gives the same JSON,
//! and conversions may run concurrently on independent inputs.
//!
//! ## Encoding rules
//!
//! - Fixed-length byte fields become lowercase `0x`-prefixed hex strings.
//! - Merkle branches keep their exact length and order; an empty branch is `[]`.
//! - Optional composites are `null` when their tag says absent, regardless of
//!   the placeholder contents.
//! - The versioned execution header fills only the active fork's slot.
//!
//! ## Usage
//!
//! ```ignore
//! use tether_core::{to_json_string, UpdatePayload};
//!
//! let text = to_json_string(&update)?;
//! ```

pub mod codec;
pub mod error;
pub mod transcode;
pub mod types;

pub use codec::{branch_to_hex, project, to_hex};
pub use error::{DecodeError, EncodeError};
pub use transcode::{to_json_string, to_json_value, ToJson};
pub use types::scale::*;
