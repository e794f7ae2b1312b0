use crate::types::scale::Optional;

/// Map a present value through `transcode`, or yield `None` when absent.
///
/// Presence comes from the tag alone, so an absent field never reaches
/// `transcode` and serializes as `null`.
pub fn project<T, U>(value: &Optional<T>, transcode: impl FnOnce(&T) -> U) -> Option<U> {
    match value {
        Optional::Absent => None,
        Optional::Present(inner) => Some(transcode(inner)),
    }
}
