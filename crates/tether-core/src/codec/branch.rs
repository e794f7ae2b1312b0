use super::hex::to_hex;
use crate::types::scale::Root;

/// Encode a merkle branch node by node. Order and length are preserved; an
/// empty branch stays an empty list.
pub fn branch_to_hex(branch: &[Root]) -> Vec<String> {
    branch.iter().map(to_hex).collect()
}
