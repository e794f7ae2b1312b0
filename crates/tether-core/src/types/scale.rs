//! Binary-side types, as produced by the upstream decoder.
//!
//! Every hash, key and signature is a fixed-size array so its length is
//! known at compile time. Values are consumed read-only by the transcoders.

use alloy_primitives::U256;

use crate::error::DecodeError;

/// Number of validators in the Ethereum beacon chain sync committee.
pub const SYNC_COMMITTEE_SIZE: usize = 512;

/// Number of bytes in the sync committee participation bitvector.
pub const SYNC_COMMITTEE_BITS_LEN: usize = SYNC_COMMITTEE_SIZE / 8;

/// Number of bytes in a BLS12-381 public key (compressed).
pub const BLS_PUBKEY_LEN: usize = 48;

/// Number of bytes in a BLS12-381 signature (compressed).
pub const BLS_SIGNATURE_LEN: usize = 96;

/// Number of bytes in an SSZ root / merkle node.
pub const ROOT_LEN: usize = 32;

/// Number of bytes in an execution layer address.
pub const FEE_RECIPIENT_LEN: usize = 20;

/// Number of bytes in an execution block logs bloom.
pub const LOGS_BLOOM_LEN: usize = 256;

/// A 32-byte SSZ root or merkle branch node.
pub type Root = [u8; ROOT_LEN];

/// Copy a slice into a fixed-length array, rejecting any other length.
fn fixed_from_slice<const N: usize>(
    field: &'static str,
    bytes: &[u8],
) -> Result<[u8; N], DecodeError> {
    if bytes.len() != N {
        return Err(DecodeError::InvalidLength {
            field,
            expected: N,
            got: bytes.len(),
        });
    }
    let mut arr = [0u8; N];
    arr.copy_from_slice(bytes);
    Ok(arr)
}

/// Build a root from a decoded slice.
pub fn root_from_slice(field: &'static str, bytes: &[u8]) -> Result<Root, DecodeError> {
    fixed_from_slice(field, bytes)
}

/// Build a merkle branch from decoded slices, keeping their order.
pub fn branch_from_slices<B: AsRef<[u8]>>(nodes: &[B]) -> Result<Vec<Root>, DecodeError> {
    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| {
            let node = node.as_ref();
            if node.len() != ROOT_LEN {
                return Err(DecodeError::InvalidBranchNode {
                    index,
                    got: node.len(),
                });
            }
            let mut arr = [0u8; ROOT_LEN];
            arr.copy_from_slice(node);
            Ok(arr)
        })
        .collect()
}

/// A BLS12-381 public key (48 bytes, compressed G1 point).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlsPublicKey(pub [u8; BLS_PUBKEY_LEN]);

impl BlsPublicKey {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        fixed_from_slice("BLS public key", bytes).map(Self)
    }
}

impl AsRef<[u8]> for BlsPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A BLS12-381 signature (96 bytes, compressed G2 point).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlsSignature(pub [u8; BLS_SIGNATURE_LEN]);

impl BlsSignature {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        fixed_from_slice("BLS signature", bytes).map(Self)
    }
}

impl AsRef<[u8]> for BlsSignature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A present/absent field as carried on the wire.
///
/// The decoder hands over a `has_value` flag next to a value that may be a
/// zero-filled placeholder. Only the flag decides presence: an all-zero value
/// under a set flag is still present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Optional<T> {
    Absent,
    Present(T),
}

impl<T> Optional<T> {
    /// Build from the decoder's raw `(has_value, value)` pair. The value is
    /// dropped when the flag is unset.
    pub fn from_tagged(has_value: bool, value: T) -> Self {
        if has_value {
            Optional::Present(value)
        } else {
            Optional::Absent
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::Absent
    }
}

/// A beacon chain block header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BeaconHeader {
    pub slot: u64,
    pub proposer_index: u64,
    pub parent_root: Root,
    pub state_root: Root,
    pub body_root: Root,
}

/// A sync committee. Pubkey order is bound to the bit positions of the
/// matching [`SyncAggregate`] and must never change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyncCommittee {
    pub pubkeys: Vec<BlsPublicKey>,
    pub aggregate_pubkey: BlsPublicKey,
}

/// The aggregate signature from the sync committee plus its participation bits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyncAggregate {
    /// Bitvector, one bit per committee member at the same index.
    pub sync_committee_bits: Vec<u8>,
    pub sync_committee_signature: BlsSignature,
}

impl SyncAggregate {
    /// Count how many sync committee members participated (set bits).
    pub fn num_participants(&self) -> usize {
        self.sync_committee_bits
            .iter()
            .map(|byte| byte.count_ones() as usize)
            .sum()
    }
}

/// Execution payload header as of the Deneb fork.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionPayloadHeaderDeneb {
    pub parent_hash: Root,
    pub fee_recipient: [u8; FEE_RECIPIENT_LEN],
    pub state_root: Root,
    pub receipts_root: Root,
    pub logs_bloom: [u8; LOGS_BLOOM_LEN],
    pub prev_randao: Root,
    pub block_number: u64,
    pub gas_limit: u64,
    pub gas_used: u64,
    pub timestamp: u64,
    pub extra_data: Vec<u8>,
    pub base_fee_per_gas: U256,
    pub block_hash: Root,
    pub transactions_root: Root,
    pub withdrawals_root: Root,
    pub blob_gas_used: u64,
    pub excess_blob_gas: u64,
}

/// Execution payload header tagged with the fork it belongs to.
/// Exactly one arm is active per instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VersionedExecutionPayloadHeader {
    Deneb(ExecutionPayloadHeaderDeneb),
}

/// Initial light client checkpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BeaconCheckpoint {
    pub header: BeaconHeader,
    pub current_sync_committee: SyncCommittee,
    pub current_sync_committee_branch: Vec<Root>,
    pub validators_root: Root,
    pub block_roots_root: Root,
    pub block_roots_branch: Vec<Root>,
}

/// The next sync committee plus its inclusion proof in the attested state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NextSyncCommitteeUpdate {
    pub next_sync_committee: SyncCommittee,
    pub next_sync_committee_branch: Vec<Root>,
}

/// Periodic sync committee / finality update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdatePayload {
    pub attested_header: BeaconHeader,
    pub sync_aggregate: SyncAggregate,
    pub signature_slot: u64,
    pub next_sync_committee_update: Optional<NextSyncCommitteeUpdate>,
    pub finalized_header: BeaconHeader,
    pub finality_branch: Vec<Root>,
    pub block_roots_root: Root,
    pub block_roots_branch: Vec<Root>,
}

/// Proof that a header is an ancestor of a finalized block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AncestryProof {
    pub header_branch: Vec<Root>,
    pub finalized_block_root: Root,
}

/// Single header inclusion update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderUpdatePayload {
    pub header: BeaconHeader,
    pub ancestry_proof: Optional<AncestryProof>,
    pub execution_header: VersionedExecutionPayloadHeader,
    pub execution_branch: Vec<Root>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tagged_ignores_placeholder() {
        let absent = Optional::from_tagged(false, [0xAA; 32]);
        assert_eq!(absent, Optional::Absent);

        let present = Optional::from_tagged(true, [0u8; 32]);
        assert_eq!(present, Optional::Present([0u8; 32]));
        assert!(present.is_present());
    }

    #[test]
    fn test_bls_pubkey_rejects_wrong_length() {
        let err = BlsPublicKey::from_bytes(&[0u8; 47]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidLength {
                field: "BLS public key",
                expected: BLS_PUBKEY_LEN,
                got: 47,
            }
        );
        assert!(BlsPublicKey::from_bytes(&[1u8; 48]).is_ok());
    }

    #[test]
    fn test_bls_signature_rejects_wrong_length() {
        assert!(BlsSignature::from_bytes(&[0u8; 97]).is_err());
        assert_eq!(
            BlsSignature::from_bytes(&[7u8; 96]).unwrap(),
            BlsSignature([7u8; 96])
        );
    }

    #[test]
    fn test_root_from_slice() {
        assert_eq!(root_from_slice("state root", &[3u8; 32]).unwrap(), [3u8; 32]);
        assert!(matches!(
            root_from_slice("state root", &[3u8; 31]),
            Err(DecodeError::InvalidLength { field: "state root", expected: 32, got: 31 })
        ));
    }

    #[test]
    fn test_branch_from_slices_keeps_order() {
        let nodes = vec![vec![1u8; 32], vec![2u8; 32], vec![3u8; 32]];
        let branch = branch_from_slices(&nodes).unwrap();
        assert_eq!(branch, vec![[1u8; 32], [2u8; 32], [3u8; 32]]);
    }

    #[test]
    fn test_branch_from_slices_reports_bad_node() {
        let nodes = vec![vec![1u8; 32], vec![2u8; 33]];
        assert_eq!(
            branch_from_slices(&nodes).unwrap_err(),
            DecodeError::InvalidBranchNode { index: 1, got: 33 }
        );
    }

    #[test]
    fn test_sync_aggregate_participation() {
        let mut bits = vec![0u8; SYNC_COMMITTEE_BITS_LEN];
        bits[0] = 0b11111111;
        bits[1] = 0b00000001;

        let aggregate = SyncAggregate {
            sync_committee_bits: bits,
            sync_committee_signature: BlsSignature([0u8; 96]),
        };

        assert_eq!(aggregate.num_participants(), 9);
    }
}
