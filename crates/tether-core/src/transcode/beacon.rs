use super::ToJson;
use crate::codec::to_hex;
use crate::types::{json, scale};

impl ToJson for scale::BeaconHeader {
    type Json = json::BeaconHeader;

    fn to_json(&self) -> json::BeaconHeader {
        json::BeaconHeader {
            slot: self.slot,
            proposer_index: self.proposer_index,
            parent_root: to_hex(self.parent_root),
            state_root: to_hex(self.state_root),
            body_root: to_hex(self.body_root),
        }
    }
}

impl ToJson for scale::SyncCommittee {
    type Json = json::SyncCommittee;

    // Position i stays bit i of the aggregate participation bits.
    fn to_json(&self) -> json::SyncCommittee {
        json::SyncCommittee {
            pubkeys: self.pubkeys.iter().map(to_hex).collect(),
            aggregate_pubkey: to_hex(&self.aggregate_pubkey),
        }
    }
}

impl ToJson for scale::SyncAggregate {
    type Json = json::SyncAggregate;

    fn to_json(&self) -> json::SyncAggregate {
        json::SyncAggregate {
            sync_committee_bits: to_hex(&self.sync_committee_bits),
            sync_committee_signature: to_hex(&self.sync_committee_signature),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcode::to_json_string;
    use crate::types::scale::{BlsPublicKey, BlsSignature, SYNC_COMMITTEE_BITS_LEN};
    use serde_json::json;

    fn zero_root_hex() -> String {
        format!("0x{}", "00".repeat(32))
    }

    #[test]
    fn test_beacon_header_scenario() {
        let mut parent_root = [0u8; 32];
        parent_root[31] = 1;

        let header = scale::BeaconHeader {
            slot: 100,
            proposer_index: 7,
            parent_root,
            state_root: [0; 32],
            body_root: [0; 32],
        };

        let expected = format!(
            r#"{{"slot":100,"proposerIndex":7,"parentRoot":"0x{}01","stateRoot":"{}","bodyRoot":"{}"}}"#,
            "00".repeat(31),
            zero_root_hex(),
            zero_root_hex(),
        );
        assert_eq!(to_json_string(&header).unwrap(), expected);
    }

    #[test]
    fn test_beacon_header_max_values() {
        let header = scale::BeaconHeader {
            slot: u64::MAX,
            proposer_index: u64::MAX,
            parent_root: [0xFF; 32],
            state_root: [0xAB; 32],
            body_root: [0x01; 32],
        };
        let out = header.to_json();
        assert_eq!(out.slot, u64::MAX);
        assert_eq!(out.proposer_index, u64::MAX);
        assert_eq!(out.state_root, format!("0x{}", "ab".repeat(32)));
    }

    #[test]
    fn test_sync_committee_preserves_pubkey_order() {
        let pubkeys: Vec<BlsPublicKey> = (0..16u8).rev().map(|i| BlsPublicKey([i; 48])).collect();
        let committee = scale::SyncCommittee {
            pubkeys: pubkeys.clone(),
            aggregate_pubkey: BlsPublicKey([0xEE; 48]),
        };

        let out = committee.to_json();
        assert_eq!(out.pubkeys.len(), pubkeys.len());
        for (pk, hex) in pubkeys.iter().zip(&out.pubkeys) {
            assert_eq!(*hex, to_hex(pk));
            assert_eq!(hex.len(), 2 + 2 * 48);
        }
        assert_eq!(out.pubkeys[0], format!("0x{}", "0f".repeat(48)));
        assert_eq!(out.aggregate_pubkey, format!("0x{}", "ee".repeat(48)));
    }

    #[test]
    fn test_sync_committee_json_shape() {
        let committee = scale::SyncCommittee {
            pubkeys: vec![BlsPublicKey([1; 48]), BlsPublicKey([2; 48])],
            aggregate_pubkey: BlsPublicKey([3; 48]),
        };
        let value = serde_json::to_value(committee.to_json()).unwrap();
        assert_eq!(
            value,
            json!({
                "pubkeys": [format!("0x{}", "01".repeat(48)), format!("0x{}", "02".repeat(48))],
                "aggregatePubkey": format!("0x{}", "03".repeat(48)),
            })
        );
    }

    #[test]
    fn test_sync_aggregate() {
        let mut bits = vec![0u8; SYNC_COMMITTEE_BITS_LEN];
        bits[0] = 0xFF;
        bits[63] = 0x80;
        let aggregate = scale::SyncAggregate {
            sync_committee_bits: bits,
            sync_committee_signature: BlsSignature([0xC0; 96]),
        };

        let out = aggregate.to_json();
        assert_eq!(out.sync_committee_bits.len(), 2 + 2 * SYNC_COMMITTEE_BITS_LEN);
        assert!(out.sync_committee_bits.starts_with("0xff00"));
        assert!(out.sync_committee_bits.ends_with("0080"));
        assert_eq!(out.sync_committee_signature, format!("0x{}", "c0".repeat(96)));
    }
}
