use super::ToJson;
use crate::codec::to_hex;
use crate::types::{json, scale};

impl ToJson for scale::ExecutionPayloadHeaderDeneb {
    type Json = json::ExecutionPayloadHeaderDeneb;

    fn to_json(&self) -> json::ExecutionPayloadHeaderDeneb {
        json::ExecutionPayloadHeaderDeneb {
            parent_hash: to_hex(self.parent_hash),
            fee_recipient: to_hex(self.fee_recipient),
            state_root: to_hex(self.state_root),
            receipts_root: to_hex(self.receipts_root),
            logs_bloom: to_hex(self.logs_bloom),
            prev_randao: to_hex(self.prev_randao),
            block_number: self.block_number,
            gas_limit: self.gas_limit,
            gas_used: self.gas_used,
            timestamp: self.timestamp,
            extra_data: to_hex(&self.extra_data),
            base_fee_per_gas: self.base_fee_per_gas.to_string(),
            block_hash: to_hex(self.block_hash),
            transactions_root: to_hex(self.transactions_root),
            withdrawals_root: to_hex(self.withdrawals_root),
            blob_gas_used: self.blob_gas_used,
            excess_blob_gas: self.excess_blob_gas,
        }
    }
}

impl ToJson for scale::VersionedExecutionPayloadHeader {
    type Json = json::VersionedExecutionPayloadHeader;

    /// Only the slot of the active fork is filled. A new fork gets its own
    /// arm here and its own slot in the output, left `None` by the others.
    fn to_json(&self) -> json::VersionedExecutionPayloadHeader {
        match self {
            scale::VersionedExecutionPayloadHeader::Deneb(header) => {
                json::VersionedExecutionPayloadHeader {
                    deneb: Some(header.to_json()),
                }
            }
        }
    }
}
