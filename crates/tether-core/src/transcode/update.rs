use tracing::debug;

use super::ToJson;
use crate::codec::{branch_to_hex, project, to_hex};
use crate::types::{json, scale};

impl ToJson for scale::BeaconCheckpoint {
    type Json = json::CheckPoint;

    fn to_json(&self) -> json::CheckPoint {
        debug!(
            slot = self.header.slot,
            committee_size = self.current_sync_committee.pubkeys.len(),
            committee_branch_depth = self.current_sync_committee_branch.len(),
            block_roots_branch_depth = self.block_roots_branch.len(),
            "Transcoding checkpoint"
        );

        json::CheckPoint {
            header: self.header.to_json(),
            current_sync_committee: self.current_sync_committee.to_json(),
            current_sync_committee_branch: branch_to_hex(&self.current_sync_committee_branch),
            validators_root: to_hex(self.validators_root),
            block_roots_root: to_hex(self.block_roots_root),
            block_roots_branch: branch_to_hex(&self.block_roots_branch),
        }
    }
}

impl ToJson for scale::NextSyncCommitteeUpdate {
    type Json = json::NextSyncCommitteeUpdate;

    fn to_json(&self) -> json::NextSyncCommitteeUpdate {
        json::NextSyncCommitteeUpdate {
            next_sync_committee: self.next_sync_committee.to_json(),
            next_sync_committee_branch: branch_to_hex(&self.next_sync_committee_branch),
        }
    }
}

impl ToJson for scale::UpdatePayload {
    type Json = json::Update;

    fn to_json(&self) -> json::Update {
        debug!(
            attested_slot = self.attested_header.slot,
            finalized_slot = self.finalized_header.slot,
            signature_slot = self.signature_slot,
            participants = self.sync_aggregate.num_participants(),
            has_next_sync_committee = self.next_sync_committee_update.is_present(),
            "Transcoding update"
        );

        json::Update {
            attested_header: self.attested_header.to_json(),
            sync_aggregate: self.sync_aggregate.to_json(),
            signature_slot: self.signature_slot,
            next_sync_committee_update: project(
                &self.next_sync_committee_update,
                ToJson::to_json,
            ),
            finalized_header: self.finalized_header.to_json(),
            finality_branch: branch_to_hex(&self.finality_branch),
            block_roots_root: to_hex(self.block_roots_root),
            block_roots_branch: branch_to_hex(&self.block_roots_branch),
        }
    }
}

impl ToJson for scale::AncestryProof {
    type Json = json::AncestryProof;

    fn to_json(&self) -> json::AncestryProof {
        json::AncestryProof {
            header_branch: branch_to_hex(&self.header_branch),
            finalized_block_root: to_hex(self.finalized_block_root),
        }
    }
}

impl ToJson for scale::HeaderUpdatePayload {
    type Json = json::HeaderUpdate;

    fn to_json(&self) -> json::HeaderUpdate {
        debug!(
            slot = self.header.slot,
            has_ancestry_proof = self.ancestry_proof.is_present(),
            execution_branch_depth = self.execution_branch.len(),
            "Transcoding header update"
        );

        json::HeaderUpdate {
            header: self.header.to_json(),
            ancestry_proof: project(&self.ancestry_proof, ToJson::to_json),
            execution_header: self.execution_header.to_json(),
            execution_branch: branch_to_hex(&self.execution_branch),
        }
    }
}
