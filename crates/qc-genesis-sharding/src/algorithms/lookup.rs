//! # Lookup Construction
//!
//! Builds the shard-indexed eligible and waiting tables.

use std::collections::BTreeMap;

use super::decoding::DecodedNode;
use crate::domain::GenesisNodeInfo;
use crate::ports::NodesByShard;

/// Split assigned validators into eligible and waiting tables.
///
/// Genesis list order is kept inside every bucket. Records without key or
/// address bytes are skipped.
pub fn build_assignment_tables(nodes: &[DecodedNode]) -> (NodesByShard, NodesByShard) {
    let mut eligible: NodesByShard = BTreeMap::new();
    let mut waiting: NodesByShard = BTreeMap::new();

    for node in nodes {
        if node.pub_key.is_empty() || node.address.is_empty() {
            continue;
        }

        let info = GenesisNodeInfo::new(
            node.assigned_shard,
            node.eligible,
            node.pub_key.clone(),
            node.address.clone(),
            node.raw.pub_key.clone(),
        );

        let table = if node.eligible {
            &mut eligible
        } else {
            &mut waiting
        };
        table.entry(node.assigned_shard).or_default().push(info);
    }

    (eligible, waiting)
}
