//! # Domain Invariants
//!
//! Rules that must hold for every successfully built genesis setup.

use std::collections::BTreeMap;

use super::errors::{ChainKind, SetupError, ShardId};
use super::value_objects::GenesisNodeInfo;

/// Smallest allowed consensus group.
pub const MIN_CONSENSUS_GROUP_SIZE: u32 = 1;

/// Invariant: a chain's consensus group is positive and fits in its minimum node count.
pub fn invariant_consensus_sizes(
    chain: ChainKind,
    group_size: u32,
    min_nodes: u32,
) -> Result<(), SetupError> {
    if group_size < MIN_CONSENSUS_GROUP_SIZE {
        return Err(SetupError::NonPositiveConsensusGroupSize { chain });
    }
    if min_nodes < group_size {
        return Err(SetupError::MinNodesPerShardBelowConsensusSize {
            chain,
            min_nodes,
            group_size,
        });
    }
    Ok(())
}

/// Invariant: enough decoded validators to reach a threshold.
pub fn invariant_min_node_count(nodes: u32, required: u32) -> Result<(), SetupError> {
    if nodes < required {
        return Err(SetupError::NodeCountBelowMinimum { nodes, required });
    }
    Ok(())
}

/// Invariant: every validator record sits in exactly one bucket with the matching role.
///
/// Returns false when a bucket holds a node whose recorded shard or role
/// disagrees with the bucket, or when the bucket sizes do not add up to
/// `expected_nodes`. Records are counted, not keys: a genesis list may repeat
/// a key.
pub fn invariant_unique_assignment(
    eligible: &BTreeMap<ShardId, Vec<GenesisNodeInfo>>,
    waiting: &BTreeMap<ShardId, Vec<GenesisNodeInfo>>,
    expected_nodes: usize,
) -> bool {
    let mut total = 0usize;

    for (table, eligible_role) in [(eligible, true), (waiting, false)] {
        for (shard_id, nodes) in table {
            for node in nodes {
                if node.assigned_shard() != *shard_id || node.is_eligible() != eligible_role {
                    return false;
                }
                total += 1;
            }
        }
    }

    total == expected_nodes
}
