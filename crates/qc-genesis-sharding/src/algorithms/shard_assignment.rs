//! # Shard Assignment Algorithm
//!
//! Deterministic genesis assignment. There is no information besides the
//! public key, so validators are placed by their position in the genesis
//! list:
//!
//! 1. The first `meta_chain_min_nodes` entries form the metachain committee.
//! 2. Shards `0..number_of_shards` are filled FIFO with `min_nodes_per_shard`
//!    eligible validators each.
//! 3. Everything left goes round-robin to the waiting lists, starting at
//!    shard 1 and cycling through the metachain.

use tracing::debug;

use super::decoding::DecodedNode;
use crate::domain::{ShardId, METACHAIN_SHARD_ID};

/// Mark the metachain committee and return how many validators it holds.
pub fn assign_metachain(nodes: &mut [DecodedNode], meta_chain_min_nodes: u32) -> u32 {
    let mut nr_of_meta_chain_nodes = 0u32;

    for node in nodes.iter_mut().take(meta_chain_min_nodes as usize) {
        node.assigned_shard = METACHAIN_SHARD_ID;
        node.eligible = true;
        nr_of_meta_chain_nodes += 1;
    }

    nr_of_meta_chain_nodes
}

/// Fill the eligible committee of every regular shard in list order.
///
/// Starts right after the metachain block and returns the cursor of the
/// first unassigned validator.
pub fn assign_shards_fifo(
    nodes: &mut [DecodedNode],
    meta_chain_min_nodes: u32,
    min_nodes_per_shard: u32,
    number_of_shards: u32,
) -> usize {
    let len = nodes.len();
    let mut cursor = (meta_chain_min_nodes as usize).min(len);

    for shard_id in 0..number_of_shards {
        let bound = (meta_chain_min_nodes as u64
            + (shard_id as u64 + 1) * min_nodes_per_shard as u64)
            .min(len as u64) as usize;

        for node in &mut nodes[cursor.min(bound)..bound] {
            node.assigned_shard = shard_id;
            node.eligible = true;
        }
        cursor = cursor.max(bound);
    }

    cursor
}

/// Distribute the remaining validators over the waiting lists.
///
/// The position walks `1, 2, .., number_of_shards - 1, metachain, 0, 1, ..`;
/// position `number_of_shards` stands for the metachain.
pub fn assign_waiting_round_robin(nodes: &mut [DecodedNode], from: usize, number_of_shards: u32) {
    let slots = number_of_shards as u64 + 1;
    let mut position = 0u64;

    for node in nodes.iter_mut().skip(from) {
        position = (position + 1) % slots;
        let shard_id: ShardId = if position == number_of_shards as u64 {
            METACHAIN_SHARD_ID
        } else {
            position as ShardId
        };

        node.assigned_shard = shard_id;
        node.eligible = false;
        debug!("[genesis] Waiting node {} -> shard {}", node.raw.pub_key, shard_id);
    }
}
