//! # Inbound Ports
//!
//! Read-only API over the genesis assignment, consumed by consensus
//! bootstrap and routing.

use std::collections::BTreeMap;

use crate::domain::{GenesisNodeInfo, QueryError, ShardId};

/// Shard-indexed node table.
pub type NodesByShard = BTreeMap<ShardId, Vec<GenesisNodeInfo>>;

/// Genesis nodes-setup API - inbound port.
///
/// Implementations are immutable after construction and safe to share
/// across threads without locking.
pub trait GenesisNodesSetupHandler: Send + Sync {
    /// Eligible public keys (as configured text) per shard.
    fn initial_nodes_pub_keys(&self) -> BTreeMap<ShardId, Vec<String>>;

    /// Eligible and waiting tables.
    fn initial_nodes_info(&self) -> (&NodesByShard, &NodesByShard);

    /// Eligible public keys of one shard.
    fn initial_eligible_nodes_pub_keys_for_shard(
        &self,
        shard_id: ShardId,
    ) -> Result<Vec<String>, QueryError>;

    /// Eligible and waiting nodes of one shard.
    fn initial_nodes_info_for_shard(
        &self,
        shard_id: ShardId,
    ) -> Result<(&[GenesisNodeInfo], &[GenesisNodeInfo]), QueryError>;

    /// Number of regular shards.
    fn number_of_shards(&self) -> u32;

    /// `number_of_shards * min_nodes_per_shard + meta_chain_min_nodes`.
    fn min_number_of_nodes(&self) -> u32;

    /// Shard the given decoded key was assigned to.
    fn shard_id_for_pub_key(&self, pub_key: &[u8]) -> Result<ShardId, QueryError>;

    /// Genesis start time.
    fn start_time(&self) -> i64;

    /// Round duration in milliseconds.
    fn round_duration(&self) -> u64;

    /// Shard consensus group size.
    fn shard_consensus_group_size(&self) -> u32;

    /// Metachain consensus group size.
    fn meta_consensus_group_size(&self) -> u32;

    /// Configured hysteresis.
    fn hysteresis(&self) -> f32;

    /// Configured adaptivity flag.
    fn adaptivity(&self) -> bool;
}
