//! # Nodes Setup Service
//!
//! Builds the genesis topology from a [`GenesisConfig`] and serves the
//! read-only query API.
//!
//! Construction runs through private stages
//! `Uninitialized -> Validated -> Assigned -> Ready`. Only the ready value,
//! [`NodesSetup`], is ever handed out, so a failed build leaves nothing
//! behind.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::algorithms::{
    assign_metachain, assign_shards_fifo, assign_waiting_round_robin, build_assignment_tables,
    check_node_counts, compute_shard_count, decode_initial_nodes, DecodedNode,
};
use crate::domain::{
    invariant_unique_assignment, GenesisConfig, GenesisNodeInfo, QueryError, SetupError, ShardId,
};
use crate::ports::{GenesisNodesSetupHandler, NodesByShard, PubkeyConverter};

struct Uninitialized {
    config: GenesisConfig,
    address_converter: Arc<dyn PubkeyConverter>,
    validator_converter: Arc<dyn PubkeyConverter>,
}

struct Validated {
    config: GenesisConfig,
    nodes: Vec<DecodedNode>,
    nr_of_nodes: u32,
}

struct Assigned {
    config: GenesisConfig,
    nodes: Vec<DecodedNode>,
    nr_of_nodes: u32,
    nr_of_meta_chain_nodes: u32,
    nr_of_shards: u32,
}

impl Uninitialized {
    fn validate(self) -> Result<Validated, SetupError> {
        let nodes = decode_initial_nodes(
            &self.config.initial_nodes,
            self.address_converter.as_ref(),
            self.validator_converter.as_ref(),
        )?;
        let nr_of_nodes = u32::try_from(nodes.len()).unwrap_or(u32::MAX);

        check_node_counts(&self.config, nr_of_nodes)?;
        info!("[genesis] Validated {} initial nodes", nr_of_nodes);

        Ok(Validated {
            config: self.config,
            nodes,
            nr_of_nodes,
        })
    }
}

impl Validated {
    fn assign(mut self) -> Assigned {
        let config = &self.config;

        let nr_of_meta_chain_nodes =
            assign_metachain(&mut self.nodes, config.meta_chain_min_nodes);
        let nr_of_shards = compute_shard_count(
            self.nr_of_nodes,
            nr_of_meta_chain_nodes,
            config.meta_chain_min_nodes,
            config.min_nodes_per_shard,
            config.hysteresis,
        );
        info!(
            "[genesis] Derived {} shards ({} metachain nodes, hysteresis {})",
            nr_of_shards, nr_of_meta_chain_nodes, config.hysteresis
        );

        let cursor = assign_shards_fifo(
            &mut self.nodes,
            config.meta_chain_min_nodes,
            config.min_nodes_per_shard,
            nr_of_shards,
        );
        debug!(
            "[genesis] {} eligible nodes, {} left for waiting lists",
            cursor,
            self.nodes.len() - cursor
        );
        assign_waiting_round_robin(&mut self.nodes, cursor, nr_of_shards);

        Assigned {
            config: self.config,
            nodes: self.nodes,
            nr_of_nodes: self.nr_of_nodes,
            nr_of_meta_chain_nodes,
            nr_of_shards,
        }
    }
}

impl Assigned {
    fn into_ready(self) -> NodesSetup {
        let (eligible, waiting) = build_assignment_tables(&self.nodes);
        debug_assert!(invariant_unique_assignment(
            &eligible,
            &waiting,
            self.nodes.len()
        ));
        info!(
            "[genesis] Assignment tables ready: {} eligible buckets, {} waiting buckets",
            eligible.len(),
            waiting.len()
        );

        NodesSetup {
            config: self.config,
            nodes: self.nodes,
            nr_of_nodes: self.nr_of_nodes,
            nr_of_meta_chain_nodes: self.nr_of_meta_chain_nodes,
            nr_of_shards: self.nr_of_shards,
            eligible,
            waiting,
        }
    }
}

/// Genesis nodes setup: shard count plus eligible and waiting tables.
///
/// Immutable once built; share it behind an `Arc` for concurrent readers.
#[derive(Debug)]
pub struct NodesSetup {
    config: GenesisConfig,
    nodes: Vec<DecodedNode>,
    nr_of_nodes: u32,
    nr_of_meta_chain_nodes: u32,
    nr_of_shards: u32,
    eligible: NodesByShard,
    waiting: NodesByShard,
}

impl NodesSetup {
    /// Build the genesis topology from an already loaded configuration.
    ///
    /// Fails with the first violated check; both converters must be present.
    pub fn new(
        config: GenesisConfig,
        address_converter: Option<Arc<dyn PubkeyConverter>>,
        validator_converter: Option<Arc<dyn PubkeyConverter>>,
    ) -> Result<Self, SetupError> {
        let (address_converter, validator_converter) =
            require_converters(address_converter, validator_converter)?;

        Self::build(Uninitialized {
            config,
            address_converter,
            validator_converter,
        })
    }

    /// Load a nodes-setup JSON file and build the genesis topology.
    pub fn from_file(
        path: impl AsRef<Path>,
        address_converter: Option<Arc<dyn PubkeyConverter>>,
        validator_converter: Option<Arc<dyn PubkeyConverter>>,
    ) -> Result<Self, SetupError> {
        let (address_converter, validator_converter) =
            require_converters(address_converter, validator_converter)?;
        let config = GenesisConfig::load_json_file(path)?;

        Self::build(Uninitialized {
            config,
            address_converter,
            validator_converter,
        })
    }

    fn build(stage: Uninitialized) -> Result<Self, SetupError> {
        Ok(stage.validate()?.assign().into_ready())
    }

    /// Number of decoded validators.
    pub fn number_of_nodes(&self) -> u32 {
        self.nr_of_nodes
    }

    /// Number of validators in the metachain committee.
    pub fn number_of_meta_chain_nodes(&self) -> u32 {
        self.nr_of_meta_chain_nodes
    }

    /// Minimum eligible nodes per regular shard.
    pub fn min_nodes_per_shard(&self) -> u32 {
        self.config.min_nodes_per_shard
    }

    /// Minimum eligible nodes in the metachain.
    pub fn meta_chain_min_nodes(&self) -> u32 {
        self.config.meta_chain_min_nodes
    }

    /// The configuration the setup was built from.
    pub fn config(&self) -> &GenesisConfig {
        &self.config
    }

    /// Every shard id holding at least one validator, in ascending order.
    pub fn shard_ids(&self) -> Vec<ShardId> {
        let mut ids: Vec<ShardId> = self
            .eligible
            .keys()
            .chain(self.waiting.keys())
            .copied()
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

fn require_converters(
    address_converter: Option<Arc<dyn PubkeyConverter>>,
    validator_converter: Option<Arc<dyn PubkeyConverter>>,
) -> Result<(Arc<dyn PubkeyConverter>, Arc<dyn PubkeyConverter>), SetupError> {
    let address_converter =
        address_converter.ok_or(SetupError::NilPubkeyConverter("addressPubkeyConverter"))?;
    let validator_converter =
        validator_converter.ok_or(SetupError::NilPubkeyConverter("validatorPubkeyConverter"))?;
    Ok((address_converter, validator_converter))
}

fn pub_key_texts(nodes: &[GenesisNodeInfo]) -> Vec<String> {
    nodes.iter().map(|n| n.pub_key_text().to_string()).collect()
}

impl GenesisNodesSetupHandler for NodesSetup {
    fn initial_nodes_pub_keys(&self) -> BTreeMap<ShardId, Vec<String>> {
        self.eligible
            .iter()
            .map(|(shard_id, nodes)| (*shard_id, pub_key_texts(nodes)))
            .collect()
    }

    fn initial_nodes_info(&self) -> (&NodesByShard, &NodesByShard) {
        (&self.eligible, &self.waiting)
    }

    fn initial_eligible_nodes_pub_keys_for_shard(
        &self,
        shard_id: ShardId,
    ) -> Result<Vec<String>, QueryError> {
        let nodes = self
            .eligible
            .get(&shard_id)
            .ok_or(QueryError::ShardNotFound(shard_id))?;
        if nodes.is_empty() {
            return Err(QueryError::NoKeysForShard(shard_id));
        }

        Ok(pub_key_texts(nodes))
    }

    fn initial_nodes_info_for_shard(
        &self,
        shard_id: ShardId,
    ) -> Result<(&[GenesisNodeInfo], &[GenesisNodeInfo]), QueryError> {
        let eligible = self
            .eligible
            .get(&shard_id)
            .ok_or(QueryError::ShardNotFound(shard_id))?;
        if eligible.is_empty() {
            return Err(QueryError::NoKeysForShard(shard_id));
        }
        let waiting = self
            .waiting
            .get(&shard_id)
            .map(Vec::as_slice)
            .unwrap_or_default();

        Ok((eligible.as_slice(), waiting))
    }

    fn number_of_shards(&self) -> u32 {
        self.nr_of_shards
    }

    fn min_number_of_nodes(&self) -> u32 {
        self.nr_of_shards
            .saturating_mul(self.config.min_nodes_per_shard)
            .saturating_add(self.config.meta_chain_min_nodes)
    }

    fn shard_id_for_pub_key(&self, pub_key: &[u8]) -> Result<ShardId, QueryError> {
        self.nodes
            .iter()
            .find(|node| node.pub_key == pub_key)
            .map(|node| node.assigned_shard)
            .ok_or(QueryError::KeyNotFound)
    }

    fn start_time(&self) -> i64 {
        self.config.start_time
    }

    fn round_duration(&self) -> u64 {
        self.config.round_duration
    }

    fn shard_consensus_group_size(&self) -> u32 {
        self.config.consensus_group_size
    }

    fn meta_consensus_group_size(&self) -> u32 {
        self.config.meta_chain_consensus_group_size
    }

    fn hysteresis(&self) -> f32 {
        self.config.hysteresis
    }

    fn adaptivity(&self) -> bool {
        self.config.adaptivity
    }
}
