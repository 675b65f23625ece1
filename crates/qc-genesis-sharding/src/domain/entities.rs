//! # Domain Entities
//!
//! The nodes-setup record every node loads at startup.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::errors::ConfigError;
use super::value_objects::InitialNode;

/// Genesis nodes-setup configuration.
///
/// Loaded once and handed to the engine; never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenesisConfig {
    /// Genesis start time (Unix seconds).
    pub start_time: i64,
    /// Round duration in milliseconds.
    pub round_duration: u64,
    /// Shard consensus group size.
    pub consensus_group_size: u32,
    /// Minimum eligible nodes per regular shard.
    pub min_nodes_per_shard: u32,
    /// Metachain consensus group size.
    pub meta_chain_consensus_group_size: u32,
    /// Minimum eligible nodes in the metachain.
    pub meta_chain_min_nodes: u32,
    /// Fractional buffer on top of the minimum node counts.
    pub hysteresis: f32,
    /// Adaptivity flag, carried for consumers.
    pub adaptivity: bool,
    /// Validators in genesis order.
    pub initial_nodes: Vec<InitialNode>,
}

impl GenesisConfig {
    /// Small configuration for tests: one-node committees, two nodes per shard.
    pub fn for_testing(initial_nodes: Vec<InitialNode>) -> Self {
        Self {
            start_time: 0,
            round_duration: 4000,
            consensus_group_size: 1,
            min_nodes_per_shard: 2,
            meta_chain_consensus_group_size: 1,
            meta_chain_min_nodes: 1,
            hysteresis: 0.0,
            adaptivity: false,
            initial_nodes,
        }
    }

    /// Parse a nodes-setup JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a nodes-setup JSON file.
    pub fn load_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_json_str(&json)?;
        debug!(
            "[genesis] Loaded {} initial nodes from {}",
            config.initial_nodes.len(),
            path.display()
        );
        Ok(config)
    }
}
