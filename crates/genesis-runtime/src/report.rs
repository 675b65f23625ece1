//! # Topology Report
//!
//! Summary of a built genesis setup, logged at startup and optionally
//! printed as JSON.

use qc_genesis_sharding::{GenesisNodesSetupHandler, NodesSetup, ShardId, METACHAIN_SHARD_ID};
use serde::Serialize;
use tracing::info;

/// Committee sizes of one shard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShardReport {
    /// Shard id (metachain uses the sentinel).
    pub shard_id: ShardId,
    /// Metachain marker for readers of the JSON output.
    pub is_metachain: bool,
    /// Eligible committee size.
    pub eligible: usize,
    /// Waiting list size.
    pub waiting: usize,
}

/// Genesis topology summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenesisReport {
    /// Regular shard count.
    pub number_of_shards: u32,
    /// Decoded validator count.
    pub number_of_nodes: u32,
    /// Minimum node count for the derived layout.
    pub min_number_of_nodes: u32,
    /// Genesis start time.
    pub start_time: i64,
    /// Round duration in milliseconds.
    pub round_duration: u64,
    /// Per-shard sizes, ascending shard id.
    pub shards: Vec<ShardReport>,
}

impl GenesisReport {
    /// Summarize a built setup.
    pub fn from_setup(setup: &NodesSetup) -> Self {
        let (eligible, waiting) = setup.initial_nodes_info();
        let shards = setup
            .shard_ids()
            .into_iter()
            .map(|shard_id| ShardReport {
                shard_id,
                is_metachain: shard_id == METACHAIN_SHARD_ID,
                eligible: eligible.get(&shard_id).map_or(0, Vec::len),
                waiting: waiting.get(&shard_id).map_or(0, Vec::len),
            })
            .collect();

        Self {
            number_of_shards: setup.number_of_shards(),
            number_of_nodes: setup.number_of_nodes(),
            min_number_of_nodes: setup.min_number_of_nodes(),
            start_time: setup.start_time(),
            round_duration: setup.round_duration(),
            shards,
        }
    }

    /// Write the summary to the log.
    pub fn log(&self) {
        info!(
            "Genesis: {} shards, {} nodes (minimum {})",
            self.number_of_shards, self.number_of_nodes, self.min_number_of_nodes
        );
        for shard in &self.shards {
            let name = if shard.is_metachain {
                "metachain".to_string()
            } else {
                format!("shard {}", shard.shard_id)
            };
            info!(
                "  {}: {} eligible, {} waiting",
                name, shard.eligible, shard.waiting
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qc_genesis_sharding::{GenesisConfig, InitialNode, MockPubkeyConverter, PubkeyConverter};
    use std::sync::Arc;

    fn setup(count: usize) -> NodesSetup {
        let nodes = (0..count)
            .map(|i| InitialNode::new(format!("pk{i}"), format!("addr{i}")))
            .collect();
        let converter: Arc<dyn PubkeyConverter> = Arc::new(MockPubkeyConverter::default());
        NodesSetup::new(
            GenesisConfig::for_testing(nodes),
            Some(converter.clone()),
            Some(converter),
        )
        .unwrap()
    }

    #[test]
    fn test_report_counts() {
        let report = GenesisReport::from_setup(&setup(8));

        assert_eq!(report.number_of_shards, 3);
        assert_eq!(report.number_of_nodes, 8);
        assert_eq!(report.shards.len(), 4);
        assert_eq!(
            report.shards[1],
            ShardReport {
                shard_id: 1,
                is_metachain: false,
                eligible: 2,
                waiting: 1
            }
        );
        assert!(report.shards[3].is_metachain);
    }

    #[test]
    fn test_report_json() {
        let json = serde_json::to_string(&GenesisReport::from_setup(&setup(7))).unwrap();
        assert!(json.contains("\"numberOfShards\":3"));
    }
}
