//! # QC Genesis Sharding
//!
//! Deterministic genesis topology for a sharded network.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Every node derives the same genesis layout from the same nodes-setup file:
//! - How many regular shards exist (hysteresis-buffered formula)
//! - Which validators form each shard's and the metachain's eligible committee
//! - Which validators wait in reserve, spread round-robin
//!
//! ## Construction
//!
//! | Stage | Work |
//! |-------|------|
//! | Validated | Decode keys and addresses, check consensus sizes and node counts |
//! | Assigned | Metachain prefix, FIFO shard committees, round-robin waiting lists |
//! | Ready | Shard-indexed eligible/waiting tables, immutable from here on |
//!
//! ## Module Structure
//!
//! ```text
//! qc-genesis-sharding/
//! ├── domain/          # GenesisConfig, InitialNode, GenesisNodeInfo, errors
//! ├── algorithms/      # Decoding, shard count, assignment, lookup tables
//! ├── ports/           # Query API trait + converter/cache traits
//! ├── adapters/        # Hex converter, in-memory sharded cache
//! ├── interceptor      # Transaction interceptor feeding the sharded cache
//! └── service          # NodesSetup
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod domain;
pub mod interceptor;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{HexPubkeyConverter, InMemoryShardedDataCache, ADDRESS_LEN, VALIDATOR_KEY_LEN};
pub use algorithms::{compute_shard_count, hysteresis_extra};
pub use domain::{
    invariant_consensus_sizes, invariant_min_node_count, invariant_unique_assignment, ChainKind,
    CommitteeRole, ConfigError, ConverterError, GenesisConfig, GenesisNodeInfo, InitialNode,
    QueryError, SetupError, ShardId, METACHAIN_SHARD_ID,
};
pub use interceptor::{
    shard_cacher_identifier, InterceptedTransaction, InterceptorError, TxInterceptorProcessor,
};
pub use ports::{
    GenesisNodesSetupHandler, MockPubkeyConverter, NodesByShard, PubkeyConverter,
    ShardedDataCache,
};
pub use service::NodesSetup;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
