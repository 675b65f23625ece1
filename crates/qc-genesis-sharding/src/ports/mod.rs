//! # Ports Module
//!
//! Inbound API and outbound capabilities of the genesis subsystem.

pub mod inbound;
pub mod outbound;

pub use inbound::{GenesisNodesSetupHandler, NodesByShard};
pub use outbound::{MockPubkeyConverter, PubkeyConverter, ShardedDataCache};
