//! # Algorithms Module
//!
//! Pure, deterministic steps of the genesis assignment.

pub mod decoding;
pub mod lookup;
pub mod shard_assignment;
pub mod shard_count;

pub use decoding::{check_node_counts, decode_initial_nodes, DecodedNode};
pub use lookup::build_assignment_tables;
pub use shard_assignment::{assign_metachain, assign_shards_fifo, assign_waiting_round_robin};
pub use shard_count::{compute_shard_count, hysteresis_extra};
