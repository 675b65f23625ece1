//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits: key/address converters and the
//! sharded data cache.

mod hex_converter;
mod sharded_cache;

pub use hex_converter::{HexPubkeyConverter, ADDRESS_LEN, VALIDATOR_KEY_LEN};
pub use sharded_cache::InMemoryShardedDataCache;
