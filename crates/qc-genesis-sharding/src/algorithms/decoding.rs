//! # Validation & Decoding
//!
//! Decodes every raw validator record and checks the global
//! consensus-size and node-count constraints.

use tracing::warn;

use crate::domain::{
    invariant_consensus_sizes, invariant_min_node_count, ChainKind, ConverterError, GenesisConfig,
    InitialNode, SetupError, ShardId,
};
use crate::ports::PubkeyConverter;

/// A raw record together with its decoded bytes and assignment.
///
/// Only produced for records whose key and address both decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedNode {
    /// Record as configured.
    pub raw: InitialNode,
    /// Decoded public key.
    pub pub_key: Vec<u8>,
    /// Decoded address.
    pub address: Vec<u8>,
    /// Assigned shard; meaningful once assignment ran.
    pub assigned_shard: ShardId,
    /// Eligible committee member.
    pub eligible: bool,
}

/// Decode one text field. Empty text is rejected even when the converter
/// would accept it.
///
/// The empty check runs before the converter, and a record's key is checked
/// before its address. A record with an empty key and a malformed address
/// therefore fails on the key.
fn decode_field(converter: &dyn PubkeyConverter, text: &str) -> Result<Vec<u8>, ConverterError> {
    if text.is_empty() {
        return Err(ConverterError::Empty);
    }
    converter.decode(text)
}

/// Decode the genesis list in order, stopping at the first failure.
pub fn decode_initial_nodes(
    initial_nodes: &[InitialNode],
    address_converter: &dyn PubkeyConverter,
    validator_converter: &dyn PubkeyConverter,
) -> Result<Vec<DecodedNode>, SetupError> {
    let mut decoded = Vec::with_capacity(initial_nodes.len());

    for (index, raw) in initial_nodes.iter().enumerate() {
        let pub_key = decode_field(validator_converter, &raw.pub_key).map_err(|reason| {
            warn!("[genesis] Initial node {} has an invalid public key", index);
            SetupError::CouldNotParsePubKey {
                text: raw.pub_key.clone(),
                reason,
            }
        })?;

        let address = decode_field(address_converter, &raw.address).map_err(|reason| {
            warn!("[genesis] Initial node {} has an invalid address", index);
            SetupError::CouldNotParseAddress {
                text: raw.address.clone(),
                reason,
            }
        })?;

        decoded.push(DecodedNode {
            raw: raw.clone(),
            pub_key,
            address,
            assigned_shard: 0,
            eligible: false,
        });
    }

    Ok(decoded)
}

/// Check the global constraints against the decoded node count.
///
/// Checks run shard side first, then metachain side, and the first
/// violation is returned.
pub fn check_node_counts(config: &GenesisConfig, nr_of_nodes: u32) -> Result<(), SetupError> {
    invariant_consensus_sizes(
        ChainKind::Shard,
        config.consensus_group_size,
        config.min_nodes_per_shard,
    )?;
    invariant_min_node_count(nr_of_nodes, config.min_nodes_per_shard)?;

    invariant_consensus_sizes(
        ChainKind::MetaChain,
        config.meta_chain_consensus_group_size,
        config.meta_chain_min_nodes,
    )?;
    invariant_min_node_count(
        nr_of_nodes,
        config
            .meta_chain_min_nodes
            .saturating_add(config.min_nodes_per_shard),
    )
}
