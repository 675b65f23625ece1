//! # Domain Errors
//!
//! Error types for genesis sharding.
//!
//! Construction failures (`SetupError`) are fatal to node startup and are
//! never retried. Query failures (`QueryError`) leave the instance intact.

use thiserror::Error;

/// Shard identifier. Regular shards occupy `[0, number_of_shards)`.
pub type ShardId = u32;

/// Reserved shard id of the metachain, distinct from every regular shard.
pub const METACHAIN_SHARD_ID: ShardId = u32::MAX;

/// Which chain a consensus-size constraint was checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainKind {
    /// Regular shards.
    Shard,
    /// The metachain.
    MetaChain,
}

impl std::fmt::Display for ChainKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChainKind::Shard => write!(f, "shard"),
            ChainKind::MetaChain => write!(f, "metachain"),
        }
    }
}

/// Failure of a pubkey converter to decode text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConverterError {
    /// Input was empty.
    #[error("empty input")]
    Empty,

    /// Input was not valid hex.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// Decoded length does not match the converter's configured length.
    #[error("wrong size: expected {expected} bytes, got {got}")]
    WrongSize {
        /// Configured length
        expected: usize,
        /// Decoded length
        got: usize,
    },

    /// Converter configured with a zero length.
    #[error("invalid converter length: {0}")]
    InvalidLength(usize),
}

/// Failure loading the nodes-setup record.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the file failed.
    #[error("cannot read nodes setup file {path}: {source}")]
    Io {
        /// File path
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The content is not a valid nodes-setup document.
    #[error("malformed nodes setup: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fatal construction errors. The first violated check is reported.
#[derive(Debug, Error)]
pub enum SetupError {
    /// A converter capability was not supplied.
    #[error("nil pubkey converter for {0}")]
    NilPubkeyConverter(&'static str),

    /// A validator key failed to decode (empty text included).
    #[error("could not parse public key {text:?}: {reason}")]
    CouldNotParsePubKey {
        /// Offending text
        text: String,
        /// Converter failure
        reason: ConverterError,
    },

    /// A validator address failed to decode (empty text included).
    #[error("could not parse address {text:?}: {reason}")]
    CouldNotParseAddress {
        /// Offending text
        text: String,
        /// Converter failure
        reason: ConverterError,
    },

    /// Consensus group size is zero.
    #[error("{chain} consensus group size must be positive")]
    NonPositiveConsensusGroupSize {
        /// Chain the constraint applies to
        chain: ChainKind,
    },

    /// Minimum node count is smaller than the consensus group.
    #[error("{chain} min nodes {min_nodes} smaller than consensus group size {group_size}")]
    MinNodesPerShardBelowConsensusSize {
        /// Chain the constraint applies to
        chain: ChainKind,
        /// Configured minimum nodes
        min_nodes: u32,
        /// Configured consensus group size
        group_size: u32,
    },

    /// Not enough decoded validators.
    #[error("node count {nodes} below minimum {required}")]
    NodeCountBelowMinimum {
        /// Decoded validators
        nodes: u32,
        /// Required threshold
        required: u32,
    },

    /// Loading the nodes-setup record failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Recoverable query errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No bucket exists for the shard.
    #[error("shard {0} not found in genesis")]
    ShardNotFound(ShardId),

    /// The shard has a bucket but no eligible keys.
    #[error("no public keys for shard {0}")]
    NoKeysForShard(ShardId),

    /// The public key was never part of the genesis list.
    #[error("public key not found in genesis")]
    KeyNotFound,
}
