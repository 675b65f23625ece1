//! # Transaction Interceptor
//!
//! Stores intercepted transactions into the sharded data cache, grouped by
//! the genesis shard ids of sender and receiver.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::domain::ShardId;
use crate::ports::ShardedDataCache;

/// Interceptor construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterceptorError {
    /// No sharded data cache supplied.
    #[error("nil sharded data cache")]
    NilShardedDataCache,
}

/// Cacher identifier for a sender/receiver shard pair.
///
/// `"_{s}"` for intra-shard traffic, `"_{s}_{r}"` otherwise.
pub fn shard_cacher_identifier(sender_shard: ShardId, receiver_shard: ShardId) -> String {
    if sender_shard == receiver_shard {
        format!("_{sender_shard}")
    } else {
        format!("_{sender_shard}_{receiver_shard}")
    }
}

/// Transaction received from the network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterceptedTransaction {
    /// Transaction hash.
    pub hash: Vec<u8>,
    /// Sender shard.
    pub sender_shard: ShardId,
    /// Receiver shard.
    pub receiver_shard: ShardId,
    /// Serialized transaction.
    pub payload: Vec<u8>,
}

/// Saves intercepted transactions into the sharded data cache.
pub struct TxInterceptorProcessor {
    sharded_data_cache: Arc<dyn ShardedDataCache>,
}

impl TxInterceptorProcessor {
    /// Create a processor over the given cache.
    pub fn new(
        sharded_data_cache: Option<Arc<dyn ShardedDataCache>>,
    ) -> Result<Self, InterceptorError> {
        let sharded_data_cache =
            sharded_data_cache.ok_or(InterceptorError::NilShardedDataCache)?;
        Ok(Self { sharded_data_cache })
    }

    /// Store the transaction under its hash in its shard-pair cacher.
    pub fn save(&self, tx: &InterceptedTransaction) {
        let cacher_id = shard_cacher_identifier(tx.sender_shard, tx.receiver_shard);
        debug!("[genesis] Intercepted tx {} -> {}", hex::encode(&tx.hash), cacher_id);

        self.sharded_data_cache
            .add_data(&tx.hash, tx.payload.clone(), &cacher_id);
    }
}
