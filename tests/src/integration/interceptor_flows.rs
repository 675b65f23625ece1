//! # Interceptor Flows
//!
//! Genesis shard ids drive the cacher identifiers used by the transaction
//! interceptor when it stores intercepted transactions.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use qc_genesis_sharding::{
        shard_cacher_identifier, GenesisConfig, GenesisNodesSetupHandler, InMemoryShardedDataCache,
        InitialNode, InterceptedTransaction, MockPubkeyConverter, NodesSetup, PubkeyConverter,
        ShardedDataCache, TxInterceptorProcessor, METACHAIN_SHARD_ID,
    };

    fn setup(count: usize) -> NodesSetup {
        let nodes = (0..count)
            .map(|i| InitialNode::new(format!("validator-{i}"), format!("wallet-{i}")))
            .collect();
        let converter: Arc<dyn PubkeyConverter> = Arc::new(MockPubkeyConverter::default());
        NodesSetup::new(
            GenesisConfig::for_testing(nodes),
            Some(converter.clone()),
            Some(converter),
        )
        .unwrap()
    }

    fn processor() -> (Arc<InMemoryShardedDataCache>, TxInterceptorProcessor) {
        let cache = Arc::new(InMemoryShardedDataCache::new());
        let shared: Arc<dyn ShardedDataCache> = cache.clone();
        (cache, TxInterceptorProcessor::new(Some(shared)).unwrap())
    }

    #[test]
    fn test_transactions_grouped_by_genesis_shards() {
        let genesis = setup(8);
        let (cache, processor) = processor();

        let sender = genesis.shard_id_for_pub_key(b"validator-1").unwrap();
        let receiver = genesis.shard_id_for_pub_key(b"validator-5").unwrap();
        assert_eq!((sender, receiver), (0, 2));

        processor.save(&InterceptedTransaction {
            hash: vec![0x11; 32],
            sender_shard: sender,
            receiver_shard: receiver,
            payload: b"transfer".to_vec(),
        });
        processor.save(&InterceptedTransaction {
            hash: vec![0x22; 32],
            sender_shard: sender,
            receiver_shard: sender,
            payload: b"local".to_vec(),
        });

        assert_eq!(cache.cacher_ids(), vec!["_0", "_0_2"]);
        assert_eq!(
            cache.get_data(&[0x11; 32], &shard_cacher_identifier(0, 2)),
            Some(b"transfer".to_vec())
        );
    }

    #[test]
    fn test_metachain_destination() {
        let genesis = setup(7);
        let (cache, processor) = processor();

        let meta = genesis.shard_id_for_pub_key(b"validator-0").unwrap();
        assert_eq!(meta, METACHAIN_SHARD_ID);

        processor.save(&InterceptedTransaction {
            hash: vec![0x33; 32],
            sender_shard: 1,
            receiver_shard: meta,
            payload: vec![1, 2, 3],
        });

        let cacher_id = shard_cacher_identifier(1, meta);
        assert_eq!(cache.len_of(&cacher_id), 1);
    }

    #[test]
    fn test_one_cacher_per_shard_pair() {
        let genesis = setup(9);
        let (cache, processor) = processor();
        let shards = genesis.number_of_shards();

        let mut hash = 0u8;
        for sender in 0..shards {
            for receiver in 0..shards {
                hash += 1;
                processor.save(&InterceptedTransaction {
                    hash: vec![hash; 32],
                    sender_shard: sender,
                    receiver_shard: receiver,
                    payload: vec![hash],
                });
            }
        }

        assert_eq!(cache.cacher_ids().len(), (shards * shards) as usize);
    }
}
