//! # Genesis Flows
//!
//! Nodes-setup document -> `NodesSetup` -> query API, with real hex
//! converters on both the validator-key and the address namespace.
//!
//! ## Scenarios
//!
//! - **A**: 7 validators, 2 per shard, 1 metachain node -> 3 full shards
//! - **B**: 8 validators -> same 3 shards, the 8th waits in shard 1
//! - **C**: one empty address -> construction fails

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use qc_genesis_sharding::{
        GenesisConfig, GenesisNodesSetupHandler, HexPubkeyConverter, InitialNode, NodesSetup,
        PubkeyConverter, QueryError, SetupError, METACHAIN_SHARD_ID,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const KEY_LEN: usize = 8;
    const ADDRESS_LEN: usize = 4;

    fn validator_key(i: u8) -> Vec<u8> {
        vec![0xA0 | (i >> 4), i, 0, 0, 0, 0, 0, 1]
    }

    fn initial_node(i: u8) -> InitialNode {
        InitialNode::new(hex::encode(validator_key(i)), hex::encode([i, 0, 0, 2]))
    }

    fn converters() -> (
        Option<Arc<dyn PubkeyConverter>>,
        Option<Arc<dyn PubkeyConverter>>,
    ) {
        let address: Arc<dyn PubkeyConverter> =
            Arc::new(HexPubkeyConverter::new(ADDRESS_LEN).unwrap());
        let validator: Arc<dyn PubkeyConverter> =
            Arc::new(HexPubkeyConverter::new(KEY_LEN).unwrap());
        (Some(address), Some(validator))
    }

    fn scenario_config(count: u8) -> GenesisConfig {
        GenesisConfig {
            start_time: 1_700_000_000,
            round_duration: 4000,
            consensus_group_size: 1,
            min_nodes_per_shard: 2,
            meta_chain_consensus_group_size: 1,
            meta_chain_min_nodes: 1,
            hysteresis: 0.0,
            adaptivity: false,
            initial_nodes: (0..count).map(initial_node).collect(),
        }
    }

    fn build(config: GenesisConfig) -> Result<NodesSetup, SetupError> {
        let (address, validator) = converters();
        NodesSetup::new(config, address, validator)
    }

    fn eligible_keys(setup: &NodesSetup, shard_id: u32) -> Vec<String> {
        setup
            .initial_eligible_nodes_pub_keys_for_shard(shard_id)
            .unwrap()
    }

    fn key_text(i: u8) -> String {
        hex::encode(validator_key(i))
    }

    // =============================================================================
    // SCENARIOS
    // =============================================================================

    #[test]
    fn test_scenario_a_full_shards() {
        let setup = build(scenario_config(7)).unwrap();

        assert_eq!(setup.number_of_shards(), 3);
        assert_eq!(eligible_keys(&setup, METACHAIN_SHARD_ID), vec![key_text(0)]);
        assert_eq!(eligible_keys(&setup, 0), vec![key_text(1), key_text(2)]);
        assert_eq!(eligible_keys(&setup, 1), vec![key_text(3), key_text(4)]);
        assert_eq!(eligible_keys(&setup, 2), vec![key_text(5), key_text(6)]);

        let (_, waiting) = setup.initial_nodes_info();
        assert!(waiting.values().all(Vec::is_empty));
    }

    #[test]
    fn test_scenario_b_overflow_waits_in_shard_one() {
        let setup = build(scenario_config(8)).unwrap();

        assert_eq!(setup.number_of_shards(), 3);
        assert_eq!(eligible_keys(&setup, 0), vec![key_text(1), key_text(2)]);
        assert_eq!(eligible_keys(&setup, 2), vec![key_text(5), key_text(6)]);

        let (eligible, waiting) = setup.initial_nodes_info_for_shard(1).unwrap();
        assert_eq!(eligible.len(), 2);
        assert_eq!(waiting.len(), 1);
        assert_eq!(waiting[0].pub_key(), validator_key(7).as_slice());
        assert!(!waiting[0].is_eligible());
        assert_eq!(waiting[0].address(), &[7, 0, 0, 2]);

        assert_eq!(setup.shard_id_for_pub_key(&validator_key(7)), Ok(1));
    }

    #[test]
    fn test_scenario_c_empty_address_fails() {
        let mut config = scenario_config(7);
        config.initial_nodes[3].address = String::new();

        let result = build(config);
        assert!(matches!(result, Err(SetupError::CouldNotParseAddress { .. })));
    }

    // =============================================================================
    // FILE LOADING
    // =============================================================================

    #[test]
    fn test_nodes_setup_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nodesSetup.json");
        let json = serde_json::json!({
            "startTime": 1_700_000_000i64,
            "roundDuration": 4000,
            "consensusGroupSize": 1,
            "minNodesPerShard": 2,
            "metaChainConsensusGroupSize": 1,
            "metaChainMinNodes": 1,
            "hysteresis": 0.0,
            "adaptivity": false,
            "initialNodes": (0..8u8)
                .map(|i| {
                    let node = initial_node(i);
                    serde_json::json!({ "pubkey": node.pub_key, "address": node.address })
                })
                .collect::<Vec<_>>(),
        });
        std::fs::write(&path, json.to_string()).unwrap();

        let (address, validator) = converters();
        let setup = NodesSetup::from_file(&path, address, validator).unwrap();

        assert_eq!(setup.number_of_shards(), 3);
        assert_eq!(setup.start_time(), 1_700_000_000);
        assert_eq!(setup.round_duration(), 4000);
        assert_eq!(setup.min_number_of_nodes(), 7);
    }

    #[test]
    fn test_malformed_key_in_file_fails() {
        let mut config = scenario_config(7);
        config.initial_nodes[5].pub_key = "not-hex".to_string();

        assert!(matches!(
            build(config),
            Err(SetupError::CouldNotParsePubKey { .. })
        ));
    }

    #[test]
    fn test_wrong_address_length_fails() {
        let mut config = scenario_config(7);
        config.initial_nodes[0].address = hex::encode([1u8; 20]);

        assert!(matches!(
            build(config),
            Err(SetupError::CouldNotParseAddress { .. })
        ));
    }

    // =============================================================================
    // QUERIES
    // =============================================================================

    #[test]
    fn test_unknown_key_not_found() {
        let setup = build(scenario_config(7)).unwrap();
        assert_eq!(
            setup.shard_id_for_pub_key(&[0u8; KEY_LEN]),
            Err(QueryError::KeyNotFound)
        );
    }

    #[test]
    fn test_every_key_resolves_to_its_bucket() {
        let setup = build(scenario_config(23)).unwrap();
        let (eligible, waiting) = setup.initial_nodes_info();

        for table in [eligible, waiting] {
            for (shard_id, nodes) in table {
                for node in nodes {
                    assert_eq!(setup.shard_id_for_pub_key(node.pub_key()), Ok(*shard_id));
                }
            }
        }
    }

    #[test]
    fn test_shared_across_threads() {
        let setup = Arc::new(build(scenario_config(16)).unwrap());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let setup = Arc::clone(&setup);
                std::thread::spawn(move || setup.initial_nodes_pub_keys())
            })
            .collect();

        let expected = setup.initial_nodes_pub_keys();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[test]
    fn test_independent_builds_identical() {
        let first = build(scenario_config(31)).unwrap();
        let second = build(scenario_config(31)).unwrap();

        assert_eq!(first.initial_nodes_info(), second.initial_nodes_info());
        assert_eq!(first.number_of_shards(), second.number_of_shards());
    }
}
