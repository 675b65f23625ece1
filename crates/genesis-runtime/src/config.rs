//! # Runtime Configuration
//!
//! Environment-driven settings with documented defaults.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `QC_NODES_SETUP` | `./nodesSetup.json` |
//! | `QC_VALIDATOR_KEY_LEN` | `96` |
//! | `QC_ADDRESS_LEN` | `32` |
//! | `QC_GENESIS_JSON` | unset (human-readable log only) |

use std::path::PathBuf;

use qc_genesis_sharding::{ADDRESS_LEN, VALIDATOR_KEY_LEN};
use tracing::warn;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Path of the nodes-setup JSON file.
    pub nodes_setup_path: PathBuf,
    /// Decoded validator key length.
    pub validator_key_len: usize,
    /// Decoded address length.
    pub address_len: usize,
    /// Print the topology report as JSON on stdout.
    pub print_json: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            nodes_setup_path: PathBuf::from("./nodesSetup.json"),
            validator_key_len: VALIDATOR_KEY_LEN,
            address_len: ADDRESS_LEN,
            print_json: false,
        }
    }
}

impl RuntimeConfig {
    /// Load from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("QC_NODES_SETUP") {
            config.nodes_setup_path = PathBuf::from(path);
        }
        if let Some(len) = lookup("QC_VALIDATOR_KEY_LEN") {
            match len.parse() {
                Ok(len) => config.validator_key_len = len,
                Err(_) => warn!("QC_VALIDATOR_KEY_LEN must be a byte count, got {:?}", len),
            }
        }
        if let Some(len) = lookup("QC_ADDRESS_LEN") {
            match len.parse() {
                Ok(len) => config.address_len = len,
                Err(_) => warn!("QC_ADDRESS_LEN must be a byte count, got {:?}", len),
            }
        }
        config.print_json = lookup("QC_GENESIS_JSON").is_some_and(|v| v != "0" && !v.is_empty());

        config
    }
}
