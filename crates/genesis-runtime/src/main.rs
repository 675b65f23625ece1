//! # Quantum-Chain Genesis Runtime
//!
//! Builds the genesis shard topology a node boots with.
//!
//! ## Startup Sequence
//!
//! 1. Load runtime configuration (environment)
//! 2. Create the validator-key and address converters
//! 3. Load the nodes-setup file and build the genesis topology
//! 4. Report shard count and committee sizes
//!
//! Any failure in steps 2-3 aborts startup.

mod config;
mod report;

use std::sync::Arc;

use anyhow::{Context, Result};
use qc_genesis_sharding::{HexPubkeyConverter, NodesSetup, PubkeyConverter};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::RuntimeConfig;
use crate::report::GenesisReport;

fn build_setup(config: &RuntimeConfig) -> Result<NodesSetup> {
    let validator_converter: Arc<dyn PubkeyConverter> = Arc::new(
        HexPubkeyConverter::new(config.validator_key_len)
            .context("Invalid validator key length")?,
    );
    let address_converter: Arc<dyn PubkeyConverter> = Arc::new(
        HexPubkeyConverter::new(config.address_len).context("Invalid address length")?,
    );

    NodesSetup::from_file(
        &config.nodes_setup_path,
        Some(address_converter),
        Some(validator_converter),
    )
    .with_context(|| {
        format!(
            "Failed to build genesis from {}",
            config.nodes_setup_path.display()
        )
    })
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = RuntimeConfig::from_env();
    info!("===========================================");
    info!("  Quantum-Chain Genesis Runtime v{}", env!("CARGO_PKG_VERSION"));
    info!("===========================================");
    info!("Nodes setup: {}", config.nodes_setup_path.display());

    let setup = build_setup(&config)?;
    let report = GenesisReport::from_setup(&setup);
    report.log();

    if config.print_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
