//! # Integration Tests
//!
//! Cross-module flows of the genesis subsystem.

pub mod genesis_flows;
pub mod interceptor_flows;
