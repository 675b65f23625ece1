//! # Quantum-Chain Genesis Test Suite
//!
//! Unified test crate exercising the genesis subsystem end to end.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── genesis_flows.rs      # nodes-setup file -> topology -> queries
//!     └── interceptor_flows.rs  # genesis shard ids -> sharded data cache
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p qc-tests
//! cargo test -p qc-tests integration::genesis_flows
//! ```

pub mod integration;
