//! # Domain Value Objects
//!
//! Immutable value types for genesis assignment.

use super::errors::ShardId;
use serde::{Deserialize, Serialize};

/// Validator record as supplied by the nodes-setup file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialNode {
    /// Text-encoded validator public key.
    #[serde(rename = "pubkey")]
    pub pub_key: String,
    /// Text-encoded reward address.
    pub address: String,
}

impl InitialNode {
    /// Create a new raw record.
    pub fn new(pub_key: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            pub_key: pub_key.into(),
            address: address.into(),
        }
    }
}

/// Committee role of a validator at genesis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommitteeRole {
    /// Member of the active consensus committee.
    Eligible,
    /// Held in reserve.
    Waiting,
}

/// Genesis assignment of a single validator.
///
/// Built once by the engine and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenesisNodeInfo {
    assigned_shard: ShardId,
    eligible: bool,
    pub_key: Vec<u8>,
    address: Vec<u8>,
    pub_key_text: String,
}

impl GenesisNodeInfo {
    pub(crate) fn new(
        assigned_shard: ShardId,
        eligible: bool,
        pub_key: Vec<u8>,
        address: Vec<u8>,
        pub_key_text: String,
    ) -> Self {
        Self {
            assigned_shard,
            eligible,
            pub_key,
            address,
            pub_key_text,
        }
    }

    /// Shard (or metachain sentinel) the validator belongs to.
    pub fn assigned_shard(&self) -> ShardId {
        self.assigned_shard
    }

    /// True for active committee members.
    pub fn is_eligible(&self) -> bool {
        self.eligible
    }

    /// Committee role derived from eligibility.
    pub fn role(&self) -> CommitteeRole {
        if self.eligible {
            CommitteeRole::Eligible
        } else {
            CommitteeRole::Waiting
        }
    }

    /// Decoded public key bytes.
    pub fn pub_key(&self) -> &[u8] {
        &self.pub_key
    }

    /// Decoded address bytes.
    pub fn address(&self) -> &[u8] {
        &self.address
    }

    /// Public key as written in the nodes-setup file.
    pub fn pub_key_text(&self) -> &str {
        &self.pub_key_text
    }
}
