//! # Outbound Ports
//!
//! Capabilities the genesis engine and the transaction interceptor consume.

use crate::domain::ConverterError;

/// Text <-> bytes converter for keys or addresses.
///
/// The engine receives two independent instances: one for the validator key
/// namespace and one for the address namespace.
pub trait PubkeyConverter: Send + Sync {
    /// Decode human-readable text into canonical bytes.
    fn decode(&self, text: &str) -> Result<Vec<u8>, ConverterError>;

    /// Encode canonical bytes into text.
    fn encode(&self, bytes: &[u8]) -> String;

    /// Byte length of a decoded value.
    fn len(&self) -> usize;

    /// True when the converter has no fixed decoded length.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sharded data cache fed by the transaction interceptor.
///
/// Entries are grouped by a cacher identifier derived from genesis shard ids.
pub trait ShardedDataCache: Send + Sync {
    /// Store `value` under `key` in the cacher `cacher_id`.
    fn add_data(&self, key: &[u8], value: Vec<u8>, cacher_id: &str);

    /// Look up `key` in the cacher `cacher_id`.
    fn get_data(&self, key: &[u8], cacher_id: &str) -> Option<Vec<u8>>;

    /// Remove `key` from the cacher `cacher_id`.
    fn remove_data(&self, key: &[u8], cacher_id: &str);

    /// Identifiers of all cachers holding data, in sorted order.
    fn cacher_ids(&self) -> Vec<String>;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Converter that maps text to its UTF-8 bytes.
///
/// Accepts the empty string as valid, like some production decoders do, and
/// rejects the texts listed in `reject`.
#[derive(Clone, Debug, Default)]
pub struct MockPubkeyConverter {
    /// Texts that fail to decode.
    pub reject: Vec<String>,
}

impl MockPubkeyConverter {
    /// Converter that rejects the given texts.
    pub fn rejecting(texts: &[&str]) -> Self {
        Self {
            reject: texts.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl PubkeyConverter for MockPubkeyConverter {
    fn decode(&self, text: &str) -> Result<Vec<u8>, ConverterError> {
        if self.reject.iter().any(|r| r == text) {
            return Err(ConverterError::InvalidHex(text.to_string()));
        }
        Ok(text.as_bytes().to_vec())
    }

    fn encode(&self, bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }

    fn len(&self) -> usize {
        0
    }
}
