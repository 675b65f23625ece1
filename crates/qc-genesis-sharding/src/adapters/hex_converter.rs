//! Hex Pubkey Converter Adapter
//!
//! Implements `PubkeyConverter` for fixed-length hex encoded values.

use crate::domain::ConverterError;
use crate::ports::outbound::PubkeyConverter;

/// BLS validator public key length.
pub const VALIDATOR_KEY_LEN: usize = 96;

/// Account address length.
pub const ADDRESS_LEN: usize = 32;

/// Hex converter enforcing a fixed decoded length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HexPubkeyConverter {
    len: usize,
}

impl HexPubkeyConverter {
    /// Create a converter for values of `len` bytes.
    pub fn new(len: usize) -> Result<Self, ConverterError> {
        if len == 0 {
            return Err(ConverterError::InvalidLength(len));
        }
        Ok(Self { len })
    }

    /// Converter for validator keys.
    pub fn validator_keys() -> Self {
        Self {
            len: VALIDATOR_KEY_LEN,
        }
    }

    /// Converter for addresses.
    pub fn addresses() -> Self {
        Self { len: ADDRESS_LEN }
    }
}

impl PubkeyConverter for HexPubkeyConverter {
    fn decode(&self, text: &str) -> Result<Vec<u8>, ConverterError> {
        if text.is_empty() {
            return Err(ConverterError::Empty);
        }

        let bytes = hex::decode(text).map_err(|e| ConverterError::InvalidHex(e.to_string()))?;
        if bytes.len() != self.len {
            return Err(ConverterError::WrongSize {
                expected: self.len,
                got: bytes.len(),
            });
        }

        Ok(bytes)
    }

    fn encode(&self, bytes: &[u8]) -> String {
        hex::encode(bytes)
    }

    fn len(&self) -> usize {
        self.len
    }
}
