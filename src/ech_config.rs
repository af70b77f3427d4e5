//! ECHConfig structure and encoders
//!
//! This module provides the [`ECHConfig`] record generated for an X25519 key,
//! its wire encoding, and [`encode_config_list`] for the ECHConfigList wrapper
//! published in DNS.
//!
//! # Example
//!
//! ```
//! # use ech_keygen::*;
//! # fn main() -> Result<()> {
//! let config = ECHConfig::new(7, vec![0u8; 32], "example.com")?;
//! let record = config.encode()?;
//! let list = encode_config_list(&[record.clone()])?;
//!
//! assert_eq!(&record[4..7], &[0x07, 0x00, 0x20]);
//! assert_eq!(list.len(), record.len() + 2);
//! # Ok(())
//! # }
//! ```

use crate::codec::Writer;
use crate::types::*;
use crate::{Error, Result};

/// ECHConfig structure per draft-ietf-tls-esni
///
/// Generated configs never carry extensions; the extensions field is always
/// encoded as an empty vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ECHConfig {
    pub version: u16,
    pub config_id: u8,
    pub kem_id: u16,
    pub public_key: Vec<u8>,
    pub cipher_suites: Vec<HpkeSymmetricCipherSuite>,
    pub maximum_name_length: u8,
    pub public_name: String,
}

impl ECHConfig {
    /// Build a config for an X25519 public key with the fixed suite table
    pub fn new(config_id: u8, public_key: Vec<u8>, public_name: &str) -> Result<Self> {
        let config = ECHConfig {
            version: ECH_VERSION,
            config_id,
            kem_id: DHKEM_X25519_SHA256,
            public_key,
            cipher_suites: SUPPORTED_CIPHER_SUITES.to_vec(),
            maximum_name_length: DEFAULT_MAXIMUM_NAME_LENGTH,
            public_name: public_name.to_string(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check field constraints that the wire format cannot express
    pub fn validate(&self) -> Result<()> {
        if self.public_key.len() != X25519_PUBLIC_KEY_LEN {
            return Err(Error::InvalidPublicKeyLength {
                expected: X25519_PUBLIC_KEY_LEN,
                actual: self.public_key.len(),
            });
        }
        validate_public_name(&self.public_name)?;
        if self.cipher_suites.is_empty() {
            return Err(Error::Encode("at least one cipher_suite is required".into()));
        }
        Ok(())
    }

    /// Encode ECHConfig to wire format
    pub fn encode(&self) -> Result<Vec<u8>> {
        self.validate()?;

        let mut w = Writer::new();
        w.put_u16(self.version);

        // ECHConfigContents
        let contents = w.begin_u16();
        w.put_u8(self.config_id);
        w.put_u16(self.kem_id);

        // public_key: opaque<1..2^16-1>
        let public_key = w.begin_u16();
        w.put_bytes(&self.public_key);
        w.end(public_key)?;

        // cipher_suites: HpkeSymmetricCipherSuite<4..2^16-4>
        let suites = w.begin_u16();
        for suite in &self.cipher_suites {
            w.put_u16(suite.kdf_id);
            w.put_u16(suite.aead_id);
        }
        w.end(suites)?;

        w.put_u8(self.maximum_name_length);

        // public_name: opaque<1..255>
        let name = w.begin_u8();
        w.put_bytes(self.public_name.as_bytes());
        w.end(name)?;

        // extensions: opaque<0..2^16-1>
        let extensions = w.begin_u16();
        w.end(extensions)?;

        w.end(contents)?;
        w.finish()
    }
}

/// public_name: opaque<1..255>
pub(crate) fn validate_public_name(public_name: &str) -> Result<()> {
    if public_name.is_empty() {
        return Err(Error::EmptyPublicName);
    }
    if public_name.len() > u8::MAX as usize {
        return Err(Error::PublicNameTooLong(public_name.len()));
    }
    Ok(())
}

/// Wrap encoded ECHConfigs in an ECHConfigList (u16 total length prefix)
pub fn encode_config_list(configs: &[Vec<u8>]) -> Result<Vec<u8>> {
    if configs.is_empty() {
        return Err(Error::Encode("ECHConfigList requires at least one config".into()));
    }

    let mut w = Writer::new();
    let list = w.begin_u16();
    for config in configs {
        w.put_bytes(config);
    }
    w.end(list)?;
    w.finish()
}
