//! HPKE and ECH identifiers used by generated configs
//!
//! [`SUPPORTED_CIPHER_SUITES`] is the fixed, ordered suite table written into
//! every ECHConfig.

/// ECH extension codepoint, used as the ECHConfig version (draft-ietf-tls-esni)
pub const ECH_VERSION: u16 = 0xfe0d;

/// HPKE KEM: DHKEM(X25519, HKDF-SHA256)
pub const DHKEM_X25519_SHA256: u16 = 0x0020;

/// HPKE KDF: HKDF-SHA256
pub const HKDF_SHA256: u16 = 0x0001;

/// HPKE AEADs
pub const AES_128_GCM: u16 = 0x0001;
pub const AES_256_GCM: u16 = 0x0002;
pub const CHACHA20_POLY1305: u16 = 0x0003;

/// X25519 public key length (Npk)
pub const X25519_PUBLIC_KEY_LEN: usize = 32;

/// maximum_name_length advertised by generated configs
pub const DEFAULT_MAXIMUM_NAME_LENGTH: u8 = 32;

/// HPKE symmetric cipher suite (KDF + AEAD)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HpkeSymmetricCipherSuite {
    pub kdf_id: u16,
    pub aead_id: u16,
}

/// Cipher suites advertised by every generated config, in wire order.
///
/// The order is part of the output format: reordering changes the record bytes.
pub const SUPPORTED_CIPHER_SUITES: [HpkeSymmetricCipherSuite; 3] = [
    HpkeSymmetricCipherSuite {
        kdf_id: HKDF_SHA256,
        aead_id: AES_128_GCM,
    },
    HpkeSymmetricCipherSuite {
        kdf_id: HKDF_SHA256,
        aead_id: AES_256_GCM,
    },
    HpkeSymmetricCipherSuite {
        kdf_id: HKDF_SHA256,
        aead_id: CHACHA20_POLY1305,
    },
];
