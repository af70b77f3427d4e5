//! X25519 key material and config identifiers
//!
//! Secrets and random config IDs come from the operating system CSPRNG. A
//! failing random source is reported as [`Error::Rng`] and never retried.

use rand::rngs::OsRng;
use rand::RngCore;
use x25519_dalek::{PublicKey, StaticSecret};
use zeroize::Zeroizing;

use crate::{Error, Result};

/// An X25519 key pair for the ECHConfig's HPKE KEM
pub struct KeyMaterial {
    secret: StaticSecret,
    public: PublicKey,
}

impl KeyMaterial {
    /// Generate a fresh key pair from the OS random source
    pub fn generate() -> Result<Self> {
        let mut secret = Zeroizing::new([0u8; 32]);
        OsRng
            .try_fill_bytes(&mut secret[..])
            .map_err(|e| Error::Rng(e.to_string()))?;
        Ok(Self::from_secret_bytes(*secret))
    }

    /// Build a key pair from a known private scalar
    pub fn from_secret_bytes(secret: [u8; 32]) -> Self {
        let secret = StaticSecret::from(secret);
        let public = PublicKey::from(&secret);
        Self { secret, public }
    }

    /// The 32-byte public point embedded in the ECHConfig
    pub fn public_key(&self) -> &[u8; 32] {
        self.public.as_bytes()
    }

    /// The private scalar as stored, before clamping; wiped when dropped
    pub fn secret_bytes(&self) -> Zeroizing<[u8; 32]> {
        Zeroizing::new(self.secret.to_bytes())
    }
}

impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("public", &hex::encode(self.public.as_bytes()))
            .finish_non_exhaustive()
    }
}

/// Draw a uniformly random config ID
pub fn random_config_id() -> Result<u8> {
    let mut id = [0u8; 1];
    OsRng
        .try_fill_bytes(&mut id)
        .map_err(|e| Error::Rng(e.to_string()))?;
    Ok(id[0])
}

/// Resolve a caller-supplied config ID, drawing a random one when absent
pub fn resolve_config_id(requested: Option<i64>) -> Result<u8> {
    match requested {
        None => random_config_id(),
        Some(id) => u8::try_from(id).map_err(|_| Error::InvalidConfigId(id)),
    }
}
