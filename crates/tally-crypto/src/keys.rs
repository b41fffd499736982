use serde::{Deserialize, Serialize};
use tally_types::Address;

/// Byte length of a private-key seed.
pub const SEED_LEN: usize = 32;
/// Byte length of a private key in expanded form (seed followed by public key).
pub const PRIVATE_KEY_LEN: usize = 64;
/// Byte length of a public key.
pub const PUBLIC_KEY_LEN: usize = 32;
/// Byte length of a signature.
pub const SIGNATURE_LEN: usize = 64;

/// Ed25519 signing key (private).
pub struct PrivateKey(ed25519_dalek::SigningKey);

/// Ed25519 verifying key (public).
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey(ed25519_dalek::VerifyingKey);

/// Ed25519 signature over a specific message.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature(#[serde(with = "signature_serde")] ed25519_dalek::Signature);

impl PrivateKey {
    /// Generate a new private key from 32 cryptographically secure random bytes.
    ///
    /// Panics only if the platform entropy source fails.
    pub fn generate() -> Self {
        let mut csprng = rand::thread_rng();
        Self(ed25519_dalek::SigningKey::generate(&mut csprng))
    }

    /// Create a private key from a 32-byte seed.
    pub fn from_seed(seed: &[u8]) -> Result<Self, KeyError> {
        let bytes: [u8; SEED_LEN] =
            seed.try_into().map_err(|_| KeyError::InvalidSeedLength {
                expected: SEED_LEN,
                actual: seed.len(),
            })?;
        Ok(Self(ed25519_dalek::SigningKey::from_bytes(&bytes)))
    }

    /// Create a private key from a hex-encoded 32-byte seed (either case).
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(s).map_err(|e| KeyError::InvalidHex(e.to_string()))?;
        Self::from_seed(&bytes)
    }

    /// The corresponding public verifying key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.0.verifying_key())
    }

    /// Sign a message. Any byte sequence is signable, including the empty one.
    ///
    /// Signing is deterministic (RFC 8032): the same key and message always
    /// produce the same signature.
    pub fn sign(&self, message: &[u8]) -> Signature {
        use ed25519_dalek::Signer;
        Signature(self.0.sign(message))
    }

    /// The expanded 64-byte key material: seed followed by public key.
    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_LEN] {
        self.0.to_keypair_bytes()
    }
}

impl PublicKey {
    /// Verify a signature over a message.
    ///
    /// Returns `false` on any mismatch: a different message, a different key,
    /// or a corrupted signature. Verification never errors.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        use ed25519_dalek::Verifier;
        self.0.verify(message, &signature.0).is_ok()
    }

    /// The account address for this key: the 20-byte suffix of its bytes.
    pub fn address(&self) -> Address {
        Address::derive(&self.0.to_bytes())
    }

    /// Raw public key bytes.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LEN] {
        self.0.to_bytes()
    }

    /// Create from raw 32-byte public key material.
    ///
    /// Fails if the bytes do not encode a valid curve point.
    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_LEN]) -> Result<Self, KeyError> {
        let key = ed25519_dalek::VerifyingKey::from_bytes(&bytes)
            .map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(Self(key))
    }
}

impl Signature {
    /// Raw signature bytes.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        self.0.to_bytes()
    }

    /// Create from raw 64-byte signature material.
    pub fn from_bytes(bytes: &[u8; SIGNATURE_LEN]) -> Self {
        Self(ed25519_dalek::Signature::from_bytes(bytes))
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrivateKey(<redacted>)")
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PublicKey({})", hex::encode(self.0.to_bytes()))
    }
}

impl std::fmt::Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Signature({}...)", hex::encode(&self.0.to_bytes()[..8]))
    }
}

/// Errors from key construction.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("invalid seed length: expected {expected}, got {actual}")]
    InvalidSeedLength { expected: usize, actual: usize },
    #[error("invalid hex string: {0}")]
    InvalidHex(String),
    #[error("invalid public key")]
    InvalidPublicKey,
}

mod signature_serde {
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(sig: &ed25519_dalek::Signature, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&sig.to_bytes())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<ed25519_dalek::Signature, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes: Vec<u8> = Vec::deserialize(deserializer)?;
        let arr: [u8; 64] = bytes
            .try_into()
            .map_err(|_| serde::de::Error::custom("expected 64-byte signature"))?;
        Ok(ed25519_dalek::Signature::from_bytes(&arr))
    }
}
