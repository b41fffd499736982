//! Cryptographic primitives for the Tally ledger.
//!
//! Provides Ed25519 key generation, message signing and verification, and
//! derivation of 20-byte account addresses from public keys.
//!
//! All operations wrap `ed25519-dalek`; there is no custom cryptography.

pub mod keys;

pub use keys::{KeyError, PrivateKey, PublicKey, Signature};
pub use keys::{PRIVATE_KEY_LEN, PUBLIC_KEY_LEN, SEED_LEN, SIGNATURE_LEN};
