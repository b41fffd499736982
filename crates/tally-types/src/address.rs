use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// Byte length of an account address.
pub const ADDRESS_LEN: usize = 20;

/// Account identifier for the Tally ledger.
///
/// An `Address` is the 20-byte suffix of an Ed25519 public key's byte
/// representation. Derivation is deterministic: the same public key always
/// produces the same address. Addresses are `Copy` and ordered, so they can
/// be used directly as map keys.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// Derive an address from raw public-key bytes.
    pub fn derive(public_key: &[u8; 32]) -> Self {
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes.copy_from_slice(&public_key[32 - ADDRESS_LEN..]);
        Self(bytes)
    }

    /// Create an address from a pre-derived 20-byte value. Use `derive()` for
    /// production code.
    pub const fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw 20 bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Lowercase hex representation (40 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from a hex string (40 hex characters, either case).
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != ADDRESS_LEN {
            return Err(TypeError::InvalidLength {
                expected: ADDRESS_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; ADDRESS_LEN];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::from_hex(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUBKEY_HEX: &str = "98d60ea038d3b4108dfdda1373b59d6cb4c6290c490c537e7dd9c03c2ce665ee";
    const ADDRESS_HEX: &str = "73b59d6cb4c6290c490c537e7dd9c03c2ce665ee";

    fn pubkey_bytes() -> [u8; 32] {
        hex::decode(PUBKEY_HEX).unwrap().try_into().unwrap()
    }

    #[test]
    fn derive_takes_public_key_suffix() {
        let addr = Address::derive(&pubkey_bytes());
        assert_eq!(addr.to_hex(), ADDRESS_HEX);
    }

    #[test]
    fn derive_is_deterministic() {
        let a1 = Address::derive(&pubkey_bytes());
        let a2 = Address::derive(&pubkey_bytes());
        assert_eq!(a1, a2);
    }

    #[test]
    fn address_is_twenty_bytes() {
        let addr = Address::derive(&pubkey_bytes());
        assert_eq!(addr.as_bytes().len(), ADDRESS_LEN);
    }

    #[test]
    fn hex_roundtrip() {
        let addr = Address::derive(&pubkey_bytes());
        let parsed = Address::from_hex(&addr.to_hex()).unwrap();
        assert_eq!(parsed, addr);
    }

    #[test]
    fn from_hex_accepts_uppercase() {
        let parsed = Address::from_hex(&ADDRESS_HEX.to_uppercase()).unwrap();
        assert_eq!(parsed.to_hex(), ADDRESS_HEX);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert_eq!(
            Address::from_hex("abcd").unwrap_err(),
            TypeError::InvalidLength {
                expected: 20,
                actual: 2,
            }
        );
    }

    #[test]
    fn from_hex_rejects_non_hex() {
        assert!(matches!(
            Address::from_hex("zz59d6cb4c6290c490c537e7dd9c03c2ce665ee"),
            Err(TypeError::InvalidHex(_))
        ));
    }

    #[test]
    fn display_is_lowercase_hex() {
        let addr = Address::from_hex(ADDRESS_HEX).unwrap();
        assert_eq!(addr.to_string(), ADDRESS_HEX);
    }

    #[test]
    fn serde_uses_hex_string() {
        let addr = Address::from_hex(ADDRESS_HEX).unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"{ADDRESS_HEX}\""));
        let parsed: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, addr);
    }

    #[test]
    fn serde_rejects_bad_strings() {
        assert!(serde_json::from_str::<Address>("\"abcd\"").is_err());
        assert!(serde_json::from_str::<Address>("42").is_err());
    }
}
