//! Foundation types for the Tally ledger.
//!
//! This crate provides the account identity types shared by the rest of the
//! Tally crates. It carries no cryptography of its own; key handling lives in
//! `tally-crypto`.
//!
//! # Key Types
//!
//! - [`Address`] — 20-byte account identifier, the suffix of an Ed25519 public key
//! - [`TypeError`] — parse errors for textual representations

pub mod address;
pub mod error;

pub use address::{Address, ADDRESS_LEN};
pub use error::TypeError;
