//! Cryptographic operations for JKS keystores.
//!
//! This module implements the two SHA-1 based schemes a JKS file uses:
//!
//! - The store integrity digest sealing the whole file under the store
//!   password ([`integrity`])
//! - Sun's key protector wrapping individual private keys ([`protector`])

pub mod integrity;
pub mod protector;
