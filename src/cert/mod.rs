//! Certificate handling.
//!
//! Certificates only serve as carriers for public keys here; no chain
//! building or validation is performed.

pub mod public_key;
