//! jkspub: read Java (JKS) keystores and export entry public keys.
//!
//! This library parses the JKS version 2 container format, verifies the
//! store integrity digest against the store password, recovers
//! password-protected private keys, and extracts certificate public keys as
//! DER-encoded SubjectPublicKeyInfo structures.
//!
//! All operations return `Result` types with distinct error variants for
//! each failure mode - no `unwrap()` or panic.
//!
//! # Example
//!
//! ```rust,no_run
//! use jkspub::store::keystore::{export_public_key, load_keystore};
//! use jkspub::error::Result;
//! use std::path::Path;
//!
//! fn example() -> Result<()> {
//!     let store = load_keystore(Path::new(".keystore"), "changeit")?;
//!     let spki_der = export_public_key(&store, "mykey", "changeit")?;
//!     println!("public key is {} bytes", spki_der.len());
//!     Ok(())
//! }
//! ```

pub mod cert;
pub mod crypto;
pub mod error;
pub mod store;

// Re-export commonly used types
pub use error::{JksError, Result};
