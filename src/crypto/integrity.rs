//! Store integrity digest.
//!
//! A JKS file ends with a SHA-1 digest over the store password (UTF-16BE),
//! the fixed whitener string "Mighty Aphrodite", and every preceding byte of
//! the file. Verifying it authenticates the store password and detects
//! tampering in one step.

use crate::error::{JksError, Result};
use sha1::{Digest, Sha1};

/// Length of the trailing integrity digest.
pub const DIGEST_LENGTH: usize = 20;

const WHITENER: &[u8] = b"Mighty Aphrodite";

/// Convert a password to the UTF-16BE byte form Java hashes.
pub fn password_bytes(password: &str) -> Vec<u8> {
    password
        .encode_utf16()
        .flat_map(|unit| unit.to_be_bytes())
        .collect()
}

/// Compute the SHA-1 digest sealing `body` under `password`.
pub fn store_digest(password: &str, body: &[u8]) -> [u8; DIGEST_LENGTH] {
    let mut hasher = Sha1::new();
    hasher.update(password_bytes(password));
    hasher.update(WHITENER);
    hasher.update(body);
    hasher.finalize().into()
}

/// Verify the trailing digest of a keystore body.
pub fn verify_integrity(password: &str, body: &[u8], expected: &[u8]) -> Result<()> {
    if store_digest(password, body).as_slice() != expected {
        return Err(JksError::IntegrityError);
    }
    Ok(())
}
