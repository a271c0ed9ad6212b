//! Sun JKS key protection.
//!
//! Private keys in a JKS store are wrapped as a DER `EncryptedPrivateKeyInfo`
//! under Sun's proprietary algorithm (OID 1.3.6.1.4.1.42.2.17.1.1). The
//! octet-string payload is:
//!
//! `[salt (20 bytes)][key XOR keystream][check digest (20 bytes)]`
//!
//! where the keystream blocks are `x_i = SHA1(password || x_{i-1})` with
//! `x_0 = salt`, and the check digest is `SHA1(password || plaintext key)`.
//! The password is hashed in its UTF-16BE byte form.

use crate::crypto::integrity::password_bytes;
use crate::error::{JksError, Result};
use der::asn1::{ObjectIdentifier, OctetString};
use der::{Decode, Encode, Sequence};
use rand::RngCore;
use sha1::{Digest, Sha1};
use spki::AlgorithmIdentifierOwned;

/// The algorithm identifier Java writes for JKS-protected keys.
pub const SUN_JKS_KEY_PROTECTOR: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.42.2.17.1.1");

/// Length of the keystream salt.
const SALT_LENGTH: usize = 20;

/// Length of the trailing check digest.
const DIGEST_LENGTH: usize = 20;

/// The outer DER structure wrapping a protected key.
#[derive(Sequence)]
struct EncryptedPrivateKeyInfo {
    algorithm: AlgorithmIdentifierOwned,
    encrypted_data: OctetString,
}

fn xor_keystream(password: &[u8], salt: &[u8; SALT_LENGTH], data: &mut [u8]) {
    let mut block = *salt;
    for chunk in data.chunks_mut(DIGEST_LENGTH) {
        let mut hasher = Sha1::new();
        hasher.update(password);
        hasher.update(block);
        block = hasher.finalize().into();
        for (byte, key) in chunk.iter_mut().zip(block.iter()) {
            *byte ^= key;
        }
    }
}

fn check_digest(password: &[u8], key: &[u8]) -> [u8; DIGEST_LENGTH] {
    let mut hasher = Sha1::new();
    hasher.update(password);
    hasher.update(key);
    hasher.finalize().into()
}

/// Recover a plaintext PKCS#8 key from a protected key blob.
///
/// A failed check digest means the key password is wrong (Java's
/// `UnrecoverableKeyException`).
///
/// # Example
///
/// ```
/// use jkspub::crypto::protector::{protect_private_key, recover_private_key};
///
/// let key = b"fake pkcs8 key bytes";
/// let password = "changeit";
///
/// let protected = protect_private_key(key, password).unwrap();
/// let recovered = recover_private_key(&protected, password).unwrap();
///
/// assert_eq!(key.as_slice(), recovered.as_slice());
/// ```
pub fn recover_private_key(blob: &[u8], password: &str) -> Result<Vec<u8>> {
    let info = EncryptedPrivateKeyInfo::from_der(blob)
        .map_err(|e| JksError::FormatError(format!("malformed protected key blob: {}", e)))?;

    if info.algorithm.oid != SUN_JKS_KEY_PROTECTOR {
        return Err(JksError::FormatError(format!(
            "unsupported key protection algorithm: {}",
            info.algorithm.oid
        )));
    }

    let data = info.encrypted_data.as_bytes();
    if data.len() < SALT_LENGTH + DIGEST_LENGTH {
        return Err(JksError::FormatError(format!(
            "protected key payload too short: {} bytes",
            data.len()
        )));
    }

    let mut salt = [0u8; SALT_LENGTH];
    salt.copy_from_slice(&data[..SALT_LENGTH]);
    let rest = &data[SALT_LENGTH..];
    let (ciphertext, expected) = rest.split_at(rest.len() - DIGEST_LENGTH);

    let password = password_bytes(password);
    let mut key = ciphertext.to_vec();
    xor_keystream(&password, &salt, &mut key);

    if check_digest(&password, &key).as_slice() != expected {
        return Err(JksError::UnrecoverableKeyError);
    }

    Ok(key)
}

/// Protect a plaintext PKCS#8 key, producing the DER blob a JKS store holds.
///
/// This is the writing counterpart of [`recover_private_key`]; a fresh
/// random salt is drawn for every call.
pub fn protect_private_key(key: &[u8], password: &str) -> Result<Vec<u8>> {
    let mut salt = [0u8; SALT_LENGTH];
    rand::thread_rng().fill_bytes(&mut salt);

    let password = password_bytes(password);
    let mut ciphertext = key.to_vec();
    xor_keystream(&password, &salt, &mut ciphertext);

    let mut payload = Vec::with_capacity(SALT_LENGTH + ciphertext.len() + DIGEST_LENGTH);
    payload.extend_from_slice(&salt);
    payload.extend_from_slice(&ciphertext);
    payload.extend_from_slice(&check_digest(&password, key));

    let info = EncryptedPrivateKeyInfo {
        algorithm: AlgorithmIdentifierOwned {
            oid: SUN_JKS_KEY_PROTECTOR,
            parameters: None,
        },
        encrypted_data: OctetString::new(payload)
            .map_err(|e| JksError::FormatError(format!("failed to encode protected key: {}", e)))?,
    };

    info.to_der()
        .map_err(|e| JksError::FormatError(format!("failed to encode protected key: {}", e)))
}
