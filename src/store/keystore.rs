//! JKS keystore parsing and entry access.
//!
//! This module parses the JKS version 2 container format: a magic/version
//! header, a sequence of tagged entries, and a trailing SHA-1 integrity
//! digest keyed by the store password.

use crate::cert::public_key::extract_public_key_der;
use crate::crypto::integrity::{verify_integrity, DIGEST_LENGTH};
use crate::crypto::protector::recover_private_key;
use crate::error::{JksError, Result};
use crate::store::entry::{CertificateBlob, Entry, EntryInfo, PrivateKeyEntry, TrustedCertEntry};
use crate::store::reader::{read_bytes, read_string, read_u32, read_u64};
use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

/// File magic of a JKS keystore.
const MAGIC: u32 = 0xFEED_FEED;

/// The only supported container version.
const VERSION_2: u32 = 2;

/// Entry tag for private key entries.
const TAG_PRIVATE_KEY: u32 = 1;

/// Entry tag for trusted certificate entries.
const TAG_TRUSTED_CERT: u32 = 2;

const CERT_TYPE_X509: &str = "X.509";

/// A parsed, integrity-verified keystore.
#[derive(Debug, Clone)]
pub struct KeyStore {
    /// Map of alias to entry.
    entries: HashMap<String, Entry>,
}

/// Load a keystore from disk and parse it.
///
/// The file is read in one scoped call, so the handle is released on every
/// exit path. A missing file is reported distinctly from other I/O errors.
///
/// # Example
///
/// ```rust,no_run
/// use jkspub::store::keystore::load_keystore;
/// use std::path::Path;
///
/// # fn example() -> jkspub::error::Result<()> {
/// let store = load_keystore(Path::new(".keystore"), "changeit")?;
/// println!("{} entries", store.len());
/// # Ok(())
/// # }
/// ```
pub fn load_keystore(path: &Path, password: &str) -> Result<KeyStore> {
    let data = fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => JksError::FileNotFound(path.display().to_string()),
        _ => JksError::StorageError(e),
    })?;

    KeyStore::parse(&data, password)
}

impl KeyStore {
    /// Parse keystore bytes and verify the trailing integrity digest.
    ///
    /// The digest covers everything before it, so a wrong store password and
    /// a tampered file are both reported as [`JksError::IntegrityError`].
    pub fn parse(data: &[u8], password: &str) -> Result<Self> {
        if data.len() < DIGEST_LENGTH {
            return Err(JksError::FormatError(format!(
                "keystore data too short: {} bytes",
                data.len()
            )));
        }
        let (body, digest) = data.split_at(data.len() - DIGEST_LENGTH);
        verify_integrity(password, body, digest)?;

        let mut reader = body;

        let magic = read_u32(&mut reader, "magic")?;
        if magic != MAGIC {
            return Err(JksError::FormatError(format!(
                "invalid magic: expected {:#010x}, got {:#010x}",
                MAGIC, magic
            )));
        }

        let version = read_u32(&mut reader, "version")?;
        if version != VERSION_2 {
            return Err(JksError::FormatError(format!(
                "unsupported keystore version {}, only version 2 is supported",
                version
            )));
        }

        let count = read_u32(&mut reader, "entry count")?;
        let mut entries = HashMap::new();
        for _ in 0..count {
            let tag = read_u32(&mut reader, "entry tag")?;
            let alias = read_string(&mut reader, "alias")?;
            let created_at = read_u64(&mut reader, "timestamp")?;

            let entry = match tag {
                TAG_PRIVATE_KEY => Entry::PrivateKey(read_private_key_entry(&mut reader, created_at)?),
                TAG_TRUSTED_CERT => Entry::TrustedCertificate(TrustedCertEntry {
                    created_at,
                    certificate: read_certificate(&mut reader)?,
                }),
                other => {
                    return Err(JksError::FormatError(format!(
                        "unsupported entry tag {} for alias '{}'",
                        other, alias
                    )));
                }
            };

            // duplicate aliases: last entry wins, matching the Java loader
            entries.insert(alias, entry);
        }

        Ok(KeyStore { entries })
    }

    /// All aliases, sorted for consistent output.
    pub fn aliases(&self) -> Vec<String> {
        let mut aliases: Vec<String> = self.entries.keys().cloned().collect();
        aliases.sort();
        aliases
    }

    /// Look up an entry by alias.
    pub fn entry(&self, alias: &str) -> Option<&Entry> {
        self.entries.get(alias)
    }

    /// Whether `alias` maps to a private key entry.
    pub fn is_private_key_entry(&self, alias: &str) -> bool {
        matches!(self.entries.get(alias), Some(Entry::PrivateKey(_)))
    }

    /// Number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The certificate associated with `alias`.
    ///
    /// Follows Java `KeyStore.getCertificate` semantics: the stored
    /// certificate for a trusted entry, or the first certificate of the
    /// chain for a private key entry.
    pub fn certificate(&self, alias: &str) -> Result<&CertificateBlob> {
        match self.entries.get(alias) {
            None => Err(JksError::NotFoundError(alias.to_string())),
            Some(Entry::TrustedCertificate(entry)) => Ok(&entry.certificate),
            Some(Entry::PrivateKey(entry)) => entry.chain.first().ok_or_else(|| {
                JksError::CertificateError(format!(
                    "entry '{}' has an empty certificate chain",
                    alias
                ))
            }),
        }
    }

    /// Display rows for all entries, sorted by alias.
    pub fn entry_infos(&self) -> Vec<EntryInfo> {
        let mut infos: Vec<EntryInfo> = self
            .entries
            .iter()
            .map(|(alias, entry)| EntryInfo {
                alias: alias.clone(),
                kind: entry.kind(),
                created_at: entry.created_at(),
            })
            .collect();
        infos.sort_by(|a, b| a.alias.cmp(&b.alias));
        infos
    }
}

fn read_certificate(reader: &mut impl Read) -> Result<CertificateBlob> {
    let cert_type = read_string(reader, "certificate type")?;
    if cert_type != CERT_TYPE_X509 {
        return Err(JksError::FormatError(format!(
            "unsupported certificate type: {}",
            cert_type
        )));
    }
    let len = read_u32(reader, "certificate length")? as usize;
    let content = read_bytes(reader, len, "certificate")?;
    Ok(CertificateBlob { cert_type, content })
}

fn read_private_key_entry(reader: &mut impl Read, created_at: u64) -> Result<PrivateKeyEntry> {
    let key_len = read_u32(reader, "protected key length")? as usize;
    let protected_key = read_bytes(reader, key_len, "protected key")?;

    let chain_len = read_u32(reader, "chain length")?;
    let mut chain = Vec::new();
    for _ in 0..chain_len {
        chain.push(read_certificate(reader)?);
    }

    Ok(PrivateKeyEntry {
        created_at,
        protected_key,
        chain,
    })
}

/// Recover the plaintext PKCS#8 private key stored under `alias`.
///
/// Mirrors Java `KeyStore.getKey`: the alias must exist, must be a private
/// key entry, and the key password must decrypt the protected blob.
pub fn private_key(store: &KeyStore, alias: &str, key_password: &str) -> Result<Vec<u8>> {
    match store.entries.get(alias) {
        None => Err(JksError::NotFoundError(alias.to_string())),
        Some(Entry::TrustedCertificate(_)) => {
            Err(JksError::WrongEntryTypeError(alias.to_string()))
        }
        Some(Entry::PrivateKey(entry)) => recover_private_key(&entry.protected_key, key_password),
    }
}

/// Extract the public key of the private key entry stored under `alias`.
///
/// This is the whole read flow in one call: the entry must be a private key
/// entry, the protected key must recover under `key_password`, and the
/// result is the DER SubjectPublicKeyInfo of the entry's certificate.
///
/// # Example
///
/// ```rust,no_run
/// use jkspub::store::keystore::{export_public_key, load_keystore};
/// use std::path::Path;
///
/// # fn example() -> jkspub::error::Result<()> {
/// let store = load_keystore(Path::new(".keystore"), "changeit")?;
/// let spki_der = export_public_key(&store, "mykey", "changeit")?;
/// # Ok(())
/// # }
/// ```
pub fn export_public_key(store: &KeyStore, alias: &str, key_password: &str) -> Result<Vec<u8>> {
    // decrypting first reproduces the Java classification: a key that does
    // not recover is not usable as a private key
    private_key(store, alias, key_password)?;

    let certificate = store.certificate(alias)?;
    extract_public_key_der(&certificate.content)
}
