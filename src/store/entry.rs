//! Keystore entry types.
//!
//! A JKS store holds two kinds of entries under string aliases: private key
//! entries (a protected key plus its certificate chain) and trusted
//! certificate entries.

/// A certificate as stored in the keystore: its type tag plus DER bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct CertificateBlob {
    /// The certificate type written by Java, normally "X.509".
    pub cert_type: String,

    /// The DER-encoded certificate.
    pub content: Vec<u8>,
}

/// A private key entry: the protected key blob and its certificate chain.
#[derive(Debug, Clone)]
pub struct PrivateKeyEntry {
    /// Creation timestamp in milliseconds since the Unix epoch.
    pub created_at: u64,

    /// The DER `EncryptedPrivateKeyInfo` wrapping the key.
    pub protected_key: Vec<u8>,

    /// The certificate chain, leaf first.
    pub chain: Vec<CertificateBlob>,
}

/// A trusted certificate entry.
#[derive(Debug, Clone)]
pub struct TrustedCertEntry {
    /// Creation timestamp in milliseconds since the Unix epoch.
    pub created_at: u64,

    /// The stored certificate.
    pub certificate: CertificateBlob,
}

/// An entry stored under an alias.
#[derive(Debug, Clone)]
pub enum Entry {
    PrivateKey(PrivateKeyEntry),
    TrustedCertificate(TrustedCertEntry),
}

impl Entry {
    /// Creation timestamp in milliseconds since the Unix epoch.
    pub fn created_at(&self) -> u64 {
        match self {
            Entry::PrivateKey(entry) => entry.created_at,
            Entry::TrustedCertificate(entry) => entry.created_at,
        }
    }

    /// Human-readable entry kind, matching the Java naming.
    pub fn kind(&self) -> &'static str {
        match self {
            Entry::PrivateKey(_) => "PrivateKeyEntry",
            Entry::TrustedCertificate(_) => "TrustedCertEntry",
        }
    }
}

/// Information about an entry for display purposes.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryInfo {
    /// The alias the entry is stored under.
    pub alias: String,

    /// The entry kind.
    pub kind: &'static str,

    /// Creation timestamp in milliseconds since the Unix epoch.
    pub created_at: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_accessors() {
        let entry = Entry::TrustedCertificate(TrustedCertEntry {
            created_at: 1_700_000_000_000,
            certificate: CertificateBlob {
                cert_type: "X.509".to_string(),
                content: vec![0x30, 0x03],
            },
        });

        assert_eq!(entry.created_at(), 1_700_000_000_000);
        assert_eq!(entry.kind(), "TrustedCertEntry");
    }

    #[test]
    fn test_private_key_entry_kind() {
        let entry = Entry::PrivateKey(PrivateKeyEntry {
            created_at: 0,
            protected_key: vec![],
            chain: vec![],
        });

        assert_eq!(entry.kind(), "PrivateKeyEntry");
    }
}
