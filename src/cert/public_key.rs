//! Public key extraction from DER certificates.

use crate::error::{JksError, Result};
use der::{Decode, Encode};
use x509_cert::Certificate;

/// Extract the DER-encoded SubjectPublicKeyInfo from an X.509 certificate.
///
/// The result is byte-identical to what Java's `PublicKey.getEncoded()`
/// returns for the same certificate.
///
/// # Example
///
/// ```rust,no_run
/// use jkspub::cert::public_key::extract_public_key_der;
///
/// # fn example() -> jkspub::error::Result<()> {
/// let cert_der = std::fs::read("cert.der")?;
/// let spki_der = extract_public_key_der(&cert_der)?;
/// println!("public key is {} bytes", spki_der.len());
/// # Ok(())
/// # }
/// ```
pub fn extract_public_key_der(cert_der: &[u8]) -> Result<Vec<u8>> {
    let certificate = Certificate::from_der(cert_der).map_err(|e| {
        JksError::CertificateError(format!("failed to parse X.509 certificate: {}", e))
    })?;

    certificate
        .tbs_certificate
        .subject_public_key_info
        .to_der()
        .map_err(|e| JksError::CertificateError(format!("failed to encode public key: {}", e)))
}
