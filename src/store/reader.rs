//! Big-endian primitive readers for the JKS binary layout.
//!
//! All multi-byte integers in a JKS file are big-endian, and strings are
//! written as a u16 length prefix followed by UTF-8 bytes.

use crate::error::{JksError, Result};
use std::io::Read;

fn read_exact(reader: &mut impl Read, buf: &mut [u8], what: &str) -> Result<()> {
    use std::io::ErrorKind::UnexpectedEof;
    match reader.read_exact(buf) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == UnexpectedEof => Err(JksError::FormatError(format!(
            "unexpected end of keystore data while reading {}",
            what
        ))),
        Err(e) => Err(JksError::StorageError(e)),
    }
}

pub(crate) fn read_u16(reader: &mut impl Read, what: &str) -> Result<u16> {
    let mut buf = [0u8; 2];
    read_exact(reader, &mut buf, what)?;
    Ok(u16::from_be_bytes(buf))
}

pub(crate) fn read_u32(reader: &mut impl Read, what: &str) -> Result<u32> {
    let mut buf = [0u8; 4];
    read_exact(reader, &mut buf, what)?;
    Ok(u32::from_be_bytes(buf))
}

pub(crate) fn read_u64(reader: &mut impl Read, what: &str) -> Result<u64> {
    let mut buf = [0u8; 8];
    read_exact(reader, &mut buf, what)?;
    Ok(u64::from_be_bytes(buf))
}

pub(crate) fn read_bytes(reader: &mut impl Read, len: usize, what: &str) -> Result<Vec<u8>> {
    // the declared length is untrusted, so grow the buffer from the input
    // instead of allocating `len` bytes up front
    let mut buf = Vec::new();
    let read = reader
        .take(len as u64)
        .read_to_end(&mut buf)
        .map_err(JksError::StorageError)?;
    if read < len {
        return Err(JksError::FormatError(format!(
            "unexpected end of keystore data while reading {}",
            what
        )));
    }
    Ok(buf)
}

/// Read a length-prefixed UTF-8 string (Java `DataOutput.writeUTF` layout).
pub(crate) fn read_string(reader: &mut impl Read, what: &str) -> Result<String> {
    let len = read_u16(reader, what)?;
    let buf = read_bytes(reader, len as usize, what)?;
    String::from_utf8(buf)
        .map_err(|e| JksError::FormatError(format!("invalid UTF-8 in {}: {}", what, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_u32_consumes_four_bytes() {
        let data = [0xFEu8, 0xED, 0xFE, 0xED, 0x00];
        let mut reader = &data[..];
        assert_eq!(read_u32(&mut reader, "magic").unwrap(), 0xFEED_FEED);
        // one byte left over
        assert_eq!(reader.len(), 1);
    }

    #[test]
    fn test_read_u16_and_u64() {
        let data = [0x00u8, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00];
        let mut reader = &data[..];
        assert_eq!(read_u16(&mut reader, "version").unwrap(), 2);
        assert_eq!(read_u64(&mut reader, "timestamp").unwrap(), 256);
    }

    #[test]
    fn test_read_string() {
        let mut data = vec![0x00u8, 0x05];
        data.extend_from_slice(b"mykey");
        let mut reader = &data[..];
        assert_eq!(read_string(&mut reader, "alias").unwrap(), "mykey");
    }

    #[test]
    fn test_read_string_invalid_utf8() {
        let data = [0x00u8, 0x02, 0xFF, 0xFE];
        let mut reader = &data[..];
        let result = read_string(&mut reader, "alias");
        assert!(matches!(result, Err(JksError::FormatError(_))));
    }

    #[test]
    fn test_truncated_input() {
        let data = [0x00u8, 0x01];
        let mut reader = &data[..];
        let result = read_u32(&mut reader, "magic");
        match result {
            Err(JksError::FormatError(msg)) => assert!(msg.contains("magic")),
            _ => panic!("Expected FormatError"),
        }
    }

    #[test]
    fn test_read_bytes() {
        let data = [1u8, 2, 3, 4, 5];
        let mut reader = &data[..];
        let bytes = read_bytes(&mut reader, 3, "certificate").unwrap();
        assert_eq!(bytes, vec![1, 2, 3]);
    }

    #[test]
    fn test_read_bytes_oversized_length() {
        // a declared length far beyond the input must fail without
        // allocating the declared size
        let data = [1u8, 2, 3];
        let mut reader = &data[..];
        let result = read_bytes(&mut reader, u32::MAX as usize, "certificate");
        match result {
            Err(JksError::FormatError(msg)) => assert!(msg.contains("certificate")),
            _ => panic!("Expected FormatError"),
        }
    }
}
