//! # Common Types and Constants
//!
//! This module provides the types shared by every part of the crate:
//! - The error taxonomy reported by certificate operations
//! - The result alias used throughout the public API
//! - Constants taken from RFC 5280 that shape the encoded certificate

/// First year that has to be encoded as GeneralizedTime instead of UTCTime.
pub const GENERALIZED_TIME_CUTOFF_YEAR: u16 = 2050;

pub type CertResult<R> = Result<R, CertificateError>;

/// Represents errors that can occur while handling a certificate
///
/// Every variant produced by the DER layer keeps the original `der::Error`, so
/// the caller can inspect its kind and the byte position where it was raised.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CertificateError {
    #[error("Certificate allocation failed: {0}")]
    Allocation(der::Error),
    #[error("Invalid DER certificate: {0}")]
    Decode(der::Error),
    #[error("Certificate encoding failed: {0}")]
    Encode(der::Error),
    #[error("PEM error: {0}")]
    Pem(der::Error),
    #[error("Unsupported certificate version: {0}")]
    UnsupportedVersion(u32),
    #[error("Invalid serial number: {0}")]
    InvalidSerialNumber(der::Error),
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
    #[error("Interoperability error: {0}")]
    Interop(String),
}

impl CertificateError {
    /// Returns the underlying DER diagnostic, if this error came from the DER layer.
    pub fn der_error(&self) -> Option<&der::Error> {
        match self {
            CertificateError::Allocation(e)
            | CertificateError::Decode(e)
            | CertificateError::Encode(e)
            | CertificateError::Pem(e)
            | CertificateError::InvalidSerialNumber(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CertificateError {
    fn from(e: std::io::Error) -> Self {
        CertificateError::Interop(format!("{:?}", e))
    }
}

impl From<x509_certificate::X509CertificateError> for CertificateError {
    fn from(e: x509_certificate::X509CertificateError) -> Self {
        CertificateError::Interop(format!("{:?}", e))
    }
}
