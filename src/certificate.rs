//! # X.509 Certificate Handle
//!
//! This module provides [`Certificate`], an owned handle over exactly one
//! X.509 certificate. Parsing and encoding are delegated to the `x509-cert`
//! and `der` crates; the handle only adds typed accessors for the version,
//! the serial number and the validity window, plus DER and PEM conversions.
//!
//! ## Ownership
//!
//! A handle is the sole owner of its certificate. Moving a handle moves the
//! certificate with it and the moved-from binding can no longer be used. The
//! handle is not `Clone`; [`Certificate::duplicate`] makes an explicit deep copy.
//!
//! ## Encoding
//!
//! [`Certificate::write_der`] follows a two-call protocol: called without a
//! buffer it only reports the number of bytes needed, called with a buffer it
//! writes the encoding and reports the number of bytes written.
//! [`Certificate::to_der`] runs both steps. Setters take `&mut self`, so the
//! certificate cannot change between the two calls while the encoder holds
//! its shared borrow.
//!
//! ## Usage
//!
//! ```no_run
//! use x509_handle::certificate::Certificate;
//!
//! let bytes = std::fs::read("certificate.der").unwrap();
//! let mut certificate = Certificate::from_der(&bytes).unwrap();
//! println!("Serial number: {}", certificate.serial_number_hex());
//!
//! certificate.set_serial_number(42).unwrap();
//! let encoded = certificate.to_der().unwrap();
//! ```

use chrono::{DateTime, Utc};
use der::pem::LineEnding;
use der::{Decode, DecodePem, Encode, EncodePem, Reader, SliceReader};
use x509_cert::certificate::Version;

use crate::common::{CertResult, CertificateError};
use crate::serial::{
    serial_number_from_u64, serial_number_is_negative, serial_number_to_hex, serial_number_to_u64,
};
use crate::time::{date_time_from_time, time_from_date_time};

/// DER encoding of the certificate every empty handle starts from.
///
/// Version 1, serial number 0, empty issuer and subject, both validity bounds
/// at 1970-01-01T00:00:00Z, ecdsa-with-SHA256 as signature algorithm and
/// id-ecPublicKey as key algorithm, with empty key and signature bits.
const EMPTY_CERTIFICATE_DER: [u8; 86] = [
    0x30, 0x54, 0x30, 0x43, 0x02, 0x01, 0x00, 0x30, 0x0a, 0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d,
    0x04, 0x03, 0x02, 0x30, 0x00, 0x30, 0x1e, 0x17, 0x0d, 0x37, 0x30, 0x30, 0x31, 0x30, 0x31, 0x30,
    0x30, 0x30, 0x30, 0x30, 0x30, 0x5a, 0x17, 0x0d, 0x37, 0x30, 0x30, 0x31, 0x30, 0x31, 0x30, 0x30,
    0x30, 0x30, 0x30, 0x30, 0x5a, 0x30, 0x00, 0x30, 0x0e, 0x30, 0x09, 0x06, 0x07, 0x2a, 0x86, 0x48,
    0xce, 0x3d, 0x02, 0x01, 0x03, 0x01, 0x00, 0x30, 0x0a, 0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d,
    0x04, 0x03, 0x02, 0x03, 0x01, 0x00,
];

/// Owned handle over a single X.509 certificate.
///
/// Two handles compare equal when their certificates are structurally equal,
/// which for certificates decoded from DER means equal encodings.
#[derive(Debug, PartialEq, Eq)]
pub struct Certificate {
    inner: x509_cert::Certificate,
}

impl Certificate {
    /// Creates an empty certificate with default field values.
    ///
    /// The new certificate is version 1 with serial number 0 and a validity
    /// window collapsed to the Unix epoch. It is immediately usable: every
    /// setter works on it and it encodes to valid DER.
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::Allocation` if the default certificate cannot
    /// be initialised by the DER layer.
    pub fn new() -> CertResult<Self> {
        let inner = x509_cert::Certificate::from_der(&EMPTY_CERTIFICATE_DER)
            .map_err(CertificateError::Allocation)?;
        Ok(Self { inner })
    }

    /// Decodes a DER-encoded certificate.
    ///
    /// Only the first complete certificate in `bytes` is parsed; anything after
    /// it is ignored. Use [`Certificate::read_der`] to get hold of those bytes.
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::Decode` if `bytes` does not start with a
    /// complete, well-formed certificate.
    pub fn from_der(bytes: &[u8]) -> CertResult<Self> {
        Self::read_der(bytes).map(|(certificate, _)| certificate)
    }

    /// Decodes the first certificate in `bytes` and returns the unread remainder.
    ///
    /// This allows walking a buffer of concatenated DER certificates one at a time.
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::Decode` if `bytes` does not start with a
    /// complete, well-formed certificate.
    pub fn read_der(bytes: &[u8]) -> CertResult<(Self, &[u8])> {
        let mut reader = SliceReader::new(bytes).map_err(CertificateError::Decode)?;
        let inner = x509_cert::Certificate::decode(&mut reader).map_err(CertificateError::Decode)?;
        let consumed = usize::try_from(reader.position()).map_err(CertificateError::Decode)?;
        log::debug!(
            "Decoded certificate from {} of {} bytes",
            consumed,
            bytes.len()
        );
        Ok((Self { inner }, &bytes[consumed..]))
    }

    /// Decodes a PEM-armoured certificate (`-----BEGIN CERTIFICATE-----`).
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::Pem` if the armour, its label or its base64
    /// body is malformed, or if the decoded bytes are not a certificate.
    pub fn from_pem(pem: &str) -> CertResult<Self> {
        let inner = x509_cert::Certificate::from_pem(pem).map_err(CertificateError::Pem)?;
        Ok(Self { inner })
    }

    /// Creates an independent deep copy of this certificate.
    pub fn duplicate(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }

    /// Returns the version tag: 0 for v1, 1 for v2 and 2 for v3.
    pub fn version(&self) -> u32 {
        match self.inner.tbs_certificate.version {
            Version::V1 => 0,
            Version::V2 => 1,
            Version::V3 => 2,
        }
    }

    /// Sets the version tag.
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::UnsupportedVersion` for values other than 0, 1 and 2.
    pub fn set_version(&mut self, value: u32) -> CertResult<()> {
        self.inner.tbs_certificate.version = match value {
            0 => Version::V1,
            1 => Version::V2,
            2 => Version::V3,
            other => return Err(CertificateError::UnsupportedVersion(other)),
        };
        Ok(())
    }

    /// Returns the serial number narrowed to 64 bits.
    ///
    /// Serial numbers may be up to 20 octets long. Only the low-order 64 bits
    /// of wider values are returned; see [`Certificate::serial_number_bytes`]
    /// for the full value. Negative serial numbers are sign-extended, so
    /// `serial_number() as i64` gives back their signed value.
    pub fn serial_number(&self) -> u64 {
        serial_number_to_u64(self.inner.tbs_certificate.serial_number.as_bytes())
    }

    /// Returns the serial number as big-endian two's complement octets, as
    /// stored in the DER INTEGER.
    pub fn serial_number_bytes(&self) -> &[u8] {
        self.inner.tbs_certificate.serial_number.as_bytes()
    }

    /// Returns true if the stored serial number is negative.
    ///
    /// RFC 5280 requires positive serial numbers, but some issuers got this wrong.
    pub fn serial_number_is_negative(&self) -> bool {
        serial_number_is_negative(self.inner.tbs_certificate.serial_number.as_bytes())
    }

    /// Returns the serial number as upper-case hexadecimal text, with a leading
    /// `-` for negative values.
    pub fn serial_number_hex(&self) -> String {
        serial_number_to_hex(self.inner.tbs_certificate.serial_number.as_bytes())
    }

    /// Sets the serial number.
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::InvalidSerialNumber` if the DER layer cannot
    /// build an INTEGER from `value`. The handle is left unchanged.
    pub fn set_serial_number(&mut self, value: u64) -> CertResult<()> {
        self.inner.tbs_certificate.serial_number = serial_number_from_u64(value)?;
        Ok(())
    }

    /// Returns the start of the validity window.
    pub fn not_before(&self) -> CertResult<DateTime<Utc>> {
        date_time_from_time(&self.inner.tbs_certificate.validity.not_before)
    }

    /// Returns the end of the validity window.
    pub fn not_after(&self) -> CertResult<DateTime<Utc>> {
        date_time_from_time(&self.inner.tbs_certificate.validity.not_after)
    }

    /// Sets the start of the validity window, truncated to whole seconds.
    ///
    /// The window is not checked for ordering against `not_after`.
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::InvalidTimestamp` if the date cannot be
    /// represented in a certificate. The handle is left unchanged.
    pub fn set_not_before(&mut self, date: &DateTime<Utc>) -> CertResult<()> {
        self.inner.tbs_certificate.validity.not_before = time_from_date_time(date)?;
        Ok(())
    }

    /// Sets the end of the validity window, truncated to whole seconds.
    ///
    /// The window is not checked for ordering against `not_before`.
    pub fn set_not_after(&mut self, date: &DateTime<Utc>) -> CertResult<()> {
        self.inner.tbs_certificate.validity.not_after = time_from_date_time(date)?;
        Ok(())
    }

    /// Encodes the certificate as DER into `buffer`, or reports the size needed.
    ///
    /// With `None` nothing is written and the length of the encoding is
    /// returned. With `Some(buffer)` the encoding is written to the start of
    /// the buffer and the number of bytes written is returned.
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::Encode` if the certificate cannot be encoded
    /// or the buffer is shorter than the encoding.
    pub fn write_der(&self, buffer: Option<&mut [u8]>) -> CertResult<usize> {
        match buffer {
            None => {
                let length = self.inner.encoded_len().map_err(CertificateError::Encode)?;
                usize::try_from(length).map_err(CertificateError::Encode)
            }
            Some(buffer) => {
                let written = self
                    .inner
                    .encode_to_slice(buffer)
                    .map_err(CertificateError::Encode)?;
                Ok(written.len())
            }
        }
    }

    /// Encodes the certificate as DER into a newly allocated buffer of exact size.
    pub fn to_der(&self) -> CertResult<Vec<u8>> {
        let mut buffer = vec![0u8; self.write_der(None)?];
        let written = self.write_der(Some(&mut buffer))?;
        buffer.truncate(written);
        log::debug!("Encoded certificate into {} bytes", written);
        Ok(buffer)
    }

    /// Encodes the certificate as PEM with LF line endings.
    pub fn to_pem(&self) -> CertResult<String> {
        self.inner
            .to_pem(LineEnding::LF)
            .map_err(CertificateError::Pem)
    }
}

impl<'a> TryFrom<&'a [u8]> for Certificate {
    type Error = CertificateError;

    fn try_from(bytes: &'a [u8]) -> Result<Self, Self::Error> {
        Self::from_der(bytes)
    }
}
