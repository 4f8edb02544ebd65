//! # Serial Number Conversions
//!
//! A certificate serial number is an arbitrary-precision DER INTEGER of up to
//! 20 octets, while the handle exposes it as a `u64`. This module converts in
//! both directions.
//!
//! Narrowing keeps the low-order 64 bits of the value and drops the rest, so
//! serial numbers wider than 8 octets do not survive a `u64` round-trip. The
//! full value stays available as raw bytes or as hexadecimal text.
//!
//! DER INTEGERs are signed. RFC 5280 forbids negative serial numbers but they
//! still turn up in the wild; they decode fine and are sign-extended when
//! narrowed.

use der::Decode;
use x509_cert::serial_number::SerialNumber;

use crate::common::{CertResult, CertificateError};

const U64_LEN: usize = size_of::<u64>();
const INTEGER_TAG: u8 = 0x02;

/// Builds a DER serial number holding `value`.
///
/// The value is written with the minimal number of octets, plus a leading zero
/// octet when the most significant bit is set so it is never read as negative.
/// The INTEGER is decoded from its encoding so the sign octet is kept as is.
pub fn serial_number_from_u64(value: u64) -> CertResult<SerialNumber> {
    let bytes = value.to_be_bytes();
    let start = bytes
        .iter()
        .position(|b| *b != 0)
        .unwrap_or(bytes.len() - 1);
    let sign_octet = bytes[start] & 0x80 != 0;
    let content_len = bytes.len() - start + usize::from(sign_octet);

    let mut encoded = Vec::with_capacity(content_len + 2);
    encoded.push(INTEGER_TAG);
    encoded.push(content_len as u8);
    if sign_octet {
        encoded.push(0);
    }
    encoded.extend_from_slice(&bytes[start..]);
    SerialNumber::from_der(&encoded).map_err(CertificateError::InvalidSerialNumber)
}

/// Returns true if the two's complement serial number octets encode a negative value.
pub fn serial_number_is_negative(bytes: &[u8]) -> bool {
    bytes.first().is_some_and(|b| b & 0x80 != 0)
}

/// Returns the big-endian magnitude of a non-negative serial number without
/// leading zero octets.
///
/// Zero is returned as an empty slice.
pub fn serial_number_magnitude(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

/// Narrows the serial number octets to a `u64`, keeping the low-order 64 bits.
///
/// Negative values are sign-extended, the same as casting a signed 64-bit
/// integer to unsigned.
pub fn serial_number_to_u64(bytes: &[u8]) -> u64 {
    let negative = serial_number_is_negative(bytes);
    let fill = if negative { 0xFF } else { 0x00 };
    let (high, low) = bytes.split_at(bytes.len().saturating_sub(U64_LEN));

    let sign_lost = !high.is_empty() && low.first().is_some_and(|b| (b & 0x80 != 0) != negative);
    if high.iter().any(|b| *b != fill) || sign_lost {
        log::warn!(
            "Serial number of {} octets narrowed to {} octets",
            bytes.len(),
            U64_LEN
        );
    }

    let mut narrowed = [fill; U64_LEN];
    narrowed[U64_LEN - low.len()..].copy_from_slice(low);
    u64::from_be_bytes(narrowed)
}

/// Formats the full serial number as upper-case hexadecimal, e.g. `1234ABCD`.
///
/// Negative values are written as `-` followed by their absolute value.
pub fn serial_number_to_hex(bytes: &[u8]) -> String {
    if serial_number_is_negative(bytes) {
        let absolute = negate(bytes);
        return format!("-{}", hex::encode_upper(serial_number_magnitude(&absolute)));
    }
    let magnitude = serial_number_magnitude(bytes);
    if magnitude.is_empty() {
        return "00".into();
    }
    hex::encode_upper(magnitude)
}

/// Two's complement negation of a big-endian integer.
fn negate(bytes: &[u8]) -> Vec<u8> {
    let mut negated: Vec<u8> = bytes.iter().map(|b| !b).collect();
    for b in negated.iter_mut().rev() {
        let (value, carry) = b.overflowing_add(1);
        *b = value;
        if !carry {
            break;
        }
    }
    negated
}
