//! # Validity Time Conversions
//!
//! Certificates carry their validity window as an ASN.1 `Time` CHOICE. RFC 5280
//! requires dates up to the end of 2049 to be encoded as UTCTime and later dates
//! as GeneralizedTime; both carry whole seconds only.
//!
//! The handle exposes these values as `chrono::DateTime<Utc>`. Sub-second
//! precision is dropped when converting into a certificate, and dates before
//! the Unix epoch are rejected because the DER time types cannot hold them.

use std::time::Duration;

use chrono::{DateTime, Utc};
use der::asn1::{GeneralizedTime, UtcTime};
use x509_cert::time::Time;

use crate::common::{CertResult, CertificateError, GENERALIZED_TIME_CUTOFF_YEAR};

/// Converts a calendar timestamp into the ASN.1 time representation.
///
/// # Errors
///
/// Returns `CertificateError::InvalidTimestamp` if the date is before 1970 or
/// after the last second of year 9999.
pub fn time_from_date_time(date: &DateTime<Utc>) -> CertResult<Time> {
    let seconds = u64::try_from(date.timestamp()).map_err(|_| {
        CertificateError::InvalidTimestamp(format!("{date} is before the Unix epoch"))
    })?;
    let date_time = der::DateTime::from_unix_duration(Duration::from_secs(seconds))
        .map_err(|e| CertificateError::InvalidTimestamp(format!("{date}: {e}")))?;

    if date_time.year() < GENERALIZED_TIME_CUTOFF_YEAR {
        UtcTime::from_date_time(date_time)
            .map(Time::UtcTime)
            .map_err(|e| CertificateError::InvalidTimestamp(format!("{date}: {e}")))
    } else {
        Ok(Time::GeneralTime(GeneralizedTime::from_date_time(date_time)))
    }
}

/// Converts an ASN.1 time back into a calendar timestamp.
pub fn date_time_from_time(time: &Time) -> CertResult<DateTime<Utc>> {
    let seconds = i64::try_from(time.to_unix_duration().as_secs())
        .map_err(|_| CertificateError::InvalidTimestamp(format!("{time:?} out of range")))?;
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| CertificateError::InvalidTimestamp(format!("{time:?} out of range")))
}
