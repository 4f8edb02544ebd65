use chrono::{DateTime, TimeZone, Utc};
use x509_cert::time::Time;

use x509_handle::common::{CertResult, CertificateError};
use x509_handle::time::{date_time_from_time, time_from_date_time};

#[test]
fn test_utc_time_before_cutoff() -> CertResult<()> {
    let date = Utc.with_ymd_and_hms(2049, 12, 31, 23, 59, 59).unwrap();
    let time = time_from_date_time(&date)?;
    assert!(matches!(time, Time::UtcTime(_)));
    assert_eq!(date, date_time_from_time(&time)?);
    Ok(())
}

#[test]
fn test_generalized_time_from_cutoff() -> CertResult<()> {
    let date = Utc.with_ymd_and_hms(2050, 1, 1, 0, 0, 0).unwrap();
    let time = time_from_date_time(&date)?;
    assert!(matches!(time, Time::GeneralTime(_)));
    assert_eq!(date, date_time_from_time(&time)?);
    Ok(())
}

#[test]
fn test_epoch_is_accepted() -> CertResult<()> {
    let epoch = DateTime::from_timestamp(0, 0).unwrap();
    assert_eq!(epoch, date_time_from_time(&time_from_date_time(&epoch)?)?);
    Ok(())
}

#[test]
fn test_out_of_range_dates() {
    let before_epoch = Utc.with_ymd_and_hms(1950, 1, 1, 0, 0, 0).unwrap();
    assert!(matches!(
        time_from_date_time(&before_epoch),
        Err(CertificateError::InvalidTimestamp(_))
    ));

    let too_late = Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap();
    assert!(matches!(
        time_from_date_time(&too_late),
        Err(CertificateError::InvalidTimestamp(_))
    ));
}
