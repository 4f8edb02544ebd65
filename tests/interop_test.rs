use x509_certificate::X509Certificate;

use x509_handle::certificate::Certificate;
use x509_handle::common::CertResult;

const SELF_SIGNED_DER: &[u8] = include_bytes!("data/self_signed.der");

#[test]
fn test_round_trip_through_x509_certificate() -> CertResult<()> {
    let certificate = Certificate::from_der(SELF_SIGNED_DER)?;
    let foreign = X509Certificate::try_from(&certificate)?;
    assert_eq!(
        Some("fixture.example.org".to_string()),
        foreign.subject_common_name()
    );

    let back = Certificate::try_from(&foreign)?;
    assert_eq!(SELF_SIGNED_DER, back.to_der()?.as_slice());
    assert_eq!(certificate, back);
    Ok(())
}

#[test]
fn test_validity_agrees_with_x509_certificate() -> CertResult<()> {
    let certificate = Certificate::from_der(SELF_SIGNED_DER)?;
    let foreign = X509Certificate::try_from(&certificate)?;
    assert_eq!(foreign.validity_not_before(), certificate.not_before()?);
    assert_eq!(foreign.validity_not_after(), certificate.not_after()?);
    Ok(())
}
