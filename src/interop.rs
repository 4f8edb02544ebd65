//! Conversions between [`Certificate`] and `x509_certificate::X509Certificate`.
//!
//! Both directions go through the DER encoding, so a conversion round-trip
//! preserves the certificate byte for byte.

use x509_certificate::X509Certificate;

use crate::certificate::Certificate;
use crate::common::CertificateError;

impl TryFrom<&Certificate> for X509Certificate {
    type Error = CertificateError;

    fn try_from(certificate: &Certificate) -> Result<Self, Self::Error> {
        let der = certificate.to_der()?;
        Ok(X509Certificate::from_der(&der[..])?)
    }
}

impl TryFrom<&X509Certificate> for Certificate {
    type Error = CertificateError;

    fn try_from(certificate: &X509Certificate) -> Result<Self, Self::Error> {
        let der = certificate.encode_der()?;
        Certificate::from_der(&der)
    }
}
