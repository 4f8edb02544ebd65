//! # x509-handle
//!
//! An owned, value-semantic handle over a single X.509 certificate.
//!
//! The crate exposes a deliberately narrow surface: DER and PEM decoding and
//! encoding, plus typed access to the version, the serial number and the
//! validity window. Everything else a certificate carries (subject, issuer,
//! public key, extensions, signature) is kept intact but opaque.
//!
//! Chain building, signature verification and revocation checking are out of
//! scope.

pub mod certificate;
pub mod common;
pub mod interop;
pub mod serial;
pub mod time;
