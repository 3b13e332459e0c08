//! X.509 certificate inspection.
//!
//! Certificates are read from PEM text and decoded with `x509-parser`. Only
//! the fields this toolkit reports are kept, so a [`Certificate`] owns its
//! data and outlives the input buffer.

use std::str::FromStr;

use pem::Pem;
use tracing::debug;
use x509_parser::prelude::{FromDer, X509Certificate};

pub use crate::error::{Error, Result};

pub mod error;

/*
https://datatracker.ietf.org/doc/html/rfc5280#section-4.1

Certificate  ::=  SEQUENCE  {
    tbsCertificate       TBSCertificate,
    signatureAlgorithm   AlgorithmIdentifier,
    signatureValue       BIT STRING
}

CertificateSerialNumber  ::=  INTEGER
 */

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    serial: Vec<u8>, // minimal big-endian magnitude of the INTEGER
    subject: String,
    issuer: String,
    not_before: String,
    not_after: String,
}

impl Certificate {
    /// Parse the first PEM block of `input` as a DER certificate.
    ///
    /// The block label is not checked, only the payload.
    pub fn from_pem(input: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(input).map_err(|_| Error::NotText)?;
        let pem = Pem::from_str(text)?;
        debug!(label = %pem.label(), "decoding certificate PEM block");
        Self::from_der(&pem.to_der()?)
    }

    pub fn from_der(der: &[u8]) -> Result<Self> {
        let (rem, cert) = X509Certificate::from_der(der)
            .map_err(|e| Error::InvalidCertificate(e.to_string()))?;
        if !rem.is_empty() {
            return Err(Error::TrailingData(rem.len()));
        }

        let tbs = &cert.tbs_certificate;
        Ok(Certificate {
            serial: minimal_magnitude(tbs.raw_serial()),
            subject: tbs.subject().to_string(),
            issuer: tbs.issuer().to_string(),
            not_before: tbs.validity().not_before.to_string(),
            not_after: tbs.validity().not_after.to_string(),
        })
    }

    /// Serial number as uppercase hex, two digits per byte, no separators
    /// (`openssl x509 -noout -serial` style).
    pub fn serial_number_hex(&self) -> String {
        hex::encode_upper(&self.serial)
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn not_before(&self) -> &str {
        &self.not_before
    }

    pub fn not_after(&self) -> &str {
        &self.not_after
    }
}

// DER integers are two's complement. A positive value whose high bit is set
// carries a leading 0x00; a negative one is reported by its absolute value.
// Zero keeps a single byte.
fn minimal_magnitude(raw: &[u8]) -> Vec<u8> {
    let mut magnitude = raw.to_vec();
    if raw.first().is_some_and(|b| b & 0x80 != 0) {
        for b in magnitude.iter_mut() {
            *b = !*b;
        }
        for b in magnitude.iter_mut().rev() {
            let (sum, carry) = b.overflowing_add(1);
            *b = sum;
            if !carry {
                break;
            }
        }
    }
    let start = magnitude
        .iter()
        .position(|b| *b != 0)
        .unwrap_or(magnitude.len().saturating_sub(1));
    magnitude.split_off(start)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const CERT_PEM: &str = include_str!("../../testdata/cert.pem");
    const PKCS8_PEM: &str = include_str!("../../testdata/pkcs8.pem");

    #[test]
    fn test_serial_number_hex() {
        let cert = Certificate::from_pem(CERT_PEM.as_bytes()).unwrap();
        assert_eq!(
            "10C764E9D560384212D9C08FD10E373FDD0FB396",
            cert.serial_number_hex()
        );
    }

    #[test]
    fn test_certificate_fields() {
        let cert = Certificate::from_pem(CERT_PEM.as_bytes()).unwrap();
        assert!(cert.subject().contains("CN=ktool test"));
        assert_eq!(cert.subject(), cert.issuer());
        assert!(!cert.not_before().is_empty());
        assert!(!cert.not_after().is_empty());
    }

    #[test]
    fn test_explanatory_text_before_block() {
        let input = format!("subject=CN = ktool test\n{CERT_PEM}");
        let cert = Certificate::from_pem(input.as_bytes()).unwrap();
        assert_eq!(
            "10C764E9D560384212D9C08FD10E373FDD0FB396",
            cert.serial_number_hex()
        );
    }

    #[rstest(
        label,
        case("X509 CERTIFICATE"),
        case("TRUSTED CERTIFICATE"),
        case("PRIVATE KEY")
    )]
    fn test_from_pem_ignores_label(label: &str) {
        let relabelled = CERT_PEM.replace("CERTIFICATE-----", &format!("{label}-----"));
        let cert = Certificate::from_pem(relabelled.as_bytes()).unwrap();
        assert_eq!(
            "10C764E9D560384212D9C08FD10E373FDD0FB396",
            cert.serial_number_hex()
        );
    }

    #[test]
    fn test_negative_serial_prints_absolute_value() {
        let cert = Certificate {
            serial: minimal_magnitude(&[0xfe, 0xdc, 0xba]),
            subject: String::new(),
            issuer: String::new(),
            not_before: String::new(),
            not_after: String::new(),
        };
        assert_eq!("012346", cert.serial_number_hex());
    }

    #[rstest(input, case(""), case("hello world"), case("MIIDazCCAlOgAwIBAgIUEMdk"))]
    fn test_from_pem_requires_pem(input: &str) {
        assert!(matches!(
            Certificate::from_pem(input.as_bytes()),
            Err(Error::Pem(_))
        ));
    }

    #[test]
    fn test_from_pem_rejects_non_certificate_payload() {
        assert!(matches!(
            Certificate::from_pem(PKCS8_PEM.as_bytes()),
            Err(Error::InvalidCertificate(_))
        ));
    }

    #[test]
    fn test_from_pem_rejects_binary() {
        assert!(matches!(
            Certificate::from_pem(&[0x30, 0x82, 0xff, 0xff]),
            Err(Error::NotText)
        ));
    }

    #[rstest(
        raw,
        expected,
        case(&[0x00, 0x80, 0x01], &[0x80, 0x01]),
        case(&[0x0a], &[0x0a]),
        case(&[0x00], &[0x00]),
        case(&[0x00, 0x00], &[0x00]),
        case(&[0xff], &[0x01]),
        case(&[0x80], &[0x80]),
        case(&[0xff, 0x00], &[0x01, 0x00]),
        case(&[0xfe, 0xdc, 0xba], &[0x01, 0x23, 0x46])
    )]
    fn test_minimal_magnitude(raw: &[u8], expected: &[u8]) {
        assert_eq!(expected, minimal_magnitude(raw).as_slice());
    }

    #[test]
    fn test_serial_hex_keeps_leading_zero_nibble() {
        let cert = Certificate {
            serial: vec![0x0a, 0x01],
            subject: String::new(),
            issuer: String::new(),
            not_before: String::new(),
            not_after: String::new(),
        };
        assert_eq!("0A01", cert.serial_number_hex());
    }
}
