//! Key-format detection by ordered trial decoding.
//!
//! Each table below lists `(format, probe)` pairs. Probes run in order and the
//! first one that accepts the DER wins. A rejected probe is a negative
//! answer, never an error, so classification is total over any input.

use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs8::{PrivateKeyInfo, SubjectPublicKeyInfoRef};
use rsa::{RsaPrivateKey, RsaPublicKey};
use tracing::debug;

use crate::der::extract_der;
use crate::types::KeyFormat;

type Probe = fn(&[u8]) -> bool;

/// PKCS#1 is tried before PKCS#8.
const PRIVATE_KEY_PROBES: [(KeyFormat, Probe); 2] = [
    (KeyFormat::Pkcs1, probe_pkcs1_private_key),
    (KeyFormat::Pkcs8, probe_pkcs8_private_key),
];

const PUBLIC_KEY_PROBES: [(KeyFormat, Probe); 2] = [
    (KeyFormat::Pkcs1, probe_pkcs1_public_key),
    (KeyFormat::Pkcs8, probe_spki_public_key),
];

/// Detect whether `input` holds a PKCS#1 or PKCS#8 private key.
///
/// A PKCS#8 key wrapping a non-RSA algorithm still classifies as
/// [`KeyFormat::Pkcs8`].
pub fn classify_private_key(input: &[u8]) -> KeyFormat {
    classify(input, &PRIVATE_KEY_PROBES)
}

/// Detect whether `input` holds a PKCS#1 `RSAPublicKey` or a
/// `SubjectPublicKeyInfo`.
pub fn classify_public_key(input: &[u8]) -> KeyFormat {
    classify(input, &PUBLIC_KEY_PROBES)
}

/// True iff `input` is a PKIX `SubjectPublicKeyInfo` of any algorithm.
pub fn is_public_key(input: &[u8]) -> bool {
    match extract_der(input) {
        Ok(der) => probe_spki_public_key(&der),
        Err(e) => {
            debug!(error = %e, "input is not decodable");
            false
        }
    }
}

fn classify(input: &[u8], probes: &[(KeyFormat, Probe)]) -> KeyFormat {
    let der = match extract_der(input) {
        Ok(der) => der,
        Err(e) => {
            debug!(error = %e, "input is not decodable");
            return KeyFormat::Unknown;
        }
    };

    for (format, probe) in probes {
        if probe(&der) {
            debug!(%format, "key format detected");
            return *format;
        }
        debug!(%format, "probe rejected input");
    }
    KeyFormat::Unknown
}

fn probe_pkcs1_private_key(der: &[u8]) -> bool {
    RsaPrivateKey::from_pkcs1_der(der).is_ok()
}

fn probe_pkcs8_private_key(der: &[u8]) -> bool {
    PrivateKeyInfo::try_from(der).is_ok()
}

fn probe_pkcs1_public_key(der: &[u8]) -> bool {
    RsaPublicKey::from_pkcs1_der(der).is_ok()
}

fn probe_spki_public_key(der: &[u8]) -> bool {
    SubjectPublicKeyInfoRef::try_from(der).is_ok()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const PKCS1_PEM: &str = include_str!("../../testdata/pkcs1.pem");
    const PKCS1_BODY: &str = include_str!("../../testdata/no_format_pkcs1.txt");
    const PKCS8_PEM: &str = include_str!("../../testdata/pkcs8.pem");
    const PKCS8_BODY: &str = include_str!("../../testdata/no_format_pkcs8.txt");
    const EC_PKCS8_PEM: &str = include_str!("../../testdata/ec_pkcs8.pem");
    const SPKI_PEM: &str = include_str!("../../testdata/public_key.pem");
    const SPKI_BODY: &str = include_str!("../../testdata/no_format_public_key.txt");
    const RSA_PUBLIC_PEM: &str = include_str!("../../testdata/rsa_public_key.pem");
    const CERT_PEM: &str = include_str!("../../testdata/cert.pem");

    #[rstest(
        input,
        expected,
        case(PKCS1_PEM, KeyFormat::Pkcs1),
        case(PKCS1_BODY, KeyFormat::Pkcs1),
        case(PKCS8_PEM, KeyFormat::Pkcs8),
        case(PKCS8_BODY, KeyFormat::Pkcs8),
        case(EC_PKCS8_PEM, KeyFormat::Pkcs8),
        case(SPKI_PEM, KeyFormat::Unknown),
        case(CERT_PEM, KeyFormat::Unknown),
        case("", KeyFormat::Unknown),
        case("definitely not a key", KeyFormat::Unknown)
    )]
    fn test_classify_private_key(input: &str, expected: KeyFormat) {
        assert_eq!(expected, classify_private_key(input.as_bytes()));
    }

    #[rstest(
        input,
        expected,
        case(SPKI_PEM, KeyFormat::Pkcs8),
        case(SPKI_BODY, KeyFormat::Pkcs8),
        case(RSA_PUBLIC_PEM, KeyFormat::Pkcs1),
        case(PKCS1_PEM, KeyFormat::Unknown),
        case(PKCS8_PEM, KeyFormat::Unknown)
    )]
    fn test_classify_public_key(input: &str, expected: KeyFormat) {
        assert_eq!(expected, classify_public_key(input.as_bytes()));
    }

    #[rstest(
        input,
        expected,
        case(SPKI_PEM, true),
        case(SPKI_BODY, true),
        case(RSA_PUBLIC_PEM, false),
        case(PKCS1_PEM, false),
        case(PKCS8_PEM, false),
        case("@@@", false)
    )]
    fn test_is_public_key(input: &str, expected: bool) {
        assert_eq!(expected, is_public_key(input.as_bytes()));
    }

    #[test]
    fn test_classify_non_utf8_is_unknown() {
        assert_eq!(KeyFormat::Unknown, classify_private_key(&[0xff, 0xfe, 0x00]));
        assert!(!is_public_key(&[0xff, 0xfe, 0x00]));
    }
}
