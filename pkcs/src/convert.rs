//! PKCS#1 <-> PKCS#8 conversion of RSA private keys.

use pem::{Label, Pem};
use rsa::RsaPrivateKey;
use rsa::pkcs1::{ALGORITHM_OID, DecodeRsaPrivateKey, EncodeRsaPrivateKey};
use rsa::pkcs8::{EncodePrivateKey, PrivateKeyInfo};
use tracing::debug;

use crate::der::extract_der;
use crate::error::{ConversionError, Error, Result};
use crate::types::KeyFormat;

/// Re-encode a PKCS#8 RSA private key as PKCS#1 (`RSA PRIVATE KEY`).
///
/// Fails with [`ConversionError::NonRsaKey`] when the PKCS#8 algorithm is
/// not `rsaEncryption`.
pub fn pkcs8_to_pkcs1(input: &[u8]) -> Result<String> {
    let der = extract_der(input)?;
    let info = PrivateKeyInfo::try_from(der.as_slice())
        .map_err(ConversionError::Pkcs8)?;
    if info.algorithm.oid != ALGORITHM_OID {
        return Err(ConversionError::NonRsaKey {
            oid: info.algorithm.oid.to_string(),
        }
        .into());
    }

    let key = RsaPrivateKey::try_from(info).map_err(ConversionError::Pkcs8)?;
    let pkcs1 = key.to_pkcs1_der().map_err(ConversionError::Pkcs1)?;
    debug!(len = pkcs1.as_bytes().len(), "encoded PKCS#1 private key");
    Ok(Pem::from_der(Label::RSAPrivateKey, pkcs1.as_bytes()).to_string())
}

/// Re-encode a PKCS#1 RSA private key as PKCS#8 (`PRIVATE KEY`).
pub fn pkcs1_to_pkcs8(input: &[u8]) -> Result<String> {
    let der = extract_der(input)?;
    let key = RsaPrivateKey::from_pkcs1_der(&der).map_err(ConversionError::Pkcs1)?;
    let pkcs8 = key.to_pkcs8_der().map_err(ConversionError::Pkcs8)?;
    debug!(len = pkcs8.as_bytes().len(), "encoded PKCS#8 private key");
    Ok(Pem::from_der(Label::PrivateKey, pkcs8.as_bytes()).to_string())
}

/// Convert `input` so that it is encoded as `target`.
pub fn convert(target: KeyFormat, input: &[u8]) -> Result<String> {
    match target {
        KeyFormat::Pkcs1 => pkcs8_to_pkcs1(input),
        KeyFormat::Pkcs8 => pkcs1_to_pkcs8(input),
        KeyFormat::Unknown => Err(Error::UnknownFormat),
    }
}
