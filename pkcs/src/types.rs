use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// Encoding family of a key.
///
/// Never stored: it is recomputed from the bytes by [`crate::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KeyFormat {
    /// RSA-specific structure (`RSAPrivateKey` / `RSAPublicKey`)
    #[serde(rename = "PKCS1")]
    Pkcs1,
    /// Algorithm-tagged structure (`PrivateKeyInfo` / `SubjectPublicKeyInfo`)
    #[serde(rename = "PKCS8")]
    Pkcs8,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Display for KeyFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyFormat::Pkcs1 => write!(f, "PKCS1"),
            KeyFormat::Pkcs8 => write!(f, "PKCS8"),
            KeyFormat::Unknown => write!(f, "unknown"),
        }
    }
}

impl FromStr for KeyFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PKCS1" => Ok(KeyFormat::Pkcs1),
            "PKCS8" => Ok(KeyFormat::Pkcs8),
            _ => Err(Error::UnknownFormat),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    PublicKey,
    PrivateKey,
}
