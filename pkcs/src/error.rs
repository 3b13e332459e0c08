use thiserror::Error;

/// Failure to turn input bytes into DER.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("PEM: {0}")]
    Pem(#[from] pem::error::Error),

    #[error("base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("input is not valid UTF-8 text")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Failure while moving a key between PKCS#1 and PKCS#8.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("found non-RSA key in PKCS#8 encoding (algorithm {oid})")]
    NonRsaKey { oid: String },

    #[error("PKCS#1: {0}")]
    Pkcs1(rsa::pkcs1::Error),

    #[error("PKCS#8: {0}")]
    Pkcs8(rsa::pkcs8::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("unknown key format")]
    UnknownFormat,
}

impl From<pem::error::Error> for Error {
    fn from(e: pem::error::Error) -> Self {
        Error::Decode(e.into())
    }
}

impl From<base64::DecodeError> for Error {
    fn from(e: base64::DecodeError) -> Self {
        Error::Decode(e.into())
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(e: std::str::Utf8Error) -> Self {
        Error::Decode(e.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
