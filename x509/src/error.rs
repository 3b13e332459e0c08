use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("certificate input is not valid UTF-8 text")]
    NotText,
    #[error("certificate failed to load: {0}")]
    Pem(#[from] pem::error::Error),
    #[error("invalid certificate: {0}")]
    InvalidCertificate(String),
    #[error("invalid certificate: {0} trailing bytes after the certificate")]
    TrailingData(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
