use thiserror::Error;

/// Every variant renders as `<action> err: <cause>`.
#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("read file err: {source} {path}")]
    ReadFile {
        path: String,
        source: std::io::Error,
    },

    #[error("parse certificate err: {0}")]
    Certificate(#[from] x509::Error),

    #[error("format err: {0}")]
    Format(#[source] pkcs::Error),

    #[error("convert err: {0}")]
    Convert(#[source] pkcs::Error),

    #[error("JSON serialization err: {0}")]
    Json(#[from] serde_json::Error),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;
