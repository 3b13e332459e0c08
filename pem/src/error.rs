use base64::DecodeError;
use thiserror::Error;

/// Errors raised while parsing a PEM block or decoding its body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No `-----BEGIN <label>-----` line was found
    #[error("missing a pre encapsulation boundary")]
    MissingPreEncapsulationBoundary,

    /// The block is never closed by `-----END <label>-----`
    #[error("missing a post encapsulation boundary")]
    MissingPostEncapsulationBoundary,

    #[error("missing PEM data")]
    MissingData,

    /// A boundary line carries text that is not an RFC 7468 label
    #[error("invalid label")]
    InvalidLabel,

    /// BEGIN and END carry different labels
    #[error("label doesn't match")]
    LabelMissMatch,

    /// A body line holds a character outside the base64 alphabet
    #[error("invalid base64line")]
    InvalidBase64Line,

    /// `=` padding is followed by data or is longer than two characters
    #[error("invalid base64finl")]
    InvalidBase64Finl,

    #[error("base64 decode: {0}")]
    Base64Decode(DecodeError),
}
