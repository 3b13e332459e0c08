//! RSA key material reformatting.
//!
//! This crate turns raw key bytes into canonical PEM text and moves RSA
//! private keys between the PKCS#1 and PKCS#8 encodings:
//!
//! ```text
//! input bytes -> der::extract_der -> classify -> format / convert -> PEM text
//! ```
//!
//! Input may be PEM-wrapped, bare base64 (with or without line breaks), and
//! every entry point accepts both forms. All ASN.1 work is done by the
//! RustCrypto `rsa`, `pkcs1` and `pkcs8` crates.
//!
//! # Example
//!
//! ```no_run
//! use pkcs::{KeyFormat, KeyKind, classify, convert, format};
//!
//! let input = std::fs::read("private.pem").unwrap();
//! match classify::classify_private_key(&input) {
//!     KeyFormat::Pkcs8 => print!("{}", convert::pkcs8_to_pkcs1(&input).unwrap()),
//!     KeyFormat::Pkcs1 => print!("{}", convert::pkcs1_to_pkcs8(&input).unwrap()),
//!     KeyFormat::Unknown => eprintln!("unrecognized key"),
//! }
//!
//! let body = b"MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8A...";
//! let pem = format::format_key(KeyKind::PublicKey, KeyFormat::Pkcs8, body).unwrap();
//! ```

#![forbid(unsafe_code)]

pub mod classify;
pub mod convert;
pub mod der;
pub mod error;
pub mod format;
mod types;

pub use error::{ConversionError, DecodeError, Error, Result};
pub use types::{KeyFormat, KeyKind};
