//! Normalizes key input into DER bytes.

use std::str::FromStr;

use base64::{Engine, engine::general_purpose::STANDARD};
use pem::{Pem, has_pem_prefix};
use tracing::trace;

use crate::error::Result;

/// Extract DER bytes from PEM text or bare base64.
///
/// Input starting with `-----BEGIN` is parsed as a PEM block and its payload
/// returned, whatever the label. Anything else is read as standard base64;
/// line breaks and surrounding whitespace are ignored.
pub fn extract_der(input: &[u8]) -> Result<Vec<u8>> {
    let text = std::str::from_utf8(input)?;
    if has_pem_prefix(input) {
        let pem = Pem::from_str(text)?;
        trace!(label = %pem.label(), "decoding PEM payload");
        return Ok(pem.to_der()?);
    }

    let body = text
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n'))
        .collect::<String>();
    let der = STANDARD.decode(body.trim())?;
    trace!(len = der.len(), "decoded bare base64 input");
    Ok(der)
}
