//! Canonical PEM wrapping of bare base64 key bodies.

use pem::{LINE_WIDTH, Label, has_pem_prefix, wrap_lines};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{KeyFormat, KeyKind};

/// Boundary label for every supported `(kind, format)` pair.
const LABELS: [((KeyKind, KeyFormat), Label); 4] = [
    ((KeyKind::PublicKey, KeyFormat::Pkcs1), Label::RSAPublicKey),
    ((KeyKind::PublicKey, KeyFormat::Pkcs8), Label::PublicKey),
    ((KeyKind::PrivateKey, KeyFormat::Pkcs1), Label::RSAPrivateKey),
    ((KeyKind::PrivateKey, KeyFormat::Pkcs8), Label::PrivateKey),
];

/// PEM label used for a key of `kind` encoded as `format`.
pub fn label_for(kind: KeyKind, format: KeyFormat) -> Result<Label> {
    LABELS
        .iter()
        .find(|(key, _)| *key == (kind, format))
        .map(|(_, label)| label.clone())
        .ok_or(Error::UnknownFormat)
}

/// Wrap a base64 key body into a PEM block.
///
/// Input that already starts with `-----BEGIN` is returned unchanged, even if
/// its wrapping is not canonical. Otherwise every `\r` and `\n` is removed,
/// the body is wrapped at 64 characters, and the header and footer for
/// `(kind, format)` are added. Each output line ends with `\n`.
///
/// [`KeyFormat::Unknown`] yields [`Error::UnknownFormat`].
pub fn format_key(kind: KeyKind, format: KeyFormat, input: &[u8]) -> Result<String> {
    let text = std::str::from_utf8(input)?;
    if has_pem_prefix(input) {
        debug!("input is already PEM, passing through");
        return Ok(text.to_string());
    }

    let label = label_for(kind, format)?;
    let body = text
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n'))
        .collect::<String>();

    let mut pem = String::with_capacity(body.len() + body.len() / LINE_WIDTH + 64);
    pem.push_str(&label.header());
    pem.push('\n');
    pem.push_str(&wrap_lines(&body, LINE_WIDTH));
    pem.push_str(&label.footer());
    pem.push('\n');
    Ok(pem)
}
