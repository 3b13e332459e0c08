pub mod error;

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
    sync::LazyLock,
};

use base64::{Engine, engine::general_purpose::STANDARD};
use error::Error;
use regex::Regex;

const PRIVATE_KEY_LABEL: &str = "PRIVATE KEY";
const ENCRYPTED_PRIVATE_KEY_LABEL: &str = "ENCRYPTED PRIVATE KEY";
const RSA_PRIVATE_KEY_LABEL: &str = "RSA PRIVATE KEY";
const EC_PRIVATE_KEY_LABEL: &str = "EC PRIVATE KEY";
const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";
const RSA_PUBLIC_KEY_LABEL: &str = "RSA PUBLIC KEY";
const CERTIFICATE_LABEL: &str = "CERTIFICATE";

/// Marker every pre-encapsulation boundary starts with.
pub const BEGIN_MARKER: &[u8] = b"-----BEGIN";

/// Body line width used by the canonical encoder (RFC 7468 section 2).
pub const LINE_WIDTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    /// PKCS#8 private key (non-encrypted)
    PrivateKey,
    /// PKCS#8 encrypted private key
    EncryptedPrivateKey,
    /// PKCS#1 RSA private key
    RSAPrivateKey,
    /// SEC1 EC private key
    ECPrivateKey,
    /// X.509 SubjectPublicKeyInfo
    PublicKey,
    /// PKCS#1 RSA public key
    RSAPublicKey,
    /// X.509 Certificate
    Certificate,
    /// Any other well-formed label, kept verbatim
    Other(String),
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::PrivateKey => write!(f, "{}", PRIVATE_KEY_LABEL),
            Label::EncryptedPrivateKey => write!(f, "{}", ENCRYPTED_PRIVATE_KEY_LABEL),
            Label::RSAPrivateKey => write!(f, "{}", RSA_PRIVATE_KEY_LABEL),
            Label::ECPrivateKey => write!(f, "{}", EC_PRIVATE_KEY_LABEL),
            Label::PublicKey => write!(f, "{}", PUBLIC_KEY_LABEL),
            Label::RSAPublicKey => write!(f, "{}", RSA_PUBLIC_KEY_LABEL),
            Label::Certificate => write!(f, "{}", CERTIFICATE_LABEL),
            Label::Other(label) => write!(f, "{}", label),
        }
    }
}

/*
label = [ labelchar *( ["-" / SP] labelchar ) ]
labelchar = %x21-2C / %x2E-7E
 */
static LABEL_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^(?:[!-,.-~](?:[- ]?[!-,.-~])*)?$"));

static BOUNDARY_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^-----(BEGIN|END) (.*)-----$"));

impl FromStr for Label {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = match s {
            PRIVATE_KEY_LABEL => Label::PrivateKey,
            ENCRYPTED_PRIVATE_KEY_LABEL => Label::EncryptedPrivateKey,
            RSA_PRIVATE_KEY_LABEL => Label::RSAPrivateKey,
            EC_PRIVATE_KEY_LABEL => Label::ECPrivateKey,
            PUBLIC_KEY_LABEL => Label::PublicKey,
            RSA_PUBLIC_KEY_LABEL => Label::RSAPublicKey,
            CERTIFICATE_LABEL => Label::Certificate,
            other => {
                let re = LABEL_RE.as_ref().map_err(|_| Error::InvalidLabel)?;
                if !re.is_match(other) {
                    return Err(Error::InvalidLabel);
                }
                Label::Other(other.to_string())
            }
        };
        Ok(label)
    }
}

impl Label {
    /// `-----BEGIN <label>-----`
    pub fn header(&self) -> String {
        format!("-----BEGIN {}-----", self)
    }

    /// `-----END <label>-----`
    pub fn footer(&self) -> String {
        format!("-----END {}-----", self)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Boundary {
    Begin(Label),
    End(Label),
}

impl Boundary {
    /// `Ok(None)` for a line that is not an encapsulation boundary.
    fn parse(line: &str) -> Result<Option<Boundary>, Error> {
        let re = BOUNDARY_RE.as_ref().map_err(|_| Error::InvalidLabel)?;
        let Some(captured) = re.captures(line.trim_end()) else {
            return Ok(None);
        };
        let (Some(kind), Some(label)) = (captured.get(1), captured.get(2)) else {
            return Ok(None);
        };
        let label = Label::from_str(label.as_str())?;
        Ok(Some(match kind.as_str() {
            "BEGIN" => Boundary::Begin(label),
            _ => Boundary::End(label),
        }))
    }
}

/// Returns true if `input` already starts with a pre-encapsulation boundary.
pub fn has_pem_prefix(input: &[u8]) -> bool {
    input.starts_with(BEGIN_MARKER)
}

/// Split `s` into lines of `width` characters, each terminated by `\n`.
///
/// Width is counted in Unicode code points, not bytes. The last line may be
/// shorter and is terminated the same way. An empty string yields an empty
/// string.
pub fn wrap_lines(s: &str, width: usize) -> String {
    let width = width.max(1);
    let mut wrapped = String::with_capacity(s.len() + s.len() / width + 1);
    let mut count = 0;
    for c in s.chars() {
        wrapped.push(c);
        count += 1;
        if count == width {
            wrapped.push('\n');
            count = 0;
        }
    }
    if count > 0 {
        wrapped.push('\n');
    }
    wrapped
}

/*
ref: https://www.rfc-editor.org/rfc/rfc7468.html#section-3
*/

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pem {
    label: Label,
    base64_data: String, // base64 encoded data
}

impl Pem {
    pub fn from_der(label: Label, der: &[u8]) -> Self {
        let base64_data = STANDARD.encode(der);
        Pem { label, base64_data }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn data(&self) -> &str {
        &self.base64_data
    }

    /// Decode the base64 body. The label is discarded.
    pub fn to_der(&self) -> Result<Vec<u8>, Error> {
        STANDARD.decode(self.data()).map_err(Error::Base64Decode)
    }
}

impl Display for Pem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // every line, the footer included, ends with a newline
        writeln!(f, "{}", self.label.header())?;
        write!(f, "{}", wrap_lines(&self.base64_data, LINE_WIDTH))?;
        writeln!(f, "{}", self.label.footer())
    }
}

impl FromStr for Pem {
    type Err = Error;

    /// Parse the first block of `s`.
    ///
    /// Lines before the `BEGIN` boundary are explanatory text and skipped.
    /// Spaces and tabs inside body lines are dropped and blank body lines
    /// ignored. `=` padding may only close the body.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines();
        let label = loop {
            let line = lines.next().ok_or(Error::MissingPreEncapsulationBoundary)?;
            match Boundary::parse(line)? {
                Some(Boundary::Begin(label)) => break label,
                Some(Boundary::End(_)) => return Err(Error::MissingPreEncapsulationBoundary),
                None => {}
            }
        };

        let mut body = Body::default();
        for line in lines {
            match Boundary::parse(line)? {
                Some(Boundary::End(end)) => {
                    if end != label {
                        return Err(Error::LabelMissMatch);
                    }
                    let base64_data = body.finish()?;
                    return Ok(Pem { label, base64_data });
                }
                Some(Boundary::Begin(_)) => return Err(Error::MissingPostEncapsulationBoundary),
                None => body.push_line(line)?,
            }
        }
        Err(Error::MissingPostEncapsulationBoundary)
    }
}

// base64text accumulated between the boundaries
#[derive(Debug, Default)]
struct Body {
    text: String,
    padding: usize,
}

impl Body {
    fn push_line(&mut self, line: &str) -> Result<(), Error> {
        for c in line.chars().filter(|c| !c.is_ascii_whitespace()) {
            match c {
                '=' => self.padding += 1,
                'A'..='Z' | 'a'..='z' | '0'..='9' | '+' | '/' if self.padding == 0 => {}
                'A'..='Z' | 'a'..='z' | '0'..='9' | '+' | '/' => {
                    return Err(Error::InvalidBase64Finl);
                }
                _ => return Err(Error::InvalidBase64Line),
            }
            self.text.push(c);
        }
        Ok(())
    }

    fn finish(self) -> Result<String, Error> {
        if self.text.is_empty() {
            return Err(Error::MissingData);
        }
        if self.padding > 2 {
            return Err(Error::InvalidBase64Finl);
        }
        Ok(self.text)
    }
}
