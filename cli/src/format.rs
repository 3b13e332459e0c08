use clap::Args;
use pkcs::classify::{classify_private_key, classify_public_key, is_public_key};
use pkcs::format::format_key;
use pkcs::{KeyFormat, KeyKind};
use tracing::debug;

use crate::error::{Error, Result};
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Key file: bare base64 or PEM (`-` for stdin)
    #[arg(short, long)]
    file: String,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let content = read_input(&config.file)?;

    let (kind, format) = if is_public_key(&content) {
        (KeyKind::PublicKey, KeyFormat::Pkcs8)
    } else if classify_public_key(&content) == KeyFormat::Pkcs1 {
        (KeyKind::PublicKey, KeyFormat::Pkcs1)
    } else {
        (KeyKind::PrivateKey, classify_private_key(&content))
    };
    debug!(?kind, %format, "formatting key");

    let pem = format_key(kind, format, &content).map_err(Error::Format)?;
    print!("{}", pem);
    if !pem.ends_with('\n') {
        println!();
    }
    Ok(())
}
