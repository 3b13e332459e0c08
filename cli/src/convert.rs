use clap::{Args, ValueEnum};
use pkcs::KeyFormat;

use crate::error::{Error, Result};
use crate::utils::read_input;

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Target {
    /// `RSA PRIVATE KEY`
    Pkcs1,
    /// `PRIVATE KEY`
    Pkcs8,
}

impl From<Target> for KeyFormat {
    fn from(target: Target) -> Self {
        match target {
            Target::Pkcs1 => KeyFormat::Pkcs1,
            Target::Pkcs8 => KeyFormat::Pkcs8,
        }
    }
}

#[derive(Args)]
pub(crate) struct Config {
    /// Target encoding, e.g. `ktool convert -t pkcs1 -f private.pem`
    #[arg(short = 't', long = "to", value_enum, ignore_case = true)]
    to: Target,

    /// Private key file: bare base64 or PEM (`-` for stdin)
    #[arg(short, long)]
    file: String,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let content = read_input(&config.file)?;
    let pem = pkcs::convert::convert(config.to.into(), &content).map_err(Error::Convert)?;
    print!("{}", pem);
    Ok(())
}
