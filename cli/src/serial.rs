use clap::Args;
use x509::Certificate;

use crate::error::Result;
use crate::output::OutputFormat;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// PEM certificate file (`-` for stdin)
    #[arg(short, long)]
    file: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let content = read_input(&config.file)?;
    let cert = Certificate::from_pem(&content)?;

    match config.output {
        OutputFormat::Text => {
            println!("{}", cert.serial_number_hex());
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "serial": cert.serial_number_hex(),
                "subject": cert.subject(),
                "issuer": cert.issuer(),
                "not_before": cert.not_before(),
                "not_after": cert.not_after(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}
