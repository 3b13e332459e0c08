use clap::Args;
use pkcs::classify::classify_private_key;

use crate::error::Result;
use crate::output::OutputFormat;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Private key file: bare base64 or PEM (`-` for stdin)
    #[arg(short, long)]
    file: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let content = read_input(&config.file)?;
    // Unknown is a result here, not an error
    let format = classify_private_key(&content);

    match config.output {
        OutputFormat::Text => {
            println!("file {} format is: {}", config.file, format);
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "file": config.file,
                "format": format,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}
