use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod convert;
mod error;
mod format;
mod info;
mod output;
mod serial;
mod utils;

use error::Result;

#[derive(Parser)]
#[command(name = "ktool")]
#[command(about = "RSA key and X.509 certificate formatting toolkit", long_about = None)]
struct Cli {
    /// Enable debug logging on stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Wrap a bare base64 key into a PEM block with the matching header
    Format {
        #[command(flatten)]
        config: format::Config,
    },
    /// Print the serial number of a PEM certificate
    Serial {
        #[command(flatten)]
        config: serial::Config,
    },
    /// Convert an RSA private key between PKCS#1 and PKCS#8
    Convert {
        #[command(flatten)]
        config: convert::Config,
    },
    /// Report whether a private key is PKCS#1 or PKCS#8
    Info {
        #[command(flatten)]
        config: info::Config,
    },
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Format { config } => format::execute(config),
        Commands::Serial { config } => serial::execute(config),
        Commands::Convert { config } => convert::execute(config),
        Commands::Info { config } => info::execute(config),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}
