#[derive(Clone, Copy, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Plain text, one value per line
    Text,
    /// JSON object
    Json,
}
