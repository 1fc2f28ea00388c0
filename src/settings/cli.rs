use super::Parser;

/// Standalone API server answering user and map requests from local state.
#[derive(Parser, Debug)]
pub struct Cli {
    /// Settings file, without or with the `.toml` extension.
    #[arg(long)]
    pub settings: Option<String>,
    /// Override the log filter from the settings file.
    #[arg(long)]
    pub log: Option<String>,
}
