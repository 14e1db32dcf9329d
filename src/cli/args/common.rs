//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - coloured progress lines and tables
    #[default]
    Pretty,
    /// JSON format - structured for scripts
    Json,
}
