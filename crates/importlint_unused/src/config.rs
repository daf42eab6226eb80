use clap::{Args, ValueEnum};
use importlint_core::{DEFAULT_EXTENSION, DEFAULT_ROOT};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per finding followed by the heuristic note
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Root directory to scan
    #[arg(long, default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Extension of the source files to scan
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Skip files that cannot be read as UTF-8 instead of aborting
    #[arg(long)]
    pub skip_unreadable: bool,

    /// Exit with status 1 when likely-unused imports are found
    #[arg(long)]
    pub fail_on_findings: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            extension: DEFAULT_EXTENSION.to_string(),
            format: OutputFormat::default(),
            skip_unreadable: false,
            fail_on_findings: false,
        }
    }
}
