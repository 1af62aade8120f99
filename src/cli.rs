use clap::Parser;
use pnpm_descendants::application::dto::OutputFormat;
use std::path::PathBuf;

/// Generate node_modules path patterns from the dependency trees in a pnpm lockfile
#[derive(Parser, Debug)]
#[command(name = "pnpm-descendants")]
#[command(version)]
#[command(
    about = "Generate node_modules path patterns from the dependency trees in a pnpm lockfile",
    long_about = None
)]
pub struct Args {
    /// Root packages whose descendants form a single group named "default"
    /// (bare names like "react" or version-qualified like "react@18.2.0").
    /// Overrides the groups of the config file.
    #[arg(value_name = "ROOT")]
    pub roots: Vec<String>,

    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Config file path (defaults to pnpm-descendants.config.yml in the project directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// List the package snapshots claimed by each group (text format)
    #[arg(short, long)]
    pub list: bool,

    /// Module identifier to classify against the groups.
    /// Can be specified multiple times: -m src/a.ts -m node_modules/react/index.js
    #[arg(short, long = "match", value_name = "MODULE_ID")]
    pub matches: Vec<String>,

    /// Suppress progress messages (warnings and errors are still shown)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
