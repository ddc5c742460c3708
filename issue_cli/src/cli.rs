use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "issuectl")]
#[command(
    author,
    version,
    about = "Classify HTTP statuses and exception types against the issue taxonomy"
)]
pub struct Cli {
    /// Directory holding issues.yaml and the two mapping tables (defaults to the bundled set)
    #[clap(long, global = true)]
    pub resources: Option<PathBuf>,

    /// Runtime configuration file (TOML)
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Refuse to load artifacts that fail the conformance check
    #[clap(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Print results as JSON
    #[clap(long, global = true, default_value_t = false)]
    pub json: bool,

    /// Increase log output (-v info, -vv debug)
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify an HTTP status such as "404" or "404 Not Found"
    Http {
        /// HTTP status code or status line
        status: String,
    },

    /// Classify an exception type identifier, falling back to UNSPECIFIED_ISSUE
    Exception {
        /// Fully-qualified exception type
        exception_type: String,
    },

    /// First HTTP status mapped to an issue name
    ReverseHttp {
        /// Issue name, e.g. VALIDATION_ISSUE
        issue_name: String,
    },

    /// First exception type mapped to an issue name
    ReverseException {
        /// Issue name, e.g. TIMEOUT_ISSUE
        issue_name: String,
    },

    /// Show description and category of an issue name
    Describe {
        /// Issue name, e.g. NETWORK_ISSUE
        issue_name: String,
    },

    /// Cross-check the taxonomy and mapping tables
    Check,

    /// Build an issue record for an HTTP status and print it as JSON
    IssueHttp {
        /// HTTP status code or status line
        status: String,

        /// Identifier of the reporting service
        #[clap(long)]
        service_id: String,

        /// Name of the reporting service
        #[clap(long)]
        service_name: String,
    },
}
