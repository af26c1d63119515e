//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Command-line interface for the FOFA search engine
///
/// Search internet-facing assets by domain, title, port and more.
///
/// Find your email and API key at: https://fofa.info/userInfo
#[derive(Parser, Debug)]
#[command(name = "fofa")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Account email (or set FOFA_EMAIL env var)
    #[arg(short = 'e', long, env = "FOFA_EMAIL", global = true)]
    pub email: Option<String>,

    /// API key (or set FOFA_KEY env var)
    #[arg(short = 'k', long, env = "FOFA_KEY", global = true, hide_env_values = true)]
    pub key: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Skip TLS certificate verification
    #[arg(long, global = true)]
    pub insecure: bool,

    /// API base URL
    #[arg(long, env = "FOFA_BASE_URL", global = true, hide = true)]
    pub base_url: Option<String>,

    /// Use this config file instead of the default location
    #[arg(long = "config", env = "FOFA_CONFIG", global = true, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search FOFA's asset database
    Search(SearchArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Search command
// ============================================================================

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// FOFA query (e.g., 'domain="example.com" && port="443"')
    pub query: String,

    /// Comma-separated fields to return, in column order
    #[arg(short, long, default_value = "domain,host,ip,port,title,country,city")]
    pub fields: String,

    /// Page number
    #[arg(short, long, default_value = "1")]
    pub page: u32,

    /// Print the reply body exactly as FOFA sent it
    #[arg(long)]
    pub raw: bool,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (email, key, output_format, insecure)
        key: String,

        /// Value to set
        value: String,
    },

    /// Print a single configuration value
    Get {
        /// Key to read
        key: String,
    },

    /// Show config file path
    Path,
}
