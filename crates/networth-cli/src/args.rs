use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "networth")]
#[command(about = "Track salary, savings, assets and liabilities by section", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $NETWORTH_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive section view
    Tui {
        /// Initial fragment, e.g. "#trends"
        #[arg(long)]
        fragment: Option<String>,
    },

    /// Resolve fragments without a terminal UI and print the final state
    Route {
        /// First fragment initializes the router, the rest are link activations.
        /// Without fragments the configured start fragment is used.
        #[arg(allow_hyphen_values = true)]
        fragments: Vec<String>,
    },

    /// List registered sections
    Sections,

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write the default config file
    Init {
        #[arg(long)]
        force: bool,
    },

    /// Print the effective config
    Show,
}
