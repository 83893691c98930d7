//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};

/// Resolve CI inputs and forward them to docker compose
#[derive(Parser, Debug)]
#[command(name = "compose-action")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bring up the configured services (all if none given)
    Up,

    /// Tear down all services
    Down,

    /// Push service images
    Push,

    /// Print logs of the configured services
    Logs,

    /// Print logs, then tear down (end-of-job cleanup)
    Post,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,

    /// Show config file path
    Path,

    /// Create config template
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}
