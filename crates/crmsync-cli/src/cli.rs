use clap::{Parser, Subcommand, ValueEnum};
use crmsync_core::config::MAPPINGS_ENV;
use std::path::PathBuf;

/// CRM Mapping Synchronization Tool
///
/// Select CRM mappings by name or ALL and dispatch push (local to remote) or pull (remote to local) work for them
#[derive(Parser, Debug)]
#[command(name = "crmsync")]
#[command(about, long_about = None, version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Never prompt; missing arguments become errors
    #[arg(short = 'n', long, global = true)]
    pub no_interaction: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputMode,

    /// Use a specific mapping file
    #[arg(long, global = true, value_name = "PATH", env = MAPPINGS_ENV)]
    pub mappings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Push local records to the CRM for a mapping
    Push {
        /// Mapping name, or ALL for every push mapping
        selector: Option<String>,
    },

    /// Pull CRM records into local entities for a mapping
    Pull {
        /// Mapping name, or ALL for every pull mapping
        selector: Option<String>,
    },

    /// List configured mappings
    List {
        /// Only mappings supporting this direction
        #[arg(short, long, value_enum)]
        direction: Option<DirectionArg>,
    },

    /// Choose a remote object and list the mappings that target it
    Objects {
        /// Remote object type, e.g. Contact
        object: Option<String>,
    },
}

impl Commands {
    /// Subcommand name as typed on the command line
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Push { .. } => "push",
            Self::Pull { .. } => "pull",
            Self::List { .. } => "list",
            Self::Objects { .. } => "objects",
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputMode {
    /// Aligned columns
    Table,
    /// Pretty-printed JSON
    Json,
    /// Comma separated values
    Csv,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DirectionArg {
    /// Mappings that push local records out
    Push,
    /// Mappings that pull remote records in
    Pull,
}
