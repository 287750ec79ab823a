//! CLI definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod commands;

/// Reconcile param row names between Paramdex and Smithbox
#[derive(Parser, Debug)]
#[command(name = "rowsync", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the Smithbox checkout
    #[arg(long, global = true, env = "ROWSYNC_SMITHBOX")]
    pub smithbox: Option<PathBuf>,

    /// Path to the Paramdex checkout
    #[arg(long, global = true, env = "ROWSYNC_PARAMDEX")]
    pub paramdex: Option<PathBuf>,

    /// Only process the given game (may be passed multiple times)
    #[arg(long = "game", global = true, value_name = "GAME")]
    pub games: Vec<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read and merge everything without writing any files
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (no output except errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy Paramdex row names into Smithbox
    ToSmithbox(SyncArgs),

    /// Copy Smithbox row names and schema definitions into Paramdex
    ToParamdex(ToParamdexArgs),

    /// Show which params each store has names for
    Status,

    /// Print version information
    Version,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options shared by both sync directions.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct SyncArgs {
    /// Replace names the target already has instead of only filling blanks
    #[arg(long)]
    pub overwrite: bool,
}

/// Options for syncing into Paramdex.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct ToParamdexArgs {
    #[command(flatten)]
    pub sync: SyncArgs,

    /// Don't copy Defs/Tdfs files that Paramdex is missing
    #[arg(long)]
    pub skip_defs: bool,
}

/// Supported shells for completions.
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}
