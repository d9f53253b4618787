//! Command-line definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use super::children::ChildrenArgs;
use super::config::ConfigCommands;
use super::find::FindArgs;
use super::panes::PanesArgs;
use super::send::SendArgs;

#[derive(Parser)]
#[command(name = "refpaste")]
#[command(about = "Deliver code references to the terminal pane running your AI coding agent")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Type text into the pane running a target application, or print it
    Send(SendArgs),

    /// Show which pane runs a target application
    Find(FindArgs),

    /// List the immediate child processes of a pid
    Children(ChildrenArgs),

    /// List tmux panes and their shell pids
    Panes(PanesArgs),

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
