//! refpaste - Deliver code references to the terminal pane running your AI coding agent

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use refpaste::cli::{self, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("REFPASTE_DEBUG").is_ok() {
        // stderr keeps stdout clean for the `send` fallback
        tracing_subscriber::fmt()
            .with_env_filter("refpaste=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Send(args) => cli::send::run(args).await,
        Commands::Find(args) => cli::find::run(args).await,
        Commands::Children(args) => cli::children::run(args).await,
        Commands::Panes(args) => cli::panes::run(args).await,
        Commands::Config { command } => cli::config::run(command),
        Commands::Completion { shell } => {
            generate(shell, &mut Cli::command(), "refpaste", &mut std::io::stdout());
            Ok(())
        }
    }
}
