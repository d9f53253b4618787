//! Release artifacts for refpaste: CLI reference and shell completions

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use refpaste::cli::Cli;

const BIN_NAME: &str = "refpaste";
const COMPLETION_SHELLS: [Shell; 4] = [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell];

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for refpaste")]
struct Xtask {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the refpaste CLI reference to markdown
    GenDocs {
        #[arg(long, default_value = "docs/cli")]
        out_dir: PathBuf,
    },

    /// Write refpaste completion scripts for every supported shell
    GenCompletions {
        #[arg(long, default_value = "docs/completions")]
        out_dir: PathBuf,
    },
}

fn main() -> io::Result<()> {
    match Xtask::parse().command {
        Commands::GenDocs { out_dir } => {
            let path = write_cli_reference(&out_dir)?;
            println!("Generated CLI reference at {}", path.display());
        }
        Commands::GenCompletions { out_dir } => {
            for path in write_completions(&out_dir)? {
                println!("Generated {}", path.display());
            }
        }
    }
    Ok(())
}

fn write_cli_reference(out_dir: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join("reference.md");
    fs::write(&path, clap_markdown::help_markdown::<Cli>())?;
    Ok(path)
}

fn write_completions(out_dir: &Path) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;
    let mut command = Cli::command();
    COMPLETION_SHELLS
        .iter()
        .map(|&shell| clap_complete::generate_to(shell, &mut command, BIN_NAME, out_dir))
        .collect()
}
