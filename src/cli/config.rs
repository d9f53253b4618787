//! `refpaste config` command implementation

use anyhow::{bail, Result};
use clap::Subcommand;

use crate::config::{config_path, save_config, Config};

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,

    /// Print the path of the configuration file
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigCommands::Path => {
            println!("{}", config_path()?.display());
        }
        ConfigCommands::Init { force } => {
            let path = init(force)?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

fn init(force: bool) -> Result<std::path::PathBuf> {
    let path = config_path()?;
    if path.exists() && !force {
        bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }
    save_config(&Config::default())?;
    Ok(path)
}
