//! `refpaste find` command implementation

use anyhow::Result;
use clap::Args;

use crate::config::Config;
use crate::process::SystemProcessEnumerator;
use crate::terminal::TerminalMatcher;
use crate::tmux;

#[derive(Args)]
pub struct FindArgs {
    /// Application to look for; repeatable, overrides the configured list
    #[arg(short, long = "target", value_name = "APP")]
    targets: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(args: FindArgs) -> Result<()> {
    let config = Config::load()?;
    let patterns = super::resolve_targets(&args.targets, &config)?;

    if patterns.is_empty() {
        eprintln!("No target applications given.");
        eprintln!("Pass --target <APP> or set auto_paste.applications in the config file.");
        std::process::exit(1);
    }

    let panes = tmux::list_panes().await;
    let matcher =
        TerminalMatcher::new(SystemProcessEnumerator::with_timeout(config.enumeration_timeout()));

    match matcher.find_matching_terminal(&panes, &patterns).await {
        Some(pane) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(pane)?);
            } else {
                println!("{}", pane.label());
            }
            Ok(())
        }
        None => {
            if args.json {
                println!("null");
            } else {
                let names: Vec<_> = patterns.iter().map(|p| p.name()).collect();
                eprintln!("No tmux pane is running: {}", names.join(", "));
            }
            std::process::exit(1);
        }
    }
}
