//! `refpaste send` command implementation

use anyhow::Result;
use clap::Args;
use tracing::debug;

use crate::config::Config;
use crate::process::SystemProcessEnumerator;
use crate::terminal::TerminalMatcher;
use crate::tmux;

#[derive(Args)]
pub struct SendArgs {
    /// Text to deliver
    text: String,

    /// Application to look for; repeatable, overrides the configured list
    #[arg(short, long = "target", value_name = "APP")]
    targets: Vec<String>,
}

pub async fn run(args: SendArgs) -> Result<()> {
    let config = Config::load()?;

    if let Some(pane) = try_deliver(&config, &args).await? {
        eprintln!("Sent to {}", pane);
        return Ok(());
    }

    // Fallback: hand the text back to the caller, e.g. `| pbcopy`
    print!("{}", args.text);
    Ok(())
}

/// Deliver into the first matching pane, returning its label on success
async fn try_deliver(config: &Config, args: &SendArgs) -> Result<Option<String>> {
    if args.targets.is_empty() && !config.is_auto_paste_enabled() {
        debug!("Auto paste disabled or no target applications configured");
        return Ok(None);
    }

    let patterns = super::resolve_targets(&args.targets, config)?;
    let panes = tmux::list_panes().await;
    let matcher =
        TerminalMatcher::new(SystemProcessEnumerator::with_timeout(config.enumeration_timeout()));

    let Some(pane) = matcher.find_matching_terminal(&panes, &patterns).await else {
        debug!(panes = panes.len(), "No pane runs a target application");
        return Ok(None);
    };

    if matcher.deliver(pane, &args.text).await {
        Ok(Some(pane.label()))
    } else {
        Ok(None)
    }
}
