//! CLI command implementations

pub mod children;
pub mod config;
pub mod definition;
pub mod find;
pub mod panes;
pub mod send;

pub use definition::{Cli, Commands};

use anyhow::Result;

use crate::config::Config;
use crate::terminal::TargetPattern;

/// Targets given on the command line win over the configured list
pub fn resolve_targets(cli_targets: &[String], config: &Config) -> Result<Vec<TargetPattern>> {
    if cli_targets.is_empty() {
        config.target_patterns()
    } else {
        Ok(TargetPattern::parse_all(cli_targets)?)
    }
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max <= 3 {
        s.chars().take(max).collect()
    } else {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    }
}
