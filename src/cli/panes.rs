//! `refpaste panes` command implementation

use anyhow::Result;
use clap::Args;

use crate::tmux::{self, TmuxPane};

const TABLE_COL_ID: usize = 6;
const TABLE_COL_SESSION: usize = 24;
const TABLE_COL_WINDOW: usize = 6;

#[derive(Args)]
pub struct PanesArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(args: PanesArgs) -> Result<()> {
    let panes = tmux::list_panes().await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&panes)?);
        return Ok(());
    }

    if panes.is_empty() {
        if !tmux::is_tmux_available().await {
            eprintln!("tmux is not installed or not in PATH.");
        } else {
            println!("No tmux panes found.");
        }
        return Ok(());
    }

    println!(
        "{:<width_id$} {:<width_session$} {:<width_window$} PID",
        "PANE",
        "SESSION",
        "WINDOW",
        width_id = TABLE_COL_ID,
        width_session = TABLE_COL_SESSION,
        width_window = TABLE_COL_WINDOW
    );
    for pane in &panes {
        print_row(pane);
    }

    Ok(())
}

fn print_row(pane: &TmuxPane) {
    let pid = pane
        .pane_pid
        .map(|p| p.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!(
        "{:<width_id$} {:<width_session$} {:<width_window$} {}",
        pane.id,
        super::truncate(&pane.session_name, TABLE_COL_SESSION),
        pane.window_index,
        pid,
        width_id = TABLE_COL_ID,
        width_session = TABLE_COL_SESSION,
        width_window = TABLE_COL_WINDOW
    );
}
