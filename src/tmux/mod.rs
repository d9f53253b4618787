//! tmux integration: panes are the terminals refpaste delivers into

mod pane;

pub use pane::TmuxPane;

use tokio::process::Command;
use tracing::debug;

const LIST_PANES_FORMAT: &str = "#{pane_id}\t#{session_name}\t#{window_index}\t#{pane_pid}";

pub async fn is_tmux_available() -> bool {
    Command::new("tmux").arg("-V").output().await.is_ok()
}

/// All panes of the running tmux server, in tmux's order.
/// Returns an empty list when tmux is missing or no server is running.
pub async fn list_panes() -> Vec<TmuxPane> {
    let output = Command::new("tmux")
        .args(["list-panes", "-a", "-F", LIST_PANES_FORMAT])
        .output()
        .await;

    match output {
        Ok(out) if out.status.success() => parse_pane_list(&String::from_utf8_lossy(&out.stdout)),
        Ok(out) => {
            debug!(
                stderr = %String::from_utf8_lossy(&out.stderr).trim(),
                "tmux list-panes failed"
            );
            Vec::new()
        }
        Err(err) => {
            debug!(error = %err, "Failed to run tmux");
            Vec::new()
        }
    }
}

fn parse_pane_list(output: &str) -> Vec<TmuxPane> {
    output.lines().filter_map(parse_pane_line).collect()
}

fn parse_pane_line(line: &str) -> Option<TmuxPane> {
    let mut fields = line.split('\t');
    let id = fields.next()?.trim();
    let session_name = fields.next()?;
    let window_index = fields.next()?.trim().parse().ok()?;
    let pane_pid = fields
        .next()
        .and_then(|pid| pid.trim().parse::<u32>().ok())
        .filter(|&pid| pid > 0);

    if !id.starts_with('%') {
        return None;
    }

    Some(TmuxPane {
        id: id.to_string(),
        session_name: session_name.to_string(),
        window_index,
        pane_pid,
    })
}
