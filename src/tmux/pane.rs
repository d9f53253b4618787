//! A tmux pane as a deliverable terminal

use serde::Serialize;
use tokio::process::Command;
use tracing::debug;

use crate::terminal::{DeliveryError, Result, TerminalSession};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TmuxPane {
    /// Stable pane id such as `%3`, used as the `-t` target
    pub id: String,
    pub session_name: String,
    pub window_index: u32,
    /// Pid of the shell started in the pane, if tmux reported one
    pub pane_pid: Option<u32>,
}

impl TmuxPane {
    pub fn label(&self) -> String {
        format!("{}:{} ({})", self.session_name, self.window_index, self.id)
    }

    async fn tmux(&self, args: &[&str]) -> Result<()> {
        let output = Command::new("tmux").args(args).output().await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            if stderr.contains("can't find pane") {
                return Err(DeliveryError::SessionGone(self.id.clone()));
            }
            return Err(DeliveryError::CommandFailed(stderr));
        }

        Ok(())
    }
}

impl TerminalSession for TmuxPane {
    async fn root_pid(&self) -> Option<u32> {
        self.pane_pid
    }

    async fn send_text(&self, text: &str, execute: bool) -> Result<()> {
        // -l sends the text literally so key names like "Enter" are not interpreted
        self.tmux(&["send-keys", "-t", &self.id, "-l", "--", text])
            .await?;

        if execute {
            self.tmux(&["send-keys", "-t", &self.id, "Enter"]).await?;
        }

        Ok(())
    }

    async fn show(&self) -> Result<()> {
        self.tmux(&["select-window", "-t", &self.id]).await?;
        self.tmux(&["select-pane", "-t", &self.id]).await?;

        if std::env::var("TMUX").is_ok() {
            // Only meaningful from inside a tmux client
            if let Err(err) = self.tmux(&["switch-client", "-t", &self.id]).await {
                debug!(pane = %self.id, error = %err, "switch-client failed");
            }
        }

        Ok(())
    }
}
