//! Child process enumeration
//!
//! Each platform strategy reduces its OS query to the same line contract,
//! `<pid>,<command line>`, which [`parse_child_output`] turns into records.
//! Nothing is cached: every call reads a fresh snapshot of the process table.

mod error;
mod posix;
mod windows;

pub use error::{EnumerationError, Result};

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use tokio::process::Command;
use tracing::debug;

/// Upper bound for a single OS process query
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(2);

/// One process as reported by a single enumeration call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessRecord {
    pub pid: u32,
    /// Full invocation on POSIX, image name only on Windows
    pub command_line: String,
}

/// Source of immediate child processes for a pid.
///
/// Implementations never fail outward: a query that cannot be answered
/// yields an empty list.
pub trait ProcessEnumerator {
    fn child_processes(
        &self,
        parent_pid: u32,
    ) -> impl Future<Output = Vec<ProcessRecord>> + Send;
}

/// Enumerates children by shelling out to the platform's process tools
#[derive(Debug, Clone)]
pub struct SystemProcessEnumerator {
    timeout: Duration,
}

impl SystemProcessEnumerator {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_QUERY_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for SystemProcessEnumerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessEnumerator for SystemProcessEnumerator {
    async fn child_processes(&self, parent_pid: u32) -> Vec<ProcessRecord> {
        collapse_failure(parent_pid, query_platform(parent_pid, self.timeout).await)
    }
}

cfg_if::cfg_if! {
    if #[cfg(windows)] {
        async fn query_platform(parent_pid: u32, timeout: Duration) -> Result<String> {
            run_query(windows::query_command(parent_pid), timeout).await
        }
    } else if #[cfg(unix)] {
        async fn query_platform(parent_pid: u32, timeout: Duration) -> Result<String> {
            let ps_output = run_query(posix::query_command(), timeout).await?;
            Ok(posix::filter_children(&ps_output, parent_pid))
        }
    } else {
        async fn query_platform(_parent_pid: u32, _timeout: Duration) -> Result<String> {
            Err(EnumerationError::Unsupported(std::env::consts::OS))
        }
    }
}

/// Turn a query result into records, logging and discarding any failure
fn collapse_failure(parent_pid: u32, result: Result<String>) -> Vec<ProcessRecord> {
    match result {
        Ok(output) => parse_child_output(&output),
        Err(err) => {
            debug!(parent_pid, error = %err, "Failed to get child processes");
            Vec::new()
        }
    }
}

/// Run an OS query under `timeout`, returning stdout on a zero exit status
async fn run_query(mut command: Command, timeout: Duration) -> Result<String> {
    command.kill_on_drop(true);

    let output = tokio::time::timeout(timeout, command.output())
        .await
        .map_err(|_| EnumerationError::TimedOut(timeout))??;

    if !output.status.success() {
        return Err(EnumerationError::CommandFailed {
            status: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Parse `<pid>,<command line>` lines.
///
/// Blank lines and lines whose first field is not a positive integer are
/// dropped. Everything after the first comma is the command line, commas
/// included.
pub fn parse_child_output(output: &str) -> Vec<ProcessRecord> {
    output
        .trim()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Option<ProcessRecord> {
    let line = line.trim_end();
    let mut fields = line.split(',');
    let pid: u32 = fields.next()?.trim().parse().ok()?;
    if pid == 0 {
        return None;
    }

    Some(ProcessRecord {
        pid,
        command_line: fields.collect::<Vec<_>>().join(","),
    })
}
