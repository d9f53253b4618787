//! Linux/macOS child process query
//!
//! `ps` has no portable parent filter, so the whole table is listed and
//! filtered here.

#![cfg_attr(not(unix), allow(dead_code))]

use tokio::process::Command;

/// `ps` invocation listing every process as `ppid pid args`.
/// `-ww` keeps macOS from truncating long command lines.
pub(super) fn query_command() -> Command {
    let mut command = Command::new("ps");
    command.args(["-A", "-ww", "-o", "ppid=,pid=,args="]);
    command
}

/// Reduce raw `ps` rows to `<pid>,<args>` lines for children of `parent_pid`
pub(super) fn filter_children(ps_output: &str, parent_pid: u32) -> String {
    let mut lines = Vec::new();

    for row in ps_output.lines() {
        let Some((ppid, rest)) = split_field(row) else {
            continue;
        };
        let Some((pid, args)) = split_field(rest) else {
            continue;
        };

        if ppid.parse::<u32>().ok() != Some(parent_pid) {
            continue;
        }

        lines.push(format!("{},{}", pid, args.trim()));
    }

    lines.join("\n")
}

/// Split off the first whitespace-delimited field, keeping the remainder intact
fn split_field(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    Some((&s[..end], &s[end..]))
}
