//! Windows child process query
//!
//! `Win32_Process` filters by parent server-side. Only the image name is
//! emitted; the full command line would need a second property fetch per
//! process, so Windows records carry less detail than POSIX ones.

#![cfg_attr(not(windows), allow(dead_code))]

use tokio::process::Command;

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

pub(super) fn query_command(parent_pid: u32) -> Command {
    let mut command = Command::new("powershell");
    command.args([
        "-NoProfile",
        "-NonInteractive",
        "-Command",
        &query_script(parent_pid),
    ]);
    #[cfg(windows)]
    command.creation_flags(CREATE_NO_WINDOW);
    command
}

/// PowerShell pipeline emitting `<pid>,<image name>` per child
fn query_script(parent_pid: u32) -> String {
    format!(
        "Get-CimInstance Win32_Process -Filter 'ParentProcessId={}' | \
         ForEach-Object {{ \"$($_.ProcessId),$($_.Name)\" }}",
        parent_pid
    )
}
