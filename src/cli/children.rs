//! `refpaste children` command implementation

use anyhow::Result;
use clap::Args;

use crate::config::Config;
use crate::process::{ProcessEnumerator, ProcessRecord, SystemProcessEnumerator};

const TABLE_COL_PID: usize = 8;
const TABLE_COL_COMMAND: usize = 70;

#[derive(Args)]
pub struct ChildrenArgs {
    /// Parent process id
    pid: u32,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(args: ChildrenArgs) -> Result<()> {
    let config = Config::load()?;
    let enumerator = SystemProcessEnumerator::with_timeout(config.enumeration_timeout());
    let children = enumerator.child_processes(args.pid).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&children)?);
        return Ok(());
    }

    if children.is_empty() {
        println!("No child processes found for PID {}.", args.pid);
        return Ok(());
    }

    println!("{:<width$} COMMAND", "PID", width = TABLE_COL_PID);
    for record in &children {
        print_row(record);
    }

    Ok(())
}

fn print_row(record: &ProcessRecord) {
    println!(
        "{:<width$} {}",
        record.pid,
        super::truncate(&record.command_line, TABLE_COL_COMMAND),
        width = TABLE_COL_PID
    );
}
