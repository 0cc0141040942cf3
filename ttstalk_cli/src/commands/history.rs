//! The `history` and `clear-history` subcommands.

use anyhow::Result;
use clap::Args;
use ttstalk_lib::HistoryStore;

use crate::output;

#[derive(Args)]
pub struct HistoryArgs {
    /// Case-insensitive substring filter over handle and nickname
    #[arg(long)]
    pub search: Option<String>,
}

pub fn run(args: &HistoryArgs) -> Result<()> {
    let entries = HistoryStore::new().list(args.search.as_deref());
    output::print_history(&entries);
    Ok(())
}

pub fn clear() -> Result<()> {
    HistoryStore::new().clear();
    println!("History cleared.");
    Ok(())
}
