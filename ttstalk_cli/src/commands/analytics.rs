//! The `analytics` subcommand: aggregates over the lookup history.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use ttstalk_lib::{analytics, export, HistoryStore};

use crate::output;

#[derive(Args)]
pub struct AnalyticsArgs {
    /// Export the summary: json
    #[arg(long)]
    pub export: Option<String>,

    /// Directory for exports
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &AnalyticsArgs) -> Result<()> {
    let entries = HistoryStore::new().list(None);
    if entries.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    let summary = analytics::summarize(&entries);
    output::print_summary(&summary);

    if let Some(format) = &args.export {
        if format != "json" {
            bail!("analytics can only be exported as json");
        }
        let target = args.output.as_ref().map(|dir| {
            let stamp = chrono::Local::now().format("%Y-%m-%dT%H-%M-%S");
            dir.join(format!("ttstalk_analytics_{}.json", stamp))
        });
        match export::export_json(&summary, target.as_deref()) {
            Some(path) => println!("Exported to {}", path.display()),
            None => println!("Export failed."),
        }
    }

    Ok(())
}
