//! The `batch` subcommand: sequential lookups over a handle list.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Args;
use ttstalk_lib::{batch, export, validation, Client, HistoryStore};

use crate::output;

#[derive(Args)]
pub struct BatchArgs {
    /// Comma-separated handles, e.g. "alice,bob,carol"
    pub handles: String,

    /// Delay between requests in milliseconds
    #[arg(long, default_value = "2000")]
    pub delay: u64,

    /// Export the results: json or csv
    #[arg(long)]
    pub export: Option<String>,

    /// Directory for exports
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub async fn run(args: &BatchArgs) -> Result<()> {
    let handles = validation::parse_handle_list(&args.handles)?;
    let client = Client::new()?;
    let history = HistoryStore::new();

    let records = batch::run_batch(
        &client,
        &handles,
        Duration::from_millis(args.delay),
        Some(&history),
    )
    .await;

    println!("{} of {} lookups succeeded", records.len(), handles.len());
    output::print_batch(&records);

    if let Some(format) = &args.export {
        let target = args.output.as_ref().map(|dir| {
            let stamp = chrono::Local::now().format("%Y-%m-%dT%H-%M-%S");
            dir.join(format!("ttstalk_batch_{}.{}", stamp, format))
        });
        let written = match format.as_str() {
            "json" => export::export_json(&records, target.as_deref()),
            "csv" => export::export_batch_csv(&records, target.as_deref()),
            other => bail!("unknown export format '{}', expected json or csv", other),
        };
        match written {
            Some(path) => println!("Exported to {}", path.display()),
            None => println!("Export failed."),
        }
    }

    Ok(())
}
