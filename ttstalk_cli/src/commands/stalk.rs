//! The `stalk` subcommand: one-shot lookup and display of a profile.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::Args;
use ttstalk_lib::{avatar, export, validation, Client, HistoryStore, ProfileRecord};

use crate::output;

#[derive(Args)]
pub struct StalkArgs {
    /// Handle to look up, with or without a leading @
    pub handle: String,

    /// Export the record: json or csv
    #[arg(long)]
    pub export: Option<String>,

    /// Download the profile avatar image
    #[arg(long)]
    pub avatar: bool,

    /// Directory for exports and avatar downloads
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub async fn run(args: &StalkArgs) -> Result<()> {
    let handle = validation::validate_handle(&args.handle)?;
    let client = Client::new()?;

    let record = match client.stalk(&handle).await {
        Ok(record) => record,
        Err(e) => bail!(output::describe_fetch_error(&handle, &e)),
    };

    output::print_profile(&record);
    HistoryStore::new().append(&record);

    if let Some(format) = &args.export {
        export_record(&record, format, args.output.as_deref())?;
    }

    if args.avatar {
        let dir = args
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(avatar::DEFAULT_AVATAR_DIR));
        match avatar::download_avatar(&client, &record, &dir).await {
            Some(path) => println!("Avatar saved to {}", path.display()),
            None => println!("Avatar download failed."),
        }
    }

    Ok(())
}

fn export_record(record: &ProfileRecord, format: &str, dir: Option<&Path>) -> Result<()> {
    let written = match format {
        "json" => export::export_json(record, target_path(dir, "json").as_deref()),
        "csv" => export::export_csv(record, target_path(dir, "csv").as_deref()),
        other => bail!("unknown export format '{}', expected json or csv", other),
    };
    match written {
        Some(path) => println!("Exported to {}", path.display()),
        None => println!("Export failed."),
    }
    Ok(())
}

/// With `--output <dir>`, exports keep their timestamp-derived filename
/// but land inside the directory.
fn target_path(dir: Option<&Path>, ext: &str) -> Option<PathBuf> {
    let dir = dir?;
    let stamp = chrono::Local::now().format("%Y-%m-%dT%H-%M-%S");
    Some(dir.join(format!("ttstalk_{}.{}", stamp, ext)))
}
