mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ttstalk", version)]
#[command(about = "Fetch public TikTok profile data from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a single profile
    Stalk(commands::stalk::StalkArgs),
    /// Look up several profiles sequentially
    Batch(commands::batch::BatchArgs),
    /// Show past lookups
    History(commands::history::HistoryArgs),
    /// Delete the lookup history
    ClearHistory,
    /// Aggregate statistics over the lookup history
    Analytics(commands::analytics::AnalyticsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ttstalk_api=info".parse().unwrap())
                .add_directive("ttstalk_lib=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Stalk(args)) => commands::stalk::run(&args).await?,
        Some(Commands::Batch(args)) => commands::batch::run(&args).await?,
        Some(Commands::History(args)) => commands::history::run(&args)?,
        Some(Commands::ClearHistory) => commands::history::clear()?,
        Some(Commands::Analytics(args)) => commands::analytics::run(&args)?,
        None => commands::interactive::run().await?,
    }

    Ok(())
}
