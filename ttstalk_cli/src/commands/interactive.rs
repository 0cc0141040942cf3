//! Interactive menu, the default mode when no arguments are given.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use ttstalk_lib::{analytics, batch, validation, Client, HistoryStore};

use crate::output;

const DEFAULT_BATCH_DELAY_MS: u64 = 2000;

pub async fn run() -> Result<()> {
    let client = Client::new()?;
    let history = HistoryStore::new();

    banner();
    loop {
        println!();
        println!("  1) Stalk a user");
        println!("  2) Batch stalk");
        println!("  3) View history");
        println!("  4) Analytics");
        println!("  5) Exit");

        let choice = match prompt("Choose an option: ")? {
            Some(line) => line,
            None => break, // stdin closed
        };

        match choice.as_str() {
            "1" => stalk_one(&client, &history).await?,
            "2" => batch_stalk(&client, &history).await?,
            "3" => view_history(&history)?,
            "4" => show_analytics(&history),
            "5" | "exit" | "q" => break,
            "" => continue,
            other => println!("[ERROR] Unknown option '{}'", other),
        }

        match prompt("Continue? (y/n): ")? {
            Some(answer) if answer.eq_ignore_ascii_case("n") => break,
            Some(_) => {}
            None => break,
        }
    }
    footer();
    Ok(())
}

async fn stalk_one(client: &Client, history: &HistoryStore) -> Result<()> {
    let Some(input) = prompt("Enter a handle (without @): ")? else {
        return Ok(());
    };
    let handle = match validation::validate_handle(&input) {
        Ok(handle) => handle,
        Err(e) => {
            println!("[ERROR] {}", e);
            return Ok(());
        }
    };

    println!("Looking up {}...", handle);
    match client.stalk(&handle).await {
        Ok(record) => {
            output::print_profile(&record);
            history.append(&record);
        }
        Err(e) => println!("[ERROR] {}", output::describe_fetch_error(&handle, &e)),
    }
    Ok(())
}

async fn batch_stalk(client: &Client, history: &HistoryStore) -> Result<()> {
    let Some(input) = prompt("Enter handles, comma-separated: ")? else {
        return Ok(());
    };
    let handles = match validation::parse_handle_list(&input) {
        Ok(handles) => handles,
        Err(e) => {
            println!("[ERROR] {}", e);
            return Ok(());
        }
    };

    let delay = Duration::from_millis(DEFAULT_BATCH_DELAY_MS);
    let records = batch::run_batch(client, &handles, delay, Some(history)).await;
    println!("{} of {} lookups succeeded", records.len(), handles.len());
    output::print_batch(&records);
    Ok(())
}

fn view_history(history: &HistoryStore) -> Result<()> {
    let Some(query) = prompt("Filter (empty for all): ")? else {
        return Ok(());
    };
    let filter = if query.is_empty() {
        None
    } else {
        Some(query.as_str())
    };
    output::print_history(&history.list(filter));
    Ok(())
}

fn show_analytics(history: &HistoryStore) {
    let entries = history.list(None);
    if entries.is_empty() {
        println!("No history yet.");
        return;
    }
    output::print_summary(&analytics::summarize(&entries));
}

/// Prompts on stdout and reads one trimmed line. `None` means stdin
/// reached end of file.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn banner() {
    println!("{}", "=".repeat(50));
    println!("TikTok Stalk CLI");
    println!("{}", "=".repeat(50));
}

fn footer() {
    println!("{}", "=".repeat(50));
    println!("Thanks for using ttstalk!");
    println!("{}", "=".repeat(50));
}
