use std::io::{BufRead, Write};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use hotel_booking::config::AppConfig;
use hotel_booking::models::BookingRequest;
use hotel_booking::services::elicitation::stdin::StdinElicitor;
use hotel_booking::services::inventory::JsonFileInventory;
use hotel_booking::services::negotiation;

fn ask(prompt: &str) -> anyhow::Result<String> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{prompt}")?;
    stdout.flush()?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env();
    config.validate()?;

    println!("Hotel booking CLI demo");
    let date = ask("Desired date (YYYY-MM-DD): ")?;
    let room_type = ask("Room type (standard/deluxe/suite): ")?;

    let inventory = JsonFileInventory::new(&config.inventory_path);
    let outcome = negotiation::book_room(
        &inventory,
        Some(&StdinElicitor),
        config.elicitation_timeout(),
        BookingRequest::new(Some(&date), Some(&room_type)),
    )
    .await?;

    println!("\nResult: {outcome}");
    Ok(())
}
