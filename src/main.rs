mod batch;
mod config;
mod receipt;
mod transcript;

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "receipt_ocr")]
#[command(about = "Reconstruct orders from receipt OCR transcripts")]
struct Cli {
    /// TOML configuration file
    #[arg(long, env = "RECEIPT_OCR_CONFIG", default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Interpret one transcript (stdin when PATH is omitted or `-`)
    Interpret { path: Option<PathBuf> },
    /// Interpret every transcript in a directory, one JSON line each
    Batch { dir: PathBuf },
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cfg = config::Config::load(&cli.config)?;

    // init tracing; stdout is reserved for JSON
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.logging.filter));
    tracing_subscriber::fmt()
        .with_target(true)
        .with_level(true)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Interpret { path } => {
            let text = transcript::read_transcript(path.as_deref())?;
            let order = receipt::interpret_text(&text);
            info!(
                items = order.items.len(),
                food_subtotal = order.food_subtotal,
                total = order.total,
                discount_or_fee = order.discount_or_fee,
                "Order reconstructed"
            );
            print_json(&order, cfg.output.pretty && !cli.compact)?;
        }
        Command::Batch { dir } => {
            let entries =
                batch::interpret_dir(&dir, &cfg.batch.extension, cfg.batch.max_concurrent).await?;
            for entry in &entries {
                print_json(entry, false)?;
            }
        }
    }

    Ok(())
}
