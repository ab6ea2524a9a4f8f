//! Main entry point for the dictionary CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod core;

use cli::commands::Commands;

/// Command-line client for the Yandex.Dictionary lookup service
#[derive(Parser, Debug)]
#[command(name = "yandex-dictionary", version, about, long_about = None)]
struct Args {
    /// API key (optional, defaults to YANDEX_DICT_API_KEY env var)
    #[arg(long)]
    api_key: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Treat undocumented 4xx/5xx statuses as errors
    #[arg(long)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    let log_level = if std::env::var("RUST_LOG").is_ok() {
        std::env::var("RUST_LOG").unwrap()
    } else {
        "info".to_string()
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}={}", env!("CARGO_PKG_NAME"), log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Override config with CLI args if provided
    if let Some(api_key) = args.api_key {
        std::env::set_var("YANDEX_DICT_API_KEY", api_key);
    }

    if let Some(timeout_ms) = args.timeout_ms {
        std::env::set_var("REQUEST_TIMEOUT_MS", timeout_ms.to_string());
    }

    if args.strict {
        std::env::set_var("YANDEX_DICT_STRICT", "1");
    }

    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    // Execute command
    match args.command {
        Some(Commands::Langs) => {
            cli::commands::handle_langs().await?;
        }
        Some(Commands::Lookup {
            text,
            lang,
            ui,
            family,
            morpho,
            pos_filter,
            flags,
        }) => {
            cli::commands::handle_lookup(text, lang, ui, family, morpho, pos_filter, flags).await?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}
