// src/main.rs
use std::path::Path;

use clap::Parser;
use console::style;

mod cli;
mod clipboard;
mod config;
mod generators;
mod models;
mod random;

use crate::cli::Args;
use crate::config::Config;
use crate::models::GenerationRequest;
use crate::random::{RandomSource, SeededRandom, SystemRandom};

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let args = Args::parse();
    let config = Config::load();
    log::debug!("Args: {:?}, config: {:?}", args, config);

    let request = GenerationRequest {
        length: args.length.unwrap_or(config.default_length),
        include_lowercase: !args.no_lowercase,
        include_uppercase: !args.no_uppercase,
        include_digits: !args.no_digits,
        include_symbols: !args.no_symbols,
    };

    if request.enabled_classes().is_empty() {
        log::warn!("All character classes disabled; the result is empty");
    }

    let mut rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => {
            log::info!("Using seeded random source (seed {})", seed);
            Box::new(SeededRandom::new(seed))
        }
        None => Box::new(SystemRandom::new()),
    };

    let password = generators::generate_request(&request, rng.as_mut());

    if args.json {
        println!(
            "{}",
            serde_json::json!({
                "password": password,
                "length": password.len(),
                "request": request,
            })
        );
    } else {
        println!("{}", password);
    }

    if args.copy || config.copy_to_clipboard {
        if password.is_empty() {
            log::warn!("Nothing to copy");
        } else if clipboard::copy(&password) {
            eprintln!("{}", style("✅ Password copied to clipboard").green());
        } else {
            eprintln!("{}", style("❌ Failed to copy password to clipboard").red());
        }
    }

    Ok(())
}
