mod api;
mod app;
mod config;
mod constants;
mod input;
mod ui;

use anyhow::Result;
use std::env;
use tokio::time::Duration;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::{MailClient, spawn_api_actor};
use crate::app::App;
use crate::config::Config;

fn setup_logging() {
    use std::fs::OpenOptions;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug,pling=debug"));

    // Try to create a log file in the config directory
    let log_file = Config::config_dir()
        .ok()
        .map(|dir| dir.join("pling.log"))
        .and_then(|path| {
            OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&path)
                .ok()
        });

    if let Some(file) = log_file {
        // Log to file
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
    } else {
        // Fallback to stderr if file logging fails
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_usage() {
    eprintln!(
        r#"pling - Fast terminal client for REST webmail backends

Usage: pling [command]

Commands:
    (none)      Start the mail client
    setup       Configure backend server and sender address
    help        Show this help message

Configuration file: ~/.config/pling/config.toml
"#
    );
}

fn run_setup() -> Result<()> {
    use std::io::{self, Write};

    println!("Pling Setup");
    println!("=============\n");

    // Check if config exists
    let config_path = Config::config_path()?;
    if config_path.exists() {
        print!("Configuration already exists. Overwrite? [y/N]: ");
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Setup cancelled.");
            return Ok(());
        }
    }

    // Get email address with validation
    let address = loop {
        print!("Your email address: ");
        io::stdout().flush()?;
        let mut address = String::new();
        io::stdin().read_line(&mut address)?;
        let address = address.trim().to_string();

        // Basic validation: must contain @ with parts before/after
        if address.contains('@') {
            let parts: Vec<&str> = address.split('@').collect();
            if parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty() {
                break address;
            }
        }
        println!("Invalid address. Please enter a valid email address (e.g., user@example.com)");
    };

    // Get display name
    print!("Display name (optional): ");
    io::stdout().flush()?;
    let mut display_name = String::new();
    io::stdin().read_line(&mut display_name)?;
    let display_name = display_name.trim();
    let display_name = if display_name.is_empty() {
        None
    } else {
        Some(display_name.to_string())
    };

    // Get server URL with validation
    let url = loop {
        print!("Server URL [http://localhost:8080]: ");
        io::stdout().flush()?;
        let mut url = String::new();
        io::stdin().read_line(&mut url)?;
        let url = url.trim();
        let url = if url.is_empty() {
            "http://localhost:8080".to_string()
        } else {
            url.to_string()
        };

        if url.starts_with("http://") || url.starts_with("https://") {
            break url;
        }
        println!("Invalid URL. Please enter a URL starting with http:// or https://");
    };

    let config = Config {
        account: config::AccountConfig {
            address,
            display_name,
        },
        server: config::ServerConfig {
            url,
            poll_interval_ms: constants::DEFAULT_POLL_INTERVAL_MS,
        },
        ui: config::UiConfig::default(),
    };

    config.ensure_dirs()?;
    config.save()?;
    println!("Configuration saved to {}", config_path.display());
    println!("\nSetup complete! Run 'pling' to start.");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("help") | Some("--help") | Some("-h") => {
            print_usage();
            Ok(())
        }
        Some("setup") => run_setup(),
        Some(cmd) => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            std::process::exit(1);
        }
        None => {
            setup_logging();

            let config = Config::load()?;
            config.ensure_dirs()?;

            // Initialize theme from config
            crate::ui::theme::init_theme(config.ui.theme);

            // Spawn the API actor: it owns the poll timer and issues
            // the immediate first fetch
            let client = MailClient::new(
                config.server.base_url().to_string(),
                config.account.address.clone(),
            );
            let api = spawn_api_actor(
                client,
                Duration::from_millis(config.server.poll_interval_ms),
            );

            let mut app = App::new(config, api);
            app.run().await
        }
    }
}
