//! Fruit vendor service: CLI server
//!
//! Headless REST server for the vendor catalogue, suitable for deployment
//! as a systemd service, Docker container, or standalone process.
//!
//! ```sh
//! # Run with default config (~/.config/fruit-vendor/config.toml)
//! vendor-service
//!
//! # Custom config path
//! vendor-service --config /etc/fruit-vendor/config.toml
//!
//! # Override port
//! vendor-service --port 8081
//!
//! # Validate config without starting
//! vendor-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use fruit_vendor::config::AppConfig;
use fruit_vendor::server::{init_tracing, ServerHandle, ServerOptions};

/// Fruit vendor REST service.
#[derive(Parser, Debug)]
#[command(
    name = "vendor-service",
    version,
    about = "REST API for managing fruit vendors",
    long_about = "Fruit vendor service: list, create, update and delete vendors \
                  over a JSON REST API.\n\n\
                  Default config: ~/.config/fruit-vendor/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "VENDOR_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    /// Skip inserting the sample vendors into an empty database.
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    // Only an absent default file falls back to defaults; a file named with
    // --config must exist, and any file that is present must parse and validate.
    let explicit = cli.config.is_some();
    let config_path = cli
        .config
        .unwrap_or_else(fruit_vendor::default_config_path);

    let loaded = if explicit {
        AppConfig::load_required(&config_path)
    } else {
        AppConfig::load(&config_path)
    };

    let mut config = match loaded {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load config from {}: {}", config_path.display(), e);
            std::process::exit(1);
        }
    };

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config);
    info!("Configuration loaded from {}", config_path.display());

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }

    config.validate()?;

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.server.address());
        println!("   Base path   : {}", config.api.base_path);
        println!("   Database    : {}", config.database.url);
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
        seed_sample_data: !cli.no_seed,
    })
    .await?;

    handle.install_signal_handler();

    info!("Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
