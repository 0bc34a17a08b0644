use basix_core::config::{get_default_config_file, BasixConfig};
use basix_core::session::{FileSessionStore, SessionManager, SessionStoreRef};
use clap::Parser;
use colored::*;
use dotenv::dotenv;
use log::LevelFilter;
use std::error::Error;
use std::sync::Arc;

mod app;
mod cli;
mod logging;
mod output;

use crate::cli::{Args, Commands};
use crate::logging::{log_error, log_info};

/// Main function - drives the BASIX session manager from the command line
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Parse command-line arguments
    let args = Args::parse();

    // Load environment variables before the config reads them
    dotenv().ok();

    // Load configuration, with env and flag overrides on top
    let config_path = match args.config.clone() {
        Some(path) => path,
        None => get_default_config_file()?,
    };
    let mut config = BasixConfig::load_from_file(&config_path)?.apply_env_overrides();
    if let Some(url) = args.api_url.clone() {
        config.api_base_url = Some(url);
    }

    // Get log level from config or use default
    let log_level = config
        .log_level
        .as_deref()
        .map(|level| match level.to_lowercase().as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            _ => LevelFilter::Info,
        })
        .unwrap_or(LevelFilter::Info);

    // Initialize logger with configured log level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level.to_string()),
    )
    .init();

    // Durable session store, shared with the manager
    let store: SessionStoreRef = match config.session_path.clone() {
        Some(path) => Arc::new(FileSessionStore::new(path)),
        None => match FileSessionStore::at_default_path() {
            Ok(store) => Arc::new(store),
            Err(e) => {
                log_error(&format!("Failed to open session store: {}", e));
                eprintln!("{}", format!("Error opening session store: {}", e).red());
                return Err(e.into());
            }
        },
    };

    let manager = SessionManager::new(&config, store);
    manager.restore();
    log_info(&format!(
        "Session restored; authenticated: {}",
        manager.is_authenticated()
    ));

    let result = match args.command {
        Commands::Login {
            email,
            user_type,
            password,
        } => app::run_login(&manager, &email, user_type, password).await,
        Commands::Register {
            name,
            email,
            user_type,
            password,
        } => app::run_register(&manager, &name, &email, user_type, password).await,
        Commands::Logout => app::run_logout(&manager).await,
        Commands::Status => app::run_status(&manager),
        Commands::Alerts(command) => app::run_alerts(&config, command),
    };

    if let Err(e) = result {
        log_error(&format!("Command failed: {}", e));
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }

    Ok(())
}
