use basix_core::alerts::AlertType;
use basix_core::types::UserType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line client for the BASIX IP marketplace identity service
#[derive(Parser, Debug)]
#[command(name = "basix", author, version, about, long_about = None)]
pub struct Args {
    /// Path to a configuration file (defaults to ~/.config/basix/config.toml)
    #[arg(long, env = "BASIX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the identity API base URL
    #[arg(long, env = "BASIX_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and persist the session
    Login {
        /// Email address of the account
        #[arg(short, long)]
        email: String,

        /// Account type (creator or investor)
        #[arg(short = 't', long, default_value = "creator")]
        user_type: UserType,

        /// Password; prompted for interactively when omitted
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Create an account and log straight in
    Register {
        /// Display name for the new account
        #[arg(short, long)]
        name: String,

        /// Email address of the new account
        #[arg(short, long)]
        email: String,

        /// Account type (creator or investor)
        #[arg(short = 't', long, default_value = "creator")]
        user_type: UserType,

        /// Password; prompted for (with confirmation) when omitted
        #[arg(short, long)]
        password: Option<String>,
    },

    /// End the current session
    Logout,

    /// Show who is currently logged in
    Status,

    /// Manage investment alerts
    #[command(subcommand)]
    Alerts(AlertCommands),
}

#[derive(Subcommand, Debug)]
pub enum AlertCommands {
    /// List all alerts
    List,

    /// Add an alert
    Add {
        /// Asset the alert watches
        #[arg(short, long)]
        asset: String,

        /// Alert kind (price_increase, price_decrease, funding_goal, new_investment)
        #[arg(short, long, default_value = "price_increase")]
        kind: AlertType,

        /// Optional condition description
        #[arg(short, long, default_value = "")]
        condition: String,

        /// Threshold value, e.g. "10%"
        #[arg(short, long)]
        value: String,
    },

    /// Remove the alert at the given position (as shown by list)
    Remove {
        #[arg(required = true)]
        position: usize,
    },

    /// Enable or disable the alert at the given position
    Toggle {
        #[arg(required = true)]
        position: usize,
    },
}
