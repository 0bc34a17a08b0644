use anyhow::{Context, Result};
use basix_core::alerts::{AlertBook, InvestmentAlert};
use basix_core::config::BasixConfig;
use basix_core::session::SessionManager;
use basix_core::types::{Registration, UserType};
use colored::*;
use dialoguer::Password;
use log::debug;

use crate::cli::AlertCommands;
use crate::output;

/// Minimum password length the registration form enforces
const MIN_PASSWORD_LEN: usize = 6;

/// Log in with the given credentials, prompting for the password when the
/// caller did not pass one on the command line.
pub async fn run_login(
    manager: &SessionManager,
    email: &str,
    user_type: UserType,
    password: Option<String>,
) -> Result<()> {
    let email = email.trim();
    if email.is_empty() {
        println!("{}", "Please enter your email address".red());
        return Ok(());
    }

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .interact()
            .context("Failed to read password")?,
    };
    if password.trim().is_empty() {
        println!("{}", "Please enter your password".red());
        return Ok(());
    }

    match manager.login(email, &password, user_type).await {
        Ok(user) => {
            println!("{} {}", "Logged in as".green(), user.name.bold());
        }
        Err(e) => {
            // Auth and transport errors alike render as one inline message
            println!("{}", e.to_string().red());
        }
    }

    Ok(())
}

/// Create an account and log straight in. Validation mirrors the original
/// registration form and runs before any network call.
pub async fn run_register(
    manager: &SessionManager,
    name: &str,
    email: &str,
    user_type: UserType,
    password: Option<String>,
) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        println!("{}", "Please enter your full name".red());
        return Ok(());
    }

    let email = email.trim();
    if email.is_empty() {
        println!("{}", "Please enter your email address".red());
        return Ok(());
    }

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Create a password")
            .with_confirmation("Confirm your password", "Passwords do not match")
            .interact()
            .context("Failed to read password")?,
    };
    if password.len() < MIN_PASSWORD_LEN {
        println!(
            "{}",
            format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LEN
            )
            .red()
        );
        return Ok(());
    }

    let registration = Registration {
        name: name.to_string(),
        email: email.to_string(),
        password,
        user_type,
    };

    match manager.register(&registration).await {
        Ok(body) => {
            debug!("Registration response: {}", body);
            println!(
                "{} {}",
                "Account created; logged in as".green(),
                name.bold()
            );
        }
        Err(e) => {
            println!("{}", e.to_string().red());
        }
    }

    Ok(())
}

/// End the session. Always succeeds locally, whatever the server says.
pub async fn run_logout(manager: &SessionManager) -> Result<()> {
    manager.logout().await;
    println!("{}", "Logged out".green());
    Ok(())
}

/// Show the current session holder
pub fn run_status(manager: &SessionManager) -> Result<()> {
    output::print_status(manager.current_user().as_ref());
    Ok(())
}

/// Dispatch the alerts subcommands over the durable alert book
pub fn run_alerts(config: &BasixConfig, command: AlertCommands) -> Result<()> {
    let mut book = match config.alerts_path.clone() {
        Some(path) => AlertBook::open(path),
        None => AlertBook::open_default(),
    }
    .context("Failed to open alert book")?;

    match command {
        AlertCommands::List => {
            output::print_alerts(book.alerts());
        }
        AlertCommands::Add {
            asset,
            kind,
            condition,
            value,
        } => {
            let alert = InvestmentAlert {
                alert_type: kind,
                asset,
                condition,
                value,
                active: true,
            };
            match book.add(alert) {
                Ok(()) => println!("{}", "Alert added".green()),
                Err(e) => println!("{}", e.to_string().red()),
            }
        }
        AlertCommands::Remove { position } => match position.checked_sub(1) {
            Some(index) if index < book.alerts().len() => {
                book.remove(index).context("Failed to remove alert")?;
                println!("{}", "Alert removed".green());
            }
            _ => println!("{}", format!("No alert at position {}", position).red()),
        },
        AlertCommands::Toggle { position } => match position.checked_sub(1) {
            Some(index) if index < book.alerts().len() => {
                book.toggle(index).context("Failed to toggle alert")?;
                let state = if book.alerts()[index].active {
                    "enabled"
                } else {
                    "disabled"
                };
                println!("{}", format!("Alert {}", state).green());
            }
            _ => println!("{}", format!("No alert at position {}", position).red()),
        },
    }

    Ok(())
}
