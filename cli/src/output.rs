use basix_core::alerts::InvestmentAlert;
use basix_core::types::User;
use colored::*;

/// Print the current session holder to the terminal
pub fn print_status(user: Option<&User>) {
    match user {
        Some(user) => {
            println!(
                "{} {} <{}>",
                "Logged in:".green().bold(),
                user.name.bold(),
                user.email
            );
            println!("  account type: {}", user.user_type.to_string().cyan());
        }
        None => println!("{}", "Not logged in".yellow()),
    }
}

/// Print the alert list with the positions used by remove/toggle
pub fn print_alerts(alerts: &[InvestmentAlert]) {
    if alerts.is_empty() {
        println!("No alerts set yet.");
        return;
    }

    for (i, alert) in alerts.iter().enumerate() {
        let marker = if alert.active {
            "on ".green()
        } else {
            "off".dimmed()
        };
        println!(
            "  {}. [{}] {} {} {}",
            i + 1,
            marker,
            alert.asset.bold(),
            alert.alert_type.to_string().cyan(),
            alert.value
        );
        if !alert.condition.is_empty() {
            println!("        {}", alert.condition.dimmed());
        }
    }
}
