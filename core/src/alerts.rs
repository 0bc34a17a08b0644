//! Durable investment alert book.
//!
//! The marketplace UI lets users register simple alerts ("tell me when this
//! asset moves"). They have no server-side counterpart: the list lives in a
//! local JSON document, the same data the web client kept under its
//! `investmentAlerts` storage key.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::get_default_config_dir;
use crate::errors::{BasixError, BasixResult};

/// What kind of movement an alert watches for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    PriceIncrease,
    PriceDecrease,
    FundingGoal,
    NewInvestment,
}

impl AlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::PriceIncrease => "price_increase",
            AlertType::PriceDecrease => "price_decrease",
            AlertType::FundingGoal => "funding_goal",
            AlertType::NewInvestment => "new_investment",
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price_increase" => Ok(AlertType::PriceIncrease),
            "price_decrease" => Ok(AlertType::PriceDecrease),
            "funding_goal" => Ok(AlertType::FundingGoal),
            "new_investment" => Ok(AlertType::NewInvestment),
            other => Err(format!("Unknown alert type '{}'", other)),
        }
    }
}

/// A single user-defined alert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentAlert {
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub asset: String,
    #[serde(default)]
    pub condition: String,
    pub value: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Ordered list of investment alerts mirrored to a JSON file.
///
/// Every mutation saves immediately, like the web client's effect that wrote
/// the list back on every change.
#[derive(Debug)]
pub struct AlertBook {
    path: PathBuf,
    alerts: Vec<InvestmentAlert>,
}

impl AlertBook {
    /// Open the book at `path`, reading any existing alerts
    pub fn open(path: impl Into<PathBuf>) -> BasixResult<Self> {
        let path = path.into();
        let alerts = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            Vec::new()
        };
        Ok(Self { path, alerts })
    }

    /// Open the book at the default location, `~/.config/basix/alerts.json`
    pub fn open_default() -> BasixResult<Self> {
        let dir = get_default_config_dir()?;
        Self::open(dir.join("alerts.json"))
    }

    /// The file this book reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All alerts, in insertion order
    pub fn alerts(&self) -> &[InvestmentAlert] {
        &self.alerts
    }

    /// Append an alert. Alerts without an asset or a threshold value are
    /// rejected, the same guard the web form applied.
    pub fn add(&mut self, alert: InvestmentAlert) -> BasixResult<()> {
        if alert.asset.trim().is_empty() || alert.value.trim().is_empty() {
            return Err(BasixError::ValidationError(
                "An alert needs both an asset and a value".to_string(),
            ));
        }
        self.alerts.push(alert);
        self.save()
    }

    /// Remove the alert at `index`; out-of-range indices are a no-op
    pub fn remove(&mut self, index: usize) -> BasixResult<()> {
        if index < self.alerts.len() {
            self.alerts.remove(index);
            self.save()?;
        }
        Ok(())
    }

    /// Flip the active flag of the alert at `index`; out-of-range indices
    /// are a no-op
    pub fn toggle(&mut self, index: usize) -> BasixResult<()> {
        if let Some(alert) = self.alerts.get_mut(index) {
            alert.active = !alert.active;
            self.save()?;
        }
        Ok(())
    }

    fn save(&self) -> BasixResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.alerts)?)?;
        Ok(())
    }
}
