//! Planner configuration.
//!
//! Holds the tunables of the allocation stages. Loaded from TOML at
//! runtime; every field falls back to the built-in defaults.
//!
//! ```toml
//! [default_sleep]
//! start = "23:00"
//! end = "07:00"
//!
//! [lunch]
//! title = "lunch"
//! outer = { start = "11:00", end = "14:00" }
//! preferred = { start = "12:00", end = "13:00" }
//! duration = 30
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{ClockTime, TimeRange};
use crate::scheduler::MealWindow;

/// Top-level planner configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Sleep window used when a request carries none.
    pub default_sleep: TimeRange,
    /// Lunch placement window.
    pub lunch: MealWindow,
    /// Dinner placement window.
    pub dinner: MealWindow,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_sleep: TimeRange::new(
                ClockTime::wrapping(23 * 60), // 23:00
                ClockTime::wrapping(7 * 60),  // 07:00
            ),
            lunch: MealWindow::lunch(),
            dinner: MealWindow::dinner(),
        }
    }
}

impl PlannerConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Checks both meal windows.
    pub fn validate(&self) -> Result<()> {
        self.lunch.validate()?;
        self.dinner.validate()?;
        if self.lunch.title.trim().is_empty() || self.dinner.title.trim().is_empty() {
            return Err(Error::Config("meal titles must not be blank".into()));
        }
        Ok(())
    }

    /// Meal windows in placement order.
    pub fn meal_windows(&self) -> Vec<MealWindow> {
        vec![self.lunch.clone(), self.dinner.clone()]
    }
}
