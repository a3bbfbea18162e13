//! # Tickets Configuration
//!
//! Purchase limits and unit prices for the ticket service.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CINEMA_MAX_PURCHASE_TICKETS=25                                     │
//! │     CINEMA_PRICE_ADULT=25                                              │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/cinema-tickets/tickets.toml (Linux)                      │
//! │     ~/Library/Application Support/com.cinema.cinema-tickets/...        │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     25 line items, 7 children per adult (3 with infants)               │
//! │     Adult 25, Child 15, Infant 0                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # tickets.toml
//! [limits]
//! max_purchase_tickets = 25
//! max_children_per_adult = 7
//! max_children_per_adult_with_infant = 3
//!
//! [prices]
//! adult = 25
//! child = 15
//! infant = 0
//! ```

use std::path::PathBuf;

use cinema_core::PurchaseLimits;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ConfigResult;
use crate::gateway::PriceTable;

// =============================================================================
// Environment Keys
// =============================================================================

pub const ENV_MAX_PURCHASE_TICKETS: &str = "CINEMA_MAX_PURCHASE_TICKETS";
pub const ENV_MAX_CHILDREN_PER_ADULT: &str = "CINEMA_MAX_CHILDREN_PER_ADULT";
pub const ENV_MAX_CHILDREN_PER_ADULT_WITH_INFANT: &str =
    "CINEMA_MAX_CHILDREN_PER_ADULT_WITH_INFANT";
pub const ENV_PRICE_ADULT: &str = "CINEMA_PRICE_ADULT";
pub const ENV_PRICE_CHILD: &str = "CINEMA_PRICE_CHILD";
pub const ENV_PRICE_INFANT: &str = "CINEMA_PRICE_INFANT";

const CONFIG_DIR_NAME: &str = "cinema-tickets";
const CONFIG_FILE_NAME: &str = "tickets.toml";

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete ticket service configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketsConfig {
    /// Bounds checked by the purchase rules.
    #[serde(default)]
    pub limits: PurchaseLimits,

    /// Unit prices per ticket category.
    #[serde(default)]
    pub prices: PriceTable,
}

impl TicketsConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (tickets.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading tickets config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load tickets config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        self.limits.validate()?;
        Ok(())
    }

    /// Applies overrides from `lookup`, keyed by the `CINEMA_*` names.
    ///
    /// Values that do not parse are ignored with a warning.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let limits = &mut self.limits;
        override_value(
            &lookup,
            ENV_MAX_PURCHASE_TICKETS,
            &mut limits.max_purchase_tickets,
        );
        override_value(
            &lookup,
            ENV_MAX_CHILDREN_PER_ADULT,
            &mut limits.max_children_per_adult,
        );
        override_value(
            &lookup,
            ENV_MAX_CHILDREN_PER_ADULT_WITH_INFANT,
            &mut limits.max_children_per_adult_with_infant,
        );

        let prices = &mut self.prices;
        override_value(&lookup, ENV_PRICE_ADULT, &mut prices.adult);
        override_value(&lookup, ENV_PRICE_CHILD, &mut prices.child);
        override_value(&lookup, ENV_PRICE_INFANT, &mut prices.infant);
    }

    /// Returns the default config file path, `<config dir>/cinema-tickets/tickets.toml`
    /// on Linux.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "cinema", CONFIG_DIR_NAME)
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

fn override_value<F, T>(lookup: &F, key: &str, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => {
            debug!(key, %value, "Overriding config value from environment");
            *target = value;
        }
        Err(_) => warn!(key, value = %raw, "Ignoring unparsable config override"),
    }
}
