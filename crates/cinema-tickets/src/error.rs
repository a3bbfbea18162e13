//! # Service Error Types
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Service Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────────┐  ┌─────────────────────┐  ┌─────────────────┐ │
//! │  │  Rejected           │  │  Gateway            │  │  Configuration  │ │
//! │  │                     │  │                     │  │                 │ │
//! │  │  InvalidPurchase    │  │  Payment            │  │  Io             │ │
//! │  │  TotalsOverflow     │  │  Reservation        │  │  Parse          │ │
//! │  │  (from cinema-core) │  │  (verbatim)         │  │  Invalid        │ │
//! │  └─────────────────────┘  └─────────────────────┘  └─────────────────┘ │
//! │                                                                         │
//! │  Rejections always happen before any gateway call.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use cinema_core::CoreError;
use thiserror::Error;

/// Whatever a payment or reservation gateway fails with.
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for purchase operations.
pub type PurchaseResult<T> = Result<T, PurchaseError>;

/// Result type alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Purchase Error
// =============================================================================

/// Failure of a single purchase attempt.
///
/// Every variant is transparent: the caller sees the aggregated rule message
/// or the gateway's own error text, untouched.
#[derive(Debug, Error)]
pub enum PurchaseError {
    /// The purchase was rejected before any gateway was called.
    #[error(transparent)]
    Rejected(#[from] CoreError),

    /// The payment gateway failed. No seats were reserved.
    #[error(transparent)]
    Payment(CollaboratorError),

    /// The seat reservation gateway failed after payment was taken.
    #[error(transparent)]
    Reservation(CollaboratorError),
}

impl PurchaseError {
    /// The aggregated rule message, if this is a rule rejection.
    pub fn invalid_purchase_message(&self) -> Option<&str> {
        match self {
            PurchaseError::Rejected(CoreError::InvalidPurchase(msg)) => Some(msg),
            _ => None,
        }
    }

    /// Number of rule messages in a rejection, zero for any other failure.
    pub fn violated_rule_count(&self) -> usize {
        self.invalid_purchase_message()
            .map_or(0, |msg| msg.lines().count())
    }
}

// =============================================================================
// Config Error
// =============================================================================

/// Failure while loading [`crate::config::TicketsConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for this schema.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values parsed but break a limit constraint.
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] CoreError),
}
