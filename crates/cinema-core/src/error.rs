//! # Error Types
//!
//! Domain-specific error types for cinema-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cinema-core errors (this file)                                        │
//! │  └── CoreError        - Rejected purchases, totals, limits             │
//! │                                                                         │
//! │  cinema-tickets errors (separate crate)                                │
//! │  ├── PurchaseError    - CoreError + gateway failures (verbatim)        │
//! │  └── ConfigError      - Config file / environment problems             │
//! │                                                                         │
//! │  Flow: CoreError → PurchaseError → caller                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The purchase broke one or more rules.
    ///
    /// The payload is every violated rule's message joined by `\n`, in rule
    /// order. It is shown to the caller as-is.
    #[error("{0}")]
    InvalidPurchase(String),

    /// Ticket count or price does not fit the 32-bit totals.
    #[error("Purchase totals exceed the supported range")]
    TotalsOverflow,

    /// A purchase limit was configured as zero.
    #[error("{field} must be greater than zero")]
    InvalidLimit { field: &'static str },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
