//! # Gateways
//!
//! The three services a purchase depends on but does not own.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  TicketPriceLookupService   category ──► unit price (authoritative)    │
//! │  TicketPaymentService       (account, total price) ──► charged         │
//! │  SeatReservationService     (account, ticket count) ──► reserved       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Payment and reservation are fire-and-forget from the service's point of
//! view: it calls each once and propagates any error untouched. Retries,
//! timeouts and caching belong to the implementations.

use cinema_core::{AccountId, TicketCategory};
use serde::{Deserialize, Serialize};

use crate::error::CollaboratorError;

/// Takes payment for a purchase.
#[cfg_attr(test, mockall::automock)]
pub trait TicketPaymentService {
    fn make_payment(
        &self,
        account_id: AccountId,
        total_price: u32,
    ) -> Result<(), CollaboratorError>;
}

/// Reserves seats for a purchase.
#[cfg_attr(test, mockall::automock)]
pub trait SeatReservationService {
    fn reserve_seat(
        &self,
        account_id: AccountId,
        ticket_count: u32,
    ) -> Result<(), CollaboratorError>;
}

/// Source of truth for unit prices.
#[cfg_attr(test, mockall::automock)]
pub trait TicketPriceLookupService {
    fn price_for(&self, category: TicketCategory) -> u32;
}

// =============================================================================
// Price Table
// =============================================================================

/// Fixed unit prices, usually read from the `[prices]` config section.
///
/// ## Config Format
/// ```toml
/// [prices]
/// adult = 25
/// child = 15
/// infant = 0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    #[serde(default = "default_adult_price")]
    pub adult: u32,

    #[serde(default = "default_child_price")]
    pub child: u32,

    /// Infants sit on a lap and are free by default.
    #[serde(default)]
    pub infant: u32,
}

fn default_adult_price() -> u32 {
    25
}

fn default_child_price() -> u32 {
    15
}

impl Default for PriceTable {
    fn default() -> Self {
        PriceTable {
            adult: default_adult_price(),
            child: default_child_price(),
            infant: 0,
        }
    }
}

impl TicketPriceLookupService for PriceTable {
    fn price_for(&self, category: TicketCategory) -> u32 {
        match category {
            TicketCategory::Adult => self.adult,
            TicketCategory::Child => self.child,
            TicketCategory::Infant => self.infant,
        }
    }
}
