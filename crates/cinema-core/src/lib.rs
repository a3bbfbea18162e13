//! # cinema-core: Pure Purchase Rules for Cinema Tickets
//!
//! This crate holds the business rules for a ticket purchase as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Cinema Tickets Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              cinema-tickets (TicketService)                     │   │
//! │  │   purchase_tickets ──► payment gateway ──► seat reservation    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cinema-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  limits   │  │ validation│  │  pricing  │  │   │
//! │  │   │ LineItem  │  │ max 25    │  │ 6 rules   │  │  Totals   │  │   │
//! │  │   │ Request   │  │ ratios    │  │ Outcome   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Ticket categories, line items, requests, totals
//! - [`limits`] - Purchase limits checked by the rules
//! - [`validation`] - The rule pipeline and its outcome accumulator
//! - [`pricing`] - Totals derivation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cinema_core::pricing::compute_totals;
//! use cinema_core::validation::validate;
//! use cinema_core::{PurchaseLimits, PurchaseRequest, TicketCategory, TicketLineItem};
//!
//! let items = [TicketLineItem::new(TicketCategory::Adult, 2)];
//! let request = PurchaseRequest::new(42, &items);
//!
//! validate(&request, &PurchaseLimits::default()).into_result().unwrap();
//! let totals = compute_totals(&items, |_| 25).unwrap();
//! assert_eq!(totals.price, 50);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod limits;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult};
pub use limits::PurchaseLimits;
pub use types::*;
pub use validation::{accept, validate, AcceptedPurchase, TicketCounts, ValidationOutcome};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum line items allowed in a single purchase.
///
/// ## Business Reason
/// Bounds the size of one booking. Counts line items as submitted, so a
/// single line with a large quantity counts once.
pub const MAX_PURCHASE_TICKETS: usize = 25;

/// Children one adult may accompany when no infant is booked.
pub const MAX_CHILDREN_PER_ADULT: u32 = 7;

/// Children one adult may accompany when infants are booked too.
///
/// ## Business Reason
/// Each infant sits on an adult's lap, so that adult supervises fewer
/// children.
pub const MAX_CHILDREN_PER_ADULT_WITH_INFANT: u32 = 3;
