//! # Domain Types
//!
//! Core domain types used throughout Cinema Tickets.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ PurchaseRequest │   │ TicketLineItem  │   │ TicketCategory  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  account_id     │──►│  category       │──►│  Adult          │       │
//! │  │  line_items     │   │  quantity       │   │  Child          │       │
//! │  └─────────────────┘   └─────────────────┘   │  Infant         │       │
//! │                                              └─────────────────┘       │
//! │  ┌─────────────────┐                                                   │
//! │  │     Totals      │   Derived once per accepted purchase              │
//! │  │  ─────────────  │   and handed straight to the payment and          │
//! │  │  ticket_count   │   seat reservation gateways.                      │
//! │  │  price          │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Identifier of the purchasing account.
///
/// Valid accounts are `>= 1`. Zero and negative values are representable so
/// the validator can reject them with a readable message.
pub type AccountId = i64;

// =============================================================================
// Ticket Category
// =============================================================================

/// The kind of ticket being bought. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketCategory {
    Adult,
    Child,
    Infant,
}

impl TicketCategory {
    /// Every category, in declaration order.
    pub const ALL: [TicketCategory; 3] = [
        TicketCategory::Adult,
        TicketCategory::Child,
        TicketCategory::Infant,
    ];

    /// Dense index used by fixed-size per-category tables.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            TicketCategory::Adult => 0,
            TicketCategory::Child => 1,
            TicketCategory::Infant => 2,
        }
    }
}

// =============================================================================
// Ticket Line Item
// =============================================================================

/// One `(category, quantity)` entry of a purchase.
///
/// Immutable once built. The same category may appear on several line items;
/// quantities are summed later, never merged here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketLineItem {
    category: TicketCategory,
    quantity: u32,
}

impl TicketLineItem {
    #[inline]
    pub const fn new(category: TicketCategory, quantity: u32) -> Self {
        TicketLineItem { category, quantity }
    }

    #[inline]
    pub const fn category(&self) -> TicketCategory {
        self.category
    }

    #[inline]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }
}

// =============================================================================
// Purchase Request
// =============================================================================

/// Read-only snapshot of a single purchase attempt.
///
/// Both fields are optional because callers may hand over a missing account
/// or a missing list; each absence is a rule violation of its own rather than
/// a type error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseRequest<'a> {
    pub account_id: Option<AccountId>,
    pub line_items: Option<&'a [TicketLineItem]>,
}

impl<'a> PurchaseRequest<'a> {
    /// Creates a request with both an account and a line item list.
    pub const fn new(account_id: AccountId, line_items: &'a [TicketLineItem]) -> Self {
        PurchaseRequest {
            account_id: Some(account_id),
            line_items: Some(line_items),
        }
    }

    /// Returns the line items, treating an absent list as empty.
    #[inline]
    pub fn line_items_or_empty(&self) -> &'a [TicketLineItem] {
        self.line_items.unwrap_or(&[])
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Aggregate ticket count and price of an accepted purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of every line item quantity, infants included.
    pub ticket_count: u32,
    /// Sum of `unit price × quantity` over every line item.
    pub price: u32,
}

impl Totals {
    #[inline]
    pub const fn zero() -> Self {
        Totals {
            ticket_count: 0,
            price: 0,
        }
    }

    /// Adds one priced line to the running totals.
    ///
    /// Fails with [`CoreError::TotalsOverflow`] instead of wrapping.
    pub fn checked_add_line(self, quantity: u32, line_price: u32) -> CoreResult<Self> {
        let ticket_count = self
            .ticket_count
            .checked_add(quantity)
            .ok_or(CoreError::TotalsOverflow)?;
        let price = self
            .price
            .checked_add(line_price)
            .ok_or(CoreError::TotalsOverflow)?;
        Ok(Totals {
            ticket_count,
            price,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
