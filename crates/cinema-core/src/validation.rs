//! # Validation Module
//!
//! The purchase rule pipeline.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Purchase Rule Pipeline                             │
//! │                                                                         │
//! │  PurchaseRequest ──► TicketCounts (per-category sums, computed once)   │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  1. account id >= 1                 ─┐                                  │
//! │  2. line items present              │                                  │
//! │  3. line items <= max               │  every rule runs, each may        │
//! │  4. at least one adult              ├─ append to ValidationOutcome      │
//! │  5. infants <= adults               │  (no short-circuit)              │
//! │  6. children <= adults × ratio      ─┘                                  │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  outcome empty?  ── yes ──► pricing                                     │
//! │        │                                                                │
//! │        no ──► CoreError::InvalidPurchase(messages joined by "\n")      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cinema_core::validation::validate;
//! use cinema_core::{PurchaseLimits, PurchaseRequest, TicketCategory, TicketLineItem};
//!
//! let items = [TicketLineItem::new(TicketCategory::Child, 1)];
//! let outcome = validate(&PurchaseRequest::new(0, &items), &PurchaseLimits::default());
//!
//! assert_eq!(
//!     outcome.message(),
//!     "Account Id should be greater than zero\nInfants or Child only purchase not allowed"
//! );
//! ```

use crate::error::{CoreError, CoreResult};
use crate::limits::PurchaseLimits;
use crate::types::{AccountId, PurchaseRequest, TicketCategory, TicketLineItem};

// =============================================================================
// Rule Messages
// =============================================================================

pub const MSG_INVALID_ACCOUNT: &str = "Account Id should be greater than zero";
pub const MSG_NO_REQUESTS: &str = "Requests array is null or empty";
pub const MSG_TOO_MANY_TICKETS: &str = "Too many tickets in purchase";
pub const MSG_NO_ADULT: &str = "Infants or Child only purchase not allowed";
pub const MSG_TOO_MANY_INFANTS: &str = "Not enough adults for infants";

fn too_many_children_message(children_per_adult: u32, infants_present: bool) -> String {
    let suffix = if infants_present {
        " when infants are present"
    } else {
        ""
    };
    format!(
        "Not enough adults for children (1 adult per {} children{})",
        children_per_adult, suffix
    )
}

// =============================================================================
// Validation Outcome
// =============================================================================

/// Append-only list of rule violations for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    errors: Vec<String>,
}

impl ValidationOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one violated rule.
    pub fn push(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Violations in rule order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// True when the request passed every rule.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// All violations joined by newline, trailing whitespace trimmed.
    pub fn message(&self) -> String {
        self.errors.join("\n").trim_end().to_string()
    }

    /// Turns a non-empty outcome into the single aggregated error.
    pub fn into_result(self) -> CoreResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CoreError::InvalidPurchase(self.message()))
        }
    }
}

// =============================================================================
// Ticket Counts
// =============================================================================

/// Per-category quantity sums over a request's line items.
///
/// A category is "present" as soon as one line item names it, even with a
/// quantity of zero. Presence gates the ratio rules; the sums feed them.
/// Sums are `u64` so adding any number of `u32` quantities cannot overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketCounts {
    quantities: [u64; 3],
    present: [bool; 3],
}

impl TicketCounts {
    pub fn from_line_items(line_items: &[TicketLineItem]) -> Self {
        let mut counts = TicketCounts::default();
        for item in line_items {
            let idx = item.category().index();
            counts.present[idx] = true;
            counts.quantities[idx] += u64::from(item.quantity());
        }
        counts
    }

    #[inline]
    pub fn contains(&self, category: TicketCategory) -> bool {
        self.present[category.index()]
    }

    #[inline]
    pub fn quantity(&self, category: TicketCategory) -> u64 {
        self.quantities[category.index()]
    }
}

// =============================================================================
// Rules
// =============================================================================

/// One validation rule. Inspects the whole request and may append messages.
pub type Rule = fn(&PurchaseRequest<'_>, &PurchaseLimits, &TicketCounts, &mut ValidationOutcome);

/// The rules in execution order. Message order in the aggregated error
/// follows this slice.
pub const RULES: &[Rule] = &[
    check_account_id,
    check_requests_present,
    check_max_tickets,
    check_adult_present,
    check_infants_per_adult,
    check_children_per_adult,
];

fn check_account_id(
    request: &PurchaseRequest<'_>,
    _limits: &PurchaseLimits,
    _counts: &TicketCounts,
    outcome: &mut ValidationOutcome,
) {
    match request.account_id {
        Some(id) if id >= 1 => {}
        _ => outcome.push(MSG_INVALID_ACCOUNT),
    }
}

fn check_requests_present(
    request: &PurchaseRequest<'_>,
    _limits: &PurchaseLimits,
    _counts: &TicketCounts,
    outcome: &mut ValidationOutcome,
) {
    if request.line_items_or_empty().is_empty() {
        outcome.push(MSG_NO_REQUESTS);
    }
}

fn check_max_tickets(
    request: &PurchaseRequest<'_>,
    limits: &PurchaseLimits,
    _counts: &TicketCounts,
    outcome: &mut ValidationOutcome,
) {
    if request.line_items_or_empty().len() > limits.max_purchase_tickets {
        outcome.push(MSG_TOO_MANY_TICKETS);
    }
}

fn check_adult_present(
    request: &PurchaseRequest<'_>,
    _limits: &PurchaseLimits,
    counts: &TicketCounts,
    outcome: &mut ValidationOutcome,
) {
    // An empty list is already reported by check_requests_present.
    if !request.line_items_or_empty().is_empty() && !counts.contains(TicketCategory::Adult) {
        outcome.push(MSG_NO_ADULT);
    }
}

fn check_infants_per_adult(
    _request: &PurchaseRequest<'_>,
    _limits: &PurchaseLimits,
    counts: &TicketCounts,
    outcome: &mut ValidationOutcome,
) {
    if !(counts.contains(TicketCategory::Adult) && counts.contains(TicketCategory::Infant)) {
        return;
    }
    if counts.quantity(TicketCategory::Infant) > counts.quantity(TicketCategory::Adult) {
        outcome.push(MSG_TOO_MANY_INFANTS);
    }
}

fn check_children_per_adult(
    _request: &PurchaseRequest<'_>,
    limits: &PurchaseLimits,
    counts: &TicketCounts,
    outcome: &mut ValidationOutcome,
) {
    if !(counts.contains(TicketCategory::Adult) && counts.contains(TicketCategory::Child)) {
        return;
    }

    let adults = counts.quantity(TicketCategory::Adult);
    let children = counts.quantity(TicketCategory::Child);
    let infants_present = counts.quantity(TicketCategory::Infant) > 0;
    let children_per_adult = limits.children_per_adult(infants_present);

    if children > 0 && adults.saturating_mul(u64::from(children_per_adult)) < children {
        outcome.push(too_many_children_message(
            children_per_adult,
            infants_present,
        ));
    }
}

// =============================================================================
// Entry Point
// =============================================================================

/// Runs every rule against `request` and returns the collected violations.
pub fn validate(request: &PurchaseRequest<'_>, limits: &PurchaseLimits) -> ValidationOutcome {
    let counts = TicketCounts::from_line_items(request.line_items_or_empty());
    let mut outcome = ValidationOutcome::new();
    for rule in RULES {
        rule(request, limits, &counts, &mut outcome);
    }
    outcome
}

/// A request that passed every rule, with its account and line items
/// unwrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptedPurchase<'a> {
    pub account_id: AccountId,
    pub line_items: &'a [TicketLineItem],
}

/// Validates `request` and, when no rule is violated, returns it unwrapped.
///
/// A rejection carries the aggregated message of every violated rule.
pub fn accept<'a>(
    request: &PurchaseRequest<'a>,
    limits: &PurchaseLimits,
) -> CoreResult<AcceptedPurchase<'a>> {
    let outcome = validate(request, limits);

    // An absent account or line item list always leaves a message behind,
    // so the error arm never carries an empty text.
    match (request.account_id, request.line_items) {
        (Some(account_id), Some(line_items)) if outcome.is_empty() => Ok(AcceptedPurchase {
            account_id,
            line_items,
        }),
        _ => Err(CoreError::InvalidPurchase(outcome.message())),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
