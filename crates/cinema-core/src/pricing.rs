//! # Pricing Module
//!
//! Turns an accepted purchase into [`Totals`].
//!
//! ## User Workflow
//! ```text
//! Line items: Adult×2, Child×1, Infant×1
//!      │
//!      ▼
//! price_for(category) per line item  (Adult 25, Child 15, Infant 0)
//!      │
//!      ▼
//! price = 2×25 + 1×15 + 1×0 = 65
//! ticket_count = 2 + 1 + 1 = 4
//! ```
//!
//! The unit price source is a closure so this crate stays free of I/O; the
//! service crate passes its price lookup gateway in.

use crate::error::{CoreError, CoreResult};
use crate::types::{TicketCategory, TicketLineItem, Totals};

/// Sums quantities and `unit price × quantity` over every line item.
///
/// `price_for` is called exactly once per line item, in order, with no
/// caching across line items of the same category. Overflow of either total
/// is reported as [`CoreError::TotalsOverflow`].
///
/// ## Example
/// ```rust
/// use cinema_core::pricing::compute_totals;
/// use cinema_core::{TicketCategory, TicketLineItem};
///
/// let items = [
///     TicketLineItem::new(TicketCategory::Adult, 1),
///     TicketLineItem::new(TicketCategory::Child, 1),
/// ];
/// let totals = compute_totals(&items, |category| match category {
///     TicketCategory::Adult => 25,
///     TicketCategory::Child => 15,
///     TicketCategory::Infant => 0,
/// })
/// .unwrap();
///
/// assert_eq!(totals.price, 40);
/// assert_eq!(totals.ticket_count, 2);
/// ```
pub fn compute_totals<F>(line_items: &[TicketLineItem], mut price_for: F) -> CoreResult<Totals>
where
    F: FnMut(TicketCategory) -> u32,
{
    line_items.iter().try_fold(Totals::zero(), |totals, item| {
        let unit_price = price_for(item.category());
        let line_price = unit_price
            .checked_mul(item.quantity())
            .ok_or(CoreError::TotalsOverflow)?;
        totals.checked_add_line(item.quantity(), line_price)
    })
}
