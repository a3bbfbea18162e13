//! # Purchase Limits
//!
//! The numeric bounds the validation rules check against. Defaults match the
//! box office policy; deployments may override them through configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::{MAX_CHILDREN_PER_ADULT, MAX_CHILDREN_PER_ADULT_WITH_INFANT, MAX_PURCHASE_TICKETS};

/// Bounds applied by the ticket count and ratio rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseLimits {
    /// Maximum number of line items in one purchase.
    ///
    /// Counts line items as submitted, not the summed quantity.
    #[serde(default = "default_max_purchase_tickets")]
    pub max_purchase_tickets: usize,

    /// Children one adult may accompany when no infant is in the purchase.
    #[serde(default = "default_max_children_per_adult")]
    pub max_children_per_adult: u32,

    /// Children one adult may accompany when infants are in the purchase.
    #[serde(default = "default_max_children_per_adult_with_infant")]
    pub max_children_per_adult_with_infant: u32,
}

fn default_max_purchase_tickets() -> usize {
    MAX_PURCHASE_TICKETS
}

fn default_max_children_per_adult() -> u32 {
    MAX_CHILDREN_PER_ADULT
}

fn default_max_children_per_adult_with_infant() -> u32 {
    MAX_CHILDREN_PER_ADULT_WITH_INFANT
}

impl Default for PurchaseLimits {
    fn default() -> Self {
        PurchaseLimits {
            max_purchase_tickets: default_max_purchase_tickets(),
            max_children_per_adult: default_max_children_per_adult(),
            max_children_per_adult_with_infant: default_max_children_per_adult_with_infant(),
        }
    }
}

impl PurchaseLimits {
    /// Rejects zero limits, which would make every purchase invalid.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_purchase_tickets == 0 {
            return Err(CoreError::InvalidLimit {
                field: "max_purchase_tickets",
            });
        }
        if self.max_children_per_adult == 0 {
            return Err(CoreError::InvalidLimit {
                field: "max_children_per_adult",
            });
        }
        if self.max_children_per_adult_with_infant == 0 {
            return Err(CoreError::InvalidLimit {
                field: "max_children_per_adult_with_infant",
            });
        }
        Ok(())
    }

    /// Children allowed per adult, depending on whether infants come along.
    #[inline]
    pub fn children_per_adult(&self, infants_present: bool) -> u32 {
        if infants_present {
            self.max_children_per_adult_with_infant
        } else {
            self.max_children_per_adult
        }
    }
}
