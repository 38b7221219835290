//! Budget period representation
//!
//! One calendar month's allocation and what has been spent against it. These
//! two amounts are the entire durable state of the tool.

use crate::error::{FddError, FddResult};

use super::money::Money;

/// One month's allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BudgetPeriod {
    /// Total allocation for the month
    pub monthly_budget: Money,
    /// Accumulated spending since the month was initialized
    pub spent: Money,
}

impl BudgetPeriod {
    /// Create a period, rejecting negative amounts
    pub fn new(monthly_budget: Money, spent: Money) -> FddResult<Self> {
        if monthly_budget.is_negative() || spent.is_negative() {
            return Err(FddError::Validation(format!(
                "budget amounts must not be negative (budget {}, spent {})",
                monthly_budget.cents(),
                spent.cents()
            )));
        }
        Ok(Self {
            monthly_budget,
            spent,
        })
    }

    /// A fresh period with nothing spent yet
    pub fn fresh(monthly_budget: Money) -> Self {
        Self {
            monthly_budget,
            spent: Money::zero(),
        }
    }

    /// Whether spending has gone past the monthly allocation
    pub fn is_over_budget(&self) -> bool {
        self.spent > self.monthly_budget
    }

    /// Whether no budget has been configured
    pub fn has_budget(&self) -> bool {
        !self.monthly_budget.is_zero()
    }
}
