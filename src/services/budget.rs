//! Budget service
//!
//! Loads the stored period, runs the engine and persists the result. Each
//! operation reads and writes the record at most once.

use tracing::info;

use crate::error::FddResult;
use crate::models::{BudgetPeriod, CalendarContext, Money};
use crate::storage::StateStore;

use super::engine::{self, SpendOutcome, StatusReport};

/// Service for the month's budget
pub struct BudgetService<'a> {
    store: &'a StateStore,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(store: &'a StateStore) -> Self {
        Self { store }
    }

    /// Start a new month, replacing whatever was stored before
    ///
    /// Nothing is written when the allowance is rejected.
    pub fn init_month(&self, daily_allowance: Money, today: &CalendarContext) -> FddResult<BudgetPeriod> {
        let period = engine::init_period(daily_allowance, today)?;
        self.store.save(&period)?;

        info!(
            daily_allowance = daily_allowance.cents(),
            monthly_budget = period.monthly_budget.cents(),
            days = today.days_in_month(),
            "initialized month"
        );
        Ok(period)
    }

    /// Record a spend against the stored month
    pub fn spend(&self, amount: Money) -> FddResult<SpendOutcome> {
        let current = self.store.load()?;
        let outcome = engine::record_spend(&current, amount)?;
        self.store.save(&outcome.period)?;

        if outcome.over_budget {
            info!(
                spent = outcome.period.spent.cents(),
                monthly_budget = outcome.period.monthly_budget.cents(),
                "monthly budget exceeded"
            );
        }
        Ok(outcome)
    }

    /// Report on the stored month without modifying it
    pub fn status(&self, today: &CalendarContext) -> FddResult<StatusReport> {
        let period = self.store.load()?;
        Ok(engine::compute_status(&period, today))
    }
}
