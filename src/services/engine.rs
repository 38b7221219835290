//! Budget engine
//!
//! Pure calendar and allowance arithmetic. State is always passed in and
//! returned; nothing is cached between calls.
//!
//! Spending is prorated by day: on day `d` of an `n`-day month the allowance
//! earned so far is `floor(monthly_budget * d / n)`. Whatever has been spent
//! beyond that is paid back by the days still to come.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::{FddError, FddResult};
use crate::models::{BudgetPeriod, CalendarContext, Money};

/// Result of recording a spend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpendOutcome {
    /// The period with the amount added
    pub period: BudgetPeriod,
    /// The amount that was recorded
    pub amount: Money,
    /// Spending is now past the monthly allocation
    pub over_budget: bool,
}

/// When spending is allowed again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// Money is left today
    Available { remaining: Money },
    /// Spending reopens later this month
    AvailableLater { on: NaiveDate },
    /// The month's budget is used up; spending reopens on the 1st
    AvailableNextMonth { on: NaiveDate },
    /// The stored budget is zero, so there is nothing to prorate
    NoBudget,
}

/// Answer to "how much can I spend today?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusReport {
    pub availability: Availability,
    /// The date the question was asked on
    pub today: CalendarContext,
    pub period: BudgetPeriod,
    /// Monthly budget divided evenly by the days in the month
    pub daily_budget: Money,
    /// Prorated allowance up to and including today
    pub budget_today: Money,
}

impl StatusReport {
    /// Amount left today, if any
    pub fn remaining(&self) -> Option<Money> {
        match self.availability {
            Availability::Available { remaining } => Some(remaining),
            _ => None,
        }
    }

    /// The date the report refers to: today, or the day spending reopens
    pub fn date(&self) -> NaiveDate {
        match self.availability {
            Availability::Available { .. } | Availability::NoBudget => self.today.date(),
            Availability::AvailableLater { on } | Availability::AvailableNextMonth { on } => on,
        }
    }
}

/// Start a new month from a per-day allowance
///
/// # Errors
///
/// `InvalidAllowance` for a zero or negative allowance, `Validation` if the
/// monthly total does not fit.
pub fn init_period(daily_allowance: Money, today: &CalendarContext) -> FddResult<BudgetPeriod> {
    if daily_allowance.cents() <= 0 {
        return Err(FddError::InvalidAllowance(daily_allowance.cents()));
    }

    let days = i64::from(today.days_in_month());
    let monthly_budget = daily_allowance.checked_mul(days).ok_or_else(|| {
        FddError::Validation(format!(
            "daily allowance {} is too large for a {}-day month",
            daily_allowance.cents(),
            days
        ))
    })?;

    Ok(BudgetPeriod::fresh(monthly_budget))
}

/// Add a spend to the period
///
/// # Errors
///
/// `InvalidAmount` for a negative amount, `Validation` if the total overflows.
pub fn record_spend(period: &BudgetPeriod, amount: Money) -> FddResult<SpendOutcome> {
    if amount.is_negative() {
        return Err(FddError::InvalidAmount(amount.cents()));
    }

    let spent = period
        .spent
        .checked_add(amount)
        .ok_or_else(|| FddError::Validation("total spending is too large".into()))?;

    let period = BudgetPeriod {
        monthly_budget: period.monthly_budget,
        spent,
    };

    Ok(SpendOutcome {
        period,
        amount,
        over_budget: period.is_over_budget(),
    })
}

/// Work out how much may be spent today, or when spending reopens
pub fn compute_status(period: &BudgetPeriod, today: &CalendarContext) -> StatusReport {
    let days = i64::from(today.days_in_month());
    let day = i64::from(today.day());
    let budget = period.monthly_budget.cents();
    let spent = period.spent.cents();

    let report = |availability, daily_budget, budget_today| StatusReport {
        availability,
        today: *today,
        period: *period,
        daily_budget: Money::from_cents(daily_budget),
        budget_today: Money::from_cents(budget_today),
    };

    if budget == 0 {
        return report(Availability::NoBudget, 0, 0);
    }

    let daily_budget = budget / days;
    // Never exceeds `budget`, so the narrowing is lossless
    let budget_today = (i128::from(budget) * i128::from(day) / i128::from(days)) as i64;
    let remaining = budget_today - spent;

    debug!(budget, spent, daily_budget, budget_today, remaining, "computed allowance");

    let availability = if remaining >= 0 {
        Availability::Available {
            remaining: Money::from_cents(remaining),
        }
    } else if spent < budget {
        reopening_day(budget, spent, daily_budget, today)
    } else {
        Availability::AvailableNextMonth {
            on: today.first_of_next_month(),
        }
    };

    report(availability, daily_budget, budget_today)
}

/// Day spending reopens when today's share is already overspent
///
/// The prediction is month-local. A day outside this month (possible when the
/// budget was initialized in a month of a different length) rolls over to the
/// 1st of next month, and a day not after today moves to tomorrow.
fn reopening_day(budget: i64, spent: i64, daily_budget: i64, today: &CalendarContext) -> Availability {
    let next_month = Availability::AvailableNextMonth {
        on: today.first_of_next_month(),
    };

    if daily_budget == 0 {
        warn!(budget, "daily budget rounds to zero; deferring to next month");
        return next_month;
    }

    let days = i64::from(today.days_in_month());
    let mut next_day = days - (budget - spent) / daily_budget;
    if spent % daily_budget == 0 {
        next_day += 1;
    }

    let tomorrow = i64::from(today.day()) + 1;
    if next_day < tomorrow {
        debug!(next_day, tomorrow, "reopening day not after today; using tomorrow");
        next_day = tomorrow;
    }

    if next_day > days {
        warn!(next_day, days, "reopening day past end of month; rolling over");
        return next_month;
    }

    u32::try_from(next_day)
        .ok()
        .and_then(|d| today.day_in_month(d))
        .map(|on| Availability::AvailableLater { on })
        .unwrap_or(next_month)
}
