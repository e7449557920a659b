//! Overhead aggregation.
//!
//! Sums fixed monthly business costs into a single monthly or annual figure.

use rust_decimal::Decimal;

use crate::models::OverheadCosts;

/// Number of months used to annualize monthly figures.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Returns the total monthly overhead.
///
/// Returns zero when no overhead has been recorded; otherwise rent +
/// utilities + insurance + other costs + every software subscription.
///
/// # Examples
///
/// ```
/// use cost_engine::calculation::total_monthly_overhead;
/// use rust_decimal::Decimal;
///
/// assert_eq!(total_monthly_overhead(None), Decimal::ZERO);
/// ```
pub fn total_monthly_overhead(overhead: Option<&OverheadCosts>) -> Decimal {
    match overhead {
        None => Decimal::ZERO,
        Some(o) => {
            o.monthly_rent
                + o.monthly_utilities
                + o.monthly_insurance
                + o.other_monthly_costs
                + o.software_total()
        }
    }
}

/// Returns the total monthly overhead multiplied by twelve, unrounded.
pub fn annual_overhead(overhead: Option<&OverheadCosts>) -> Decimal {
    total_monthly_overhead(overhead) * Decimal::from(MONTHS_PER_YEAR)
}
