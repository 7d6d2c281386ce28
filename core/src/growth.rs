//! Employee-growth stability.
//!
//! A trajectory is stable when every window shows real growth and the fastest
//! annualized rate is less than three times the slowest. This rejects both
//! shrinking headcount and erratic spurts.

use screener_common::company::GrowthRates;

/// Ceiling on `max / min` across the annualized rates.
const MAX_DISPERSION: f64 = 3.0;

/// Decides whether `growth` describes a stable trajectory.
///
/// Without a 2-year figure the company is too young to annualize, so the
/// 1-year rate must strictly exceed a positive 6-month rate instead.
pub fn is_stable(growth: &GrowthRates) -> bool {
    let Some(rates) = growth.annualized() else {
        return growth.one_year > growth.six_month && growth.six_month > 0.0;
    };

    // Positivity first: it also keeps the ratio below away from a zero divisor.
    if !rates.iter().all(|rate| *rate > 0.0) {
        return false;
    }

    let max: f64 = rates.iter().copied().fold(f64::MIN, f64::max);
    let min: f64 = rates.iter().copied().fold(f64::MAX, f64::min);

    max / min < MAX_DISPERSION
}
