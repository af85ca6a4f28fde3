//! Lump-sum projection: one upfront amount compounded annually

use super::series::{ProjectionSeries, YearPoint};

/// Project a single upfront investment compounded once per year.
///
/// The running balance is never rounded; only the reported value is.
/// Zero years yields an empty series.
pub fn project_lump_sum(principal: f64, annual_rate_percent: f64, years: u32) -> ProjectionSeries {
    let growth = 1.0 + annual_rate_percent / 100.0;
    let mut series = ProjectionSeries::with_capacity(years);
    let mut current_amount = principal;

    for year in 1..=years {
        current_amount *= growth;
        series.push(YearPoint::lump_sum(year, current_amount.round()));
    }

    series
}
