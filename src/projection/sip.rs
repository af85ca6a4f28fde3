//! Systematic investment plan projection with optional annual step-up

use super::series::{ProjectionSeries, YearPoint};

/// Contributions per projection year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Project a monthly contribution compounded monthly.
///
/// Each month deposits first, then applies `annual_rate_percent / 1200`.
/// With step-up enabled the monthly amount grows by `step_up_rate_percent`
/// after each year, so the increase first shows in year 2.
pub fn project_sip(
    monthly_contribution: f64,
    annual_rate_percent: f64,
    years: u32,
    step_up_enabled: bool,
    step_up_rate_percent: f64,
) -> ProjectionSeries {
    let monthly_growth = 1.0 + annual_rate_percent / 1200.0;
    let mut series = ProjectionSeries::with_capacity(years);
    let mut current_amount = 0.0;
    let mut total_invested = 0.0;
    let mut monthly_amount = monthly_contribution;

    for year in 1..=years {
        for _month in 1..=MONTHS_PER_YEAR {
            current_amount += monthly_amount;
            total_invested += monthly_amount;
            current_amount *= monthly_growth;
        }

        series.push(YearPoint::sip(year, current_amount.round(), total_invested.round()));

        if step_up_enabled {
            monthly_amount *= 1.0 + step_up_rate_percent / 100.0;
        }
    }

    series
}
