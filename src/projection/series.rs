//! Year-indexed output structures for projections

use serde::{Deserialize, Serialize};

/// Balance at the end of one projection year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearPoint {
    /// Projection year (1-indexed)
    pub year: u32,

    /// Accumulated value at end of year, rounded to whole currency units
    pub value: f64,

    /// Cumulative contributions at end of year (SIP only), rounded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invested: Option<f64>,
}

impl YearPoint {
    /// Point for a lump-sum projection (no contribution tracking)
    pub fn lump_sum(year: u32, value: f64) -> Self {
        Self { year, value, invested: None }
    }

    /// Point for a SIP projection
    pub fn sip(year: u32, value: f64, invested: f64) -> Self {
        Self { year, value, invested: Some(invested) }
    }
}

/// Chronologically ordered projection output, one point per year
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectionSeries {
    points: Vec<YearPoint>,
}

impl ProjectionSeries {
    pub fn with_capacity(years: u32) -> Self {
        Self {
            points: Vec::with_capacity(years as usize),
        }
    }

    /// Append the next year's point
    pub fn push(&mut self, point: YearPoint) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[YearPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, YearPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Final year's point, if any
    pub fn last(&self) -> Option<&YearPoint> {
        self.points.last()
    }
}

impl<'a> IntoIterator for &'a ProjectionSeries {
    type Item = &'a YearPoint;
    type IntoIter = std::slice::Iter<'a, YearPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lump_sum_point_omits_invested_in_json() {
        let json = serde_json::to_string(&YearPoint::lump_sum(1, 5500.0)).unwrap();
        assert_eq!(json, r#"{"year":1,"value":5500.0}"#);
    }

    #[test]
    fn test_series_serializes_as_array() {
        let mut series = ProjectionSeries::with_capacity(2);
        series.push(YearPoint::sip(1, 63351.0, 60000.0));
        series.push(YearPoint::sip(2, 133337.0, 120000.0));

        let value = serde_json::to_value(&series).unwrap();
        assert!(value.is_array());
        assert_eq!(value[1]["invested"], 120000.0);
        assert_eq!(series.last().map(|p| p.year), Some(2));
    }
}
