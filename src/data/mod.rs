//! Core data models for NaijaStats
//!
//! This module contains the series types used throughout the application,
//! the registry of known indicators and countries, and the World Bank API
//! client.

pub mod registry;
pub mod worldbank;

pub use registry::{
    all_indicators, comparison_countries, country_name, indicator_by_code, indicator_by_key,
    sdg_indicators, Category, Country, Indicator, SdgIndicator,
};
#[allow(unused_imports)]
pub use worldbank::{parse_series_body, ClientConfig, FetchError, WorldBankClient};

use async_trait::async_trait;

/// ISO3 code of the country the dashboard is about.
pub const HOME_COUNTRY: &str = "NGA";

/// First year of data the dashboard requests, by convention.
pub const DATA_START_YEAR: i32 = 2000;

/// Last year of data the dashboard requests, by convention.
pub const DATA_END_YEAR: i32 = 2025;

/// Why a series has the rows it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStatus {
    /// The fetch succeeded and returned at least one usable row
    Ok,
    /// The fetch succeeded but the API had no rows for this selection
    NoData,
    /// The fetch failed (network, timeout, bad status, or parse error)
    FetchFailed,
}

/// A single (year, value) observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Calendar year of the observation
    pub year: i32,
    /// Observed value; rows with a null value are dropped at parse time
    pub value: f64,
}

/// One (country, indicator) time series.
///
/// Invariant: `points` is sorted ascending by year and years are unique.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSeries {
    /// ISO3 country code (e.g. "NGA")
    pub country: String,
    /// Display name of the country as reported by the API
    pub country_name: String,
    /// World Bank indicator code (e.g. "NY.GDP.MKTP.CD")
    pub indicator: String,
    /// Observations, sorted ascending by year
    pub points: Vec<Observation>,
    /// Outcome of the fetch that produced this series
    pub status: SeriesStatus,
}

impl IndicatorSeries {
    /// Creates an empty series with the given status.
    pub fn empty(country: &str, indicator: &str, status: SeriesStatus) -> Self {
        Self {
            country: country.to_string(),
            country_name: country_name(country).unwrap_or(country).to_string(),
            indicator: indicator.to_string(),
            points: Vec::new(),
            status,
        }
    }

    /// Returns true when the series holds no observations.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of observations in the series.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// The most recent observation, if any.
    pub fn latest(&self) -> Option<Observation> {
        self.points.last().copied()
    }

    /// The earliest observation, if any.
    pub fn earliest(&self) -> Option<Observation> {
        self.points.first().copied()
    }
}

/// A source of indicator series.
///
/// Implementations must fail soft: return an empty series on any failure,
/// never an error.
#[async_trait]
pub trait SeriesSource: Send + Sync {
    /// Fetches one (country, indicator) series limited to [start_year, end_year].
    async fn fetch_series(
        &self,
        country: &str,
        indicator: &str,
        start_year: i32,
        end_year: i32,
    ) -> IndicatorSeries;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series_of(points: &[(i32, f64)]) -> IndicatorSeries {
        IndicatorSeries {
            country: "NGA".to_string(),
            country_name: "Nigeria".to_string(),
            indicator: "NY.GDP.MKTP.CD".to_string(),
            points: points
                .iter()
                .map(|&(year, value)| Observation { year, value })
                .collect(),
            status: SeriesStatus::Ok,
        }
    }

    #[test]
    fn test_empty_series_has_no_observations() {
        let series = IndicatorSeries::empty("NGA", "NY.GDP.MKTP.CD", SeriesStatus::FetchFailed);
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
        assert_eq!(series.status, SeriesStatus::FetchFailed);
        assert!(series.latest().is_none());
        assert!(series.earliest().is_none());
    }

    #[test]
    fn test_empty_series_resolves_known_country_names() {
        let series = IndicatorSeries::empty("KEN", "SP.POP.TOTL", SeriesStatus::NoData);
        assert_eq!(series.country_name, "Kenya");

        // Unknown codes fall back to the code itself
        let series = IndicatorSeries::empty("XXX", "SP.POP.TOTL", SeriesStatus::NoData);
        assert_eq!(series.country_name, "XXX");
    }

    #[test]
    fn test_latest_and_earliest_bracket_the_series() {
        let series = series_of(&[(2018, 1.0), (2019, 2.0), (2021, 3.0)]);
        assert_eq!(series.earliest().unwrap().year, 2018);
        assert_eq!(series.latest().unwrap().year, 2021);
        assert_eq!(series.latest().unwrap().value, 3.0);
    }
}
