//! World Bank API client
//!
//! This module provides functionality to fetch indicator data from the
//! World Bank API and parse it into our IndicatorSeries data structures.
//! The public fetch path fails soft: any failure yields an empty series
//! with [`SeriesStatus::FetchFailed`], never an error.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::{country_name, IndicatorSeries, Observation, SeriesSource, SeriesStatus};

/// Base URL of the World Bank API (version 2)
pub const WORLD_BANK_BASE_URL: &str = "https://api.worldbank.org/v2";

/// Configuration for the World Bank client.
///
/// All knobs are explicit so tests can point the client at a local mock
/// server instead of the real API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API, without a trailing slash
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Page size for the single paginated request
    pub per_page: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: WORLD_BANK_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            per_page: 500,
        }
    }
}

/// Errors that can occur when fetching indicator data
///
/// These never cross the `SeriesSource` boundary; `fetch_series` converts
/// them into an empty series with [`SeriesStatus::FetchFailed`].
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed, including timeouts
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The API answered with a non-success HTTP status
    #[error("Unexpected HTTP status: {0}")]
    BadStatus(reqwest::StatusCode),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The body was valid JSON but not in the shape the API documents
    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Client for fetching indicator data from the World Bank API
pub struct WorldBankClient {
    client: Client,
    config: ClientConfig,
}

impl Default for WorldBankClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldBankClient {
    /// Create a new WorldBankClient with default settings
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new WorldBankClient with an explicit configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();
        Self { client, config }
    }

    /// Issues the request and parses the response.
    ///
    /// Internal only: `fetch_series` maps every error onto an empty series.
    async fn try_fetch(
        &self,
        country: &str,
        indicator: &str,
        start_year: i32,
        end_year: i32,
    ) -> Result<IndicatorSeries, FetchError> {
        let url = format!(
            "{}/country/{}/indicator/{}",
            self.config.base_url, country, indicator
        );
        let date = format!("{}:{}", start_year, end_year);
        let per_page = self.config.per_page.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("format", "json"),
                ("date", date.as_str()),
                ("per_page", per_page.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::BadStatus(response.status()));
        }

        let text = response.text().await?;
        let body: serde_json::Value = serde_json::from_str(&text)?;
        parse_series_body(&body, country, indicator, start_year, end_year)
    }
}

#[async_trait]
impl SeriesSource for WorldBankClient {
    async fn fetch_series(
        &self,
        country: &str,
        indicator: &str,
        start_year: i32,
        end_year: i32,
    ) -> IndicatorSeries {
        match self
            .try_fetch(country, indicator, start_year, end_year)
            .await
        {
            Ok(series) => series,
            Err(_) => IndicatorSeries::empty(country, indicator, SeriesStatus::FetchFailed),
        }
    }
}

/// Parses a World Bank response body into a series.
///
/// The body is a two-element array: pagination metadata, then a list of
/// records (or null when the selection has no rows). Records with a null
/// value or an unparseable year are skipped; years outside the requested
/// range are dropped. Output is sorted ascending by year with duplicate
/// years removed.
pub fn parse_series_body(
    body: &serde_json::Value,
    country: &str,
    indicator: &str,
    start_year: i32,
    end_year: i32,
) -> Result<IndicatorSeries, FetchError> {
    let elements = body
        .as_array()
        .ok_or_else(|| FetchError::Malformed("body is not a JSON array".to_string()))?;

    // A short body (or a null second element) is the API's way of saying
    // "no rows for this selection".
    if elements.len() < 2 || elements[1].is_null() {
        return Ok(IndicatorSeries::empty(
            country,
            indicator,
            SeriesStatus::NoData,
        ));
    }

    let records: Vec<ApiRecord> = serde_json::from_value(elements[1].clone())
        .map_err(|e| FetchError::Malformed(e.to_string()))?;

    let mut name_from_api: Option<String> = None;
    let mut points = Vec::new();
    for record in records {
        let Some(value) = record.value else {
            continue;
        };
        let Ok(year) = record.date.parse::<i32>() else {
            continue;
        };
        if year < start_year || year > end_year {
            continue;
        }
        if name_from_api.is_none() {
            if let Some(name) = &record.country {
                if !name.value.is_empty() {
                    name_from_api = Some(name.value.clone());
                }
            }
        }
        points.push(Observation { year, value });
    }

    points.sort_by_key(|p| p.year);
    points.dedup_by_key(|p| p.year);

    let status = if points.is_empty() {
        SeriesStatus::NoData
    } else {
        SeriesStatus::Ok
    };

    Ok(IndicatorSeries {
        country: country.to_string(),
        country_name: name_from_api
            .or_else(|| country_name(country).map(str::to_string))
            .unwrap_or_else(|| country.to_string()),
        indicator: indicator.to_string(),
        points,
        status,
    })
}

/// One row of the API response body
#[derive(Debug, Deserialize)]
struct ApiRecord {
    /// Year as a string, e.g. "2021"
    date: String,
    /// Observed value, null when the country has no data for that year
    value: Option<f64>,
    /// Country block carrying the display name
    country: Option<ApiName>,
}

/// A `{ "value": "..." }` name wrapper used throughout the API
#[derive(Debug, Deserialize)]
struct ApiName {
    #[serde(default)]
    value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sample valid World Bank API response (GDP for Nigeria, abridged)
    const VALID_RESPONSE: &str = r#"[
        {
            "page": 1,
            "pages": 1,
            "per_page": 500,
            "total": 4,
            "sourceid": "2",
            "lastupdated": "2025-07-01"
        },
        [
            {
                "indicator": { "id": "NY.GDP.MKTP.CD", "value": "GDP (current US$)" },
                "country": { "id": "NG", "value": "Nigeria" },
                "countryiso3code": "NGA",
                "date": "2021",
                "value": 440833583992.3,
                "unit": "",
                "obs_status": "",
                "decimal": 0
            },
            {
                "indicator": { "id": "NY.GDP.MKTP.CD", "value": "GDP (current US$)" },
                "country": { "id": "NG", "value": "Nigeria" },
                "countryiso3code": "NGA",
                "date": "2020",
                "value": null,
                "unit": "",
                "obs_status": "",
                "decimal": 0
            },
            {
                "indicator": { "id": "NY.GDP.MKTP.CD", "value": "GDP (current US$)" },
                "country": { "id": "NG", "value": "Nigeria" },
                "countryiso3code": "NGA",
                "date": "2019",
                "value": 448120428859.5,
                "unit": "",
                "obs_status": "",
                "decimal": 0
            },
            {
                "indicator": { "id": "NY.GDP.MKTP.CD", "value": "GDP (current US$)" },
                "country": { "id": "NG", "value": "Nigeria" },
                "countryiso3code": "NGA",
                "date": "2018",
                "value": 421738958907.8,
                "unit": "",
                "obs_status": "",
                "decimal": 0
            }
        ]
    ]"#;

    /// The API's "no rows" shape: metadata plus a null second element
    const NO_ROWS_RESPONSE: &str = r#"[
        { "page": 1, "pages": 0, "per_page": 500, "total": 0 },
        null
    ]"#;

    /// The API's error shape for an unknown indicator code
    const ERROR_RESPONSE: &str = r#"[
        { "message": [{ "id": "120", "key": "Invalid value", "value": "The provided parameter value is not valid" }] }
    ]"#;

    fn parse_valid(start_year: i32, end_year: i32) -> IndicatorSeries {
        let body: serde_json::Value = serde_json::from_str(VALID_RESPONSE).unwrap();
        parse_series_body(&body, "NGA", "NY.GDP.MKTP.CD", start_year, end_year).unwrap()
    }

    #[test]
    fn test_parse_valid_response_skips_nulls_and_sorts_ascending() {
        let series = parse_valid(2000, 2025);

        assert_eq!(series.status, SeriesStatus::Ok);
        assert_eq!(series.len(), 3, "null-valued 2020 row should be dropped");
        let years: Vec<i32> = series.points.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2018, 2019, 2021]);
    }

    #[test]
    fn test_parse_years_stay_within_requested_range() {
        let series = parse_valid(2019, 2021);

        assert!(series
            .points
            .iter()
            .all(|p| p.year >= 2019 && p.year <= 2021));
        assert_eq!(series.len(), 2, "2018 row should be dropped");
    }

    #[test]
    fn test_parse_takes_country_name_from_response() {
        let series = parse_valid(2000, 2025);
        assert_eq!(series.country_name, "Nigeria");
        assert_eq!(series.indicator, "NY.GDP.MKTP.CD");
    }

    #[test]
    fn test_parse_null_rows_element_is_no_data() {
        let body: serde_json::Value = serde_json::from_str(NO_ROWS_RESPONSE).unwrap();
        let series = parse_series_body(&body, "NGA", "SI.POV.GINI", 2000, 2025).unwrap();

        assert!(series.is_empty());
        assert_eq!(series.status, SeriesStatus::NoData);
    }

    #[test]
    fn test_parse_error_body_is_no_data() {
        let body: serde_json::Value = serde_json::from_str(ERROR_RESPONSE).unwrap();
        let series = parse_series_body(&body, "NGA", "BOGUS.CODE", 2000, 2025).unwrap();

        assert!(series.is_empty());
        assert_eq!(series.status, SeriesStatus::NoData);
    }

    #[test]
    fn test_parse_non_array_body_is_malformed() {
        let body = serde_json::json!({ "unexpected": true });
        let result = parse_series_body(&body, "NGA", "NY.GDP.MKTP.CD", 2000, 2025);
        assert!(matches!(result, Err(FetchError::Malformed(_))));
    }

    #[test]
    fn test_parse_rows_of_wrong_shape_is_malformed() {
        let body = serde_json::json!([{ "page": 1 }, ["not", "records"]]);
        let result = parse_series_body(&body, "NGA", "NY.GDP.MKTP.CD", 2000, 2025);
        assert!(matches!(result, Err(FetchError::Malformed(_))));
    }

    #[test]
    fn test_parse_malformed_json() {
        let malformed = "{ invalid json }";
        let result: Result<serde_json::Value, _> = serde_json::from_str(malformed);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_skips_unparseable_years() {
        let body = serde_json::json!([
            { "page": 1 },
            [
                { "date": "2020", "value": 1.0, "country": { "value": "Nigeria" } },
                { "date": "2020Q3", "value": 2.0, "country": { "value": "Nigeria" } }
            ]
        ]);
        let series = parse_series_body(&body, "NGA", "X", 2000, 2025).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.points[0].year, 2020);
    }

    #[test]
    fn test_parse_dedups_duplicate_years_keeping_first() {
        let body = serde_json::json!([
            { "page": 1 },
            [
                { "date": "2020", "value": 1.0, "country": { "value": "Nigeria" } },
                { "date": "2020", "value": 9.0, "country": { "value": "Nigeria" } },
                { "date": "2021", "value": 2.0, "country": { "value": "Nigeria" } }
            ]
        ]);
        let series = parse_series_body(&body, "NGA", "X", 2000, 2025).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.points[0].value, 1.0);
    }

    #[test]
    fn test_parse_all_null_values_is_no_data() {
        let body = serde_json::json!([
            { "page": 1 },
            [
                { "date": "2020", "value": null, "country": { "value": "Nigeria" } },
                { "date": "2021", "value": null, "country": { "value": "Nigeria" } }
            ]
        ]);
        let series = parse_series_body(&body, "NGA", "X", 2000, 2025).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.status, SeriesStatus::NoData);
    }

    #[test]
    fn test_default_config_matches_api_conventions() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, WORLD_BANK_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.per_page, 500);
    }

    #[tokio::test]
    async fn test_fetch_series_fails_soft_when_unreachable() {
        // Point the client at a port nothing listens on; the contract is an
        // empty FetchFailed series, not an error.
        let client = WorldBankClient::with_config(ClientConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout: Duration::from_millis(250),
            per_page: 500,
        });

        let series = client
            .fetch_series("NGA", "NY.GDP.MKTP.CD", 2000, 2025)
            .await;

        assert!(series.is_empty());
        assert_eq!(series.status, SeriesStatus::FetchFailed);
    }
}
