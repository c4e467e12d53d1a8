//! Command-line interface parsing for NaijaStats
//!
//! This module handles parsing of CLI arguments using clap, including the
//! --page flag for opening the dashboard on a specific page and --horizon
//! for presetting the forecast projection length.

use clap::Parser;
use thiserror::Error;

use crate::predict::{MAX_HORIZON, MIN_HORIZON};

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified page name is not recognized
    #[error("Invalid page: '{0}'. Valid pages: overview, indicators, comparison, sdg, forecast")]
    InvalidPage(String),
    /// The forecast horizon is outside the supported range
    #[error("Invalid horizon: {0}. Horizon must be between {MIN_HORIZON} and {MAX_HORIZON} years")]
    InvalidHorizon(u32),
}

/// NaijaStats - Nigeria development indicators in the terminal
#[derive(Parser, Debug)]
#[command(name = "naijastats")]
#[command(about = "Nigeria development indicators, peer comparisons, and forecasts")]
#[command(version)]
pub struct Cli {
    /// Open directly on a specific page
    ///
    /// Examples:
    ///   naijastats --page forecast      # Open on the Forecast page
    ///   naijastats --page comparison    # Open on the Comparison page
    ///
    /// Valid pages: overview, indicators, comparison, sdg, forecast
    #[arg(long, value_name = "PAGE")]
    pub page: Option<String>,

    /// Number of years the Forecast page projects ahead (1-10)
    #[arg(long, value_name = "YEARS")]
    pub horizon: Option<u32>,
}

/// Dashboard pages reachable from the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartPage {
    /// KPI tiles and headline trends
    Overview,
    /// Browse the indicator registry
    Indicators,
    /// Nigeria against peer African nations
    Comparison,
    /// SDG progress table
    Sdg,
    /// Linear trend projections
    Forecast,
}

impl StartPage {
    /// Parses user input into a StartPage.
    ///
    /// Matching is case-insensitive and supports aliases:
    /// - "overview" | "home" -> Overview
    /// - "indicators" | "browse" -> Indicators
    /// - "comparison" | "compare" | "global" -> Comparison
    /// - "sdg" -> Sdg
    /// - "forecast" | "predict" | "predictions" -> Forecast
    ///
    /// Returns `None` if the input doesn't match any page.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<StartPage> {
        match s.to_lowercase().trim() {
            "overview" | "home" => Some(StartPage::Overview),
            "indicators" | "browse" => Some(StartPage::Indicators),
            "comparison" | "compare" | "global" => Some(StartPage::Comparison),
            "sdg" => Some(StartPage::Sdg),
            "forecast" | "predict" | "predictions" => Some(StartPage::Forecast),
            _ => None,
        }
    }
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Page to show once the initial data load completes
    pub start_page: StartPage,
    /// Forecast horizon in years
    pub horizon: u32,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            start_page: StartPage::Overview,
            horizon: 5,
        }
    }
}

/// Parses a page string argument into a StartPage.
///
/// # Arguments
/// * `s` - The page string from CLI
///
/// # Returns
/// * `Ok(StartPage)` if the string matches a valid page
/// * `Err(CliError::InvalidPage)` if the string doesn't match
pub fn parse_page_arg(s: &str) -> Result<StartPage, CliError> {
    StartPage::from_str(s).ok_or_else(|| CliError::InvalidPage(s.to_string()))
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Arguments
    /// * `cli` - The parsed Cli struct
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if an invalid page or horizon was specified
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let mut config = StartupConfig::default();
        if let Some(page) = &cli.page {
            config.start_page = parse_page_arg(page)?;
        }
        if let Some(horizon) = cli.horizon {
            if !(MIN_HORIZON..=MAX_HORIZON).contains(&horizon) {
                return Err(CliError::InvalidHorizon(horizon));
            }
            config.horizon = horizon;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_arg_overview_aliases() {
        assert_eq!(parse_page_arg("overview").unwrap(), StartPage::Overview);
        assert_eq!(parse_page_arg("home").unwrap(), StartPage::Overview);
    }

    #[test]
    fn test_parse_page_arg_indicator_aliases() {
        assert_eq!(parse_page_arg("indicators").unwrap(), StartPage::Indicators);
        assert_eq!(parse_page_arg("browse").unwrap(), StartPage::Indicators);
    }

    #[test]
    fn test_parse_page_arg_comparison_aliases() {
        assert_eq!(parse_page_arg("comparison").unwrap(), StartPage::Comparison);
        assert_eq!(parse_page_arg("compare").unwrap(), StartPage::Comparison);
        assert_eq!(parse_page_arg("global").unwrap(), StartPage::Comparison);
    }

    #[test]
    fn test_parse_page_arg_is_case_insensitive() {
        assert_eq!(parse_page_arg("SDG").unwrap(), StartPage::Sdg);
        assert_eq!(parse_page_arg("Forecast").unwrap(), StartPage::Forecast);
    }

    #[test]
    fn test_parse_page_arg_invalid() {
        let result = parse_page_arg("dashboard");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid page"));
        assert!(err.to_string().contains("dashboard"));
    }

    #[test]
    fn test_startup_config_default() {
        let config = StartupConfig::default();
        assert_eq!(config.start_page, StartPage::Overview);
        assert_eq!(config.horizon, 5);
    }

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["naijastats"]);
        assert!(cli.page.is_none());
        assert!(cli.horizon.is_none());
    }

    #[test]
    fn test_cli_parse_page_and_horizon() {
        let cli = Cli::parse_from(["naijastats", "--page", "forecast", "--horizon", "8"]);
        assert_eq!(cli.page.as_deref(), Some("forecast"));
        assert_eq!(cli.horizon, Some(8));
    }

    #[test]
    fn test_startup_config_from_cli_defaults() {
        let cli = Cli::parse_from(["naijastats"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.start_page, StartPage::Overview);
        assert_eq!(config.horizon, 5);
    }

    #[test]
    fn test_startup_config_from_cli_with_page() {
        let cli = Cli::parse_from(["naijastats", "--page", "sdg"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.start_page, StartPage::Sdg);
    }

    #[test]
    fn test_startup_config_from_cli_invalid_page() {
        let cli = Cli::parse_from(["naijastats", "--page", "invalid"]);
        assert!(StartupConfig::from_cli(&cli).is_err());
    }

    #[test]
    fn test_startup_config_from_cli_horizon_bounds() {
        let cli = Cli::parse_from(["naijastats", "--horizon", "10"]);
        assert_eq!(StartupConfig::from_cli(&cli).unwrap().horizon, 10);

        let cli = Cli::parse_from(["naijastats", "--horizon", "0"]);
        assert!(StartupConfig::from_cli(&cli).is_err());

        let cli = Cli::parse_from(["naijastats", "--horizon", "11"]);
        assert!(StartupConfig::from_cli(&cli).is_err());
    }
}
