//! CSV export of series and forecast data
//!
//! The detail and forecast views can write the data behind the current
//! chart to a CSV file in the working directory, mirroring the download
//! buttons of a web dashboard.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use crate::data::IndicatorSeries;
use crate::predict::Forecast;

/// Builds the export file name for an indicator/country pair.
///
/// # Example
///
/// ```
/// use naijastats::export::export_file_name;
///
/// assert_eq!(export_file_name("gdp", "NGA"), "gdp_NGA.csv");
/// ```
pub fn export_file_name(indicator_key: &str, country: &str) -> String {
    format!("{}_{}.csv", indicator_key, country)
}

/// Writes a series as `year,value` rows.
pub fn write_series_csv(path: &Path, series: &IndicatorSeries) -> io::Result<()> {
    let mut out = String::from("year,value\n");
    for point in &series.points {
        let _ = writeln!(out, "{},{}", point.year, point.value);
    }
    fs::write(path, out)
}

/// Writes historical and projected rows side by side.
///
/// Historical rows carry only the `actual` column; projected rows carry
/// `predicted`, `lower`, and `upper`. The layout matches the combined
/// table a spreadsheet user would expect to chart directly.
pub fn write_forecast_csv(
    path: &Path,
    series: &IndicatorSeries,
    forecast: &Forecast,
) -> io::Result<()> {
    let mut out = String::from("year,actual,predicted,lower,upper\n");
    for point in &series.points {
        let _ = writeln!(out, "{},{},,,", point.year, point.value);
    }
    for point in &forecast.points {
        let _ = writeln!(
            out,
            "{},,{},{},{}",
            point.year, point.predicted, point.lower, point.upper
        );
    }
    fs::write(path, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Observation, SeriesStatus};
    use crate::predict::linear_forecast;

    fn sample_series() -> IndicatorSeries {
        IndicatorSeries {
            country: "NGA".to_string(),
            country_name: "Nigeria".to_string(),
            indicator: "NY.GDP.MKTP.CD".to_string(),
            points: vec![
                Observation {
                    year: 2000,
                    value: 10.0,
                },
                Observation {
                    year: 2001,
                    value: 20.0,
                },
                Observation {
                    year: 2002,
                    value: 30.0,
                },
            ],
            status: SeriesStatus::Ok,
        }
    }

    #[test]
    fn test_export_file_name_joins_key_and_country() {
        assert_eq!(export_file_name("life_expectancy", "NGA"), "life_expectancy_NGA.csv");
    }

    #[test]
    fn test_series_csv_has_header_and_one_row_per_point() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gdp_NGA.csv");

        write_series_csv(&path, &sample_series()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "year,value");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "2000,10");
    }

    #[test]
    fn test_forecast_csv_separates_actual_and_predicted_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gdp_NGA.csv");
        let series = sample_series();
        let forecast = linear_forecast(&series, 2).unwrap();

        write_forecast_csv(&path, &series, &forecast).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "year,actual,predicted,lower,upper");
        // 3 historical + 2 projected rows
        assert_eq!(lines.len(), 6);
        assert!(lines[1].starts_with("2000,10,"));
        assert!(lines[4].starts_with("2003,,40"));
    }

    #[test]
    fn test_empty_series_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        let series = IndicatorSeries::empty("NGA", "X", SeriesStatus::NoData);

        write_series_csv(&path, &series).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "year,value\n");
    }
}
