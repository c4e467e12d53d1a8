//! Linear trend fitting and extrapolation for indicator series
//!
//! Fits an ordinary least-squares line of value on year and projects it a
//! few years past the last observation. The error band is the residual
//! standard error scaled to an approximate 95% interval; it is meant to be
//! read as a rough spread, not a rigorous confidence interval.

use thiserror::Error;

use crate::data::IndicatorSeries;

/// Multiplier applied to the residual standard error for the band.
pub const CONFIDENCE_FACTOR: f64 = 1.96;

/// Smallest horizon the forecast view offers.
pub const MIN_HORIZON: u32 = 1;

/// Largest horizon the forecast view offers.
pub const MAX_HORIZON: u32 = 10;

/// Error types for trend fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PredictError {
    /// Fewer than two finite observations were available
    #[error("not enough data: need at least 2 valid points, found {found}")]
    InsufficientData {
        /// How many usable points the series had
        found: usize,
    },
    /// Every observation falls in the same year, so no slope exists
    #[error("cannot fit a trend: all observations share one year")]
    DegenerateYears,
}

/// A fitted line, anchored at the first observed year.
///
/// The fit is value on (year - base_year), so `intercept` is the fitted
/// value at `base_year` and `slope` is the change per year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendFit {
    /// Change in value per year
    pub slope: f64,
    /// Fitted value at `base_year`
    pub intercept: f64,
    /// Residual standard error, 0.0 when only two points were fitted
    pub residual_std_error: f64,
    /// Year the fit is anchored at (first valid observation)
    pub base_year: i32,
}

impl TrendFit {
    /// Fitted value at an arbitrary year.
    pub fn value_at(&self, year: i32) -> f64 {
        self.intercept + self.slope * f64::from(year - self.base_year)
    }
}

/// One projected future point with its band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastPoint {
    /// Projected calendar year
    pub year: i32,
    /// Fitted value at that year
    pub predicted: f64,
    /// Lower edge of the band
    pub lower: f64,
    /// Upper edge of the band
    pub upper: f64,
}

/// A fitted trend plus its projected points.
///
/// Computed on demand from a series and discarded after rendering; never
/// cached or persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    /// The fitted line
    pub fit: TrendFit,
    /// One point per horizon year, starting the year after the last observation
    pub points: Vec<ForecastPoint>,
}

/// Fits a linear trend to `series` and projects `horizon` years ahead.
///
/// Only finite observed values participate in the fit; gaps are dropped,
/// never treated as zero. Projected years run at one-year increments from
/// the year after the last observation.
///
/// # Errors
///
/// * [`PredictError::InsufficientData`] with fewer than 2 usable points
/// * [`PredictError::DegenerateYears`] when all points share one year
pub fn linear_forecast(series: &IndicatorSeries, horizon: u32) -> Result<Forecast, PredictError> {
    let points: Vec<(i32, f64)> = series
        .points
        .iter()
        .filter(|o| o.value.is_finite())
        .map(|o| (o.year, o.value))
        .collect();

    let n = points.len();
    if n < 2 {
        return Err(PredictError::InsufficientData { found: n });
    }

    let base_year = points[0].0;
    let xs: Vec<f64> = points.iter().map(|(y, _)| f64::from(y - base_year)).collect();
    let ys: Vec<f64> = points.iter().map(|(_, v)| *v).collect();

    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (x, y) in xs.iter().zip(ys.iter()) {
        numerator += (x - mean_x) * (y - mean_y);
        denominator += (x - mean_x) * (x - mean_x);
    }

    if denominator == 0.0 {
        return Err(PredictError::DegenerateYears);
    }

    let slope = numerator / denominator;
    let intercept = mean_y - slope * mean_x;

    let ss_res: f64 = xs
        .iter()
        .zip(ys.iter())
        .map(|(x, y)| {
            let residual = y - (intercept + slope * x);
            residual * residual
        })
        .sum();
    // With two points the line is exact and (n - 2) would divide by zero.
    let residual_std_error = if n > 2 {
        (ss_res / (n as f64 - 2.0)).sqrt()
    } else {
        0.0
    };

    let fit = TrendFit {
        slope,
        intercept,
        residual_std_error,
        base_year,
    };

    let last_year = points[n - 1].0;
    let margin = CONFIDENCE_FACTOR * residual_std_error;
    let forecast_points = (1..=horizon)
        .map(|offset| {
            let year = last_year + offset as i32;
            let predicted = fit.value_at(year);
            ForecastPoint {
                year,
                predicted,
                lower: predicted - margin,
                upper: predicted + margin,
            }
        })
        .collect();

    Ok(Forecast {
        fit,
        points: forecast_points,
    })
}

/// Headline numbers for a forecast panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastSummary {
    /// Year of the last observation
    pub latest_year: i32,
    /// Value of the last observation
    pub latest_value: f64,
    /// Final projected year
    pub final_year: i32,
    /// Final projected value
    pub final_value: f64,
    /// Percent change from latest observation to final projection,
    /// absent when the latest observation is zero
    pub percent_change: Option<f64>,
}

impl ForecastSummary {
    /// True when the projection ends above the latest observation.
    pub fn is_increasing(&self) -> bool {
        self.final_value > self.latest_value
    }
}

/// Builds the summary shown next to a forecast chart.
///
/// Returns `None` when the series has no observations or the forecast has
/// no projected points (horizon 0).
pub fn summarize(series: &IndicatorSeries, forecast: &Forecast) -> Option<ForecastSummary> {
    let latest = series.latest()?;
    let last = forecast.points.last()?;
    let percent_change = if latest.value != 0.0 {
        Some((last.predicted - latest.value) / latest.value * 100.0)
    } else {
        None
    };
    Some(ForecastSummary {
        latest_year: latest.year,
        latest_value: latest.value,
        final_year: last.year,
        final_value: last.predicted,
        percent_change,
    })
}
