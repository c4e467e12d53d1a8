//! Application state management for NaijaStats
//!
//! This module contains the main application state, handling keyboard input,
//! lazy per-page data loading through the cache, and state transitions
//! between the dashboard pages.

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};
use std::collections::HashMap;
use std::path::Path;

use crate::cache::{CachedSource, SeriesKey};
use crate::cli::{StartPage, StartupConfig};
use crate::data::{
    all_indicators, indicator_by_key, sdg_indicators, Indicator, IndicatorSeries, SdgIndicator,
    SeriesSource, WorldBankClient, DATA_END_YEAR, DATA_START_YEAR, HOME_COUNTRY,
};
use crate::export;
use crate::predict::{linear_forecast, Forecast, PredictError, MAX_HORIZON, MIN_HORIZON};

/// First year requested for comparison charts.
pub const COMPARISON_START_YEAR: i32 = 2015;

/// First year requested for the forecast's historical window.
pub const FORECAST_START_YEAR: i32 = 2010;

/// How many years back the "latest value" KPI fetches look.
pub const LATEST_VALUE_WINDOW_YEARS: i32 = 10;

/// Indicator keys behind the headline KPI tiles on the Overview page.
const OVERVIEW_KPI_KEYS: [&str; 4] = ["gdp", "population", "gdp_growth", "life_expectancy"];

/// Indicator keys behind the access tiles on the Overview page.
const ACCESS_KPI_KEYS: [&str; 3] = ["electricity_access", "internet_users", "mobile_subscriptions"];

/// Application state enum representing the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Initial loading state while fetching overview data
    Loading,
    /// KPI tiles and headline trend charts
    Overview,
    /// Browsable list of all registry indicators
    IndicatorList,
    /// Trend chart for one indicator, by registry key
    IndicatorDetail(String),
    /// Nigeria against peer African nations for one indicator
    Comparison,
    /// SDG progress table
    Sdg,
    /// Historical data plus linear trend projection
    Forecast,
}

/// One metric tile: latest value of an indicator with its year.
#[derive(Debug, Clone)]
pub struct Kpi {
    /// Display name from the registry
    pub label: &'static str,
    /// Unit hint from the registry
    pub unit: &'static str,
    /// Latest observed value, if any
    pub value: Option<f64>,
    /// Year of the latest observation
    pub year: Option<i32>,
}

/// Everything the Overview page renders.
#[derive(Debug, Clone)]
pub struct OverviewData {
    /// Headline tiles: GDP, population, growth, life expectancy
    pub kpis: Vec<Kpi>,
    /// Access tiles: electricity, internet, mobile
    pub access: Vec<Kpi>,
    /// GDP trend for the chart on the left
    pub gdp_trend: IndicatorSeries,
    /// GDP growth trend for the chart on the right
    pub growth_trend: IndicatorSeries,
}

/// Latest value for one tracked SDG row.
#[derive(Debug, Clone)]
pub struct SdgStatus {
    /// The tracked goal row
    pub row: SdgIndicator,
    /// Latest observed value, if any
    pub value: Option<f64>,
    /// Year of the latest observation
    pub year: Option<i32>,
}

/// The series and fit behind the Forecast page.
#[derive(Debug, Clone)]
pub struct ForecastView {
    /// Registry key of the indicator the forecast is for
    pub key: String,
    /// Historical series the fit was computed from
    pub series: IndicatorSeries,
    /// Horizon the projection was computed with
    pub horizon: u32,
    /// The fit, or why one could not be made
    pub result: Result<Forecast, PredictError>,
}

/// Main application struct managing state and data
pub struct App {
    /// Current application state/page
    pub state: AppState,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Transient status line message (export results, refresh notes)
    pub status: Option<String>,
    /// Cursor position in the indicator list
    pub selected_index: usize,
    /// Which indicator the Comparison page shows
    pub comparison_index: usize,
    /// Which indicator the Forecast page shows
    pub forecast_index: usize,
    /// Forecast horizon in years (1-10)
    pub horizon: u32,
    /// Flag indicating a refresh has been requested
    pub refresh_requested: bool,
    /// Page to open once initial loading completes (from CLI flags)
    pub pending_page: Option<StartPage>,
    /// Timestamp of the last completed data load
    pub last_refresh: Option<DateTime<Local>>,
    /// Overview page data, present once loaded
    pub overview: Option<OverviewData>,
    /// Detail series keyed by indicator registry key
    pub detail_series: HashMap<String, IndicatorSeries>,
    /// Comparison series per indicator registry key
    pub comparison_series: HashMap<String, Vec<IndicatorSeries>>,
    /// SDG rows with their latest values, present once loaded
    pub sdg_status: Option<Vec<SdgStatus>>,
    /// Forecast data for the currently selected indicator/horizon
    pub forecast: Option<ForecastView>,
    /// Cached data source all page loads go through
    source: CachedSource,
}

impl App {
    /// Creates a new App instance with default state and the live API client
    pub fn new() -> Self {
        Self::with_source(WorldBankClient::new())
    }

    /// Creates a new App instance backed by the given source (for testing)
    pub fn with_source(source: impl SeriesSource + 'static) -> Self {
        Self {
            state: AppState::Loading,
            should_quit: false,
            show_help: false,
            status: None,
            selected_index: 0,
            comparison_index: 0,
            forecast_index: 0,
            horizon: 5,
            refresh_requested: false,
            pending_page: None,
            last_refresh: None,
            overview: None,
            detail_series: HashMap::new(),
            comparison_series: HashMap::new(),
            sdg_status: None,
            forecast: None,
            source: CachedSource::new(source),
        }
    }

    /// Creates a new App instance with the given startup configuration.
    ///
    /// This applies CLI arguments like --page and --horizon to the initial
    /// state.
    pub fn with_startup_config(config: StartupConfig) -> Self {
        let mut app = Self::new();
        app.pending_page = Some(config.start_page);
        app.horizon = config.horizon;
        app
    }

    /// Returns the indicator the Comparison page currently shows.
    pub fn comparison_indicator(&self) -> &'static Indicator {
        let indicators = all_indicators();
        &indicators[self.comparison_index % indicators.len()]
    }

    /// Returns the indicator the Forecast page currently shows.
    pub fn forecast_indicator(&self) -> &'static Indicator {
        let indicators = all_indicators();
        &indicators[self.forecast_index % indicators.len()]
    }

    /// Returns the indicator under the cursor in the list view.
    pub fn selected_indicator(&self) -> Option<&'static Indicator> {
        all_indicators().get(self.selected_index)
    }

    /// True when the current page has everything it needs to render.
    pub fn page_data_ready(&self) -> bool {
        match &self.state {
            AppState::Loading => false,
            AppState::Overview => self.overview.is_some(),
            AppState::IndicatorList => true,
            AppState::IndicatorDetail(key) => self.detail_series.contains_key(key),
            AppState::Comparison => self
                .comparison_series
                .contains_key(self.comparison_indicator().key),
            AppState::Sdg => self.sdg_status.is_some(),
            AppState::Forecast => self
                .forecast
                .as_ref()
                .map(|view| {
                    view.key == self.forecast_indicator().key && view.horizon == self.horizon
                })
                .unwrap_or(false),
        }
    }

    /// Loads whatever the current page is missing.
    ///
    /// Called from the main loop between renders. Every fetch goes through
    /// the cache, so revisiting a page within the TTL issues no requests.
    pub async fn ensure_page_data(&mut self) {
        if self.refresh_requested {
            self.refresh_requested = false;
            self.clear_current_page_data();
            self.status = Some("Refreshing (cached data may be reused for up to an hour)".to_string());
        }
        if self.page_data_ready() {
            return;
        }
        match self.state.clone() {
            AppState::Loading => {
                self.load_overview().await;
                let page = self.pending_page.take().unwrap_or(StartPage::Overview);
                self.state = page_state(page);
            }
            AppState::Overview => self.load_overview().await,
            AppState::IndicatorList => {}
            AppState::IndicatorDetail(key) => self.load_detail(&key).await,
            AppState::Comparison => self.load_comparison().await,
            AppState::Sdg => self.load_sdg().await,
            AppState::Forecast => self.load_forecast().await,
        }
        self.last_refresh = Some(Local::now());
    }

    /// Fetches the latest-value tile for one registry indicator.
    async fn load_kpi(&mut self, indicator: &'static Indicator) -> Kpi {
        let key = SeriesKey::new(
            HOME_COUNTRY,
            indicator.code,
            DATA_END_YEAR - LATEST_VALUE_WINDOW_YEARS,
            DATA_END_YEAR,
        );
        let series = self.source.get_or_fetch(&key).await;
        let latest = series.latest();
        Kpi {
            label: indicator.name,
            unit: indicator.unit,
            value: latest.map(|o| o.value),
            year: latest.map(|o| o.year),
        }
    }

    /// Fetches a home-country series for one registry indicator.
    async fn load_home_series(
        &mut self,
        indicator: &'static Indicator,
        start_year: i32,
    ) -> IndicatorSeries {
        let key = SeriesKey::new(HOME_COUNTRY, indicator.code, start_year, DATA_END_YEAR);
        self.source.get_or_fetch(&key).await
    }

    async fn load_overview(&mut self) {
        let mut kpis = Vec::new();
        for key in OVERVIEW_KPI_KEYS {
            if let Some(indicator) = indicator_by_key(key) {
                kpis.push(self.load_kpi(indicator).await);
            }
        }
        let mut access = Vec::new();
        for key in ACCESS_KPI_KEYS {
            if let Some(indicator) = indicator_by_key(key) {
                access.push(self.load_kpi(indicator).await);
            }
        }

        let gdp_trend = match indicator_by_key("gdp") {
            Some(indicator) => self.load_home_series(indicator, 2004).await,
            None => IndicatorSeries::empty(HOME_COUNTRY, "gdp", crate::data::SeriesStatus::NoData),
        };
        let growth_trend = match indicator_by_key("gdp_growth") {
            Some(indicator) => self.load_home_series(indicator, 2004).await,
            None => {
                IndicatorSeries::empty(HOME_COUNTRY, "gdp_growth", crate::data::SeriesStatus::NoData)
            }
        };

        self.overview = Some(OverviewData {
            kpis,
            access,
            gdp_trend,
            growth_trend,
        });
    }

    async fn load_detail(&mut self, key: &str) {
        let Some(indicator) = indicator_by_key(key) else {
            return;
        };
        let series = self.load_home_series(indicator, DATA_START_YEAR).await;
        self.detail_series.insert(key.to_string(), series);
    }

    async fn load_comparison(&mut self) {
        let indicator = self.comparison_indicator();
        let codes: Vec<&str> = crate::data::comparison_countries()
            .iter()
            .map(|c| c.code)
            .collect();
        let all = self
            .source
            .get_multi_country(&codes, indicator.code, COMPARISON_START_YEAR, DATA_END_YEAR)
            .await;
        self.comparison_series.insert(indicator.key.to_string(), all);
    }

    async fn load_sdg(&mut self) {
        let mut rows = Vec::new();
        for row in sdg_indicators() {
            let key = SeriesKey::new(
                HOME_COUNTRY,
                row.code,
                DATA_END_YEAR - LATEST_VALUE_WINDOW_YEARS,
                DATA_END_YEAR,
            );
            let series = self.source.get_or_fetch(&key).await;
            let latest = series.latest();
            rows.push(SdgStatus {
                row: *row,
                value: latest.map(|o| o.value),
                year: latest.map(|o| o.year),
            });
        }
        self.sdg_status = Some(rows);
    }

    async fn load_forecast(&mut self) {
        let indicator = self.forecast_indicator();
        let series = self.load_home_series(indicator, FORECAST_START_YEAR).await;
        let result = linear_forecast(&series, self.horizon);
        self.forecast = Some(ForecastView {
            key: indicator.key.to_string(),
            series,
            horizon: self.horizon,
            result,
        });
    }

    /// Drops the current page's data so the next loop iteration reloads it.
    fn clear_current_page_data(&mut self) {
        match self.state.clone() {
            AppState::Overview => self.overview = None,
            AppState::IndicatorDetail(key) => {
                self.detail_series.remove(&key);
            }
            AppState::Comparison => {
                let key = self.comparison_indicator().key;
                self.comparison_series.remove(key);
            }
            AppState::Sdg => self.sdg_status = None,
            AppState::Forecast => self.forecast = None,
            AppState::Loading | AppState::IndicatorList => {}
        }
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - `q`: Quit from any page
    /// - `?`: Toggle help overlay
    /// - `r`: Reload the current page's data
    /// - `1`-`5`: Jump to Overview / Indicators / Comparison / SDG / Forecast
    /// - `Tab`: Cycle to the next page
    /// - `Up`/`k`, `Down`/`j`: Move selection (list), cycle indicator
    ///   (comparison, forecast)
    /// - `Enter`: Open detail for the selected indicator (list)
    /// - `Esc`: Back to list from detail; quit from top-level pages
    /// - `+`/`-`: Widen/narrow the forecast horizon (forecast)
    /// - `e`: Export the visible data as CSV (detail, forecast)
    /// - `f`: Jump to the forecast for the indicator being viewed (detail)
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Help overlay intercepts all keys when shown
        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // A fresh key press retires the previous status message.
        self.status = None;

        if self.handle_global_key(key_event.code) {
            return;
        }

        match self.state.clone() {
            AppState::Loading => {}
            AppState::Overview => {}
            AppState::IndicatorList => match key_event.code {
                KeyCode::Up | KeyCode::Char('k') => self.move_selection_up(),
                KeyCode::Down | KeyCode::Char('j') => self.move_selection_down(),
                KeyCode::Enter => {
                    if let Some(indicator) = self.selected_indicator() {
                        self.state = AppState::IndicatorDetail(indicator.key.to_string());
                    }
                }
                KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            AppState::IndicatorDetail(key) => match key_event.code {
                KeyCode::Esc => self.state = AppState::IndicatorList,
                KeyCode::Char('e') => self.export_current(),
                KeyCode::Char('f') => {
                    if let Some(position) =
                        all_indicators().iter().position(|i| i.key == key)
                    {
                        self.forecast_index = position;
                        self.forecast = None;
                        self.state = AppState::Forecast;
                    }
                }
                _ => {}
            },
            AppState::Comparison => match key_event.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.comparison_index = previous_index(self.comparison_index);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.comparison_index = next_index(self.comparison_index);
                }
                KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            AppState::Sdg => {
                if key_event.code == KeyCode::Esc {
                    self.should_quit = true;
                }
            }
            AppState::Forecast => match key_event.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.forecast_index = previous_index(self.forecast_index);
                    self.forecast = None;
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.forecast_index = next_index(self.forecast_index);
                    self.forecast = None;
                }
                KeyCode::Char('+') | KeyCode::Char('=') => self.widen_horizon(),
                KeyCode::Char('-') => self.narrow_horizon(),
                KeyCode::Char('e') => self.export_current(),
                KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
        }
    }

    /// Keys that behave the same on every page. Returns true when handled.
    fn handle_global_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('?') => {
                self.show_help = true;
                true
            }
            KeyCode::Char('r') => {
                if self.state != AppState::Loading {
                    self.refresh_requested = true;
                }
                true
            }
            KeyCode::Char('1') => self.switch_page(StartPage::Overview),
            KeyCode::Char('2') => self.switch_page(StartPage::Indicators),
            KeyCode::Char('3') => self.switch_page(StartPage::Comparison),
            KeyCode::Char('4') => self.switch_page(StartPage::Sdg),
            KeyCode::Char('5') => self.switch_page(StartPage::Forecast),
            KeyCode::Tab => {
                if let Some(next) = next_page(&self.state) {
                    self.state = next;
                }
                true
            }
            _ => false,
        }
    }

    /// Jumps to a top-level page unless still loading. Returns true when
    /// the key was consumed.
    fn switch_page(&mut self, page: StartPage) -> bool {
        if self.state == AppState::Loading {
            return true;
        }
        self.state = page_state(page);
        true
    }

    fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    fn move_selection_down(&mut self) {
        let last = all_indicators().len().saturating_sub(1);
        if self.selected_index < last {
            self.selected_index += 1;
        }
    }

    /// Widens the forecast horizon by one year, up to the maximum.
    fn widen_horizon(&mut self) {
        if self.horizon < MAX_HORIZON {
            self.horizon += 1;
            self.forecast = None;
        }
    }

    /// Narrows the forecast horizon by one year, down to the minimum.
    fn narrow_horizon(&mut self) {
        if self.horizon > MIN_HORIZON {
            self.horizon -= 1;
            self.forecast = None;
        }
    }

    /// Writes the visible data to a CSV file in the working directory.
    fn export_current(&mut self) {
        match &self.state {
            AppState::IndicatorDetail(key) => {
                let Some(series) = self.detail_series.get(key) else {
                    self.status = Some("Nothing to export yet".to_string());
                    return;
                };
                let name = export::export_file_name(key, HOME_COUNTRY);
                self.status = Some(match export::write_series_csv(Path::new(&name), series) {
                    Ok(()) => format!("Exported {}", name),
                    Err(e) => format!("Export failed: {}", e),
                });
            }
            AppState::Forecast => {
                let Some(view) = &self.forecast else {
                    self.status = Some("Nothing to export yet".to_string());
                    return;
                };
                let Ok(forecast) = &view.result else {
                    self.status = Some("No forecast to export".to_string());
                    return;
                };
                let name = export::export_file_name(&view.key, HOME_COUNTRY);
                self.status = Some(
                    match export::write_forecast_csv(Path::new(&name), &view.series, forecast) {
                        Ok(()) => format!("Exported {}", name),
                        Err(e) => format!("Export failed: {}", e),
                    },
                );
            }
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a CLI start page onto its application state.
fn page_state(page: StartPage) -> AppState {
    match page {
        StartPage::Overview => AppState::Overview,
        StartPage::Indicators => AppState::IndicatorList,
        StartPage::Comparison => AppState::Comparison,
        StartPage::Sdg => AppState::Sdg,
        StartPage::Forecast => AppState::Forecast,
    }
}

/// The page after `state` in Tab order, None while loading.
fn next_page(state: &AppState) -> Option<AppState> {
    match state {
        AppState::Loading => None,
        AppState::Overview => Some(AppState::IndicatorList),
        AppState::IndicatorList | AppState::IndicatorDetail(_) => Some(AppState::Comparison),
        AppState::Comparison => Some(AppState::Sdg),
        AppState::Sdg => Some(AppState::Forecast),
        AppState::Forecast => Some(AppState::Overview),
    }
}

fn next_index(index: usize) -> usize {
    (index + 1) % all_indicators().len()
}

fn previous_index(index: usize) -> usize {
    let len = all_indicators().len();
    (index + len - 1) % len
}
