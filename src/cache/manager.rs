//! Series cache and the cached source wrapper
//!
//! Provides `SeriesCache`, an explicit key/value store with a fixed TTL and
//! an injectable clock, and `CachedSource`, which puts that cache in front
//! of any `SeriesSource`.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::data::{IndicatorSeries, SeriesSource};

/// Time-to-live applied to every cache entry: one hour.
pub const DEFAULT_TTL_SECS: i64 = 3600;

/// A source of the current time.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The wall clock, used outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Cache key: the exact 4-tuple of fetch arguments.
///
/// Lookups require an exact match; there is no partial-range reuse, so
/// ("NGA", code, 2010, 2020) and ("NGA", code, 2010, 2021) are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeriesKey {
    /// ISO3 country code
    pub country: String,
    /// World Bank indicator code
    pub indicator: String,
    /// First requested year, inclusive
    pub start_year: i32,
    /// Last requested year, inclusive
    pub end_year: i32,
}

impl SeriesKey {
    /// Builds a key from the fetch arguments.
    pub fn new(country: &str, indicator: &str, start_year: i32, end_year: i32) -> Self {
        Self {
            country: country.to_string(),
            indicator: indicator.to_string(),
            start_year,
            end_year,
        }
    }
}

/// One memoized fetch result.
#[derive(Debug, Clone)]
struct CachedSeries {
    series: IndicatorSeries,
    fetched_at: DateTime<Utc>,
}

/// In-memory store of memoized series with a fixed TTL.
pub struct SeriesCache {
    entries: HashMap<SeriesKey, CachedSeries>,
    ttl: Duration,
    clock: Box<dyn Clock>,
}

impl SeriesCache {
    /// Creates a cache with the default one-hour TTL and the system clock.
    pub fn new() -> Self {
        Self::with_ttl(Duration::seconds(DEFAULT_TTL_SECS))
    }

    /// Creates a cache with an explicit TTL and the system clock.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self::with_clock(ttl, Box::new(SystemClock))
    }

    /// Creates a cache with an explicit TTL and clock, for tests.
    pub fn with_clock(ttl: Duration, clock: Box<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            clock,
        }
    }

    /// Returns the stored series for `key` while its entry is unexpired.
    ///
    /// An entry written at time T is valid strictly before T + TTL; at or
    /// after that instant it is treated as absent.
    pub fn get(&self, key: &SeriesKey) -> Option<IndicatorSeries> {
        let entry = self.entries.get(key)?;
        let age = self.clock.now().signed_duration_since(entry.fetched_at);
        if age < self.ttl {
            Some(entry.series.clone())
        } else {
            None
        }
    }

    /// Stores a series under `key`, replacing any previous entry.
    pub fn insert(&mut self, key: SeriesKey, series: IndicatorSeries) {
        let fetched_at = self.clock.now();
        self.entries.insert(key, CachedSeries { series, fetched_at });
    }

    /// Number of entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SeriesCache {
    fn default() -> Self {
        Self::new()
    }
}

/// A series source with a memoizing cache in front of it.
pub struct CachedSource {
    source: Box<dyn SeriesSource>,
    cache: SeriesCache,
}

impl CachedSource {
    /// Wraps `source` with a cache using the default one-hour TTL.
    pub fn new(source: impl SeriesSource + 'static) -> Self {
        Self::with_cache(source, SeriesCache::new())
    }

    /// Wraps `source` with an explicit cache, for tests.
    pub fn with_cache(source: impl SeriesSource + 'static, cache: SeriesCache) -> Self {
        Self {
            source: Box::new(source),
            cache,
        }
    }

    /// Returns the series for `key`, fetching at most once per TTL window.
    ///
    /// On a hit with an unexpired entry the stored payload is returned and
    /// the underlying source is not called. On a miss or expired entry the
    /// source is called and its result, empty or not, is stored with the
    /// current timestamp.
    pub async fn get_or_fetch(&mut self, key: &SeriesKey) -> IndicatorSeries {
        if let Some(series) = self.cache.get(key) {
            return series;
        }
        let series = self
            .source
            .fetch_series(&key.country, &key.indicator, key.start_year, key.end_year)
            .await;
        self.cache.insert(key.clone(), series.clone());
        series
    }

    /// Fetches the same indicator for several countries, one at a time.
    ///
    /// Countries whose series come back without observations are skipped,
    /// matching how the comparison charts treat missing peers.
    pub async fn get_multi_country(
        &mut self,
        countries: &[&str],
        indicator: &str,
        start_year: i32,
        end_year: i32,
    ) -> Vec<IndicatorSeries> {
        let mut all = Vec::new();
        for country in countries {
            let key = SeriesKey::new(country, indicator, start_year, end_year);
            let series = self.get_or_fetch(&key).await;
            if !series.is_empty() {
                all.push(series);
            }
        }
        all
    }
}
