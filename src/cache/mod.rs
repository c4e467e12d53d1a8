//! In-memory TTL cache for fetched indicator series
//!
//! This module memoizes every fetch result, including empty and failed
//! ones, for a fixed time-to-live keyed by the exact (country, indicator,
//! start year, end year) tuple. Caching failures too keeps a flaky endpoint
//! from being hammered, at the cost of hiding recovery for up to one TTL
//! window. The clock is injectable so tests can simulate expiry without
//! waiting on wall-clock time.

mod manager;

pub use manager::{CachedSource, Clock, SeriesCache, SeriesKey, SystemClock, DEFAULT_TTL_SECS};
