//! Caller-owned calculation context with memoized format conversions.
//!
//! [`GeoContext`] keeps the most recently computed distance, so a unit
//! conversion can reuse it without passing it again, and two bounded LRU
//! caches for sexagesimal ↔ decimal conversions. Each context is independent:
//! create one per request, per thread, or share one behind an `Arc`.
//!
//! ```
//! use geocalc::{GeoContext, Unit};
//!
//! let ctx = GeoContext::new(100);
//!
//! let meters = ctx.distance_from_strings("51.503293,-0.1195", "51.473453,7.50324", None)?;
//! let km = ctx.convert_unit(Unit::Kilometers, None, Some(1))?;
//! assert_eq!(km, (meters as f64 / 100.0).round() / 10.0);
//! # Ok::<(), geocalc::GeoError>(())
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use moka::sync::Cache;
use tracing::{debug, trace};

use crate::coordinate::{parse_plain_decimal, Point, ToDecimalDegrees};
use crate::distance::{distance, DEFAULT_ACCURACY};
use crate::error::{GeoError, Result};
use crate::sexagesimal::{decimal_to_sexagesimal, is_sexagesimal, sexagesimal_to_decimal};
use crate::units::{convert, Unit, DEFAULT_PRECISION};

/// Default number of entries kept in each conversion cache.
pub const DEFAULT_CACHE_SIZE: u64 = 1000;

/// Marker for "no distance computed yet".
const NO_DISTANCE: u64 = u64::MAX;

/// Statistics about conversion cache usage.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of conversions currently cached (both directions).
    pub entry_count: u64,
    /// Number of conversions served from cache.
    pub hit_count: u64,
    /// Number of conversions computed and inserted.
    pub miss_count: u64,
}

impl CacheStats {
    /// Calculate the cache hit rate (0.0 to 1.0).
    ///
    /// Returns 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hit_count + self.miss_count;
        if total == 0 {
            0.0
        } else {
            self.hit_count as f64 / total as f64
        }
    }
}

/// Distance and conversion context owned by the caller.
///
/// All methods take `&self`; the context is `Send + Sync`.
pub struct GeoContext {
    /// Sexagesimal text → decimal degrees.
    decimal_cache: Cache<String, f64>,
    /// Decimal degrees (as bits) → sexagesimal text.
    sexagesimal_cache: Cache<u64, String>,
    hit_count: AtomicU64,
    miss_count: AtomicU64,
    /// Last computed distance in meters, or [`NO_DISTANCE`].
    last_distance: AtomicU64,
    default_accuracy: u32,
    default_precision: u32,
}

impl Default for GeoContext {
    fn default() -> Self {
        GeoContextBuilder::new().build()
    }
}

impl GeoContext {
    /// Create a context caching up to `cache_size` conversions per direction.
    pub fn new(cache_size: u64) -> Self {
        GeoContextBuilder::new().cache_size(cache_size).build()
    }

    /// Create a builder for more configuration options.
    pub fn builder() -> GeoContextBuilder {
        GeoContextBuilder::new()
    }

    /// Distance between two points in meters.
    ///
    /// `accuracy` quantizes the result to a multiple of that many meters;
    /// `None` uses the context default. The result is retained as the
    /// last distance.
    pub fn distance(&self, from: &Point, to: &Point, accuracy: Option<u32>) -> u64 {
        let accuracy = accuracy.unwrap_or(self.default_accuracy);
        let meters = distance(from, to, accuracy);
        debug!(%from, %to, accuracy, meters, "computed distance");
        self.last_distance.store(meters, Ordering::Relaxed);
        meters
    }

    /// Distance between two `"lat,lng"` strings.
    ///
    /// Each half may be decimal or sexagesimal text.
    ///
    /// # Errors
    ///
    /// Returns an error if either string is not a valid point.
    pub fn distance_from_strings(
        &self,
        from: &str,
        to: &str,
        accuracy: Option<u32>,
    ) -> Result<u64> {
        let from = self.parse_point(from)?;
        let to = self.parse_point(to)?;
        Ok(self.distance(&from, &to, accuracy))
    }

    /// Distance between two points given as separate components.
    ///
    /// Components may be numbers or text in decimal or sexagesimal form.
    ///
    /// # Errors
    ///
    /// Returns an error if any component can't be read or is out of range.
    pub fn distance_from_components<A, B, C, D>(
        &self,
        from_lat: A,
        from_lng: B,
        to_lat: C,
        to_lng: D,
        accuracy: Option<u32>,
    ) -> Result<u64>
    where
        A: ToDecimalDegrees,
        B: ToDecimalDegrees,
        C: ToDecimalDegrees,
        D: ToDecimalDegrees,
    {
        let from = Point::from_components(from_lat, from_lng)?;
        let to = Point::from_components(to_lat, to_lng)?;
        Ok(self.distance(&from, &to, accuracy))
    }

    /// The most recently computed distance, if any.
    pub fn last_distance(&self) -> Option<u64> {
        match self.last_distance.load(Ordering::Relaxed) {
            NO_DISTANCE => None,
            meters => Some(meters),
        }
    }

    /// Convert a distance in meters to `unit`.
    ///
    /// A missing or zero `meters` falls back to [`Self::last_distance`].
    /// `precision` defaults to the context's default (4 decimal places).
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::NoDistanceAvailable`] if no distance was given and
    /// none has been computed.
    pub fn convert_unit(
        &self,
        unit: Unit,
        meters: Option<f64>,
        precision: Option<u32>,
    ) -> Result<f64> {
        let meters = match meters {
            Some(m) if m != 0.0 => m,
            _ => self.last_distance().ok_or(GeoError::NoDistanceAvailable)? as f64,
        };
        Ok(convert(
            meters,
            unit,
            precision.unwrap_or(self.default_precision),
        ))
    }

    /// Cached [`crate::coordinate::use_decimal`].
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::UnrecognizedCoordinateFormat`] for text that is
    /// neither decimal nor sexagesimal.
    pub fn use_decimal(&self, raw: &str) -> Result<f64> {
        let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

        if let Some(value) = parse_plain_decimal(&compact) {
            return Ok(value);
        }

        if is_sexagesimal(&compact) {
            return self.sexagesimal_to_decimal(&compact);
        }

        Err(GeoError::UnrecognizedCoordinateFormat {
            input: raw.to_string(),
        })
    }

    /// Cached [`crate::sexagesimal::sexagesimal_to_decimal`].
    ///
    /// Failed conversions are not cached.
    pub fn sexagesimal_to_decimal(&self, text: &str) -> Result<f64> {
        if let Some(value) = self.decimal_cache.get(text) {
            self.hit_count.fetch_add(1, Ordering::Relaxed);
            trace!(text, value, "sexagesimal cache hit");
            return Ok(value);
        }

        let value = sexagesimal_to_decimal(text)?;
        self.miss_count.fetch_add(1, Ordering::Relaxed);
        debug!(text, value, "converted sexagesimal to decimal");
        self.decimal_cache.insert(text.to_string(), value);
        Ok(value)
    }

    /// Cached [`crate::sexagesimal::decimal_to_sexagesimal`].
    pub fn decimal_to_sexagesimal(&self, dec: f64) -> String {
        let key = dec.to_bits();
        if let Some(text) = self.sexagesimal_cache.get(&key) {
            self.hit_count.fetch_add(1, Ordering::Relaxed);
            trace!(dec, %text, "decimal cache hit");
            return text;
        }

        let text = decimal_to_sexagesimal(dec);
        self.miss_count.fetch_add(1, Ordering::Relaxed);
        debug!(dec, %text, "converted decimal to sexagesimal");
        self.sexagesimal_cache.insert(key, text.clone());
        text
    }

    /// Parse `"lat,lng"` using the cached coordinate conversion.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::InvalidPoint`] unless there are exactly two
    /// comma-separated halves, or the errors of [`Self::use_decimal`] and
    /// [`Point::new`] for the halves themselves.
    pub fn parse_point(&self, s: &str) -> Result<Point> {
        let mut parts = s.split(',');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(lat), Some(lng), None) => {
                Point::new(self.use_decimal(lat)?, self.use_decimal(lng)?)
            }
            _ => Err(GeoError::InvalidPoint {
                input: s.to_string(),
            }),
        }
    }

    /// Get cache statistics.
    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            entry_count: self.decimal_cache.entry_count() + self.sexagesimal_cache.entry_count(),
            hit_count: self.hit_count.load(Ordering::Relaxed),
            miss_count: self.miss_count.load(Ordering::Relaxed),
        }
    }

    /// Maximum number of entries per conversion cache.
    pub fn cache_capacity(&self) -> u64 {
        self.decimal_cache.policy().max_capacity().unwrap_or(0)
    }

    /// Clear both conversion caches. The last distance is kept.
    pub fn clear_cache(&self) {
        self.decimal_cache.invalidate_all();
        self.sexagesimal_cache.invalidate_all();
    }

    pub fn default_accuracy(&self) -> u32 {
        self.default_accuracy
    }

    pub fn default_precision(&self) -> u32 {
        self.default_precision
    }
}

/// Builder for creating [`GeoContext`] with custom configuration.
///
/// ```
/// use geocalc::GeoContextBuilder;
///
/// let ctx = GeoContextBuilder::new()
///     .cache_size(500)
///     .default_accuracy(10)
///     .default_precision(2)
///     .build();
/// assert_eq!(ctx.cache_capacity(), 500);
/// ```
#[derive(Debug, Clone)]
pub struct GeoContextBuilder {
    cache_size: u64,
    default_accuracy: u32,
    default_precision: u32,
}

impl Default for GeoContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoContextBuilder {
    pub fn new() -> Self {
        Self {
            cache_size: DEFAULT_CACHE_SIZE,
            default_accuracy: DEFAULT_ACCURACY,
            default_precision: DEFAULT_PRECISION,
        }
    }

    /// Create a builder configured from environment variables.
    ///
    /// # Environment Variables
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `GEOCALC_CACHE_SIZE` | Entries per conversion cache | 1000 |
    /// | `GEOCALC_ACCURACY` | Default distance granularity in meters | 1 |
    /// | `GEOCALC_PRECISION` | Default decimal places for unit conversion | 4 |
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::InvalidConfig`] if a variable is set but can't be
    /// parsed as a non-negative integer.
    pub fn from_env() -> Result<Self> {
        let mut builder = Self::new();

        if let Some(size) = env_var("GEOCALC_CACHE_SIZE")? {
            builder.cache_size = size;
        }
        if let Some(accuracy) = env_var("GEOCALC_ACCURACY")? {
            builder.default_accuracy = accuracy;
        }
        if let Some(precision) = env_var("GEOCALC_PRECISION")? {
            builder.default_precision = precision;
        }

        Ok(builder)
    }

    /// Set the maximum number of entries per conversion cache.
    ///
    /// Default is 1000.
    pub fn cache_size(mut self, size: u64) -> Self {
        self.cache_size = size;
        self
    }

    /// Set the distance granularity used when no accuracy is passed.
    pub fn default_accuracy(mut self, meters: u32) -> Self {
        self.default_accuracy = meters;
        self
    }

    /// Set the decimal places used when no precision is passed.
    pub fn default_precision(mut self, places: u32) -> Self {
        self.default_precision = places;
        self
    }

    /// Build the [`GeoContext`].
    pub fn build(self) -> GeoContext {
        GeoContext {
            decimal_cache: Cache::builder().max_capacity(self.cache_size).build(),
            sexagesimal_cache: Cache::builder().max_capacity(self.cache_size).build(),
            hit_count: AtomicU64::new(0),
            miss_count: AtomicU64::new(0),
            last_distance: AtomicU64::new(NO_DISTANCE),
            default_accuracy: self.default_accuracy,
            default_precision: self.default_precision,
        }
    }
}

fn env_var<T: std::str::FromStr>(var: &'static str) -> Result<Option<T>> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| GeoError::InvalidConfig { var, value }),
        Err(_) => Ok(None),
    }
}
