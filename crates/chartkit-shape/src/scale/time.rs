//! Time scale over UTC timestamps.

use chrono::{DateTime, Utc};

use crate::error::{ShapeError, ShapeResult};
use crate::scale::ScaleLinear;

/// A linear scale whose domain is UTC time.
///
/// Timestamps are mapped through their epoch milliseconds, so the scale is
/// linear in elapsed time.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleTime {
    domain: Vec<DateTime<Utc>>,
    inner: ScaleLinear,
}

impl Default for ScaleTime {
    fn default() -> Self {
        Self::new()
    }
}

impl ScaleTime {
    /// Creates a scale from 2000-01-01 to 2000-01-02 (UTC) onto `[0, 1]`.
    pub fn new() -> Self {
        let domain = vec![
            DateTime::from_timestamp(946_684_800, 0).unwrap_or_default(),
            DateTime::from_timestamp(946_771_200, 0).unwrap_or_default(),
        ];
        let inner = ScaleLinear::with_stops(domain.iter().map(millis).collect(), vec![0.0, 1.0]);
        Self { domain, inner }
    }

    /// Sets the domain stops (at least two).
    pub fn set_domain(&mut self, domain: Vec<DateTime<Utc>>) -> ShapeResult<&mut Self> {
        self.inner.set_domain(domain.iter().map(millis).collect())?;
        self.domain = domain;
        Ok(self)
    }

    /// Sets the range stops (at least two).
    pub fn set_range(&mut self, range: Vec<f64>) -> ShapeResult<&mut Self> {
        self.inner.set_range(range)?;
        Ok(self)
    }

    /// Sets the range stops and rounds scaled values to integers.
    pub fn set_range_round(&mut self, range: Vec<f64>) -> ShapeResult<&mut Self> {
        self.inner.set_range_round(range)?;
        Ok(self)
    }

    /// Enables or disables clamping.
    pub fn set_clamp(&mut self, clamp: bool) -> &mut Self {
        self.inner.set_clamp(clamp);
        self
    }

    /// Returns the domain stops.
    pub fn domain(&self) -> &[DateTime<Utc>] {
        &self.domain
    }

    /// Returns the range stops.
    pub fn range(&self) -> &[f64] {
        self.inner.range()
    }

    /// Returns true if clamping is enabled.
    pub fn is_clamped(&self) -> bool {
        self.inner.is_clamped()
    }

    /// Returns true if scaled values are rounded.
    pub fn is_rounding(&self) -> bool {
        self.inner.is_rounding()
    }

    /// Maps a timestamp to the range.
    pub fn scale(&self, t: &DateTime<Utc>) -> f64 {
        self.inner.scale(millis(t))
    }

    /// Maps a range value back to a timestamp.
    ///
    /// Returns `None` when the result is not a representable instant.
    pub fn invert(&self, y: f64) -> Option<DateTime<Utc>> {
        let ms = self.inner.invert(y).trunc();
        if !ms.is_finite() || ms.abs() > i64::MAX as f64 {
            return None;
        }
        DateTime::from_timestamp_millis(ms as i64)
    }
}

fn millis(t: &DateTime<Utc>) -> f64 {
    t.timestamp_millis() as f64
}

impl TryFrom<[DateTime<Utc>; 2]> for ScaleTime {
    type Error = ShapeError;

    fn try_from(domain: [DateTime<Utc>; 2]) -> ShapeResult<Self> {
        let mut scale = Self::new();
        scale.set_domain(domain.to_vec())?;
        Ok(scale)
    }
}
