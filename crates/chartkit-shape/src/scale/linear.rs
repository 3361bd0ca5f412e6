//! Linear scale.

use crate::error::{ShapeError, ShapeResult};
use crate::scale::{clamp_to, piecewise};

/// A continuous linear scale.
///
/// # Example
///
/// ```rust
/// use chartkit_shape::ScaleLinear;
///
/// let mut x = ScaleLinear::new();
/// x.set_domain(vec![0.0, 100.0])?.set_range(vec![0.0, 500.0])?;
/// assert_eq!(x.scale(50.0), 250.0);
/// assert_eq!(x.invert(250.0), 50.0);
/// # Ok::<(), chartkit_shape::ShapeError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleLinear {
    domain: Vec<f64>,
    range: Vec<f64>,
    clamp: bool,
    round: bool,
}

impl Default for ScaleLinear {
    fn default() -> Self {
        Self::new()
    }
}

impl ScaleLinear {
    /// Creates the identity scale on `[0, 1]`.
    pub fn new() -> Self {
        Self::with_stops(vec![0.0, 1.0], vec![0.0, 1.0])
    }

    /// Builds a scale from stops that are already known to be valid.
    pub(super) fn with_stops(domain: Vec<f64>, range: Vec<f64>) -> Self {
        Self {
            domain,
            range,
            clamp: false,
            round: false,
        }
    }

    /// Sets the domain stops (at least two).
    pub fn set_domain(&mut self, domain: Vec<f64>) -> ShapeResult<&mut Self> {
        check_stops(&domain)?;
        self.domain = domain;
        Ok(self)
    }

    /// Sets the range stops (at least two).
    pub fn set_range(&mut self, range: Vec<f64>) -> ShapeResult<&mut Self> {
        check_stops(&range)?;
        self.range = range;
        self.round = false;
        Ok(self)
    }

    /// Sets the range stops and rounds scaled values to integers.
    pub fn set_range_round(&mut self, range: Vec<f64>) -> ShapeResult<&mut Self> {
        check_stops(&range)?;
        self.range = range;
        self.round = true;
        Ok(self)
    }

    /// Enables or disables clamping to the domain (and, on invert, the range).
    pub fn set_clamp(&mut self, clamp: bool) -> &mut Self {
        self.clamp = clamp;
        self
    }

    /// Returns the domain stops.
    pub fn domain(&self) -> &[f64] {
        &self.domain
    }

    /// Returns the range stops.
    pub fn range(&self) -> &[f64] {
        &self.range
    }

    /// Returns true if clamping is enabled.
    pub fn is_clamped(&self) -> bool {
        self.clamp
    }

    /// Returns true if scaled values are rounded.
    pub fn is_rounding(&self) -> bool {
        self.round
    }

    /// Maps a domain value to the range. NaN maps to NaN.
    pub fn scale(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let x = if self.clamp { self.clamp_domain(x) } else { x };
        piecewise(&self.domain, &self.range, x, self.round)
    }

    /// Maps a range value back to the domain.
    pub fn invert(&self, y: f64) -> f64 {
        let x = piecewise(&self.range, &self.domain, y, false);
        if self.clamp {
            self.clamp_domain(x)
        } else {
            x
        }
    }

    fn clamp_domain(&self, x: f64) -> f64 {
        let n = self.domain.len().min(self.range.len());
        clamp_to(self.domain[0], self.domain[n - 1], x)
    }
}

fn check_stops(stops: &[f64]) -> ShapeResult<()> {
    if stops.len() < 2 {
        return Err(ShapeError::insufficient_data(2, stops.len()));
    }
    Ok(())
}
