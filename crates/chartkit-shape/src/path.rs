//! SVG path-data construction.
//!
//! Curves never write strings directly; they drive a [`PathContext`]. The
//! [`Path`] implementation serialises those commands to SVG path data, and
//! other backends (canvas recorders, test probes) can implement the trait.

use std::fmt::Write;

use crate::error::{ShapeError, ShapeResult};

/// Drawing commands understood by curve interpolators.
pub trait PathContext {
    /// Starts a new subpath at the given point.
    fn move_to(&mut self, x: f64, y: f64);

    /// Draws a straight segment to the given point.
    fn line_to(&mut self, x: f64, y: f64);

    /// Draws a cubic Bézier segment with two control points.
    fn bezier_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64);

    /// Closes the current subpath.
    fn close_path(&mut self);
}

/// An SVG path-data builder.
///
/// # Example
///
/// ```rust
/// use chartkit_shape::path::{Path, PathContext};
///
/// let mut path = Path::new();
/// path.move_to(0.0, 0.0);
/// path.line_to(10.0, 0.5);
/// path.close_path();
/// assert_eq!(path.to_string(), "M0,0L10,0.5Z");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Path {
    data: String,
    /// Start of the current subpath.
    start: Option<(f64, f64)>,
    /// End of the current subpath.
    current: Option<(f64, f64)>,
    digits: Option<u32>,
}

impl Path {
    /// Creates an empty path with full numeric precision.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty path that rounds coordinates to `digits` fraction digits.
    ///
    /// Precision above 15 digits is indistinguishable from no rounding.
    pub fn with_digits(digits: u32) -> Self {
        Self {
            digits: (digits <= 15).then_some(digits),
            ..Self::default()
        }
    }

    /// Returns the path data built so far.
    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Returns true if no command has been written.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consumes the builder, returning the path data.
    pub fn into_string(self) -> String {
        self.data
    }

    /// Returns the end point of the current subpath, if any.
    pub fn current_point(&self) -> Option<(f64, f64)> {
        self.current
    }

    fn push(&mut self, command: char, values: &[f64]) {
        self.data.push(command);
        for (i, &v) in values.iter().enumerate() {
            if i > 0 {
                self.data.push(',');
            }
            let v = match self.digits {
                Some(d) => round_to(v, d),
                None => v,
            };
            // Writing into a String cannot fail.
            let _ = write!(self.data, "{}", format_number(v));
        }
    }
}

impl PathContext for Path {
    fn move_to(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
        self.current = Some((x, y));
        self.push('M', &[x, y]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.current = Some((x, y));
        self.push('L', &[x, y]);
    }

    fn bezier_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.current = Some((x, y));
        self.push('C', &[x1, y1, x2, y2, x, y]);
    }

    fn close_path(&mut self) {
        if self.current.is_some() {
            self.current = self.start;
            self.data.push('Z');
        }
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.data)
    }
}

/// Converts a user-supplied precision to a digit count.
///
/// Fractional values are floored. Negative values and NaN are rejected.
pub fn checked_digits(value: f64) -> ShapeResult<u32> {
    let d = value.floor();
    if d.is_nan() || d < 0.0 {
        return Err(ShapeError::InvalidDigits { digits: value });
    }
    Ok(d.min(f64::from(u32::MAX)) as u32)
}

/// Rounds half-way cases towards positive infinity, as JavaScript does.
fn round_to(v: f64, digits: u32) -> f64 {
    let k = 10f64.powi(digits as i32);
    (v * k + 0.5).floor() / k
}

/// Formats a number the way JavaScript's `Number#toString` does.
///
/// Shortest round-trip digits, plain notation between 1e-6 and 1e21,
/// exponent notation outside it. Negative zero prints as `0`.
pub fn format_number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }

    let abs = v.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{v}");
    }

    let s = format!("{v:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => s,
    }
}
