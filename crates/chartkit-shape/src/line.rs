//! Line generator.
//!
//! A [`Line`] maps each datum to a point through its `x` and `y` accessors
//! and feeds the points to a curve. Data for which `defined` returns false
//! split the line into separate segments.

use std::fmt;
use std::sync::Arc;

use crate::curve::{Curve, Linear, SharedCurveFactory};
use crate::path::{Path, PathContext};

/// Maps a datum, its index and the whole data slice to a coordinate.
pub type Accessor<T> = Arc<dyn Fn(&T, usize, &[T]) -> f64 + Send + Sync>;

/// Decides whether a datum is drawn.
pub type Predicate<T> = Arc<dyn Fn(&T, usize, &[T]) -> bool + Send + Sync>;

/// Wraps a closure as an [`Accessor`].
pub fn accessor<T, F>(f: F) -> Accessor<T>
where
    F: Fn(&T, usize, &[T]) -> f64 + Send + Sync + 'static,
{
    Arc::new(f)
}

/// An accessor returning the same value for every datum.
pub fn constant<T>(value: f64) -> Accessor<T> {
    Arc::new(move |_: &T, _: usize, _: &[T]| value)
}

/// Wraps a closure as a [`Predicate`].
pub fn predicate<T, F>(f: F) -> Predicate<T>
where
    F: Fn(&T, usize, &[T]) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Data with a natural two-dimensional position.
///
/// Generators built with `new()` read coordinates through this trait.
pub trait XY {
    /// The x coordinate.
    fn x(&self) -> f64;
    /// The y coordinate.
    fn y(&self) -> f64;
}

impl XY for [f64; 2] {
    fn x(&self) -> f64 {
        self[0]
    }

    fn y(&self) -> f64 {
        self[1]
    }
}

impl XY for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }
}

pub(crate) fn point_x<T: XY>() -> Accessor<T> {
    Arc::new(|d: &T, _: usize, _: &[T]| d.x())
}

pub(crate) fn point_y<T: XY>() -> Accessor<T> {
    Arc::new(|d: &T, _: usize, _: &[T]| d.y())
}

pub(crate) fn always<T>() -> Predicate<T> {
    Arc::new(|_: &T, _: usize, _: &[T]| true)
}

/// Runs `draw` against a fresh SVG path, returning `None` when nothing was drawn.
pub(crate) fn render_to_string(
    digits: Option<u32>,
    draw: impl FnOnce(&mut Path),
) -> Option<String> {
    let mut path = digits.map_or_else(Path::new, Path::with_digits);
    draw(&mut path);
    (!path.is_empty()).then(|| path.into_string())
}

/// A line shape generator.
///
/// # Example
///
/// ```rust
/// use chartkit_shape::line::{accessor, Line};
///
/// let mut line = Line::<[f64; 2]>::new();
/// line.set_x(accessor(|d: &[f64; 2], _, _| d[0] * 10.0))
///     .set_y(accessor(|d: &[f64; 2], _, _| d[1] * 20.0));
///
/// let d = line.generate(&[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]]);
/// assert_eq!(d.as_deref(), Some("M0,0L10,20L20,40"));
/// ```
pub struct Line<T> {
    x: Accessor<T>,
    y: Accessor<T>,
    defined: Predicate<T>,
    curve: SharedCurveFactory,
    digits: Option<u32>,
}

impl<T: XY> Line<T> {
    /// Creates a linear line reading positions through [`XY`].
    pub fn new() -> Self {
        Self::with_accessors(point_x(), point_y())
    }
}

impl<T: XY> Default for Line<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Line<T> {
    /// Creates a linear line with explicit accessors, for any datum type.
    pub fn with_accessors(x: Accessor<T>, y: Accessor<T>) -> Self {
        Self {
            x,
            y,
            defined: always(),
            curve: Arc::new(Linear),
            digits: None,
        }
    }

    /// Sets the x accessor.
    pub fn set_x(&mut self, x: Accessor<T>) -> &mut Self {
        self.x = x;
        self
    }

    /// Sets the y accessor.
    pub fn set_y(&mut self, y: Accessor<T>) -> &mut Self {
        self.y = y;
        self
    }

    /// Sets the predicate deciding which data are drawn.
    pub fn set_defined(&mut self, defined: Predicate<T>) -> &mut Self {
        self.defined = defined;
        self
    }

    /// Sets the curve interpolator.
    pub fn set_curve(&mut self, curve: SharedCurveFactory) -> &mut Self {
        self.curve = curve;
        self
    }

    /// Sets the fraction digits of generated path data (`None` for full precision).
    pub fn set_digits(&mut self, digits: Option<u32>) -> &mut Self {
        self.digits = digits;
        self
    }

    /// Returns the curve interpolator.
    pub fn curve(&self) -> &SharedCurveFactory {
        &self.curve
    }

    /// Returns the path precision.
    pub fn digits(&self) -> Option<u32> {
        self.digits
    }

    /// Generates SVG path data, or `None` if no point is drawn.
    pub fn generate(&self, data: &[T]) -> Option<String> {
        render_to_string(self.digits, |path| self.render(data, path))
    }

    /// Draws the line into an arbitrary path context.
    pub fn render(&self, data: &[T], ctx: &mut dyn PathContext) {
        let mut curve = self.curve.curve();
        let mut drawing = false;

        for (i, d) in data.iter().enumerate() {
            let defined = (self.defined)(d, i, data);
            if defined != drawing {
                drawing = defined;
                toggle(curve.as_mut(), ctx, drawing);
            }
            if drawing {
                curve.point(ctx, (self.x)(d, i, data), (self.y)(d, i, data));
            }
        }

        if drawing {
            curve.line_end(ctx);
        }
    }
}

fn toggle(curve: &mut dyn Curve, ctx: &mut dyn PathContext, start: bool) {
    if start {
        curve.line_start();
    } else {
        curve.line_end(ctx);
    }
}

impl<T> Clone for Line<T> {
    fn clone(&self) -> Self {
        Self {
            x: Arc::clone(&self.x),
            y: Arc::clone(&self.y),
            defined: Arc::clone(&self.defined),
            curve: Arc::clone(&self.curve),
            digits: self.digits,
        }
    }
}

impl<T> fmt::Debug for Line<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Line")
            .field("curve", &self.curve.name())
            .field("digits", &self.digits)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{Bundle, Step};

    const DATA: [[f64; 2]; 3] = [[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]];

    #[test]
    fn test_default_accessors() {
        let line = Line::new();
        assert_eq!(line.generate(&DATA).as_deref(), Some("M0,0L1,1L2,2"));
    }

    #[test]
    fn test_empty_data_is_none() {
        let line = Line::<[f64; 2]>::new();
        assert_eq!(line.generate(&[]), None);
    }

    #[test]
    fn test_accessors_receive_index() {
        let line = Line::with_accessors(
            accessor(|_: &f64, i, _| i as f64),
            accessor(|d: &f64, _, _| *d),
        );
        assert_eq!(line.generate(&[5.0, 7.0]).as_deref(), Some("M0,5L1,7"));
    }

    #[test]
    fn test_undefined_points_split_the_line() {
        let mut line = Line::new();
        line.set_defined(predicate(|d: &(f64, f64), _, _| !d.1.is_nan()));

        let data = [(0.0, 0.0), (1.0, 1.0), (2.0, f64::NAN), (3.0, 3.0), (4.0, 4.0)];
        assert_eq!(line.generate(&data).as_deref(), Some("M0,0L1,1M3,3L4,4"));
    }

    #[test]
    fn test_isolated_point_closes() {
        let mut line = Line::new();
        line.set_defined(predicate(|d: &(f64, f64), _, _| d.0 != 1.0));

        let data = [(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)];
        assert_eq!(line.generate(&data).as_deref(), Some("M0,0ZM2,2Z"));
    }

    #[test]
    fn test_curve_and_digits() {
        let mut line = Line::new();
        line.set_curve(Arc::new(Step::after())).set_digits(Some(1));

        let data = [[0.0, 0.0], [1.0 / 3.0, 2.0 / 3.0]];
        assert_eq!(line.generate(&data).as_deref(), Some("M0,0L0.3,0L0.3,0.7"));
        assert_eq!(line.curve().name(), "step-after");
    }

    #[test]
    fn test_line_accepts_line_only_curves() {
        let mut line = Line::new();
        line.set_curve(Arc::new(Bundle::default()));
        assert!(line.generate(&DATA).is_some());
    }
}
