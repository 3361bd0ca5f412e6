//! Area generator.
//!
//! An area is bounded by a topline `(x1, y1)` and a baseline `(x0, y0)`.
//! The topline is drawn first, then the baseline in reverse order, and the
//! curve joins both into one closed shape per run of defined data.

use std::fmt;
use std::sync::Arc;

use crate::curve::{Linear, SharedCurveFactory};
use crate::error::{ShapeError, ShapeResult};
use crate::line::{
    always, constant, point_x, point_y, render_to_string, Accessor, Line, Predicate, XY,
};
use crate::path::PathContext;

/// An area shape generator.
///
/// When `x1` (or `y1`) is unset, the topline reuses the baseline's x (or y)
/// value for each datum.
pub struct Area<T> {
    x0: Accessor<T>,
    x1: Option<Accessor<T>>,
    y0: Accessor<T>,
    y1: Option<Accessor<T>>,
    defined: Predicate<T>,
    curve: SharedCurveFactory,
    digits: Option<u32>,
}

impl<T: XY> Area<T> {
    /// Creates a linear area between `y = 0` and the data's y values.
    pub fn new() -> Self {
        Self::with_accessors(point_x(), constant(0.0), point_y())
    }
}

impl<T: XY> Default for Area<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Area<T> {
    /// Creates a linear area with a shared x accessor, baseline `y0` and topline `y1`.
    pub fn with_accessors(x: Accessor<T>, y0: Accessor<T>, y1: Accessor<T>) -> Self {
        Self {
            x0: x,
            x1: None,
            y0,
            y1: Some(y1),
            defined: always(),
            curve: Arc::new(Linear),
            digits: None,
        }
    }

    /// Sets `x0` and unsets `x1`, so both lines share one x accessor.
    pub fn set_x(&mut self, x: Accessor<T>) -> &mut Self {
        self.x0 = x;
        self.x1 = None;
        self
    }

    /// Sets the baseline x accessor.
    pub fn set_x0(&mut self, x0: Accessor<T>) -> &mut Self {
        self.x0 = x0;
        self
    }

    /// Sets or unsets the topline x accessor.
    pub fn set_x1(&mut self, x1: Option<Accessor<T>>) -> &mut Self {
        self.x1 = x1;
        self
    }

    /// Sets `y0` and unsets `y1`.
    pub fn set_y(&mut self, y: Accessor<T>) -> &mut Self {
        self.y0 = y;
        self.y1 = None;
        self
    }

    /// Sets the baseline y accessor.
    pub fn set_y0(&mut self, y0: Accessor<T>) -> &mut Self {
        self.y0 = y0;
        self
    }

    /// Sets or unsets the topline y accessor.
    pub fn set_y1(&mut self, y1: Option<Accessor<T>>) -> &mut Self {
        self.y1 = y1;
        self
    }

    /// Sets the predicate deciding which data are drawn.
    pub fn set_defined(&mut self, defined: Predicate<T>) -> &mut Self {
        self.defined = defined;
        self
    }

    /// Sets the curve interpolator.
    ///
    /// Fails with [`ShapeError::LineOnlyCurve`] for curves that cannot
    /// close an area, leaving the current curve in place.
    pub fn set_curve(&mut self, curve: SharedCurveFactory) -> ShapeResult<&mut Self> {
        if !curve.supports_area() {
            return Err(ShapeError::line_only(curve.name()));
        }
        self.curve = curve;
        Ok(self)
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

    /// Draws the area into an arbitrary path context.
    pub fn render(&self, data: &[T], ctx: &mut dyn PathContext) {
        let mut curve = self.curve.curve();
        let mut baseline: Vec<(f64, f64)> = Vec::with_capacity(data.len());
        let mut drawing = false;

        for i in 0..=data.len() {
            let defined = i < data.len() && (self.defined)(&data[i], i, data);
            if defined != drawing {
                drawing = defined;
                if drawing {
                    curve.area_start();
                    curve.line_start();
                } else {
                    curve.line_end(ctx);
                    curve.line_start();
                    for &(x, y) in baseline.iter().rev() {
                        curve.point(ctx, x, y);
                    }
                    curve.line_end(ctx);
                    curve.area_end();
                    baseline.clear();
                }
            }
            if drawing {
                let d = &data[i];
                let x0 = (self.x0)(d, i, data);
                let y0 = (self.y0)(d, i, data);
                let x1 = self.x1.as_ref().map_or(x0, |x1| x1(d, i, data));
                let y1 = self.y1.as_ref().map_or(y0, |y1| y1(d, i, data));
                baseline.push((x0, y0));
                curve.point(ctx, x1, y1);
            }
        }
    }

    /// A line generator tracing the baseline (`x0`, `y0`).
    pub fn line_x0(&self) -> Line<T> {
        self.edge(Arc::clone(&self.x0), Arc::clone(&self.y0))
    }

    /// A line generator tracing `x1` (falling back to `x0`) against `y0`.
    pub fn line_x1(&self) -> Line<T> {
        let x1 = self.x1.as_ref().unwrap_or(&self.x0);
        self.edge(Arc::clone(x1), Arc::clone(&self.y0))
    }

    /// Same as [`Area::line_x0`].
    pub fn line_y0(&self) -> Line<T> {
        self.line_x0()
    }

    /// A line generator tracing `x0` against `y1` (falling back to `y0`).
    pub fn line_y1(&self) -> Line<T> {
        let y1 = self.y1.as_ref().unwrap_or(&self.y0);
        self.edge(Arc::clone(&self.x0), Arc::clone(y1))
    }

    fn edge(&self, x: Accessor<T>, y: Accessor<T>) -> Line<T> {
        let mut line = Line::with_accessors(x, y);
        line.set_defined(Arc::clone(&self.defined))
            .set_curve(Arc::clone(&self.curve))
            .set_digits(self.digits);
        line
    }
}

impl<T> Clone for Area<T> {
    fn clone(&self) -> Self {
        Self {
            x0: Arc::clone(&self.x0),
            x1: self.x1.clone(),
            y0: Arc::clone(&self.y0),
            y1: self.y1.clone(),
            defined: Arc::clone(&self.defined),
            curve: Arc::clone(&self.curve),
            digits: self.digits,
        }
    }
}

impl<T> fmt::Debug for Area<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Area")
            .field("curve", &self.curve.name())
            .field("has_x1", &self.x1.is_some())
            .field("has_y1", &self.y1.is_some())
            .field("digits", &self.digits)
            .finish_non_exhaustive()
    }
}
