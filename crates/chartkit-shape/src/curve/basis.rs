//! Cubic B-spline interpolation.

use crate::curve::{Curve, CurveFactory, LineState};
use crate::path::PathContext;

/// Uniform cubic B-spline with the end points repeated.
///
/// The curve passes through the first and last points but, in general, not
/// through the interior ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Basis;

impl CurveFactory for Basis {
    fn name(&self) -> &str {
        "basis"
    }

    fn curve(&self) -> Box<dyn Curve> {
        Box::new(BasisCurve::default())
    }
}

/// The two most recent control points of a B-spline.
#[derive(Debug, Clone, Copy)]
pub(super) struct Knots {
    pub(super) x0: f64,
    pub(super) y0: f64,
    pub(super) x1: f64,
    pub(super) y1: f64,
}

impl Default for Knots {
    fn default() -> Self {
        Self {
            x0: f64::NAN,
            y0: f64::NAN,
            x1: f64::NAN,
            y1: f64::NAN,
        }
    }
}

impl Knots {
    /// Emits the Bézier segment for the span ending at `(x, y)`.
    pub(super) fn segment(&self, ctx: &mut dyn PathContext, x: f64, y: f64) {
        ctx.bezier_curve_to(
            (2.0 * self.x0 + self.x1) / 3.0,
            (2.0 * self.y0 + self.y1) / 3.0,
            (self.x0 + 2.0 * self.x1) / 3.0,
            (self.y0 + 2.0 * self.y1) / 3.0,
            (self.x0 + 4.0 * self.x1 + x) / 6.0,
            (self.y0 + 4.0 * self.y1 + y) / 6.0,
        );
    }

    /// The B-spline point between the two knots and `(x, y)`.
    pub(super) fn midpoint(&self, x: f64, y: f64) -> (f64, f64) {
        (
            (self.x0 + 4.0 * self.x1 + x) / 6.0,
            (self.y0 + 4.0 * self.y1 + y) / 6.0,
        )
    }

    pub(super) fn shift(&mut self, x: f64, y: f64) {
        self.x0 = self.x1;
        self.x1 = x;
        self.y0 = self.y1;
        self.y1 = y;
    }
}

#[derive(Debug, Default)]
pub(super) struct BasisCurve {
    line: LineState,
    knots: Knots,
    point: u8,
}

impl Curve for BasisCurve {
    fn area_start(&mut self) {
        self.line.area_start();
    }

    fn area_end(&mut self) {
        self.line.area_end();
    }

    fn line_start(&mut self) {
        self.knots = Knots::default();
        self.point = 0;
    }

    fn line_end(&mut self, ctx: &mut dyn PathContext) {
        let Knots { x1, y1, .. } = self.knots;
        match self.point {
            3 => {
                self.knots.segment(ctx, x1, y1);
                ctx.line_to(x1, y1);
            }
            2 => ctx.line_to(x1, y1),
            _ => {}
        }
        if self.line.should_close(self.point == 1) {
            ctx.close_path();
        }
        self.line.toggle();
    }

    fn point(&mut self, ctx: &mut dyn PathContext, x: f64, y: f64) {
        match self.point {
            0 => {
                self.point = 1;
                self.line.begin(ctx, x, y);
            }
            1 => self.point = 2,
            2 => {
                self.point = 3;
                let k = self.knots;
                ctx.line_to((5.0 * k.x0 + k.x1) / 6.0, (5.0 * k.y0 + k.y1) / 6.0);
                self.knots.segment(ctx, x, y);
            }
            _ => self.knots.segment(ctx, x, y),
        }
        self.knots.shift(x, y);
    }
}
