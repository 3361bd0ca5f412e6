//! Monotone cubic interpolation.
//!
//! Steffen, "A Simple Method for Monotonic Interpolation in One Dimension":
//! a cubic Hermite spline whose tangents are limited so the curve never
//! overshoots the data, assuming monotonicity in x (or in y for
//! [`MonotoneY`]).

use crate::curve::{Curve, CurveFactory, LineState};
use crate::path::PathContext;

/// Monotone cubic spline, assuming points are monotonic in x.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonotoneX;

/// Monotone cubic spline, assuming points are monotonic in y.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonotoneY;

impl CurveFactory for MonotoneX {
    fn name(&self) -> &str {
        "monotone-x"
    }

    fn curve(&self) -> Box<dyn Curve> {
        Box::new(MonotoneCurve::default())
    }
}

impl CurveFactory for MonotoneY {
    fn name(&self) -> &str {
        "monotone-y"
    }

    fn curve(&self) -> Box<dyn Curve> {
        Box::new(Reflected(MonotoneCurve::default()))
    }
}

fn sign(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// JavaScript truthiness of a number: zero and NaN are false.
fn truthy(x: f64) -> bool {
    x != 0.0 && !x.is_nan()
}

#[derive(Debug)]
struct MonotoneCurve {
    line: LineState,
    point: u8,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    /// Tangent at `(x0, y0)` carried over from the previous segment.
    t0: f64,
}

impl Default for MonotoneCurve {
    fn default() -> Self {
        Self {
            line: LineState::default(),
            point: 0,
            x0: f64::NAN,
            y0: f64::NAN,
            x1: f64::NAN,
            y1: f64::NAN,
            t0: f64::NAN,
        }
    }
}

impl MonotoneCurve {
    /// Tangent at `(x1, y1)` from its two neighbours (Steffen's limiter).
    fn slope3(&self, x2: f64, y2: f64) -> f64 {
        let h0 = self.x1 - self.x0;
        let h1 = x2 - self.x1;
        // Zero-width intervals divide by a signed zero, producing a signed infinity.
        let d0 = if truthy(h0) { h0 } else if h1 < 0.0 { -0.0 } else { 0.0 };
        let d1 = if truthy(h1) { h1 } else if h0 < 0.0 { -0.0 } else { 0.0 };
        let s0 = (self.y1 - self.y0) / d0;
        let s1 = (y2 - self.y1) / d1;
        let p = (s0 * h1 + s1 * h0) / (h0 + h1);
        let bounds = [s0.abs(), s1.abs(), 0.5 * p.abs()];
        if bounds.iter().any(|b| b.is_nan()) {
            return 0.0;
        }
        let t = (sign(s0) + sign(s1)) * bounds[0].min(bounds[1]).min(bounds[2]);
        if truthy(t) {
            t
        } else {
            0.0
        }
    }

    /// One-sided tangent at an end point, given the tangent at the other end.
    fn slope2(&self, t: f64) -> f64 {
        let h = self.x1 - self.x0;
        if truthy(h) {
            (3.0 * (self.y1 - self.y0) / h - t) / 2.0
        } else {
            t
        }
    }

    /// Emits the Hermite segment from `(x0, y0)` to `(x1, y1)`.
    fn segment(&self, ctx: &mut dyn PathContext, t0: f64, t1: f64) {
        let dx = (self.x1 - self.x0) / 3.0;
        ctx.bezier_curve_to(
            self.x0 + dx,
            self.y0 + dx * t0,
            self.x1 - dx,
            self.y1 - dx * t1,
            self.x1,
            self.y1,
        );
    }
}

impl Curve for MonotoneCurve {
    fn area_start(&mut self) {
        self.line.area_start();
    }

    fn area_end(&mut self) {
        self.line.area_end();
    }

    fn line_start(&mut self) {
        self.x0 = f64::NAN;
        self.y0 = f64::NAN;
        self.x1 = f64::NAN;
        self.y1 = f64::NAN;
        self.t0 = f64::NAN;
        self.point = 0;
    }

    fn line_end(&mut self, ctx: &mut dyn PathContext) {
        match self.point {
            2 => ctx.line_to(self.x1, self.y1),
            3 => self.segment(ctx, self.t0, self.slope2(self.t0)),
            _ => {}
        }
        if self.line.should_close(self.point == 1) {
            ctx.close_path();
        }
        self.line.toggle();
    }

    fn point(&mut self, ctx: &mut dyn PathContext, x: f64, y: f64) {
        // Coincident points carry no direction.
        if x == self.x1 && y == self.y1 {
            return;
        }

        let mut t1 = f64::NAN;
        match self.point {
            0 => {
                self.point = 1;
                self.line.begin(ctx, x, y);
            }
            1 => self.point = 2,
            2 => {
                self.point = 3;
                t1 = self.slope3(x, y);
                self.segment(ctx, self.slope2(t1), t1);
            }
            _ => {
                t1 = self.slope3(x, y);
                self.segment(ctx, self.t0, t1);
            }
        }

        self.x0 = self.x1;
        self.x1 = x;
        self.y0 = self.y1;
        self.y1 = y;
        self.t0 = t1;
    }
}

/// Swaps x and y on the way in and on the way out.
#[derive(Debug)]
struct Reflected<C>(C);

struct ReflectContext<'a>(&'a mut dyn PathContext);

impl PathContext for ReflectContext<'_> {
    fn move_to(&mut self, x: f64, y: f64) {
        self.0.move_to(y, x);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.0.line_to(y, x);
    }

    fn bezier_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.0.bezier_curve_to(y1, x1, y2, x2, y, x);
    }

    fn close_path(&mut self) {
        self.0.close_path();
    }
}

impl<C: Curve> Curve for Reflected<C> {
    fn area_start(&mut self) {
        self.0.area_start();
    }

    fn area_end(&mut self) {
        self.0.area_end();
    }

    fn line_start(&mut self) {
        self.0.line_start();
    }

    fn line_end(&mut self, ctx: &mut dyn PathContext) {
        self.0.line_end(&mut ReflectContext(ctx));
    }

    fn point(&mut self, ctx: &mut dyn PathContext, x: f64, y: f64) {
        self.0.point(&mut ReflectContext(ctx), y, x);
    }
}
