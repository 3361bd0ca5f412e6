//! Piecewise-constant (step) interpolation.

use crate::curve::{Curve, CurveFactory, LineState};
use crate::path::PathContext;

/// Alternating horizontal and vertical segments.
///
/// The position of the vertical riser between two points is `t` of the way
/// along the horizontal distance: 0.5 for [`Step::new`], 0 for
/// [`Step::before`] and 1 for [`Step::after`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    t: f64,
}

impl Step {
    /// Steps at the midpoint between points.
    pub const fn new() -> Self {
        Self { t: 0.5 }
    }

    /// Steps at the start of each segment (the y-value changes first).
    pub const fn before() -> Self {
        Self { t: 0.0 }
    }

    /// Steps at the end of each segment (the y-value changes last).
    pub const fn after() -> Self {
        Self { t: 1.0 }
    }

    /// Returns the riser position.
    pub fn t(&self) -> f64 {
        self.t
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveFactory for Step {
    fn name(&self) -> &str {
        if self.t <= 0.0 {
            "step-before"
        } else if self.t >= 1.0 {
            "step-after"
        } else {
            "step"
        }
    }

    fn curve(&self) -> Box<dyn Curve> {
        Box::new(StepCurve {
            t: self.t,
            line: LineState::default(),
            point: 0,
            x: f64::NAN,
            y: f64::NAN,
        })
    }
}

#[derive(Debug)]
struct StepCurve {
    t: f64,
    line: LineState,
    point: u8,
    x: f64,
    y: f64,
}

impl Curve for StepCurve {
    fn area_start(&mut self) {
        self.line.area_start();
    }

    fn area_end(&mut self) {
        self.line.area_end();
    }

    fn line_start(&mut self) {
        self.x = f64::NAN;
        self.y = f64::NAN;
        self.point = 0;
    }

    fn line_end(&mut self, ctx: &mut dyn PathContext) {
        if 0.0 < self.t && self.t < 1.0 && self.point == 2 {
            ctx.line_to(self.x, self.y);
        }
        if self.line.should_close(self.point == 1) {
            ctx.close_path();
        }
        // The baseline of an area runs backwards, so mirror the riser.
        if self.line.in_area() {
            self.t = 1.0 - self.t;
            self.line.toggle();
        }
    }

    fn point(&mut self, ctx: &mut dyn PathContext, x: f64, y: f64) {
        if self.point == 0 {
            self.point = 1;
            self.line.begin(ctx, x, y);
        } else {
            self.point = 2;
            if self.t <= 0.0 {
                ctx.line_to(self.x, y);
                ctx.line_to(x, y);
            } else {
                let x1 = self.x * (1.0 - self.t) + x * self.t;
                ctx.line_to(x1, self.y);
                ctx.line_to(x1, y);
            }
        }
        self.x = x;
        self.y = y;
    }
}
