//! Open cubic B-spline interpolation.

use crate::curve::basis::Knots;
use crate::curve::{Curve, CurveFactory, LineState};
use crate::path::PathContext;

/// Uniform cubic B-spline without repeated end points.
///
/// The curve starts near the second point and ends near the penultimate one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasisOpen;

impl CurveFactory for BasisOpen {
    fn name(&self) -> &str {
        "basis-open"
    }

    fn curve(&self) -> Box<dyn Curve> {
        Box::new(BasisOpenCurve::default())
    }
}

#[derive(Debug, Default)]
struct BasisOpenCurve {
    line: LineState,
    knots: Knots,
    point: u8,
}

impl Curve for BasisOpenCurve {
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
        if self.line.should_close(self.point == 3) {
            ctx.close_path();
        }
        self.line.toggle();
    }

    fn point(&mut self, ctx: &mut dyn PathContext, x: f64, y: f64) {
        match self.point {
            0 => self.point = 1,
            1 => self.point = 2,
            2 => {
                self.point = 3;
                let (mx, my) = self.knots.midpoint(x, y);
                self.line.begin(ctx, mx, my);
            }
            _ => {
                self.point = 4;
                self.knots.segment(ctx, x, y);
            }
        }
        self.knots.shift(x, y);
    }
}
