//! Polyline interpolation.

use crate::curve::{Curve, CurveFactory, LineState};
use crate::path::PathContext;

/// Straight segments through every point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Linear;

impl CurveFactory for Linear {
    fn name(&self) -> &str {
        "linear"
    }

    fn curve(&self) -> Box<dyn Curve> {
        Box::new(LinearCurve::default())
    }
}

#[derive(Debug, Default)]
struct LinearCurve {
    line: LineState,
    point: u8,
}

impl Curve for LinearCurve {
    fn area_start(&mut self) {
        self.line.area_start();
    }

    fn area_end(&mut self) {
        self.line.area_end();
    }

    fn line_start(&mut self) {
        self.point = 0;
    }

    fn line_end(&mut self, ctx: &mut dyn PathContext) {
        if self.line.should_close(self.point == 1) {
            ctx.close_path();
        }
        self.line.toggle();
    }

    fn point(&mut self, ctx: &mut dyn PathContext, x: f64, y: f64) {
        if self.point == 0 {
            self.point = 1;
            self.line.begin(ctx, x, y);
        } else {
            self.point = 2;
            ctx.line_to(x, y);
        }
    }
}
