//! Bump interpolation: S-shaped Bézier links between consecutive points.

use crate::curve::{Curve, CurveFactory, LineState};
use crate::path::PathContext;

/// Bumps with horizontal tangents at each point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BumpX;

/// Bumps with vertical tangents at each point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BumpY;

impl CurveFactory for BumpX {
    fn name(&self) -> &str {
        "bump-x"
    }

    fn curve(&self) -> Box<dyn Curve> {
        Box::new(BumpCurve::new(true))
    }
}

impl CurveFactory for BumpY {
    fn name(&self) -> &str {
        "bump-y"
    }

    fn curve(&self) -> Box<dyn Curve> {
        Box::new(BumpCurve::new(false))
    }
}

#[derive(Debug)]
struct BumpCurve {
    horizontal: bool,
    line: LineState,
    point: u8,
    x0: f64,
    y0: f64,
}

impl BumpCurve {
    fn new(horizontal: bool) -> Self {
        Self {
            horizontal,
            line: LineState::default(),
            point: 0,
            x0: f64::NAN,
            y0: f64::NAN,
        }
    }
}

impl Curve for BumpCurve {
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
            if self.horizontal {
                let mx = (self.x0 + x) / 2.0;
                ctx.bezier_curve_to(mx, self.y0, mx, y, x, y);
            } else {
                let my = (self.y0 + y) / 2.0;
                ctx.bezier_curve_to(self.x0, my, x, my, x, y);
            }
        }
        self.x0 = x;
        self.y0 = y;
    }
}
