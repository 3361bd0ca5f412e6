//! Open Catmull-Rom spline interpolation.

use std::sync::Arc;

use crate::curve::cardinal_open::CardinalOpenCurve;
use crate::curve::catmull_rom::{Knots, DEFAULT_ALPHA};
use crate::curve::{Curve, CurveFactory, LineState, SharedCurveFactory};
use crate::path::PathContext;

/// Open Catmull-Rom spline; the first and last points only steer tangents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatmullRomOpen {
    alpha: f64,
}

impl CatmullRomOpen {
    /// Creates an open Catmull-Rom curve with the given alpha.
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }

    /// Returns a copy with a different alpha.
    #[must_use]
    pub fn alpha(self, alpha: f64) -> Self {
        Self::new(alpha)
    }

    /// Returns the parameterisation exponent.
    pub fn alpha_value(&self) -> f64 {
        self.alpha
    }
}

impl Default for CatmullRomOpen {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA)
    }
}

impl CurveFactory for CatmullRomOpen {
    fn name(&self) -> &str {
        "catmull-rom-open"
    }

    fn curve(&self) -> Box<dyn Curve> {
        if self.alpha == 0.0 || self.alpha.is_nan() {
            Box::new(CardinalOpenCurve::new(0.0))
        } else {
            Box::new(CatmullRomOpenCurve::new(self.alpha))
        }
    }

    fn with_alpha(&self, alpha: f64) -> Option<SharedCurveFactory> {
        Some(Arc::new(self.alpha(alpha)))
    }
}

#[derive(Debug)]
struct CatmullRomOpenCurve {
    line: LineState,
    knots: Knots,
    point: u8,
}

impl CatmullRomOpenCurve {
    fn new(alpha: f64) -> Self {
        Self {
            line: LineState::default(),
            knots: Knots::new(alpha),
            point: 0,
        }
    }
}

impl Curve for CatmullRomOpenCurve {
    fn area_start(&mut self) {
        self.line.area_start();
    }

    fn area_end(&mut self) {
        self.line.area_end();
    }

    fn line_start(&mut self) {
        self.knots.reset();
        self.point = 0;
    }

    fn line_end(&mut self, ctx: &mut dyn PathContext) {
        if self.line.should_close(self.point == 3) {
            ctx.close_path();
        }
        self.line.toggle();
    }

    fn point(&mut self, ctx: &mut dyn PathContext, x: f64, y: f64) {
        if self.point > 0 {
            self.knots.measure(x, y);
        }
        match self.point {
            0 => self.point = 1,
            1 => self.point = 2,
            2 => {
                self.point = 3;
                let (x2, y2) = (self.knots.x2, self.knots.y2);
                self.line.begin(ctx, x2, y2);
            }
            _ => {
                self.point = 4;
                self.knots.segment(ctx, x, y);
            }
        }
        self.knots.shift(x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::render_line;

    #[test]
    fn test_starts_at_second_point() {
        let d = render_line(
            &CatmullRomOpen::default(),
            &[(0.0, 0.0), (1.0, 3.0), (4.0, 3.0), (5.0, 0.0)],
        );
        assert!(d.starts_with("M1,3C"));
        assert!(d.ends_with(",4,3"));
        assert_eq!(d.matches('C').count(), 1);
    }
}
