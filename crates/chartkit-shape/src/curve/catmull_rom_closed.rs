//! Closed Catmull-Rom spline interpolation.

use std::sync::Arc;

use crate::curve::cardinal_closed::CardinalClosedCurve;
use crate::curve::catmull_rom::{Knots, DEFAULT_ALPHA};
use crate::curve::{Curve, CurveFactory, SharedCurveFactory};
use crate::path::PathContext;

/// Closed Catmull-Rom spline; the first three points wrap around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatmullRomClosed {
    alpha: f64,
}

impl CatmullRomClosed {
    /// Creates a closed Catmull-Rom curve with the given alpha.
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

impl Default for CatmullRomClosed {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA)
    }
}

impl CurveFactory for CatmullRomClosed {
    fn name(&self) -> &str {
        "catmull-rom-closed"
    }

    fn curve(&self) -> Box<dyn Curve> {
        if self.alpha == 0.0 || self.alpha.is_nan() {
            Box::new(CardinalClosedCurve::new(0.0))
        } else {
            Box::new(CatmullRomClosedCurve::new(self.alpha))
        }
    }

    fn with_alpha(&self, alpha: f64) -> Option<SharedCurveFactory> {
        Some(Arc::new(self.alpha(alpha)))
    }
}

#[derive(Debug)]
struct CatmullRomClosedCurve {
    knots: Knots,
    head: [(f64, f64); 3],
    point: u8,
}

impl CatmullRomClosedCurve {
    fn new(alpha: f64) -> Self {
        Self {
            knots: Knots::new(alpha),
            head: [(f64::NAN, f64::NAN); 3],
            point: 0,
        }
    }
}

impl Curve for CatmullRomClosedCurve {
    fn area_start(&mut self) {}

    fn area_end(&mut self) {}

    fn line_start(&mut self) {
        self.knots.reset();
        self.head = [(f64::NAN, f64::NAN); 3];
        self.point = 0;
    }

    fn line_end(&mut self, ctx: &mut dyn PathContext) {
        let [(x3, y3), (x4, y4), (x5, y5)] = self.head;
        match self.point {
            1 => {
                ctx.move_to(x3, y3);
                ctx.close_path();
            }
            2 => {
                ctx.line_to(x3, y3);
                ctx.close_path();
            }
            3 => {
                self.point(ctx, x3, y3);
                self.point(ctx, x4, y4);
                self.point(ctx, x5, y5);
            }
            _ => {}
        }
    }

    fn point(&mut self, ctx: &mut dyn PathContext, x: f64, y: f64) {
        if self.point > 0 {
            self.knots.measure(x, y);
        }
        match self.point {
            0 => {
                self.point = 1;
                self.head[0] = (x, y);
            }
            1 => {
                self.point = 2;
                self.head[1] = (x, y);
                ctx.move_to(x, y);
            }
            2 => {
                self.point = 3;
                self.head[2] = (x, y);
            }
            _ => self.knots.segment(ctx, x, y),
        }
        self.knots.shift(x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{render_line, CardinalClosed};

    const SQUARE: [(f64, f64); 4] = [(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)];

    #[test]
    fn test_loop_has_one_segment_per_point() {
        let d = render_line(&CatmullRomClosed::default(), &SQUARE);
        assert!(d.starts_with("M2,0C"));
        assert_eq!(d.matches('C').count(), 4);
    }

    #[test]
    fn test_alpha_zero_is_cardinal_closed() {
        assert_eq!(
            render_line(&CatmullRomClosed::new(0.0), &SQUARE),
            render_line(&CardinalClosed::new(0.0), &SQUARE)
        );
    }
}
