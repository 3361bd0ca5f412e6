//! Closed cubic B-spline interpolation.

use crate::curve::basis::Knots;
use crate::curve::{Curve, CurveFactory};
use crate::path::PathContext;

/// Closed uniform cubic B-spline; the first three points wrap around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasisClosed;

impl CurveFactory for BasisClosed {
    fn name(&self) -> &str {
        "basis-closed"
    }

    fn curve(&self) -> Box<dyn Curve> {
        Box::new(BasisClosedCurve::default())
    }
}

#[derive(Debug)]
struct BasisClosedCurve {
    knots: Knots,
    /// The first three points, replayed when the line ends.
    head: [(f64, f64); 3],
    point: u8,
}

impl Default for BasisClosedCurve {
    fn default() -> Self {
        Self {
            knots: Knots::default(),
            head: [(f64::NAN, f64::NAN); 3],
            point: 0,
        }
    }
}

impl Curve for BasisClosedCurve {
    fn area_start(&mut self) {}

    fn area_end(&mut self) {}

    fn line_start(&mut self) {
        *self = Self::default();
    }

    fn line_end(&mut self, ctx: &mut dyn PathContext) {
        let [(x2, y2), (x3, y3), (x4, y4)] = self.head;
        match self.point {
            1 => {
                ctx.move_to(x2, y2);
                ctx.close_path();
            }
            2 => {
                ctx.move_to((x2 + 2.0 * x3) / 3.0, (y2 + 2.0 * y3) / 3.0);
                ctx.line_to((x3 + 2.0 * x2) / 3.0, (y3 + 2.0 * y2) / 3.0);
                ctx.close_path();
            }
            3 => {
                self.point(ctx, x2, y2);
                self.point(ctx, x3, y3);
                self.point(ctx, x4, y4);
            }
            _ => {}
        }
    }

    fn point(&mut self, ctx: &mut dyn PathContext, x: f64, y: f64) {
        match self.point {
            0 => {
                self.point = 1;
                self.head[0] = (x, y);
            }
            1 => {
                self.point = 2;
                self.head[1] = (x, y);
            }
            2 => {
                self.point = 3;
                self.head[2] = (x, y);
                let (mx, my) = self.knots.midpoint(x, y);
                ctx.move_to(mx, my);
            }
            _ => self.knots.segment(ctx, x, y),
        }
        self.knots.shift(x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::render_line;

    #[test]
    fn test_single_point() {
        assert_eq!(render_line(&BasisClosed, &[(1.0, 2.0)]), "M1,2Z");
    }

    #[test]
    fn test_two_points() {
        let d = render_line(&BasisClosed, &[(0.0, 0.0), (3.0, 6.0)]);
        assert_eq!(d, "M2,4L1,2Z");
    }

    #[test]
    fn test_closed_loop_returns_to_start() {
        let d = render_line(
            &BasisClosed,
            &[(0.0, 0.0), (6.0, 0.0), (6.0, 6.0), (0.0, 6.0)],
        );
        // Three replayed points plus one interior span.
        assert_eq!(d.matches('C').count(), 4);
        assert!(d.starts_with('M'));
        assert!(!d.ends_with('Z'));
    }
}
