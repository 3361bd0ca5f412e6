//! Closed polyline interpolation.

use crate::curve::{Curve, CurveFactory};
use crate::path::PathContext;

/// Straight segments through every point, closing back to the first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearClosed;

impl CurveFactory for LinearClosed {
    fn name(&self) -> &str {
        "linear-closed"
    }

    fn curve(&self) -> Box<dyn Curve> {
        Box::new(LinearClosedCurve { started: false })
    }
}

#[derive(Debug)]
struct LinearClosedCurve {
    started: bool,
}

impl Curve for LinearClosedCurve {
    fn area_start(&mut self) {}

    fn area_end(&mut self) {}

    fn line_start(&mut self) {
        self.started = false;
    }

    fn line_end(&mut self, ctx: &mut dyn PathContext) {
        if self.started {
            ctx.close_path();
        }
    }

    fn point(&mut self, ctx: &mut dyn PathContext, x: f64, y: f64) {
        if self.started {
            ctx.line_to(x, y);
        } else {
            self.started = true;
            ctx.move_to(x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::render_line;

    #[test]
    fn test_closes_polygon() {
        let d = render_line(&LinearClosed, &[(0.0, 0.0), (2.0, 2.0), (4.0, 0.0)]);
        assert_eq!(d, "M0,0L2,2L4,0Z");
    }
}
