//! Open cardinal spline interpolation.

use std::sync::Arc;

use crate::curve::cardinal::Window;
use crate::curve::{Curve, CurveFactory, LineState, SharedCurveFactory};
use crate::path::PathContext;

/// Open cubic cardinal spline; the first and last points only steer tangents.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CardinalOpen {
    tension: f64,
}

impl CardinalOpen {
    /// Creates an open cardinal curve with the given tension.
    pub fn new(tension: f64) -> Self {
        Self { tension }
    }

    /// Returns a copy with a different tension.
    #[must_use]
    pub fn tension(self, tension: f64) -> Self {
        Self::new(tension)
    }

    /// Returns the tension.
    pub fn tension_value(&self) -> f64 {
        self.tension
    }
}

impl CurveFactory for CardinalOpen {
    fn name(&self) -> &str {
        "cardinal-open"
    }

    fn curve(&self) -> Box<dyn Curve> {
        Box::new(CardinalOpenCurve::new(self.tension))
    }

    fn with_tension(&self, tension: f64) -> Option<SharedCurveFactory> {
        Some(Arc::new(self.tension(tension)))
    }
}

#[derive(Debug)]
pub(super) struct CardinalOpenCurve {
    line: LineState,
    window: Window,
    point: u8,
}

impl CardinalOpenCurve {
    pub(super) fn new(tension: f64) -> Self {
        Self {
            line: LineState::default(),
            window: Window::new(tension),
            point: 0,
        }
    }
}

impl Curve for CardinalOpenCurve {
    fn area_start(&mut self) {
        self.line.area_start();
    }

    fn area_end(&mut self) {
        self.line.area_end();
    }

    fn line_start(&mut self) {
        self.window.reset();
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
                let w = self.window;
                self.line.begin(ctx, w.x2, w.y2);
            }
            _ => {
                self.point = 4;
                self.window.segment(ctx, x, y);
            }
        }
        self.window.shift(x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::render_line;

    #[test]
    fn test_starts_at_second_point() {
        let d = render_line(
            &CardinalOpen::new(1.0),
            &[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.0)],
        );
        assert_eq!(d, "M1,1C1,1,2,0,2,0");
    }
}
