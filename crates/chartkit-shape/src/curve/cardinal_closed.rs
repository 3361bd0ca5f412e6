//! Closed cardinal spline interpolation.

use std::sync::Arc;

use crate::curve::cardinal::Window;
use crate::curve::{Curve, CurveFactory, SharedCurveFactory};
use crate::path::PathContext;

/// Closed cubic cardinal spline; the first three points wrap around.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CardinalClosed {
    tension: f64,
}

impl CardinalClosed {
    /// Creates a closed cardinal curve with the given tension.
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

impl CurveFactory for CardinalClosed {
    fn name(&self) -> &str {
        "cardinal-closed"
    }

    fn curve(&self) -> Box<dyn Curve> {
        Box::new(CardinalClosedCurve::new(self.tension))
    }

    fn with_tension(&self, tension: f64) -> Option<SharedCurveFactory> {
        Some(Arc::new(self.tension(tension)))
    }
}

#[derive(Debug)]
pub(super) struct CardinalClosedCurve {
    window: Window,
    head: [(f64, f64); 3],
    point: u8,
}

impl CardinalClosedCurve {
    pub(super) fn new(tension: f64) -> Self {
        Self {
            window: Window::new(tension),
            head: [(f64::NAN, f64::NAN); 3],
            point: 0,
        }
    }
}

impl Curve for CardinalClosedCurve {
    fn area_start(&mut self) {}

    fn area_end(&mut self) {}

    fn line_start(&mut self) {
        self.window.reset();
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
            _ => self.window.segment(ctx, x, y),
        }
        self.window.shift(x, y);
    }
}
