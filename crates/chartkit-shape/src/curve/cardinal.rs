//! Cardinal spline interpolation.

use std::sync::Arc;

use crate::curve::{Curve, CurveFactory, LineState, SharedCurveFactory};
use crate::path::PathContext;

/// Cubic cardinal spline.
///
/// `tension` in `[0, 1]` scales the tangents: 0 (the default) gives a
/// Catmull-Rom spline with uniform parameterisation, 1 gives straight
/// segments through every point.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cardinal {
    tension: f64,
}

impl Cardinal {
    /// Creates a cardinal curve with the given tension.
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

impl CurveFactory for Cardinal {
    fn name(&self) -> &str {
        "cardinal"
    }

    fn curve(&self) -> Box<dyn Curve> {
        Box::new(CardinalCurve::new(self.tension))
    }

    fn with_tension(&self, tension: f64) -> Option<SharedCurveFactory> {
        Some(Arc::new(self.tension(tension)))
    }
}

/// Sliding window of the last three points plus the tangent scale.
#[derive(Debug, Clone, Copy)]
pub(super) struct Window {
    pub(super) k: f64,
    pub(super) x0: f64,
    pub(super) y0: f64,
    pub(super) x1: f64,
    pub(super) y1: f64,
    pub(super) x2: f64,
    pub(super) y2: f64,
}

impl Window {
    pub(super) fn new(tension: f64) -> Self {
        Self {
            k: (1.0 - tension) / 6.0,
            x0: f64::NAN,
            y0: f64::NAN,
            x1: f64::NAN,
            y1: f64::NAN,
            x2: f64::NAN,
            y2: f64::NAN,
        }
    }

    pub(super) fn reset(&mut self) {
        *self = Self { k: self.k, ..Self::new(0.0) };
    }

    /// Emits the segment from `(x1, y1)` to `(x2, y2)`, with `(x, y)` as the next point.
    pub(super) fn segment(&self, ctx: &mut dyn PathContext, x: f64, y: f64) {
        ctx.bezier_curve_to(
            self.x1 + self.k * (self.x2 - self.x0),
            self.y1 + self.k * (self.y2 - self.y0),
            self.x2 + self.k * (self.x1 - x),
            self.y2 + self.k * (self.y1 - y),
            self.x2,
            self.y2,
        );
    }

    pub(super) fn shift(&mut self, x: f64, y: f64) {
        self.x0 = self.x1;
        self.x1 = self.x2;
        self.x2 = x;
        self.y0 = self.y1;
        self.y1 = self.y2;
        self.y2 = y;
    }
}

#[derive(Debug)]
pub(super) struct CardinalCurve {
    line: LineState,
    window: Window,
    point: u8,
}

impl CardinalCurve {
    pub(super) fn new(tension: f64) -> Self {
        Self {
            line: LineState::default(),
            window: Window::new(tension),
            point: 0,
        }
    }
}

impl Curve for CardinalCurve {
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
        let w = self.window;
        match self.point {
            2 => ctx.line_to(w.x2, w.y2),
            3 => w.segment(ctx, w.x1, w.y1),
            _ => {}
        }
        if self.line.should_close(self.point == 1) {
            ctx.close_path();
        }
        self.line.toggle();
    }

    fn point(&mut self, ctx: &mut dyn PathContext, x: f64, y: f64) {
        match self.point {
            0 => {
                self.point = 1;
                self.line.begin(ctx, x, y);
            }
            1 => {
                self.point = 2;
                // Mirror the first point so the opening tangent is zero.
                self.window.x1 = x;
                self.window.y1 = y;
            }
            _ => {
                self.point = 3;
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

    const POINTS: [(f64, f64); 3] = [(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)];

    #[test]
    fn test_full_tension_is_straight() {
        let d = render_line(&Cardinal::new(1.0), &POINTS);
        assert_eq!(d, "M0,0C0,0,1,1,1,1C1,1,2,0,2,0");
    }

    #[test]
    fn test_tension_changes_output() {
        let loose = render_line(&Cardinal::default(), &POINTS);
        let tight = render_line(&Cardinal::new(0.5), &POINTS);
        assert_ne!(loose, tight);
        assert!(loose.starts_with("M0,0C"));
        assert!(loose.ends_with(",2,0"));
    }

    #[test]
    fn test_two_points_draw_a_segment() {
        let d = render_line(&Cardinal::default(), &[(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(d, "M0,0L1,1");
    }

    #[test]
    fn test_tension_capability() {
        let tuned = Cardinal::default().with_tension(0.3).unwrap();
        assert_eq!(tuned.name(), "cardinal");
        assert!(Cardinal::default().with_beta(0.3).is_none());
        assert!(Cardinal::default().with_alpha(0.3).is_none());
    }
}
