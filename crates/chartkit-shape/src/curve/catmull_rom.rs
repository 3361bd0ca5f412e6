//! Centripetal (and chordal / uniform) Catmull-Rom spline interpolation.
//!
//! Parameterisation follows Yuksel, Schaefer and Keyser, "On the
//! Parameterization of Catmull-Rom Curves": each knot interval is the
//! distance between points raised to `alpha`.

use std::sync::Arc;

use crate::curve::cardinal::CardinalCurve;
use crate::curve::{Curve, CurveFactory, LineState, SharedCurveFactory};
use crate::path::PathContext;

/// Default parameterisation exponent (centripetal).
pub const DEFAULT_ALPHA: f64 = 0.5;

/// Knot lengths below this are treated as coincident points.
const EPSILON: f64 = 1e-12;

/// Catmull-Rom spline.
///
/// `alpha` selects the parameterisation: 0 is uniform, 0.5 centripetal and
/// 1 chordal. An alpha of exactly zero draws a [`Cardinal`](super::Cardinal)
/// curve with zero tension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatmullRom {
    alpha: f64,
}

impl CatmullRom {
    /// Creates a Catmull-Rom curve with the given alpha.
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

impl Default for CatmullRom {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA)
    }
}

impl CurveFactory for CatmullRom {
    fn name(&self) -> &str {
        "catmull-rom"
    }

    fn curve(&self) -> Box<dyn Curve> {
        if self.alpha == 0.0 || self.alpha.is_nan() {
            Box::new(CardinalCurve::new(0.0))
        } else {
            Box::new(CatmullRomCurve::new(self.alpha))
        }
    }

    fn with_alpha(&self, alpha: f64) -> Option<SharedCurveFactory> {
        Some(Arc::new(self.alpha(alpha)))
    }
}

/// Sliding window of three points and the parameterised lengths between them.
#[derive(Debug, Clone, Copy)]
pub(super) struct Knots {
    alpha: f64,
    pub(super) x0: f64,
    pub(super) y0: f64,
    pub(super) x1: f64,
    pub(super) y1: f64,
    pub(super) x2: f64,
    pub(super) y2: f64,
    l01_a: f64,
    l12_a: f64,
    l23_a: f64,
    l01_2a: f64,
    l12_2a: f64,
    l23_2a: f64,
}

impl Knots {
    pub(super) fn new(alpha: f64) -> Self {
        Self {
            alpha,
            x0: f64::NAN,
            y0: f64::NAN,
            x1: f64::NAN,
            y1: f64::NAN,
            x2: f64::NAN,
            y2: f64::NAN,
            l01_a: 0.0,
            l12_a: 0.0,
            l23_a: 0.0,
            l01_2a: 0.0,
            l12_2a: 0.0,
            l23_2a: 0.0,
        }
    }

    pub(super) fn reset(&mut self) {
        *self = Self::new(self.alpha);
    }

    /// Measures the interval from the newest point to `(x, y)`.
    pub(super) fn measure(&mut self, x: f64, y: f64) {
        let x23 = self.x2 - x;
        let y23 = self.y2 - y;
        self.l23_2a = (x23 * x23 + y23 * y23).powf(self.alpha);
        self.l23_a = self.l23_2a.sqrt();
    }

    /// Emits the segment from `(x1, y1)` to `(x2, y2)`, with `(x, y)` as the next point.
    pub(super) fn segment(&self, ctx: &mut dyn PathContext, x: f64, y: f64) {
        let (mut cx1, mut cy1) = (self.x1, self.y1);
        let (mut cx2, mut cy2) = (self.x2, self.y2);

        if self.l01_a > EPSILON {
            let a = 2.0 * self.l01_2a + 3.0 * self.l01_a * self.l12_a + self.l12_2a;
            let n = 3.0 * self.l01_a * (self.l01_a + self.l12_a);
            cx1 = (cx1 * a - self.x0 * self.l12_2a + self.x2 * self.l01_2a) / n;
            cy1 = (cy1 * a - self.y0 * self.l12_2a + self.y2 * self.l01_2a) / n;
        }

        if self.l23_a > EPSILON {
            let b = 2.0 * self.l23_2a + 3.0 * self.l23_a * self.l12_a + self.l12_2a;
            let m = 3.0 * self.l23_a * (self.l23_a + self.l12_a);
            cx2 = (cx2 * b + self.x1 * self.l23_2a - x * self.l12_2a) / m;
            cy2 = (cy2 * b + self.y1 * self.l23_2a - y * self.l12_2a) / m;
        }

        ctx.bezier_curve_to(cx1, cy1, cx2, cy2, self.x2, self.y2);
    }

    pub(super) fn shift(&mut self, x: f64, y: f64) {
        self.l01_a = self.l12_a;
        self.l12_a = self.l23_a;
        self.l01_2a = self.l12_2a;
        self.l12_2a = self.l23_2a;
        self.x0 = self.x1;
        self.x1 = self.x2;
        self.x2 = x;
        self.y0 = self.y1;
        self.y1 = self.y2;
        self.y2 = y;
    }
}

#[derive(Debug)]
struct CatmullRomCurve {
    line: LineState,
    knots: Knots,
    point: u8,
}

impl CatmullRomCurve {
    fn new(alpha: f64) -> Self {
        Self {
            line: LineState::default(),
            knots: Knots::new(alpha),
            point: 0,
        }
    }
}

impl Curve for CatmullRomCurve {
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
        let (x2, y2) = (self.knots.x2, self.knots.y2);
        match self.point {
            2 => ctx.line_to(x2, y2),
            3 => self.point(ctx, x2, y2),
            _ => {}
        }
        if self.line.should_close(self.point == 1) {
            ctx.close_path();
        }
        self.line.toggle();
    }

    fn point(&mut self, ctx: &mut dyn PathContext, x: f64, y: f64) {
        if self.point > 0 {
            self.knots.measure(x, y);
        }
        match self.point {
            0 => {
                self.point = 1;
                self.line.begin(ctx, x, y);
            }
            1 => self.point = 2,
            _ => {
                self.point = 3;
                self.knots.segment(ctx, x, y);
            }
        }
        self.knots.shift(x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{render_line, Cardinal};

    const POINTS: [(f64, f64); 4] = [(0.0, 0.0), (1.0, 3.0), (4.0, 3.0), (5.0, 0.0)];

    #[test]
    fn test_alpha_zero_is_cardinal() {
        assert_eq!(
            render_line(&CatmullRom::new(0.0), &POINTS),
            render_line(&Cardinal::new(0.0), &POINTS)
        );
    }

    #[test]
    fn test_alpha_changes_output() {
        let centripetal = render_line(&CatmullRom::default(), &POINTS);
        let chordal = render_line(&CatmullRom::new(1.0), &POINTS);
        assert_ne!(centripetal, chordal);
        assert_eq!(centripetal.matches('C').count(), 3);
        assert!(centripetal.starts_with("M0,0C"));
        assert!(centripetal.ends_with(",5,0"));
    }

    #[test]
    fn test_alpha_capability() {
        let tuned = CatmullRom::default().with_alpha(1.0).unwrap();
        assert_eq!(tuned.name(), "catmull-rom");
        assert!(CatmullRom::default().with_tension(1.0).is_none());
        assert!(CatmullRom::default().with_beta(1.0).is_none());
    }
}
