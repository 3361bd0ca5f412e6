//! Bundled B-spline interpolation, for hierarchical edge bundling.

use std::sync::Arc;

use crate::curve::basis::BasisCurve;
use crate::curve::{Curve, CurveFactory, SharedCurveFactory};
use crate::path::PathContext;

/// Default straightening coefficient.
pub const DEFAULT_BETA: f64 = 0.85;

/// A B-spline pulled towards the straight line between its end points.
///
/// `beta` in `[0, 1]` controls the pull: 0 is a straight line, 1 is a plain
/// [`Basis`](super::Basis) spline. Bundles interpolate lines only; area
/// generators reject them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bundle {
    beta: f64,
}

impl Bundle {
    /// Creates a bundle curve with the given straightening coefficient.
    pub fn new(beta: f64) -> Self {
        Self { beta }
    }

    /// Returns a copy with a different straightening coefficient.
    #[must_use]
    pub fn beta(self, beta: f64) -> Self {
        Self::new(beta)
    }

    /// Returns the straightening coefficient.
    pub fn beta_value(&self) -> f64 {
        self.beta
    }
}

impl Default for Bundle {
    fn default() -> Self {
        Self::new(DEFAULT_BETA)
    }
}

impl CurveFactory for Bundle {
    fn name(&self) -> &str {
        "bundle"
    }

    fn curve(&self) -> Box<dyn Curve> {
        if self.beta == 1.0 {
            return Box::new(BasisCurve::default());
        }
        Box::new(BundleCurve {
            basis: BasisCurve::default(),
            beta: self.beta,
            xs: Vec::new(),
            ys: Vec::new(),
        })
    }

    fn supports_area(&self) -> bool {
        false
    }

    fn with_beta(&self, beta: f64) -> Option<SharedCurveFactory> {
        Some(Arc::new(self.beta(beta)))
    }
}

#[derive(Debug)]
struct BundleCurve {
    basis: BasisCurve,
    beta: f64,
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Curve for BundleCurve {
    fn area_start(&mut self) {}

    fn area_end(&mut self) {}

    fn line_start(&mut self) {
        self.xs.clear();
        self.ys.clear();
        self.basis.line_start();
    }

    fn line_end(&mut self, ctx: &mut dyn PathContext) {
        let (xs, ys) = (std::mem::take(&mut self.xs), std::mem::take(&mut self.ys));
        if xs.len() > 1 {
            let j = xs.len() - 1;
            let (x0, y0) = (xs[0], ys[0]);
            let (dx, dy) = (xs[j] - x0, ys[j] - y0);
            let beta = self.beta;
            for (i, (&x, &y)) in xs.iter().zip(&ys).enumerate() {
                let t = i as f64 / j as f64;
                self.basis.point(
                    ctx,
                    beta * x + (1.0 - beta) * (x0 + t * dx),
                    beta * y + (1.0 - beta) * (y0 + t * dy),
                );
            }
        }
        self.basis.line_end(ctx);
    }

    fn point(&mut self, _ctx: &mut dyn PathContext, x: f64, y: f64) {
        self.xs.push(x);
        self.ys.push(y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{render_line, Basis};

    const POINTS: [(f64, f64); 4] = [(0.0, 0.0), (6.0, 6.0), (12.0, 0.0), (18.0, 6.0)];

    #[test]
    fn test_beta_one_is_basis() {
        assert_eq!(
            render_line(&Bundle::new(1.0), &POINTS),
            render_line(&Basis, &POINTS)
        );
    }

    #[test]
    fn test_beta_zero_is_straight() {
        let d = render_line(&Bundle::new(0.0), &[(0.0, 0.0), (6.0, 6.0), (12.0, 0.0)]);
        // All points collapse onto the chord y = 0.
        assert_eq!(d, "M0,0L1,0C2,0,4,0,6,0C8,0,10,0,11,0L12,0");
    }

    #[test]
    fn test_line_only() {
        assert!(!Bundle::default().supports_area());
    }

    #[test]
    fn test_with_beta_reconfigures() {
        let bundle = Bundle::default();
        let tuned = bundle.with_beta(0.5).unwrap();
        assert_eq!(tuned.name(), "bundle");
        assert_eq!(bundle.beta_value(), DEFAULT_BETA);
        assert!(bundle.with_tension(0.5).is_none());
        assert!(bundle.with_alpha(0.5).is_none());
    }
}
