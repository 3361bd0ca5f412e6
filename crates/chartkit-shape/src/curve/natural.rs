//! Natural cubic spline interpolation.

use crate::curve::{Curve, CurveFactory, LineState};
use crate::path::PathContext;

/// Natural cubic spline: second derivative zero at both ends.
///
/// Points are buffered until the line ends, then the Bézier control points
/// are solved for in one tridiagonal pass per axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl CurveFactory for Natural {
    fn name(&self) -> &str {
        "natural"
    }

    fn curve(&self) -> Box<dyn Curve> {
        Box::new(NaturalCurve::default())
    }
}

#[derive(Debug, Default)]
struct NaturalCurve {
    line: LineState,
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Curve for NaturalCurve {
    fn area_start(&mut self) {
        self.line.area_start();
    }

    fn area_end(&mut self) {
        self.line.area_end();
    }

    fn line_start(&mut self) {
        self.xs.clear();
        self.ys.clear();
    }

    fn line_end(&mut self, ctx: &mut dyn PathContext) {
        let (xs, ys) = (std::mem::take(&mut self.xs), std::mem::take(&mut self.ys));
        let n = xs.len();

        if n > 0 {
            self.line.begin(ctx, xs[0], ys[0]);
            if n == 2 {
                ctx.line_to(xs[1], ys[1]);
            } else if n > 2 {
                let (ax, bx) = control_points(&xs);
                let (ay, by) = control_points(&ys);
                for i in 1..n {
                    ctx.bezier_curve_to(ax[i - 1], ay[i - 1], bx[i - 1], by[i - 1], xs[i], ys[i]);
                }
            }
        }

        if self.line.should_close(n == 1) {
            ctx.close_path();
        }
        self.line.toggle();
    }

    fn point(&mut self, _ctx: &mut dyn PathContext, x: f64, y: f64) {
        self.xs.push(x);
        self.ys.push(y);
    }
}

/// Solves for the two inner Bézier control points of every span.
///
/// See <https://www.particleincell.com/2012/bezier-splines/> for the
/// derivation. Requires at least three values.
fn control_points(x: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = x.len() - 1;
    let mut a = vec![0.0; n];
    let mut b = vec![0.0; n];
    let mut r = vec![0.0; n];

    a[0] = 0.0;
    b[0] = 2.0;
    r[0] = x[0] + 2.0 * x[1];
    for i in 1..n - 1 {
        a[i] = 1.0;
        b[i] = 4.0;
        r[i] = 4.0 * x[i] + 2.0 * x[i + 1];
    }
    a[n - 1] = 2.0;
    b[n - 1] = 7.0;
    r[n - 1] = 8.0 * x[n - 1] + x[n];

    // Forward sweep (Thomas algorithm).
    for i in 1..n {
        let m = a[i] / b[i - 1];
        b[i] -= m;
        r[i] -= m * r[i - 1];
    }

    // Back substitution, reusing `a` for the first control points.
    a[n - 1] = r[n - 1] / b[n - 1];
    for i in (0..n - 1).rev() {
        a[i] = (r[i] - a[i + 1]) / b[i];
    }

    b[n - 1] = (x[n] + a[n - 1]) / 2.0;
    for i in 0..n - 1 {
        b[i] = 2.0 * x[i + 1] - a[i + 1];
    }

    (a, b)
}
