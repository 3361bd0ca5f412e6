//! Continuous scales.
//!
//! A scale maps a continuous input domain to a continuous output range.
//! Domains and ranges are piecewise: with more than two stops, each
//! domain interval maps linearly onto the matching range interval.
//!
//! - [`ScaleLinear`]: numbers to numbers
//! - [`ScaleTime`]: UTC timestamps to numbers

mod linear;
mod time;

pub use linear::ScaleLinear;
pub use time::ScaleTime;

/// Maps `x` from `[a, b]` onto `[0, 1]`.
///
/// A degenerate interval maps everything to the midpoint.
fn normalize(a: f64, b: f64, x: f64) -> f64 {
    let span = b - a;
    if span.is_nan() {
        f64::NAN
    } else if span == 0.0 {
        0.5
    } else {
        (x - a) / span
    }
}

fn interpolate(a: f64, b: f64, t: f64, round: bool) -> f64 {
    let v = a * (1.0 - t) + b * t;
    if round {
        // Half-way cases go up, as in JavaScript's Math.round.
        (v + 0.5).floor()
    } else {
        v
    }
}

/// Index of the first stop greater than `x`, searching `stops[lo..hi]`.
fn bisect_right(stops: &[f64], x: f64, mut lo: usize, mut hi: usize) -> usize {
    while lo < hi {
        let mid = (lo + hi) / 2;
        if x < stops[mid] {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// Piecewise-linear map from `domain` stops to `range` stops.
///
/// Only the first `min(domain.len(), range.len())` stops take part. Both
/// slices must hold at least two values.
fn piecewise(domain: &[f64], range: &[f64], x: f64, round: bool) -> f64 {
    let n = domain.len().min(range.len());
    let (mut d, mut r): (Vec<f64>, Vec<f64>) = (domain[..n].to_vec(), range[..n].to_vec());
    if d[n - 1] < d[0] {
        d.reverse();
        r.reverse();
    }

    let i = bisect_right(&d, x, 1, n - 1) - 1;
    interpolate(r[i], r[i + 1], normalize(d[i], d[i + 1], x), round)
}

/// Clamps `x` into the interval spanned by `a` and `b`, in either order.
fn clamp_to(a: f64, b: f64, x: f64) -> f64 {
    let (lo, hi) = if a > b { (b, a) } else { (a, b) };
    lo.max(hi.min(x))
}
