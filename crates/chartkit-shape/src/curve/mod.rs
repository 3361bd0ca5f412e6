//! Curve interpolation for line and area shapes.
//!
//! A curve is a small state machine fed one point at a time by a shape
//! generator. It turns the raw point sequence into drawing commands on a
//! [`PathContext`]. A [`CurveFactory`] creates fresh curve state for each
//! render and advertises which tuning coefficient, if any, the family accepts.
//!
//! # Available Families
//!
//! | Family | Factory | Tuning | Areas |
//! |--------|---------|--------|-------|
//! | Linear | [`Linear`], [`LinearClosed`] | - | yes |
//! | Step | [`Step`] (`new`, `before`, `after`) | - | yes |
//! | B-spline | [`Basis`], [`BasisClosed`], [`BasisOpen`] | - | yes |
//! | Bundle | [`Bundle`] | beta | **no** |
//! | Bump | [`BumpX`], [`BumpY`] | - | yes |
//! | Cardinal | [`Cardinal`], [`CardinalClosed`], [`CardinalOpen`] | tension | yes |
//! | Catmull-Rom | [`CatmullRom`], [`CatmullRomClosed`], [`CatmullRomOpen`] | alpha | yes |
//! | Monotone | [`MonotoneX`], [`MonotoneY`] | - | yes |
//! | Natural | [`Natural`] | - | yes |

mod basis;
mod basis_closed;
mod basis_open;
mod bump;
mod bundle;
mod cardinal;
mod cardinal_closed;
mod cardinal_open;
mod catmull_rom;
mod catmull_rom_closed;
mod catmull_rom_open;
mod linear;
mod linear_closed;
mod monotone;
mod natural;
mod step;

use std::fmt;
use std::sync::Arc;

pub use basis::Basis;
pub use basis_closed::BasisClosed;
pub use basis_open::BasisOpen;
pub use bump::{BumpX, BumpY};
pub use bundle::Bundle;
pub use cardinal::Cardinal;
pub use cardinal_closed::CardinalClosed;
pub use cardinal_open::CardinalOpen;
pub use catmull_rom::CatmullRom;
pub use catmull_rom_closed::CatmullRomClosed;
pub use catmull_rom_open::CatmullRomOpen;
pub use linear::Linear;
pub use linear_closed::LinearClosed;
pub use monotone::{MonotoneX, MonotoneY};
pub use natural::Natural;
pub use step::Step;

use crate::path::PathContext;

/// A shared, type-erased curve factory.
pub type SharedCurveFactory = Arc<dyn CurveFactory>;

/// Interpolation state machine driven by a shape generator.
///
/// A line is drawn as `line_start`, any number of `point` calls, then
/// `line_end`. An area wraps its topline and its reversed baseline in
/// `area_start` / `area_end`.
pub trait Curve {
    /// Signals the start of an area (two lines joined into one closed shape).
    fn area_start(&mut self);

    /// Signals the end of an area.
    fn area_end(&mut self);

    /// Signals the start of a line segment.
    fn line_start(&mut self);

    /// Signals the end of a line segment, flushing buffered points.
    fn line_end(&mut self, ctx: &mut dyn PathContext);

    /// Feeds the next point of the current line.
    fn point(&mut self, ctx: &mut dyn PathContext, x: f64, y: f64);
}

/// Creates curves and exposes the family's tuning capability.
///
/// The three `with_*` probes are mutually exclusive capabilities. A family
/// exposing one returns a reconfigured factory. The others return `None`.
/// Tuning never mutates the receiving factory.
pub trait CurveFactory: fmt::Debug + Send + Sync {
    /// Returns the family name (e.g. `"cardinal-closed"`).
    fn name(&self) -> &str;

    /// Creates fresh curve state for one render.
    fn curve(&self) -> Box<dyn Curve>;

    /// Returns true if the curve can interpolate areas as well as lines.
    fn supports_area(&self) -> bool {
        true
    }

    /// Returns a copy with the given straightening coefficient, if supported.
    fn with_beta(&self, _beta: f64) -> Option<SharedCurveFactory> {
        None
    }

    /// Returns a copy with the given tension, if supported.
    fn with_tension(&self, _tension: f64) -> Option<SharedCurveFactory> {
        None
    }

    /// Returns a copy with the given parameterisation exponent, if supported.
    fn with_alpha(&self, _alpha: f64) -> Option<SharedCurveFactory> {
        None
    }
}

/// Area bookkeeping shared by the open-ended families.
///
/// Outside an area the state is `None`. Inside an area it alternates between
/// the topline (`Some(false)`) and the baseline (`Some(true)`), so that the
/// baseline continues the topline's subpath and closes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct LineState(Option<bool>);

impl LineState {
    pub(crate) fn area_start(&mut self) {
        self.0 = Some(false);
    }

    pub(crate) fn area_end(&mut self) {
        self.0 = None;
    }

    /// True while drawing the second line of an area.
    pub(crate) fn continues(self) -> bool {
        self.0 == Some(true)
    }

    /// True when a line ending after `lone_point` should close its subpath.
    ///
    /// Baselines always close. Outside an area, a line that drew a single
    /// point closes so that it still renders.
    pub(crate) fn should_close(self, lone_point: bool) -> bool {
        match self.0 {
            Some(second) => second,
            None => lone_point,
        }
    }

    /// Flips between topline and baseline.
    pub(crate) fn toggle(&mut self) {
        if let Some(second) = self.0 {
            self.0 = Some(!second);
        }
    }

    pub(crate) fn in_area(self) -> bool {
        self.0.is_some()
    }

    /// Starts the subpath with a move, or continues it inside an area.
    pub(crate) fn begin(self, ctx: &mut dyn PathContext, x: f64, y: f64) {
        if self.continues() {
            ctx.line_to(x, y);
        } else {
            ctx.move_to(x, y);
        }
    }
}

/// Records drawing commands, for asserting on curve output in tests.
#[cfg(test)]
pub(crate) fn render_line(factory: &dyn CurveFactory, points: &[(f64, f64)]) -> String {
    let mut path = crate::path::Path::new();
    let mut curve = factory.curve();
    curve.line_start();
    for &(x, y) in points {
        curve.point(&mut path, x, y);
    }
    curve.line_end(&mut path);
    path.into_string()
}
