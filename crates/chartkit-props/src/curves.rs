//! Curve resolution.
//!
//! Turns a curve identifier into an interpolation factory. Identifiers are
//! either one of twenty case-insensitive names or a custom factory, which is
//! passed through untouched.
//!
//! An optional tuning coefficient is routed to whichever coefficient the
//! resolved family understands:
//!
//! | Family | Coefficient | Default |
//! |--------|-------------|---------|
//! | bundle | beta | 0.85 |
//! | cardinal, cardinal-closed, cardinal-open | tension | 0 |
//! | catmull-rom, catmull-rom-closed, catmull-rom-open | alpha | 0.5 |
//!
//! Every other family ignores the coefficient.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chartkit_shape::curve::{
    Basis, BasisClosed, BasisOpen, BumpX, BumpY, Bundle, Cardinal, CardinalClosed, CardinalOpen,
    CatmullRom, CatmullRomClosed, CatmullRomOpen, Linear, LinearClosed, MonotoneX, MonotoneY,
    Natural, Step,
};
use chartkit_shape::SharedCurveFactory;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// The built-in curve names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum CurveName {
    /// Cubic B-spline.
    Basis,
    /// Closed cubic B-spline.
    BasisClosed,
    /// Open cubic B-spline.
    BasisOpen,
    /// Straightened B-spline (lines only).
    Bundle,
    /// Bump with horizontal tangents.
    BumpX,
    /// Bump with vertical tangents.
    BumpY,
    /// Cardinal spline.
    Cardinal,
    /// Closed cardinal spline.
    CardinalClosed,
    /// Open cardinal spline.
    CardinalOpen,
    /// Centripetal Catmull-Rom spline.
    CatmullRom,
    /// Closed Catmull-Rom spline.
    CatmullRomClosed,
    /// Open Catmull-Rom spline.
    CatmullRomOpen,
    /// Polyline.
    #[default]
    Linear,
    /// Closed polyline.
    LinearClosed,
    /// Monotone in x.
    MonotoneX,
    /// Monotone in y.
    MonotoneY,
    /// Natural cubic spline.
    Natural,
    /// Step at the midpoint.
    Step,
    /// Step at the end of each segment.
    StepAfter,
    /// Step at the start of each segment.
    StepBefore,
}

impl CurveName {
    /// Every built-in name.
    pub const ALL: [CurveName; 20] = [
        Self::Basis,
        Self::BasisClosed,
        Self::BasisOpen,
        Self::Bundle,
        Self::BumpX,
        Self::BumpY,
        Self::Cardinal,
        Self::CardinalClosed,
        Self::CardinalOpen,
        Self::CatmullRom,
        Self::CatmullRomClosed,
        Self::CatmullRomOpen,
        Self::Linear,
        Self::LinearClosed,
        Self::MonotoneX,
        Self::MonotoneY,
        Self::Natural,
        Self::Step,
        Self::StepAfter,
        Self::StepBefore,
    ];

    /// Returns the canonical lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basis => "basis",
            Self::BasisClosed => "basis-closed",
            Self::BasisOpen => "basis-open",
            Self::Bundle => "bundle",
            Self::BumpX => "bump-x",
            Self::BumpY => "bump-y",
            Self::Cardinal => "cardinal",
            Self::CardinalClosed => "cardinal-closed",
            Self::CardinalOpen => "cardinal-open",
            Self::CatmullRom => "catmull-rom",
            Self::CatmullRomClosed => "catmull-rom-closed",
            Self::CatmullRomOpen => "catmull-rom-open",
            Self::Linear => "linear",
            Self::LinearClosed => "linear-closed",
            Self::MonotoneX => "monotone-x",
            Self::MonotoneY => "monotone-y",
            Self::Natural => "natural",
            Self::Step => "step",
            Self::StepAfter => "step-after",
            Self::StepBefore => "step-before",
        }
    }

    /// Returns true if the curve can be used for areas as well as lines.
    pub const fn is_area_capable(self) -> bool {
        !matches!(self, Self::Bundle)
    }

    /// Returns the shared, untuned factory for this name.
    pub fn factory(self) -> SharedCurveFactory {
        CURVES
            .get(self.as_str())
            .cloned()
            .unwrap_or_else(|| default_factory(self))
    }
}

impl fmt::Display for CurveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurveName {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == lower)
            .ok_or_else(|| CurveError::unknown(s))
    }
}

impl TryFrom<String> for CurveName {
    type Error = CurveError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CurveName> for &'static str {
    fn from(name: CurveName) -> Self {
        name.as_str()
    }
}

fn default_factory(name: CurveName) -> SharedCurveFactory {
    match name {
        CurveName::Basis => Arc::new(Basis),
        CurveName::BasisClosed => Arc::new(BasisClosed),
        CurveName::BasisOpen => Arc::new(BasisOpen),
        CurveName::Bundle => Arc::new(Bundle::default()),
        CurveName::BumpX => Arc::new(BumpX),
        CurveName::BumpY => Arc::new(BumpY),
        CurveName::Cardinal => Arc::new(Cardinal::default()),
        CurveName::CardinalClosed => Arc::new(CardinalClosed::default()),
        CurveName::CardinalOpen => Arc::new(CardinalOpen::default()),
        CurveName::CatmullRom => Arc::new(CatmullRom::default()),
        CurveName::CatmullRomClosed => Arc::new(CatmullRomClosed::default()),
        CurveName::CatmullRomOpen => Arc::new(CatmullRomOpen::default()),
        CurveName::Linear => Arc::new(Linear),
        CurveName::LinearClosed => Arc::new(LinearClosed),
        CurveName::MonotoneX => Arc::new(MonotoneX),
        CurveName::MonotoneY => Arc::new(MonotoneY),
        CurveName::Natural => Arc::new(Natural),
        CurveName::Step => Arc::new(Step::new()),
        CurveName::StepAfter => Arc::new(Step::after()),
        CurveName::StepBefore => Arc::new(Step::before()),
    }
}

/// Name-to-factory table, keyed by lowercase name.
static CURVES: Lazy<HashMap<&'static str, SharedCurveFactory>> = Lazy::new(|| {
    CurveName::ALL
        .into_iter()
        .map(|name| (name.as_str(), default_factory(name)))
        .collect()
});

/// A curve identifier: a name to look up, or a ready-made factory.
#[derive(Debug, Clone)]
pub enum CurveSpec {
    /// A case-insensitive built-in name.
    Named(String),
    /// A custom factory, used as is.
    Factory(SharedCurveFactory),
}

impl From<&str> for CurveSpec {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for CurveSpec {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<CurveName> for CurveSpec {
    fn from(name: CurveName) -> Self {
        Self::Named(name.as_str().to_string())
    }
}

impl From<SharedCurveFactory> for CurveSpec {
    fn from(factory: SharedCurveFactory) -> Self {
        Self::Factory(factory)
    }
}

/// Resolves a curve identifier to a factory.
///
/// - A custom factory is returned unchanged, whatever the tension.
/// - A name (default `"linear"`) is looked up case-insensitively.
/// - A tension, if given, is applied through [`apply_tuning`].
///
/// # Errors
///
/// [`CurveError::UnknownCurve`] if the name is not a built-in curve.
///
/// # Example
///
/// ```rust
/// use chartkit_props::resolve_curve;
///
/// let curve = resolve_curve(Some("Cardinal".into()), Some(0.5))?;
/// assert_eq!(curve.name(), "cardinal");
///
/// assert!(resolve_curve(Some("wiggly".into()), None).is_err());
/// # Ok::<(), chartkit_props::CurveError>(())
/// ```
pub fn resolve_curve(
    spec: Option<CurveSpec>,
    tension: Option<f64>,
) -> CurveResult<SharedCurveFactory> {
    let factory = match spec {
        Some(CurveSpec::Factory(factory)) => {
            log::debug!("Using custom curve factory '{}'", factory.name());
            return Ok(factory);
        }
        Some(CurveSpec::Named(name)) => lookup(&name)?,
        None => CurveName::default().factory(),
    };

    log::debug!("Resolved curve '{}' (tension: {tension:?})", factory.name());
    Ok(match tension {
        Some(t) => apply_tuning(factory, t),
        None => factory,
    })
}

/// Resolves a curve for use in an area.
///
/// # Errors
///
/// As [`resolve_curve`], plus [`CurveError::LineOnly`] when the resolved
/// curve cannot interpolate areas.
pub fn resolve_area_curve(
    spec: Option<CurveSpec>,
    tension: Option<f64>,
) -> CurveResult<SharedCurveFactory> {
    let factory = resolve_curve(spec, tension)?;
    if !factory.supports_area() {
        return Err(CurveError::LineOnly {
            name: factory.name().to_string(),
        });
    }
    Ok(factory)
}

/// Resolves the bundle curve with an optional straightening coefficient.
///
/// Bundle only interpolates lines, so it gets its own concrete return type.
pub fn resolve_bundle(beta: Option<f64>) -> Bundle {
    beta.map_or_else(Bundle::default, |b| Bundle::default().beta(b))
}

/// Applies a tuning coefficient to whichever parameter the factory exposes.
///
/// Probes beta, then tension, then alpha, and returns the first tuned
/// factory. A factory exposing none is returned unchanged.
pub fn apply_tuning(factory: SharedCurveFactory, t: f64) -> SharedCurveFactory {
    factory
        .with_beta(t)
        .or_else(|| factory.with_tension(t))
        .or_else(|| factory.with_alpha(t))
        .unwrap_or_else(|| {
            log::debug!("Curve '{}' has no tuning parameter; ignoring {t}", factory.name());
            factory
        })
}

fn lookup(name: &str) -> CurveResult<SharedCurveFactory> {
    CURVES
        .get(name.to_lowercase().as_str())
        .cloned()
        .ok_or_else(|| CurveError::unknown(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_every_name() {
        assert_eq!(CURVES.len(), CurveName::ALL.len());
        for name in CurveName::ALL {
            assert_eq!(CURVES[name.as_str()].name(), name.as_str());
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("MONOTONE-X".parse::<CurveName>(), Ok(CurveName::MonotoneX));
        assert_eq!("Step-Before".parse::<CurveName>(), Ok(CurveName::StepBefore));
        assert_eq!(
            "spline".parse::<CurveName>(),
            Err(CurveError::unknown("spline"))
        );
    }

    #[test]
    fn test_area_capability() {
        let line_only: Vec<_> = CurveName::ALL
            .into_iter()
            .filter(|n| !n.is_area_capable())
            .collect();
        assert_eq!(line_only, [CurveName::Bundle]);
        assert!(!CurveName::Bundle.factory().supports_area());
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&CurveName::CatmullRomClosed).unwrap();
        assert_eq!(json, "\"catmull-rom-closed\"");

        let name: CurveName = serde_json::from_str("\"Bump-Y\"").unwrap();
        assert_eq!(name, CurveName::BumpY);
        assert!(serde_json::from_str::<CurveName>("\"zigzag\"").is_err());
    }

    #[test]
    fn test_shared_factories_are_reused() {
        let a = resolve_curve(Some("natural".into()), None).unwrap();
        let b = resolve_curve(Some("NATURAL".into()), None).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
