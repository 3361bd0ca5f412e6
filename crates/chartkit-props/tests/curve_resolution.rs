//! Integration tests for curve resolution and tuning.

use std::sync::{Arc, Mutex};

use chartkit_props::{
    apply_tuning, resolve_area_curve, resolve_bundle, resolve_curve, CurveError, CurveName,
    CurveSpec,
};
use chartkit_shape::curve::{Cardinal, Linear};
use chartkit_shape::{Curve, CurveFactory, Line, SharedCurveFactory};

fn render(curve: SharedCurveFactory, points: &[[f64; 2]]) -> String {
    let mut line = Line::<[f64; 2]>::new();
    line.set_curve(curve);
    line.generate(points).unwrap_or_default()
}

const WAVE: [[f64; 2]; 4] = [[0.0, 0.0], [1.0, 3.0], [2.0, 0.0], [3.0, 3.0]];

/// A custom factory exposing every tuning probe and recording which ran.
#[derive(Debug, Default)]
struct Probe {
    calls: Arc<Mutex<Vec<&'static str>>>,
    beta: bool,
    tension: bool,
    alpha: bool,
}

impl Probe {
    fn tuned(&self, probe: &'static str) -> SharedCurveFactory {
        self.calls.lock().unwrap().push(probe);
        Arc::new(Named(probe))
    }
}

#[derive(Debug)]
struct Named(&'static str);

impl CurveFactory for Named {
    fn name(&self) -> &str {
        self.0
    }

    fn curve(&self) -> Box<dyn Curve> {
        Linear.curve()
    }
}

impl CurveFactory for Probe {
    fn name(&self) -> &str {
        "probe"
    }

    fn curve(&self) -> Box<dyn Curve> {
        Linear.curve()
    }

    fn with_beta(&self, _beta: f64) -> Option<SharedCurveFactory> {
        self.beta.then(|| self.tuned("beta"))
    }

    fn with_tension(&self, _tension: f64) -> Option<SharedCurveFactory> {
        self.tension.then(|| self.tuned("tension"))
    }

    fn with_alpha(&self, _alpha: f64) -> Option<SharedCurveFactory> {
        self.alpha.then(|| self.tuned("alpha"))
    }
}

// =============================================================================
// LOOKUP
// =============================================================================

#[test]
fn test_default_is_linear() {
    let curve = resolve_curve(None, None).unwrap();
    assert_eq!(curve.name(), "linear");
}

#[test]
fn test_every_name_resolves_in_any_case() {
    for name in CurveName::ALL {
        let lower = resolve_curve(Some(name.as_str().into()), None).unwrap();
        let upper = resolve_curve(Some(name.as_str().to_uppercase().into()), None).unwrap();

        assert_eq!(lower.name(), name.as_str());
        assert!(Arc::ptr_eq(&lower, &upper));
    }
}

#[test]
fn test_curve_name_spec() {
    let curve = resolve_curve(Some(CurveName::CatmullRomOpen.into()), None).unwrap();
    assert_eq!(curve.name(), "catmull-rom-open");
}

#[test]
fn test_unknown_name_fails() {
    let err = resolve_curve(Some("Squiggle".into()), Some(0.5)).unwrap_err();
    assert_eq!(
        err,
        CurveError::UnknownCurve {
            name: "Squiggle".to_string()
        }
    );
}

#[test]
fn test_custom_factory_passes_through() {
    let custom: SharedCurveFactory = Arc::new(Cardinal::new(0.3));

    let resolved = resolve_curve(Some(CurveSpec::Factory(Arc::clone(&custom))), None).unwrap();
    assert!(Arc::ptr_eq(&resolved, &custom));

    // Tension is not applied to custom factories.
    let resolved = resolve_curve(Some(custom.clone().into()), Some(1.0)).unwrap();
    assert!(Arc::ptr_eq(&resolved, &custom));
}

// =============================================================================
// TUNING
// =============================================================================

#[test]
fn test_cardinal_tension_changes_output() {
    let plain = resolve_curve(Some("cardinal".into()), None).unwrap();
    let taut = resolve_curve(Some("cardinal".into()), Some(1.0)).unwrap();

    assert_eq!(taut.name(), "cardinal");
    assert_ne!(render(plain, &WAVE), render(taut.clone(), &WAVE));
    // Full tension collapses the tangents: control points sit on the data.
    assert_eq!(
        render(taut, &WAVE),
        "M0,0C0,0,1,3,1,3C1,3,2,0,2,0C2,0,3,3,3,3"
    );
}

#[test]
fn test_catmull_rom_alpha_is_applied() {
    let uniform = resolve_curve(Some("catmull-rom".into()), Some(0.0)).unwrap();
    let cardinal = resolve_curve(Some("cardinal".into()), None).unwrap();
    // Alpha 0 is uniform parameterisation, the same as a zero-tension cardinal.
    assert_eq!(render(uniform, &WAVE), render(cardinal, &WAVE));
}

#[test]
fn test_bundle_beta_is_applied() {
    let straight = resolve_curve(Some("bundle".into()), Some(0.0)).unwrap();
    let d = render(straight, &WAVE);
    // Beta 0 pulls the spline onto the chord from first to last point.
    assert!(d.starts_with("M0,0L"));
    assert!(d.ends_with("L3,3"));
}

#[test]
fn test_untunable_family_ignores_tension() {
    let plain = resolve_curve(Some("linear".into()), None).unwrap();
    let tuned = resolve_curve(Some("linear".into()), Some(0.7)).unwrap();

    assert!(Arc::ptr_eq(&plain, &tuned));
    assert_eq!(render(tuned, &WAVE), "M0,0L1,3L2,0L3,3");
}

#[test]
fn test_tension_nan_is_passed_through() {
    let tuned = resolve_curve(Some("cardinal".into()), Some(f64::NAN)).unwrap();
    let plain = resolve_curve(Some("cardinal".into()), None).unwrap();
    assert!(!Arc::ptr_eq(&tuned, &plain));
}

#[test]
fn test_probe_precedence() {
    let all = Probe {
        beta: true,
        tension: true,
        alpha: true,
        ..Probe::default()
    };
    let calls = Arc::clone(&all.calls);
    assert_eq!(apply_tuning(Arc::new(all), 0.5).name(), "beta");
    assert_eq!(*calls.lock().unwrap(), ["beta"]);

    let tension_alpha = Probe {
        tension: true,
        alpha: true,
        ..Probe::default()
    };
    assert_eq!(apply_tuning(Arc::new(tension_alpha), 0.5).name(), "tension");

    let alpha_only = Probe {
        alpha: true,
        ..Probe::default()
    };
    assert_eq!(apply_tuning(Arc::new(alpha_only), 0.5).name(), "alpha");

    let none = Probe::default();
    assert_eq!(apply_tuning(Arc::new(none), 0.5).name(), "probe");
}

// =============================================================================
// AREAS AND BUNDLE
// =============================================================================

#[test]
fn test_area_curve_rejects_bundle() {
    let err = resolve_area_curve(Some("Bundle".into()), Some(0.5)).unwrap_err();
    assert_eq!(
        err,
        CurveError::LineOnly {
            name: "bundle".to_string()
        }
    );
    assert!(resolve_area_curve(Some("basis".into()), None).is_ok());
}

#[test]
fn test_resolve_bundle_is_typed() {
    assert!((resolve_bundle(None).beta_value() - 0.85).abs() < 1e-12);
    assert!((resolve_bundle(Some(0.25)).beta_value() - 0.25).abs() < 1e-12);
    assert!(!resolve_bundle(None).supports_area());
}
