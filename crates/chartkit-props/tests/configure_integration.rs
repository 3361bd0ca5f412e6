//! Integration tests: configure shape generators and scales from property bags.
//!
//! Each scenario builds a generator the way a chart component would: call
//! the constructor, apply a bag of named setters, then render.

use std::sync::Arc;

use approx::assert_relative_eq;
use chartkit_props::prelude::*;
use chartkit_shape::curve::MonotoneX;
use chartkit_shape::{accessor, Area, Line, ScaleLinear, ScaleTime, SharedCurveFactory};
use chrono::{TimeZone, Utc};
use serde_json::json;

type Point = [f64; 2];

const DIAGONAL: [Point; 3] = [[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]];

// =============================================================================
// LINE
// =============================================================================

#[test]
fn test_line_without_args_or_props() {
    let line = configure(Line::<Point>::new, (), PropertyBag::new()).unwrap();
    assert_eq!(line.curve().name(), "linear");
}

#[test]
fn test_line_with_constructor_args() {
    let line = configure(
        Line::<Point>::with_accessors,
        (accessor(|d: &Point, _, _| d[0]), accessor(|d: &Point, _, _| d[1])),
        PropertyBag::new(),
    )
    .unwrap();

    assert_eq!(line.generate(&DIAGONAL).as_deref(), Some("M0,0L1,1L2,2"));
}

#[test]
fn test_line_accessors_from_props() {
    let props = PropertyBag::new()
        .with("x", PropValue::accessor(|d: &Point, _, _| d[0] * 10.0))
        .with("y", PropValue::accessor(|d: &Point, _, _| d[1] * 20.0));

    let line = construct(Line::<Point>::new, props).unwrap();

    assert_eq!(line.generate(&DIAGONAL).as_deref(), Some("M0,0L10,20L20,40"));
}

#[test]
fn test_line_curve_setter() {
    let monotone: SharedCurveFactory = Arc::new(MonotoneX);
    let props = PropertyBag::new().with("curve", monotone);
    let line = construct(Line::<Point>::new, props).unwrap();

    let d = line.generate(&[[0.0, 0.0], [1.0, 5.0], [2.0, 3.0]]).unwrap();
    assert!(d.starts_with("M0,0C"));
    assert_eq!(line.curve().name(), "monotone-x");
}

#[test]
fn test_line_with_custom_datum() {
    struct Sample {
        t: f64,
        value: f64,
    }

    let props = PropertyBag::new()
        .with("x", PropValue::accessor(|s: &Sample, _, _| s.t))
        .with("y", PropValue::accessor(|s: &Sample, _, _| s.value))
        .with("defined", PropValue::predicate(|s: &Sample, _, _| !s.value.is_nan()));

    let line = configure(
        Line::<Sample>::with_accessors,
        (accessor(|_: &Sample, _, _| 0.0), accessor(|_: &Sample, _, _| 0.0)),
        props,
    )
    .unwrap();

    let data = [
        Sample { t: 0.0, value: 1.0 },
        Sample { t: 1.0, value: f64::NAN },
        Sample { t: 2.0, value: 3.0 },
        Sample { t: 3.0, value: 4.0 },
    ];
    assert_eq!(line.generate(&data).as_deref(), Some("M0,1ZM2,3L3,4"));
}

// =============================================================================
// AREA
// =============================================================================

#[test]
fn test_area_props() {
    let props = PropertyBag::new()
        .with("x", PropValue::accessor(|d: &Point, _, _| d[0]))
        .with("y0", PropValue::accessor(|_: &Point, _, _| 0.0))
        .with("y1", PropValue::accessor(|d: &Point, _, _| d[1]));

    let area = construct(Area::<Point>::new, props).unwrap();
    let d = area.generate(&[[0.0, 5.0], [1.0, 10.0], [2.0, 8.0]]);

    assert_eq!(d.as_deref(), Some("M0,5L1,10L2,8L2,0L1,0L0,0Z"));
}

#[test]
fn test_area_rejects_bundle_by_name() {
    let props = PropertyBag::new().with("curve", "bundle");
    let err = construct(Area::<Point>::new, props).unwrap_err();

    match err {
        ConfigError::InvalidValue { key, source } => {
            assert_eq!(key, "curve");
            assert!(matches!(source, ValueError::Curve(CurveError::LineOnly { .. })));
        }
        other => panic!("unexpected error: {other}"),
    }
}

// =============================================================================
// SCALES
// =============================================================================

#[test]
fn test_scale_linear_props() {
    let props = PropertyBag::new()
        .with("domain", vec![0.0, 100.0])
        .with("range", vec![0.0, 500.0]);

    let scale = configure(ScaleLinear::new, (), props).unwrap();

    assert_relative_eq!(scale.scale(0.0), 0.0);
    assert_relative_eq!(scale.scale(50.0), 250.0);
    assert_relative_eq!(scale.scale(100.0), 500.0);
}

#[test]
fn test_scale_chained_setters_with_clamp() {
    let props = PropertyBag::new()
        .with("domain", [0.0, 10.0])
        .with("range", [0.0, 100.0])
        .with("clamp", true);

    let scale = construct(ScaleLinear::new, props).unwrap();

    assert_relative_eq!(scale.scale(-1.0), 0.0);
    assert_relative_eq!(scale.scale(11.0), 100.0);
    assert_relative_eq!(scale.scale(5.0), 50.0);
}

#[test]
fn test_scale_time_props() {
    let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2020, 12, 31, 0, 0, 0).unwrap();

    let props = PropertyBag::new()
        .with("domain", PropValue::new([start, end]))
        .with("range", vec![0.0, 1000.0]);

    let scale = construct(ScaleTime::new, props).unwrap();

    assert_relative_eq!(scale.scale(&start), 0.0);
    assert_relative_eq!(scale.scale(&end), 1000.0);
}

#[test]
fn test_scale_from_json_bag() {
    let props = PropertyBag::from_json(&json!({
        "domain": [0, 10],
        "rangeRound": [0, 3],
    }))
    .unwrap();

    let scale = construct(ScaleLinear::new, props).unwrap();
    assert_relative_eq!(scale.scale(5.0), 2.0);
    assert!(scale.is_rounding());
}

// =============================================================================
// FAILURES
// =============================================================================

#[test]
fn test_unknown_setter() {
    let props = PropertyBag::new().with("nonExistentMethod", "value");
    let err = configure(Line::<Point>::new, (), props).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Setter function 'nonExistentMethod' does not exist on this object"
    );
}

#[test]
fn test_setter_names_are_case_sensitive() {
    let props = PropertyBag::new().with("RangeRound", vec![0.0, 1.0]);
    let err = construct(ScaleLinear::new, props).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownSetter { .. }));
}

#[test]
fn test_partial_application_is_not_rolled_back() {
    let mut scale = ScaleLinear::new();
    let props = PropertyBag::new()
        .with("domain", vec![0.0, 10.0])
        .with("ticks", 5.0)
        .with("range", vec![0.0, 100.0]);

    let err = apply_props(&mut scale, props).unwrap_err();

    assert_eq!(err.key(), Some("ticks"));
    assert_eq!(scale.domain(), &[0.0, 10.0]);
    assert_eq!(scale.range(), &[0.0, 1.0]);
}

#[test]
fn test_rejected_value_keeps_shape_error() {
    let props = PropertyBag::new().with("domain", vec![1.0]);
    let err = construct(ScaleLinear::new, props).unwrap_err();

    let ConfigError::InvalidValue { key, source } = err else {
        panic!("expected InvalidValue");
    };
    assert_eq!(key, "domain");
    assert_eq!(
        source,
        ValueError::Shape(chartkit_shape::ShapeError::insufficient_data(2, 1))
    );
}

#[test]
fn test_wrong_value_type() {
    let props = PropertyBag::new().with("clamp", "yes");
    let err = construct(ScaleLinear::new, props).unwrap_err();
    assert!(err.to_string().contains("'clamp'"));
}
