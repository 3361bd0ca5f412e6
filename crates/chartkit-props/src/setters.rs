//! Setter tables for the chartkit-shape generators and scales.
//!
//! Setter names follow the d3 method names (`x`, `y0`, `rangeRound`, ...),
//! so property bags written for d3 apply unchanged.

use std::sync::Arc;

use chartkit_shape::path::checked_digits;
use chartkit_shape::{
    constant, Accessor, Area, Line, Predicate, ScaleLinear, ScaleTime, SharedCurveFactory,
};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::configure::{Configurable, Setter, SetterRegistry};
use crate::curves::{resolve_area_curve, resolve_curve, CurveName, CurveSpec};
use crate::error::ValueError;
use crate::value::PropValue;

// ============================================================================
// Value conversions
// ============================================================================

/// An accessor, or a number used as a constant.
fn take_accessor<T: 'static>(v: PropValue) -> Result<Accessor<T>, ValueError> {
    let found = v.type_name();
    match v.try_take::<Accessor<T>>() {
        Ok(f) => Ok(f),
        Err(v) => v
            .take_f64()
            .map(constant)
            .map_err(|_| ValueError::mismatch("accessor or number", found)),
    }
}

/// As [`take_accessor`], with `null` meaning "unset".
fn take_optional_accessor<T: 'static>(v: PropValue) -> Result<Option<Accessor<T>>, ValueError> {
    if v.is_null() {
        return Ok(None);
    }
    take_accessor(v).map(Some)
}

/// A predicate, or a boolean used as a constant.
fn take_predicate<T: 'static>(v: PropValue) -> Result<Predicate<T>, ValueError> {
    let found = v.type_name();
    match v.try_take::<Predicate<T>>() {
        Ok(f) => Ok(f),
        Err(v) => {
            let flag = v
                .take_bool()
                .map_err(|_| ValueError::mismatch("predicate or bool", found))?;
            Ok(Arc::new(move |_: &T, _: usize, _: &[T]| flag))
        }
    }
}

/// A precision in fraction digits, with `null` meaning full precision.
fn take_digits(v: PropValue) -> Result<Option<u32>, ValueError> {
    if v.is_null() {
        return Ok(None);
    }
    Ok(Some(checked_digits(v.take_f64()?)?))
}

/// A curve given as a factory, a [`CurveSpec`], a [`CurveName`] or a name string.
fn take_curve_spec(v: PropValue) -> Result<CurveSpec, ValueError> {
    let found = v.type_name();
    let v = match v.try_take::<SharedCurveFactory>() {
        Ok(factory) => return Ok(CurveSpec::Factory(factory)),
        Err(v) => v,
    };
    let v = match v.try_take::<CurveSpec>() {
        Ok(spec) => return Ok(spec),
        Err(v) => v,
    };
    let v = match v.try_take::<CurveName>() {
        Ok(name) => return Ok(name.into()),
        Err(v) => v,
    };
    v.take_string()
        .map(CurveSpec::Named)
        .map_err(|_| ValueError::mismatch("curve factory or name", found))
}

/// Scale stops given as UTC timestamps, epoch milliseconds or RFC 3339 strings.
fn take_instants(v: PropValue) -> Result<Vec<DateTime<Utc>>, ValueError> {
    const EXPECTED: &str = "list of timestamps";
    let found = v.type_name();

    let v = match v.try_take::<Vec<DateTime<Utc>>>() {
        Ok(list) => return Ok(list),
        Err(v) => v,
    };
    let v = match v.try_take::<[DateTime<Utc>; 2]>() {
        Ok(pair) => return Ok(pair.to_vec()),
        Err(v) => v,
    };
    let v = match v.try_take::<Vec<f64>>() {
        Ok(millis) => {
            return millis
                .into_iter()
                .map(|ms| {
                    from_millis(ms)
                        .ok_or_else(|| ValueError::mismatch(EXPECTED, "out-of-range number"))
                })
                .collect()
        }
        Err(v) => v,
    };
    match v.try_take::<Value>() {
        Ok(json @ Value::Array(_)) => serde_json::from_value(json)
            .map_err(|e| ValueError::mismatch(EXPECTED, e.to_string())),
        _ => Err(ValueError::mismatch(EXPECTED, found)),
    }
}

fn from_millis(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() || ms.abs() > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(ms.trunc() as i64)
}

// ============================================================================
// Line
// ============================================================================

fn line_x<T: 'static>(line: &mut Line<T>, v: PropValue) -> Result<(), ValueError> {
    line.set_x(take_accessor(v)?);
    Ok(())
}

fn line_y<T: 'static>(line: &mut Line<T>, v: PropValue) -> Result<(), ValueError> {
    line.set_y(take_accessor(v)?);
    Ok(())
}

fn line_defined<T: 'static>(line: &mut Line<T>, v: PropValue) -> Result<(), ValueError> {
    line.set_defined(take_predicate(v)?);
    Ok(())
}

fn line_curve<T: 'static>(line: &mut Line<T>, v: PropValue) -> Result<(), ValueError> {
    line.set_curve(resolve_curve(Some(take_curve_spec(v)?), None)?);
    Ok(())
}

fn line_digits<T: 'static>(line: &mut Line<T>, v: PropValue) -> Result<(), ValueError> {
    line.set_digits(take_digits(v)?);
    Ok(())
}

impl<T: 'static> Configurable for Line<T> {
    fn setter(&self, name: &str) -> Option<Setter<Self>> {
        let setter: Setter<Self> = match name {
            "x" => line_x,
            "y" => line_y,
            "defined" => line_defined,
            "curve" => line_curve,
            "digits" => line_digits,
            _ => return None,
        };
        Some(setter)
    }
}

// ============================================================================
// Area
// ============================================================================

fn area_x<T: 'static>(area: &mut Area<T>, v: PropValue) -> Result<(), ValueError> {
    area.set_x(take_accessor(v)?);
    Ok(())
}

fn area_x0<T: 'static>(area: &mut Area<T>, v: PropValue) -> Result<(), ValueError> {
    area.set_x0(take_accessor(v)?);
    Ok(())
}

fn area_x1<T: 'static>(area: &mut Area<T>, v: PropValue) -> Result<(), ValueError> {
    area.set_x1(take_optional_accessor(v)?);
    Ok(())
}

fn area_y<T: 'static>(area: &mut Area<T>, v: PropValue) -> Result<(), ValueError> {
    area.set_y(take_accessor(v)?);
    Ok(())
}

fn area_y0<T: 'static>(area: &mut Area<T>, v: PropValue) -> Result<(), ValueError> {
    area.set_y0(take_accessor(v)?);
    Ok(())
}

fn area_y1<T: 'static>(area: &mut Area<T>, v: PropValue) -> Result<(), ValueError> {
    area.set_y1(take_optional_accessor(v)?);
    Ok(())
}

fn area_defined<T: 'static>(area: &mut Area<T>, v: PropValue) -> Result<(), ValueError> {
    area.set_defined(take_predicate(v)?);
    Ok(())
}

fn area_curve<T: 'static>(area: &mut Area<T>, v: PropValue) -> Result<(), ValueError> {
    let factory = match take_curve_spec(v)? {
        // Custom factories are checked by the generator itself.
        CurveSpec::Factory(factory) => factory,
        named => resolve_area_curve(Some(named), None)?,
    };
    area.set_curve(factory)?;
    Ok(())
}

fn area_digits<T: 'static>(area: &mut Area<T>, v: PropValue) -> Result<(), ValueError> {
    area.set_digits(take_digits(v)?);
    Ok(())
}

impl<T: 'static> Configurable for Area<T> {
    fn setter(&self, name: &str) -> Option<Setter<Self>> {
        let setter: Setter<Self> = match name {
            "x" => area_x,
            "x0" => area_x0,
            "x1" => area_x1,
            "y" => area_y,
            "y0" => area_y0,
            "y1" => area_y1,
            "defined" => area_defined,
            "curve" => area_curve,
            "digits" => area_digits,
            _ => return None,
        };
        Some(setter)
    }
}

// ============================================================================
// Scales
// ============================================================================

static SCALE_LINEAR: Lazy<SetterRegistry<ScaleLinear>> = Lazy::new(|| {
    SetterRegistry::<ScaleLinear>::new()
        .with("domain", |s, v| {
            s.set_domain(v.take_numbers()?)?;
            Ok(())
        })
        .with("range", |s, v| {
            s.set_range(v.take_numbers()?)?;
            Ok(())
        })
        .with("rangeRound", |s, v| {
            s.set_range_round(v.take_numbers()?)?;
            Ok(())
        })
        .with("clamp", |s, v| {
            s.set_clamp(v.take_bool()?);
            Ok(())
        })
});

static SCALE_TIME: Lazy<SetterRegistry<ScaleTime>> = Lazy::new(|| {
    SetterRegistry::<ScaleTime>::new()
        .with("domain", |s, v| {
            s.set_domain(take_instants(v)?)?;
            Ok(())
        })
        .with("range", |s, v| {
            s.set_range(v.take_numbers()?)?;
            Ok(())
        })
        .with("rangeRound", |s, v| {
            s.set_range_round(v.take_numbers()?)?;
            Ok(())
        })
        .with("clamp", |s, v| {
            s.set_clamp(v.take_bool()?);
            Ok(())
        })
});

impl Configurable for ScaleLinear {
    fn setter(&self, name: &str) -> Option<Setter<Self>> {
        SCALE_LINEAR.get(name)
    }
}

impl Configurable for ScaleTime {
    fn setter(&self, name: &str) -> Option<Setter<Self>> {
        SCALE_TIME.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bag::PropertyBag;
    use crate::configure::construct;
    use approx::assert_relative_eq;
    use chartkit_shape::ShapeError;
    use serde_json::json;

    #[test]
    fn test_numbers_become_constant_accessors() {
        let line = construct(Line::<[f64; 2]>::new, PropertyBag::new().with("y", 3.0)).unwrap();
        assert_eq!(
            line.generate(&[[0.0, 9.0], [1.0, 9.0]]).as_deref(),
            Some("M0,3L1,3")
        );
    }

    #[test]
    fn test_defined_accepts_bool() {
        let props = PropertyBag::new().with("defined", false);
        let line = construct(Line::<[f64; 2]>::new, props).unwrap();
        assert_eq!(line.generate(&[[0.0, 0.0]]), None);
    }

    #[test]
    fn test_curve_by_name() {
        let props = PropertyBag::new().with("curve", "Step-After");
        let line = construct(Line::<[f64; 2]>::new, props).unwrap();
        assert_eq!(line.curve().name(), "step-after");

        let line = construct(
            Line::<[f64; 2]>::new,
            PropertyBag::new().with("curve", PropValue::new(CurveName::Natural)),
        )
        .unwrap();
        assert_eq!(line.curve().name(), "natural");
    }

    #[test]
    fn test_unknown_curve_name() {
        let mut line = Line::<[f64; 2]>::new();
        let err = line_curve(&mut line, PropValue::from("wobbly")).unwrap_err();
        assert!(matches!(err, ValueError::Curve(_)));
    }

    #[test]
    fn test_digits() {
        let mut line = Line::<[f64; 2]>::new();
        line_digits(&mut line, PropValue::from(2.9)).unwrap();
        assert_eq!(line.digits(), Some(2));

        line_digits(&mut line, PropValue::null()).unwrap();
        assert_eq!(line.digits(), None);

        let err = line_digits(&mut line, PropValue::from(-1.0)).unwrap_err();
        assert!(matches!(err, ValueError::Shape(ShapeError::InvalidDigits { .. })));
    }

    #[test]
    fn test_area_rejects_bundle() {
        let mut area = Area::<[f64; 2]>::new();
        assert!(area_curve(&mut area, PropValue::from("bundle")).is_err());

        let bundle: SharedCurveFactory = Arc::new(chartkit_shape::curve::Bundle::default());
        let err = area_curve(&mut area, PropValue::from(bundle)).unwrap_err();
        assert_eq!(err, ValueError::Shape(ShapeError::line_only("bundle")));
    }

    #[test]
    fn test_area_y1_null_unsets_topline() {
        let mut area = Area::<[f64; 2]>::new();
        area_y1(&mut area, PropValue::null()).unwrap();
        // With no topline, the area collapses onto its baseline.
        assert_eq!(
            area.generate(&[[0.0, 5.0], [1.0, 10.0]]).as_deref(),
            Some("M0,0L1,0L1,0L0,0Z")
        );
    }

    #[test]
    fn test_scale_registry_names() {
        assert_eq!(SCALE_LINEAR.names(), ["clamp", "domain", "range", "rangeRound"]);
        assert!(ScaleLinear::new().setter("nice").is_none());
    }

    #[test]
    fn test_time_domain_from_json_strings() {
        let bag = PropertyBag::from_json(&json!({
            "domain": ["2020-01-01T00:00:00Z", "2020-01-11T00:00:00Z"],
            "range": [0, 100],
        }))
        .unwrap();
        let scale = construct(ScaleTime::new, bag).unwrap();

        let mid = DateTime::parse_from_rfc3339("2020-01-06T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_relative_eq!(scale.scale(&mid), 50.0);
    }

    #[test]
    fn test_time_domain_from_millis() {
        let instants = take_instants(PropValue::from(vec![0.0, 86_400_000.0])).unwrap();
        assert_eq!(instants[1].timestamp(), 86_400);
        assert!(take_instants(PropValue::from("yesterday")).is_err());
    }
}
