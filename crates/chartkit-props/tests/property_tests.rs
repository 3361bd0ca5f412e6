//! Property-based tests for property-bag application and curve lookup.
//!
//! These tests verify invariants that should hold for any input:
//! - Every property is applied exactly once, in bag order
//! - The first unknown key stops application, keeping earlier properties
//! - Curve lookup ignores case

use chartkit_props::{
    apply_props, resolve_curve, Configurable, CurveName, PropValue, PropertyBag, Setter, ValueError,
};
use proptest::prelude::*;

// =============================================================================
// TEST FIXTURES
// =============================================================================

/// Records every setter call it receives.
#[derive(Debug, Default)]
struct Recorder {
    calls: Vec<(String, f64)>,
}

fn record_a(r: &mut Recorder, v: PropValue) -> Result<(), ValueError> {
    r.calls.push(("a".to_string(), v.take_f64()?));
    Ok(())
}

fn record_b(r: &mut Recorder, v: PropValue) -> Result<(), ValueError> {
    r.calls.push(("b".to_string(), v.take_f64()?));
    Ok(())
}

fn record_c(r: &mut Recorder, v: PropValue) -> Result<(), ValueError> {
    r.calls.push(("c".to_string(), v.take_f64()?));
    Ok(())
}

impl Configurable for Recorder {
    fn setter(&self, name: &str) -> Option<Setter<Self>> {
        let setter: Setter<Self> = match name {
            "a" => record_a,
            "b" => record_b,
            "c" => record_c,
            _ => return None,
        };
        Some(setter)
    }
}

fn known_key() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "c"]).prop_map(str::to_string)
}

/// Randomly upper-cases characters of a name.
fn mixed_case(name: &'static str) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<bool>(), name.len()).prop_map(move |upper| {
        name.chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect()
    })
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_applies_each_key_once_in_order(
        entries in prop::collection::vec((known_key(), -1e6..1e6f64), 0..12)
    ) {
        let mut expected: Vec<(String, f64)> = Vec::new();
        for (k, v) in &entries {
            match expected.iter_mut().find(|(ek, _)| ek == k) {
                Some(slot) => slot.1 = *v,
                None => expected.push((k.clone(), *v)),
            }
        }

        let bag: PropertyBag = entries.into_iter().collect();
        let mut recorder = Recorder::default();
        apply_props(&mut recorder, bag).unwrap();

        prop_assert_eq!(recorder.calls, expected);
    }

    #[test]
    fn prop_unknown_key_stops_application(
        before in prop::collection::vec(-100.0..100.0f64, 0..3),
        unknown in "[d-z][a-z]{0,6}",
    ) {
        let keys = ["a", "b", "c"];
        let mut bag = PropertyBag::new();
        for (key, v) in keys.iter().zip(&before) {
            bag.insert(*key, *v);
        }
        bag.insert(unknown.clone(), 1.0);
        bag.insert("zz-after", 2.0);

        let mut recorder = Recorder::default();
        let err = apply_props(&mut recorder, bag).unwrap_err();

        prop_assert_eq!(err.key(), Some(unknown.as_str()));
        prop_assert_eq!(recorder.calls.len(), before.len());
    }

    #[test]
    fn prop_curve_lookup_ignores_case(
        (name, spelled) in prop::sample::select(CurveName::ALL.to_vec())
            .prop_flat_map(|name| (Just(name), mixed_case(name.as_str())))
    ) {
        let curve = resolve_curve(Some(spelled.clone().into()), None).unwrap();
        prop_assert_eq!(curve.name(), name.as_str());
        prop_assert_eq!(spelled.parse::<CurveName>().unwrap(), name);
    }
}
