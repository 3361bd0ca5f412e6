//! Type-erased property values.
//!
//! A [`PropValue`] carries exactly one value of any `'static` type to a
//! setter. Setters pull the value back out with the typed `take_*`
//! helpers, which also accept the shapes a value takes after a trip
//! through JSON.

use std::any::{type_name, Any};
use std::fmt;

use chartkit_shape::line::{Accessor, Predicate};
use serde_json::Value;

use crate::error::ValueError;

/// A single value destined for a setter.
pub struct PropValue {
    value: Box<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl PropValue {
    /// Wraps any value.
    pub fn new<V: Any + Send + Sync>(value: V) -> Self {
        Self {
            value: Box::new(value),
            type_name: type_name::<V>(),
        }
    }

    /// The JSON `null` value, used to unset optional properties.
    pub fn null() -> Self {
        Self::new(Value::Null)
    }

    /// Wraps a closure as an [`Accessor`] for data of type `T`.
    pub fn accessor<T, F>(f: F) -> Self
    where
        T: 'static,
        F: Fn(&T, usize, &[T]) -> f64 + Send + Sync + 'static,
    {
        Self::new::<Accessor<T>>(chartkit_shape::accessor(f))
    }

    /// Wraps a closure as a [`Predicate`] for data of type `T`.
    pub fn predicate<T, F>(f: F) -> Self
    where
        T: 'static,
        F: Fn(&T, usize, &[T]) -> bool + Send + Sync + 'static,
    {
        Self::new::<Predicate<T>>(chartkit_shape::predicate(f))
    }

    /// Returns the name of the wrapped type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns true if the wrapped value is a `V`.
    pub fn is<V: Any>(&self) -> bool {
        self.value.is::<V>()
    }

    /// Returns true for JSON `null` and the unit value.
    pub fn is_null(&self) -> bool {
        self.value.is::<()>() || matches!(self.value.downcast_ref::<Value>(), Some(Value::Null))
    }

    /// Borrows the wrapped value if it is a `V`.
    pub fn downcast_ref<V: Any>(&self) -> Option<&V> {
        self.value.downcast_ref::<V>()
    }

    /// Takes the wrapped value if it is a `V`, or hands the value back.
    pub fn try_take<V: Any>(self) -> Result<V, Self> {
        let type_name = self.type_name;
        match self.value.downcast::<V>() {
            Ok(v) => Ok(*v),
            Err(value) => Err(Self { value, type_name }),
        }
    }

    /// Takes the wrapped value, which must be exactly a `V`.
    pub fn take<V: Any>(self) -> Result<V, ValueError> {
        self.try_take::<V>()
            .map_err(|v| ValueError::mismatch(type_name::<V>(), v.type_name))
    }

    /// Takes a number from any primitive numeric type or a JSON number.
    pub fn take_f64(self) -> Result<f64, ValueError> {
        macro_rules! numeric {
            ($value:expr; $($t:ty),*) => {$(
                if let Some(&n) = $value.downcast_ref::<$t>() {
                    return Ok(n as f64);
                }
            )*};
        }
        numeric!(self.value; f64, f32, i64, i32, i16, i8, u64, u32, u16, u8, usize, isize);

        match self.try_take::<Value>() {
            Ok(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| ValueError::mismatch("number", n.to_string())),
            Ok(other) => Err(ValueError::mismatch("number", json_kind(&other))),
            Err(v) => Err(ValueError::mismatch("number", v.type_name)),
        }
    }

    /// Takes a boolean from `bool` or a JSON boolean.
    pub fn take_bool(self) -> Result<bool, ValueError> {
        let v = match self.try_take::<bool>() {
            Ok(b) => return Ok(b),
            Err(v) => v,
        };
        match v.try_take::<Value>() {
            Ok(Value::Bool(b)) => Ok(b),
            Ok(other) => Err(ValueError::mismatch("bool", json_kind(&other))),
            Err(v) => Err(ValueError::mismatch("bool", v.type_name)),
        }
    }

    /// Takes a string from `String`, `&'static str` or a JSON string.
    pub fn take_string(self) -> Result<String, ValueError> {
        let v = match self.try_take::<String>() {
            Ok(s) => return Ok(s),
            Err(v) => v,
        };
        let v = match v.try_take::<&'static str>() {
            Ok(s) => return Ok(s.to_string()),
            Err(v) => v,
        };
        match v.try_take::<Value>() {
            Ok(Value::String(s)) => Ok(s),
            Ok(other) => Err(ValueError::mismatch("string", json_kind(&other))),
            Err(v) => Err(ValueError::mismatch("string", v.type_name)),
        }
    }

    /// Takes a list of numbers from `Vec<f64>`, `[f64; 2]` or a JSON array.
    pub fn take_numbers(self) -> Result<Vec<f64>, ValueError> {
        const EXPECTED: &str = "list of numbers";

        let v = match self.try_take::<Vec<f64>>() {
            Ok(list) => return Ok(list),
            Err(v) => v,
        };
        let v = match v.try_take::<[f64; 2]>() {
            Ok(pair) => return Ok(pair.to_vec()),
            Err(v) => v,
        };
        match v.try_take::<Value>() {
            Ok(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_f64()
                        .ok_or_else(|| ValueError::mismatch(EXPECTED, json_kind(item)))
                })
                .collect(),
            Ok(other) => Err(ValueError::mismatch(EXPECTED, json_kind(&other))),
            Err(v) => Err(ValueError::mismatch(EXPECTED, v.type_name)),
        }
    }
}

/// Describes a JSON value for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl fmt::Debug for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropValue")
            .field("type", &self.type_name)
            .finish_non_exhaustive()
    }
}

macro_rules! impl_from {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for PropValue {
            fn from(value: $t) -> Self {
                Self::new(value)
            }
        }
    )*};
}

impl_from!(
    f64,
    f32,
    i32,
    i64,
    u32,
    u64,
    usize,
    bool,
    String,
    &'static str,
    Vec<f64>,
    [f64; 2],
    Value,
    chartkit_shape::SharedCurveFactory,
);
