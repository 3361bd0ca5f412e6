//! Error types for property application and curve resolution.

use chartkit_shape::ShapeError;
use thiserror::Error;

/// Property application result type.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Curve resolution result type.
pub type CurveResult<T> = Result<T, CurveError>;

/// Errors raised while applying a property bag.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The constructed object has no setter under this name.
    #[error("Setter function '{key}' does not exist on this object")]
    UnknownSetter {
        /// The offending property key.
        key: String,
    },

    /// The setter exists but rejected its value.
    #[error("Invalid value for setter '{key}': {source}")]
    InvalidValue {
        /// The property key whose setter failed.
        key: String,
        /// The setter's own error.
        #[source]
        source: ValueError,
    },

    /// The input could not be read as a property bag.
    #[error("Invalid property bag: {reason}")]
    InvalidBag {
        /// Why the input was rejected.
        reason: String,
    },
}

impl ConfigError {
    /// Creates an unknown setter error.
    #[must_use]
    pub fn unknown_setter(key: impl Into<String>) -> Self {
        Self::UnknownSetter { key: key.into() }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(key: impl Into<String>, source: ValueError) -> Self {
        Self::InvalidValue {
            key: key.into(),
            source,
        }
    }

    /// Creates an invalid bag error.
    #[must_use]
    pub fn invalid_bag(reason: impl Into<String>) -> Self {
        Self::InvalidBag {
            reason: reason.into(),
        }
    }

    /// Returns the property key involved, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::UnknownSetter { key } | Self::InvalidValue { key, .. } => Some(key),
            Self::InvalidBag { .. } => None,
        }
    }
}

/// Errors raised by a setter for the value it was given.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// The value's type is not one the setter accepts.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// What the setter accepts.
        expected: String,
        /// The type actually supplied.
        found: String,
    },

    /// The shape library rejected the value.
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// A curve name could not be resolved.
    #[error(transparent)]
    Curve(#[from] CurveError),
}

impl ValueError {
    /// Creates a type mismatch error.
    #[must_use]
    pub fn mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }
}

/// Errors raised while resolving a curve identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// The name is not in the curve table.
    #[error("unknown curve: {name}")]
    UnknownCurve {
        /// The name as given by the caller.
        name: String,
    },

    /// The curve cannot interpolate areas.
    #[error("Curve '{name}' supports lines only and cannot be used for areas")]
    LineOnly {
        /// The resolved curve's name.
        name: String,
    },
}

impl CurveError {
    /// Creates an unknown curve error.
    #[must_use]
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownCurve { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_unknown_setter_message() {
        let err = ConfigError::unknown_setter("nonExistentMethod");
        assert_eq!(
            err.to_string(),
            "Setter function 'nonExistentMethod' does not exist on this object"
        );
        assert_eq!(err.key(), Some("nonExistentMethod"));
    }

    #[test]
    fn test_invalid_value_keeps_source() {
        let source = ValueError::from(ShapeError::insufficient_data(2, 1));
        let err = ConfigError::invalid_value("domain", source.clone());

        assert!(err.to_string().contains("'domain'"));
        let inner = err.source().unwrap().downcast_ref::<ValueError>().unwrap();
        assert_eq!(inner, &source);
    }

    #[test]
    fn test_unknown_curve_names_input() {
        let err = CurveError::unknown("Wiggly");
        assert_eq!(err.to_string(), "unknown curve: Wiggly");
    }
}
