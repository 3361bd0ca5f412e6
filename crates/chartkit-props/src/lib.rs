//! # Chartkit Props
//!
//! Declarative configuration for chartkit shape generators and scales.
//!
//! This crate provides:
//!
//! - **Configuring constructor**: [`configure`] builds an object with a
//!   factory, then applies a [`PropertyBag`] of named values through the
//!   object's setters. Unknown setter names fail loudly.
//! - **Curve resolution**: [`resolve_curve`] turns a case-insensitive curve
//!   name (or a custom factory) into a curve factory, optionally tuned.
//! - **Setter tables** for [`Line`](chartkit_shape::Line),
//!   [`Area`](chartkit_shape::Area), [`ScaleLinear`](chartkit_shape::ScaleLinear)
//!   and [`ScaleTime`](chartkit_shape::ScaleTime).
//!
//! ## Example
//!
//! ```rust
//! use chartkit_props::{configure, PropertyBag};
//! use chartkit_shape::ScaleLinear;
//! use serde_json::json;
//!
//! let props = PropertyBag::from_json(&json!({
//!     "domain": [0, 10],
//!     "range": [0, 100],
//!     "clamp": true,
//! }))?;
//!
//! let scale = configure(ScaleLinear::new, (), props)?;
//! assert_eq!(scale.scale(5.0), 50.0);
//! assert_eq!(scale.scale(11.0), 100.0);
//! # Ok::<(), chartkit_props::ConfigError>(())
//! ```
//!
//! ## Failure Semantics
//!
//! Properties are applied in bag order. The first unknown key or rejected
//! value aborts the call; properties applied before it are not rolled back.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::doc_markdown)]

pub mod bag;
pub mod configure;
pub mod curves;
pub mod error;
mod setters;
pub mod value;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bag::PropertyBag;
    pub use crate::configure::{
        apply_props, configure, construct, try_configure, Configurable, Setter,
    };
    pub use crate::curves::{resolve_area_curve, resolve_curve, CurveName, CurveSpec};
    pub use crate::error::{ConfigError, ConfigResult, CurveError, CurveResult, ValueError};
    pub use crate::value::PropValue;
}

pub use bag::PropertyBag;
pub use configure::{
    apply_props, configure, construct, try_configure, Configurable, Factory, Setter,
    SetterRegistry,
};
pub use curves::{
    apply_tuning, resolve_area_curve, resolve_bundle, resolve_curve, CurveName, CurveSpec,
};
pub use error::{ConfigError, ConfigResult, CurveError, CurveResult, ValueError};
pub use value::PropValue;
