//! # Chartkit Shape
//!
//! Geometry primitives for the chartkit charting toolkit.
//!
//! This crate provides:
//!
//! - **Paths**: An SVG path-data builder behind the [`PathContext`] trait
//! - **Curves**: Twenty interpolation families (linear, step, basis, bundle,
//!   bump, cardinal, Catmull-Rom, monotone, natural) producing d3-compatible output
//! - **Shapes**: [`Line`] and [`Area`] generators driven by accessor functions
//! - **Scales**: [`ScaleLinear`] and [`ScaleTime`] continuous scales
//!
//! ## Example
//!
//! ```rust
//! use chartkit_shape::Line;
//!
//! let line = Line::<[f64; 2]>::new();
//! let d = line.generate(&[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]]);
//! assert_eq!(d.as_deref(), Some("M0,0L1,1L2,2"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::match_same_arms)]

pub mod area;
pub mod curve;
pub mod error;
pub mod line;
pub mod path;
pub mod scale;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::area::Area;
    pub use crate::curve::{Curve, CurveFactory, SharedCurveFactory};
    pub use crate::error::{ShapeError, ShapeResult};
    pub use crate::line::{accessor, constant, predicate, Accessor, Line, Predicate, XY};
    pub use crate::path::{Path, PathContext};
    pub use crate::scale::{ScaleLinear, ScaleTime};
}

pub use area::Area;
pub use curve::{Curve, CurveFactory, SharedCurveFactory};
pub use error::{ShapeError, ShapeResult};
pub use line::{accessor, constant, predicate, Accessor, Line, Predicate, XY};
pub use path::{Path, PathContext};
pub use scale::{ScaleLinear, ScaleTime};
