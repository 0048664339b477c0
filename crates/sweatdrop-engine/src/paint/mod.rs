//! Paint model shared between the generator and document sinks.
//!
//! Scope:
//! - color representation (straight sRGB, opacity carried separately)
//! - gradient definitions (linear, radial) and their ids
//! - fills and blend modes
//!
//! Geometry types live in `shape`.

pub mod blend;
pub mod color;
pub mod fill;
pub mod gradient;

pub use blend::BlendMode;
pub use color::Color;
pub use fill::Fill;
pub use gradient::{ColorStop, GradientDef, GradientId, LinearGradient, RadialGradient};
