//! Sweatdrop engine crate.
//!
//! This crate owns the renderer-agnostic pieces that generated drops are made of:
//! paint (colors, gradients, fills, blend modes), shape geometry, and the
//! paint-order draw stream handed to a document sink.
//!
//! It contains no randomness. Sampling lives in `sweatdrop-gen`.

pub mod error;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod shape;

pub use error::EngineError;

/// Geometry primitives are shared with `kurbo` so callers never convert.
pub use kurbo::{Affine, BezPath, PathEl, Point, Rect, Vec2};
