//! Shape geometry for generated drops.
//!
//! Canonical space:
//! - document user units
//! - origin top-left
//! - +X right, +Y down
//!
//! Rotations are kept as a transform on the [`Shape`], never baked into the
//! control points, so sinks can emit them as a `rotate(deg cx cy)` attribute.

mod ellipse;
mod teardrop;

pub use ellipse::Ellipse;
pub use teardrop::TeardropPath;

use kurbo::{Affine, Point, Rect, Shape as _};

use crate::paint::{BlendMode, Fill};

/// Concrete outline of a shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Ellipse(Ellipse),
    Teardrop(TeardropPath),
}

impl Geometry {
    /// The point the outline was built around; also the rotation pivot.
    #[inline]
    pub fn center(&self) -> Point {
        match self {
            Geometry::Ellipse(e) => e.center,
            Geometry::Teardrop(t) => t.center(),
        }
    }

    /// Axis-aligned bounds before any rotation.
    pub fn bounding_box(&self) -> Rect {
        match self {
            Geometry::Ellipse(e) => e.bounding_box(),
            Geometry::Teardrop(t) => t.path().bounding_box(),
        }
    }
}

impl From<Ellipse> for Geometry {
    fn from(e: Ellipse) -> Self {
        Geometry::Ellipse(e)
    }
}

impl From<TeardropPath> for Geometry {
    fn from(t: TeardropPath) -> Self {
        Geometry::Teardrop(t)
    }
}

/// Rotation in degrees about a pivot point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rotation {
    pub degrees: f64,
    pub center: Point,
}

impl Rotation {
    #[inline]
    pub const fn new(degrees: f64, center: Point) -> Self {
        Self { degrees, center }
    }

    #[inline]
    pub fn to_affine(self) -> Affine {
        Affine::rotate_about(self.degrees.to_radians(), self.center)
    }
}

/// A filled, composited outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub geometry: Geometry,
    pub fill: Fill,
    /// Whole-shape opacity, independent of the fill's own opacity.
    pub opacity: f64,
    pub blend_mode: BlendMode,
    pub rotation: Option<Rotation>,
}

impl Shape {
    #[inline]
    pub fn new(geometry: impl Into<Geometry>, fill: Fill, blend_mode: BlendMode) -> Self {
        Self {
            geometry: geometry.into(),
            fill,
            opacity: 1.0,
            blend_mode,
            rotation: None,
        }
    }

    /// Rotates the shape about its own center. A zero angle leaves it untransformed.
    #[must_use]
    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = (degrees != 0.0).then(|| Rotation::new(degrees, self.geometry.center()));
        self
    }

    /// Shape-to-document transform.
    #[inline]
    pub fn transform(&self) -> Affine {
        self.rotation.map_or(Affine::IDENTITY, Rotation::to_affine)
    }

    /// Axis-aligned bounds in document space, rotation included.
    pub fn bounding_box(&self) -> Rect {
        let Some(rotation) = self.rotation else {
            return self.geometry.bounding_box();
        };
        let affine = rotation.to_affine();
        match &self.geometry {
            Geometry::Ellipse(e) => (affine * e.to_kurbo()).bounding_box(),
            Geometry::Teardrop(t) => (affine * t.path().clone()).bounding_box(),
        }
    }
}
