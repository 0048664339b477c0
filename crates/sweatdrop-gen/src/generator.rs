//! Drop geometry generation.
//!
//! Draw order per drop is fixed: size jitter, x, y, then (teardrop only)
//! rotation. Seeded runs are reproducible only while this order holds.

use rand::Rng;
use rand::distributions::{Distribution, Standard};
use sweatdrop_engine::paint::{Color, Fill};
use sweatdrop_engine::shape::{Ellipse, Geometry, Shape, TeardropPath};
use sweatdrop_engine::{Point, Vec2};

use crate::ids::{DropGradientIds, GradientIds};
use crate::recipe::{body_gradient, shadow_gradient};
use crate::{DropVariant, GenerateError, GenerationOptions, SweatDrop};

/// Ellipse outline radii as fractions of the drop size.
const ELLIPSE_RX: f64 = 0.6;
const ELLIPSE_RY: f64 = 0.8;

/// Highlight ellipse radii as fractions of the highlight size.
const HIGHLIGHT_RX: f64 = 0.4;
const HIGHLIGHT_RY: f64 = 0.6;

/// Highlight offset from the drop center, as a fraction of the drop size.
const ELLIPSE_HIGHLIGHT_OFFSET: f64 = 0.3;
const TEARDROP_HIGHLIGHT_OFFSET: f64 = 0.2;

/// Generates `options.drop_count` drops.
///
/// Options are validated first; nothing is sampled when they are invalid.
/// The random source is only read, in a fixed order, so the same seed always
/// yields the same drops.
pub fn generate<R: Rng + ?Sized>(
    options: &GenerationOptions,
    rng: &mut R,
) -> Result<Vec<SweatDrop>, GenerateError> {
    options.validate()?;

    log::debug!(
        "generating {} {} drop(s), base size {}, area {}x{}",
        options.drop_count,
        match options.variant {
            DropVariant::Ellipse => "ellipse",
            DropVariant::Teardrop { .. } => "teardrop",
        },
        options.drop_size,
        options.area_width,
        options.area_height,
    );

    let mut ids = GradientIds::new(options.id_namespace.as_deref());
    let mut drops = Vec::with_capacity(options.drop_count);
    for index in 0..options.drop_count {
        let drop = build_drop(options, index, rng, ids.next_pair());
        log::trace!(
            "{}: center ({:.3}, {:.3}) size {:.3} rotation {:?}",
            drop.label,
            drop.center.x,
            drop.center.y,
            drop.size,
            drop.rotation
        );
        drops.push(drop);
    }

    Ok(drops)
}

fn build_drop<R: Rng + ?Sized>(
    options: &GenerationOptions,
    index: usize,
    rng: &mut R,
    ids: DropGradientIds,
) -> SweatDrop {
    // Validation bounds size_variation to [0, 1), so the clamp only guards rounding.
    let jitter = uniform(rng, -options.size_variation, options.size_variation);
    let size_factor = (1.0 + jitter).max(0.0);
    let size = options.drop_size * size_factor;

    let center = Point::new(
        uniform(rng, 0.0, options.area_width),
        uniform(rng, 0.0, options.area_height),
    );

    let rotation = match options.variant {
        DropVariant::Ellipse => None,
        DropVariant::Teardrop { rotation_variation, .. } => {
            Some(uniform(rng, -rotation_variation, rotation_variation))
        }
    };

    let highlight_offset = match options.variant {
        DropVariant::Ellipse => ELLIPSE_HIGHLIGHT_OFFSET,
        DropVariant::Teardrop { .. } => TEARDROP_HIGHLIGHT_OFFSET,
    };

    let shadow_center = center + polar(options.shadow_angle, options.shadow_distance);
    let highlight_center = center + polar(options.highlight_angle, size * highlight_offset);
    let highlight_size = size * options.highlight_size;

    let blend = options.blend_mode;
    let outline = Outline { variant: options.variant };

    let shadow = Shape::new(
        outline.drop(shadow_center, size),
        Fill::gradient(ids.shadow.clone()),
        blend,
    );
    let body = Shape::new(outline.drop(center, size), Fill::gradient(ids.body.clone()), blend);
    let highlight = Shape::new(
        outline.highlight(highlight_center, highlight_size),
        Fill::solid(Color::WHITE, options.highlight_opacity),
        blend,
    );

    let (shadow, body, highlight) = match rotation {
        Some(deg) => (shadow.rotated(deg), body.rotated(deg), highlight.rotated(deg)),
        None => (shadow, body, highlight),
    };

    SweatDrop {
        index,
        label: options.variant.drop_label(index),
        center,
        size,
        rotation,
        shadow,
        body,
        highlight,
        gradients: vec![
            shadow_gradient(ids.shadow, options.shadow_opacity).into(),
            body_gradient(ids.body).into(),
        ],
    }
}

/// Outline builder for one variant.
struct Outline {
    variant: DropVariant,
}

impl Outline {
    /// Outline shared by the shadow and the body.
    fn drop(&self, center: Point, size: f64) -> Geometry {
        match self.variant {
            DropVariant::Ellipse => {
                Ellipse::new(center, size * ELLIPSE_RX, size * ELLIPSE_RY).into()
            }
            DropVariant::Teardrop { teardrop_ratio, .. } => {
                TeardropPath::new(center, size, teardrop_ratio).into()
            }
        }
    }

    /// Smaller outline for the highlight. The teardrop keeps its own proportions.
    fn highlight(&self, center: Point, size: f64) -> Geometry {
        match self.variant {
            DropVariant::Ellipse => {
                Ellipse::new(center, size * HIGHLIGHT_RX, size * HIGHLIGHT_RY).into()
            }
            DropVariant::Teardrop { teardrop_ratio, .. } => {
                TeardropPath::new(center, size, teardrop_ratio).into()
            }
        }
    }
}

/// Uniform sample in `[lo, hi)`; returns `lo` when the range is empty.
#[inline]
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    let u: f64 = Standard.sample(rng);
    lo + (hi - lo) * u
}

/// Offset of `distance` along `degrees` (+Y down).
#[inline]
fn polar(degrees: f64, distance: f64) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()) * distance
}
