//! Fixed gradient recipes.
//!
//! The body stops are a visual recipe, not configuration; every drop of either
//! variant gets exactly these values.

use sweatdrop_engine::Point;
use sweatdrop_engine::paint::{Color, ColorStop, GradientId, LinearGradient, RadialGradient};

/// `#121212`, the mid stop of the body gradient.
pub const NEAR_BLACK: Color = Color::rgb(0x12, 0x12, 0x12);

/// Body gradient center, object-bounding-box units.
pub const BODY_CENTER: Point = Point::new(0.3, 0.3);

/// Body gradient radius, object-bounding-box units.
pub const BODY_RADIUS: f64 = 0.7;

pub const BODY_STOPS: [ColorStop; 3] = [
    ColorStop::new(0.0, Color::WHITE, 0.0),
    ColorStop::new(0.37, NEAR_BLACK, 0.014),
    ColorStop::new(1.0, Color::WHITE, 0.286),
];

/// Black fading from `opacity` to fully transparent.
pub fn shadow_gradient(id: GradientId, opacity: f64) -> LinearGradient {
    LinearGradient::new(
        id,
        vec![
            ColorStop::new(0.0, Color::BLACK, opacity),
            ColorStop::new(1.0, Color::BLACK, 0.0),
        ],
    )
}

pub fn body_gradient(id: GradientId) -> RadialGradient {
    RadialGradient::new(id, BODY_CENTER, BODY_RADIUS, BODY_STOPS.to_vec())
}
