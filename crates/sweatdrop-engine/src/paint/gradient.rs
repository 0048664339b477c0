use core::fmt;

use kurbo::Point;

use super::Color;

/// Document-unique identifier of a gradient definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GradientId(String);

impl GradientId {
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GradientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single gradient stop: offset fraction, color, opacity.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Color,
    pub opacity: f64,
}

impl ColorStop {
    #[inline]
    pub const fn new(offset: f64, color: Color, opacity: f64) -> Self {
        Self { offset, color, opacity }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.offset.is_finite()
            && (0.0..=1.0).contains(&self.offset)
            && self.opacity.is_finite()
            && (0.0..=1.0).contains(&self.opacity)
    }
}

/// Linear gradient in object-bounding-box units.
///
/// `start` and `end` default to the left and right edge of the filled shape,
/// the usual vector-document default when no vector is given. Colors outside
/// the vector clamp to the edge stops.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub id: GradientId,
    pub start: Point,
    pub end: Point,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(id: GradientId, stops: Vec<ColorStop>) -> Self {
        Self {
            id,
            start: Point::new(0.0, 0.0),
            end: Point::new(1.0, 0.0),
            stops,
        }
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.start != self.end
            && stops_valid(&self.stops)
    }
}

/// Radial gradient in object-bounding-box units.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub id: GradientId,
    pub center: Point,
    pub radius: f64,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    pub fn new(id: GradientId, center: Point, radius: f64, stops: Vec<ColorStop>) -> Self {
        Self { id, center, radius, stops }
    }

    pub fn is_valid(&self) -> bool {
        self.center.is_finite()
            && self.radius.is_finite()
            && self.radius > 0.0
            && stops_valid(&self.stops)
    }
}

/// A gradient definition a shape can reference by id.
#[derive(Debug, Clone, PartialEq)]
pub enum GradientDef {
    Linear(LinearGradient),
    Radial(RadialGradient),
}

impl GradientDef {
    #[inline]
    pub fn id(&self) -> &GradientId {
        match self {
            GradientDef::Linear(g) => &g.id,
            GradientDef::Radial(g) => &g.id,
        }
    }

    #[inline]
    pub fn stops(&self) -> &[ColorStop] {
        match self {
            GradientDef::Linear(g) => &g.stops,
            GradientDef::Radial(g) => &g.stops,
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        match self {
            GradientDef::Linear(g) => g.is_valid(),
            GradientDef::Radial(g) => g.is_valid(),
        }
    }
}

impl From<LinearGradient> for GradientDef {
    fn from(g: LinearGradient) -> Self {
        GradientDef::Linear(g)
    }
}

impl From<RadialGradient> for GradientDef {
    fn from(g: RadialGradient) -> Self {
        GradientDef::Radial(g)
    }
}

/// At least two stops, each valid, offsets non-decreasing.
fn stops_valid(stops: &[ColorStop]) -> bool {
    stops.len() >= 2
        && stops.iter().all(ColorStop::is_valid)
        && stops.windows(2).all(|w| w[0].offset <= w[1].offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_stops() -> Vec<ColorStop> {
        vec![
            ColorStop::new(0.0, Color::BLACK, 0.5),
            ColorStop::new(1.0, Color::BLACK, 0.0),
        ]
    }

    #[test]
    fn linear_defaults_to_horizontal_bbox_vector() {
        let g = LinearGradient::new(GradientId::new("a"), two_stops());
        assert_eq!(g.start, Point::new(0.0, 0.0));
        assert_eq!(g.end, Point::new(1.0, 0.0));
        assert!(g.is_valid());
    }

    #[test]
    fn single_stop_is_invalid() {
        let g = LinearGradient::new(GradientId::new("a"), two_stops()[..1].to_vec());
        assert!(!g.is_valid());
    }

    #[test]
    fn unsorted_stops_are_invalid() {
        let mut stops = two_stops();
        stops.reverse();
        let g = RadialGradient::new(GradientId::new("r"), Point::new(0.3, 0.3), 0.7, stops);
        assert!(!g.is_valid());
    }

    #[test]
    fn radial_needs_positive_radius() {
        let g = RadialGradient::new(GradientId::new("r"), Point::new(0.3, 0.3), 0.0, two_stops());
        assert!(!g.is_valid());
    }

    #[test]
    fn opacity_out_of_range_is_invalid() {
        assert!(!ColorStop::new(0.5, Color::WHITE, 1.5).is_valid());
        assert!(!ColorStop::new(f64::NAN, Color::WHITE, 0.5).is_valid());
    }

    #[test]
    fn def_exposes_id_and_stops() {
        let def: GradientDef = LinearGradient::new(GradientId::new("shadow"), two_stops()).into();
        assert_eq!(def.id().as_str(), "shadow");
        assert_eq!(def.stops().len(), 2);
    }
}
