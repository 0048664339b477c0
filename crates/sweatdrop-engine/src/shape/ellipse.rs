use kurbo::{Point, Rect, Vec2};

/// Axis-aligned ellipse.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ellipse {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
}

impl Ellipse {
    #[inline]
    pub const fn new(center: Point, rx: f64, ry: f64) -> Self {
        Self { center, rx, ry }
    }

    #[inline]
    pub fn bounding_box(&self) -> Rect {
        Rect::from_center_size(self.center, (self.rx * 2.0, self.ry * 2.0))
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.rx.is_finite() && self.ry.is_finite()
    }

    /// Converts to a `kurbo` ellipse for transformed queries.
    #[inline]
    pub fn to_kurbo(self) -> kurbo::Ellipse {
        kurbo::Ellipse::new(self.center, Vec2::new(self.rx, self.ry), 0.0)
    }
}
