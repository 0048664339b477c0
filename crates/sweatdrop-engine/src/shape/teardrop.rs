use kurbo::{BezPath, PathEl, Point};

/// Closed teardrop outline: pointed top, rounded bottom.
///
/// Built from four cubic segments:
/// bottom -> left-mid -> top -> right-mid -> bottom.
///
/// With `w = size * 0.6` and `h = size * ratio`, the bottom point sits at
/// `y + 0.3h` and the tip at `y - 0.7h`.
#[derive(Debug, Clone, PartialEq)]
pub struct TeardropPath {
    center: Point,
    width: f64,
    height: f64,
    path: BezPath,
}

impl TeardropPath {
    pub fn new(center: Point, size: f64, ratio: f64) -> Self {
        let width = size * 0.6;
        let height = size * ratio;

        let Point { x, y } = center;
        let bottom_y = y + height * 0.3;
        let top_y = y - height * 0.7;
        let left_x = x - width * 0.5;
        let right_x = x + width * 0.5;
        let shoulder_y = y - height * 0.2;

        let mut path = BezPath::new();
        path.move_to((x, bottom_y));
        path.curve_to((left_x, bottom_y), (left_x, y), (left_x, shoulder_y));
        path.curve_to(
            (left_x, top_y + height * 0.3),
            (x - width * 0.2, top_y + height * 0.1),
            (x, top_y),
        );
        path.curve_to(
            (x + width * 0.2, top_y + height * 0.1),
            (right_x, top_y + height * 0.3),
            (right_x, shoulder_y),
        );
        path.curve_to((right_x, y), (right_x, bottom_y), (x, bottom_y));
        path.close_path();

        Self { center, width, height, path }
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Tip of the drop.
    #[inline]
    pub fn top(&self) -> Point {
        Point::new(self.center.x, self.center.y - self.height * 0.7)
    }

    /// Lowest on-curve point; both start and end of the contour.
    #[inline]
    pub fn bottom(&self) -> Point {
        Point::new(self.center.x, self.center.y + self.height * 0.3)
    }

    /// Every emitted coordinate pair in path order (move-to, then three per curve).
    pub fn points(&self) -> Vec<Point> {
        let mut out = Vec::with_capacity(13);
        for el in self.path.elements() {
            match *el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => out.push(p),
                PathEl::QuadTo(p1, p2) => out.extend([p1, p2]),
                PathEl::CurveTo(p1, p2, p3) => out.extend([p1, p2, p3]),
                PathEl::ClosePath => {}
            }
        }
        out
    }

    /// First and last emitted points coincide and the path ends in a close.
    pub fn is_closed(&self) -> bool {
        let points = self.points();
        matches!(self.path.elements().last(), Some(PathEl::ClosePath))
            && points.first() == points.last()
    }

    /// SVG path data (`M ... C ... Z`).
    pub fn to_svg(&self) -> String {
        self.path.to_svg()
    }
}
