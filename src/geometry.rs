//! Geometric primitives for the chart.
//!
//! Angles are in degrees, measured from 3 o'clock and increasing
//! counter-clockwise as seen on screen. Screen y grows downward, so the
//! polar conversions flip the sine term.

/// Normalize an angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `center` in direction `angle_deg`.
    #[must_use]
    pub fn from_polar(center: Self, radius: f32, angle_deg: f32) -> Self {
        let rad = angle_deg.to_radians();
        Self::new(center.x + radius * rad.cos(), center.y - radius * rad.sin())
    }

    /// Radius and normalized angle of this point relative to `center`.
    #[must_use]
    pub fn to_polar(self, center: Self) -> (f32, f32) {
        let dx = self.x - center.x;
        let dy = center.y - self.y;
        let radius = dx.hypot(dy);
        let angle = normalize_degrees(dy.atan2(dx).to_degrees());
        (radius, angle)
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X coordinate of the top-left corner.
    pub x: f32,
    /// Y coordinate of the top-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square of side `size` centered on `center`.
    #[must_use]
    pub fn centered(center: Point, size: f32) -> Self {
        Self::new(center.x - size / 2.0, center.y - size / 2.0, size, size)
    }

    /// Get the center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Y coordinate of the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// A ring wedge: the region between two radii and two angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnularSector {
    /// Ring center.
    pub center: Point,
    /// Inner radius.
    pub inner: f32,
    /// Outer radius.
    pub outer: f32,
    /// Start angle in degrees.
    pub start: f32,
    /// Angular extent in degrees, counter-clockwise from `start`.
    pub sweep: f32,
}

impl AnnularSector {
    /// Create a sector.
    #[must_use]
    pub const fn new(center: Point, inner: f32, outer: f32, start: f32, sweep: f32) -> Self {
        Self {
            center,
            inner,
            outer,
            start,
            sweep,
        }
    }

    /// Whether `angle` (degrees) lies in `[start, start + sweep)`.
    #[must_use]
    pub fn contains_angle(&self, angle: f32) -> bool {
        if self.sweep >= 360.0 {
            return true;
        }
        normalize_degrees(angle - self.start) < self.sweep
    }

    /// Whether `point` lies inside the wedge.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let (radius, angle) = point.to_polar(self.center);
        radius >= self.inner && radius <= self.outer && self.contains_angle(angle)
    }

    /// Bounding box of the full outer circle.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::centered(self.center, self.outer * 2.0)
    }

    /// Point at the middle of the wedge, on radius `radius`.
    #[must_use]
    pub fn mid_point(&self, radius: f32) -> Point {
        Point::from_polar(self.center, radius, self.start + self.sweep / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sector_contains() {
        let c = Point::new(100.0, 100.0);
        let wedge = AnnularSector::new(c, 20.0, 50.0, 0.0, 90.0);
        assert!(wedge.contains(Point::from_polar(c, 30.0, 45.0)));
        assert!(!wedge.contains(Point::from_polar(c, 30.0, 135.0)));
        assert!(!wedge.contains(Point::from_polar(c, 10.0, 45.0)));
        assert!(!wedge.contains(Point::from_polar(c, 60.0, 45.0)));
        assert!(wedge.contains(wedge.mid_point(35.0)));
    }

    #[test]
    fn test_sector_wraps_through_zero() {
        let c = Point::ORIGIN;
        let wedge = AnnularSector::new(c, 0.0, 10.0, 330.0, 60.0);
        assert!(wedge.contains_angle(345.0));
        assert!(wedge.contains_angle(15.0));
        assert!(!wedge.contains_angle(45.0));

        let full = AnnularSector::new(c, 0.0, 10.0, 0.0, 360.0);
        assert!(full.contains_angle(359.9));
    }

    #[test]
    fn test_normalize_degrees() {
        assert_relative_eq!(normalize_degrees(1800.0), 0.0);
        assert_relative_eq!(normalize_degrees(-90.0), 270.0);
        assert_relative_eq!(normalize_degrees(360.0), 0.0);
        assert_relative_eq!(normalize_degrees(45.0), 45.0);
        assert!(normalize_degrees(-1e-7) < 360.0);
    }

    #[test]
    fn test_from_polar_screen_orientation() {
        let c = Point::new(250.0, 250.0);
        let east = Point::from_polar(c, 100.0, 0.0);
        assert_relative_eq!(east.x, 350.0, epsilon = 1e-3);
        assert_relative_eq!(east.y, 250.0, epsilon = 1e-3);

        // 90 degrees is straight up on screen
        let north = Point::from_polar(c, 100.0, 90.0);
        assert_relative_eq!(north.x, 250.0, epsilon = 1e-3);
        assert_relative_eq!(north.y, 150.0, epsilon = 1e-3);
    }

    #[test]
    fn test_to_polar_inverts_from_polar() {
        let c = Point::new(250.0, 250.0);
        for angle in [0.0_f32, 15.0, 105.0, 200.0, 345.0] {
            let p = Point::from_polar(c, 110.0, angle);
            let (r, a) = p.to_polar(c);
            assert_relative_eq!(r, 110.0, epsilon = 1e-3);
            assert_relative_eq!(a, angle, epsilon = 1e-2);
        }
    }

    #[test]
    fn test_rect_centered() {
        let rect = Rect::centered(Point::new(250.0, 250.0), 140.0);
        assert_relative_eq!(rect.x, 180.0);
        assert_relative_eq!(rect.bottom(), 320.0);
        assert_eq!(rect.center(), Point::new(250.0, 250.0));
    }
}
