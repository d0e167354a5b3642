#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::pack;
use serde::Serialize;
use std::f64::consts::PI;

pub use crate::util::linalg_def::{Circle, Rect};

/// A rotatable box with a strictly positive size.
///
/// Coordinates follow the usual maths convention (y grows upwards): `bottom_left()` is the
/// unrotated `(0, 0)` corner and `top_left()` is `(0, size.y)`. The box is rotated
/// counter-clockwise by `rotation` radians about its `origin`, which is given as an offset from
/// the bottom-left corner, and then moved by `position`.
///
/// # Examples
///
/// ```
/// use simplevector::core::prelude::*;
/// use std::f64::consts::FRAC_PI_2;
///
/// let b = Box2D::new(Vector2::zero(), Vector2::new(100.0, 100.0))?
///     .with_origin(Vector2::new(50.0, 50.0))
///     .with_rotation(FRAC_PI_2);
/// assert_eq!(b.top_left(), Vector2::new(-50.0, -50.0));
/// assert_eq!(b.bottom_right(), Vector2::new(50.0, 50.0));
/// # Ok::<(), GeomError>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Box2D {
    pub position: Vector2,
    pub origin: Vector2,
    pub rotation: f64,
    size: Vector2,
}

impl Box2D {
    pub fn new(position: Vector2, size: Vector2) -> Result<Self> {
        Self::check_size(size)?;
        Ok(Self {
            position,
            origin: Vector2::zero(),
            rotation: 0.0,
            size,
        })
    }
    #[must_use]
    pub fn with_origin(mut self, origin: Vector2) -> Self {
        self.origin = origin;
        self
    }
    #[must_use]
    pub fn with_rotation(mut self, radians: f64) -> Self {
        self.rotation = radians;
        self
    }

    fn check_size(size: Vector2) -> Result<()> {
        // Written so that NaN fails too.
        if size.x > 0.0 && size.y > 0.0 {
            Ok(())
        } else {
            Err(GeomError::Validation(format!(
                "Box2D size must be strictly positive, got {size}"
            )))
        }
    }

    #[must_use]
    pub fn size(&self) -> Vector2 {
        self.size
    }
    pub fn set_size(&mut self, size: Vector2) -> Result<()> {
        Self::check_size(size)?;
        self.size = size;
        Ok(())
    }

    fn corner(&self, offset: Vector2) -> Vector2 {
        (offset - self.origin).rotated(self.rotation) + self.position
    }
    #[must_use]
    pub fn bottom_left(&self) -> Vector2 {
        self.corner(Vector2::zero())
    }
    #[must_use]
    pub fn bottom_right(&self) -> Vector2 {
        self.corner(self.size.x_vector())
    }
    #[must_use]
    pub fn top_left(&self) -> Vector2 {
        self.corner(self.size.y_vector())
    }
    #[must_use]
    pub fn top_right(&self) -> Vector2 {
        self.corner(self.size)
    }
    /// Clockwise from the top-left corner.
    #[must_use]
    pub fn points(&self) -> [Vector2; 4] {
        [
            self.top_left(),
            self.top_right(),
            self.bottom_right(),
            self.bottom_left(),
        ]
    }

    /// Centre of the unrotated box. Rotation about the origin is not applied.
    #[must_use]
    pub fn center(&self) -> Vector2 {
        self.position + self.size / 2.0 - self.origin
    }
    #[must_use]
    pub fn area(&self) -> f64 {
        self.size.x * self.size.y
    }
}

impl Rect {
    #[must_use]
    pub fn new(position: Vector2, size: Vector2) -> Self {
        Self { position, size }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.size.x
    }
    #[must_use]
    pub fn height(&self) -> f64 {
        self.size.y
    }
    #[must_use]
    pub fn x(&self) -> f64 {
        self.position.x
    }
    #[must_use]
    pub fn y(&self) -> f64 {
        self.position.y
    }
    #[must_use]
    pub fn x1(&self) -> f64 {
        self.position.x
    }
    #[must_use]
    pub fn y1(&self) -> f64 {
        self.position.y
    }
    #[must_use]
    pub fn x2(&self) -> f64 {
        self.position.x + self.size.x
    }
    #[must_use]
    pub fn y2(&self) -> f64 {
        self.position.y + self.size.y
    }
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.width() * 2.0 + self.height() * 2.0
    }

    /// Half-open test: the minimum edges are inside, the maximum edges are not.
    #[must_use]
    pub fn contains(&self, point: Vector2) -> bool {
        (self.x1()..self.x2()).contains(&point.x) && (self.y1()..self.y2()).contains(&point.y)
    }

    pub fn translate(&mut self, by: Vector2) {
        self.position += by;
    }
    pub fn scale(&mut self, factor: f64) {
        self.size *= factor;
    }
}

impl Packable for Rect {
    const PACKED_LEN: usize = 2 * Vector2::PACKED_LEN;

    fn to_bytes(&self) -> Result<Vec<u8>> {
        pack::encode(self)
    }
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        pack::decode(bytes, Self::PACKED_LEN)
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            radius: 1.0,
            position: Vector2::zero(),
        }
    }
}

impl Circle {
    #[must_use]
    pub fn new(radius: f64, position: Vector2) -> Self {
        Self { radius, position }
    }
    #[must_use]
    pub fn with_radius(radius: f64) -> Self {
        Self {
            radius,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.radius * self.radius * PI
    }
    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }
    /// Points exactly on the circumference are outside.
    #[must_use]
    pub fn contains(&self, point: Vector2) -> bool {
        (self.position - point).length() < self.radius
    }

    pub fn translate(&mut self, by: Vector2) {
        self.position += by;
    }
    pub fn scale(&mut self, factor: f64) {
        self.radius *= factor;
    }
}

impl Packable for Circle {
    const PACKED_LEN: usize = 8 + Vector2::PACKED_LEN;

    fn to_bytes(&self) -> Result<Vec<u8>> {
        pack::encode(self)
    }
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        pack::decode(bytes, Self::PACKED_LEN)
    }
}

/// A line through two points.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, serde::Deserialize)]
pub struct Line {
    pub p1: Vector2,
    pub p2: Vector2,
}

impl Line {
    #[must_use]
    pub fn new(p1: Vector2, p2: Vector2) -> Self {
        Self { p1, p2 }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        (self.p2 - self.p1).length()
    }

    /// The slope and y-intercept of the line, or `None` if it is vertical.
    fn slope_intercept(&self) -> Option<(f64, f64)> {
        let d = self.p2 - self.p1;
        if d.x == 0.0 {
            return None;
        }
        let m = d.y / d.x;
        Some((m, self.p1.y - m * self.p1.x))
    }

    /// Intersection point of the two (infinite) lines.
    ///
    /// Vertical lines, including degenerate ones with equal endpoints, and parallel lines are
    /// not supported and fail with [`GeomError::Unsupported`].
    ///
    /// ```
    /// use simplevector::core::prelude::*;
    /// let l1 = Line::new(Vector2::new(0.0, 0.0), Vector2::new(10.0, 10.0));
    /// let l2 = Line::new(Vector2::new(0.0, 10.0), Vector2::new(10.0, 0.0));
    /// assert_eq!(l1.intersection(&l2)?, Vector2::new(5.0, 5.0));
    /// # Ok::<(), GeomError>(())
    /// ```
    pub fn intersection(&self, other: &Line) -> Result<Vector2> {
        let (Some((m1, b1)), Some((m2, b2))) = (self.slope_intercept(), other.slope_intercept())
        else {
            debug!("Line: refusing intersection of vertical lines: {self:?}, {other:?}");
            return Err(GeomError::Unsupported(
                "intersection of vertical lines is not supported",
            ));
        };
        if m1 == m2 {
            debug!("Line: refusing intersection of parallel lines: {self:?}, {other:?}");
            return Err(GeomError::Unsupported(
                "intersection of parallel lines is not supported",
            ));
        }
        let x = (b2 - b1) / (m1 - m2);
        Ok(Vector2::new(x, m1 * x + b1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn close_enough(a: f64, b: f64) -> bool {
        crate::util::float::is_close(a, b)
    }

    // ==================== Box2D ====================

    #[test]
    fn box_area() {
        let b = Box2D::new(Vector2::new(1.0, 1.0), Vector2::new(50.0, 50.0)).unwrap();
        assert_eq!(b.area(), 2500.0);
        let b = Box2D::new(Vector2::zero(), Vector2::new(100.0, 100.0)).unwrap();
        assert_eq!(b.area(), 10_000.0);
    }

    #[test]
    fn box_size() {
        let b = Box2D::new(Vector2::zero(), Vector2::new(100.0, 100.0)).unwrap();
        assert!(close_enough(b.bottom_left().y, 0.0));
        assert!(close_enough(b.top_left().y, 100.0));
        assert!(close_enough(b.bottom_left().x, 0.0));
        assert!(close_enough(b.bottom_right().x, 100.0));
        assert_eq!(b.center(), Vector2::new(50.0, 50.0));
    }

    #[test]
    fn box_rotation() {
        let b = Box2D::new(Vector2::zero(), Vector2::new(100.0, 100.0))
            .unwrap()
            .with_origin(Vector2::new(50.0, 50.0))
            .with_rotation(FRAC_PI_2);
        assert_eq!(b.top_left(), Vector2::new(-50.0, -50.0));
        assert_eq!(b.bottom_left(), Vector2::new(50.0, -50.0));
        assert_eq!(b.bottom_right(), Vector2::new(50.0, 50.0));
        assert_eq!(b.top_right(), Vector2::new(-50.0, 50.0));
        assert_eq!(b.center(), Vector2::zero());
        assert_eq!(
            b.points(),
            [
                Vector2::new(-50.0, -50.0),
                Vector2::new(-50.0, 50.0),
                Vector2::new(50.0, 50.0),
                Vector2::new(50.0, -50.0),
            ]
        );
    }

    #[test]
    fn box_origin() {
        let b = Box2D::new(Vector2::zero(), Vector2::new(100.0, 100.0))
            .unwrap()
            .with_origin(Vector2::new(50.0, 50.0));
        assert!(close_enough(b.bottom_left().y, -50.0));
        assert!(close_enough(b.top_left().y, 50.0));
        assert!(close_enough(b.bottom_left().x, -50.0));
        assert!(close_enough(b.bottom_right().x, 50.0));
        assert_eq!(b.center(), Vector2::zero());
    }

    #[test]
    fn box_position() {
        let b = Box2D::new(Vector2::new(-50.0, -50.0), Vector2::new(100.0, 100.0)).unwrap();
        assert!(close_enough(b.bottom_left().y, -50.0));
        assert!(close_enough(b.top_left().y, 50.0));
        assert!(close_enough(b.bottom_left().x, -50.0));
        assert!(close_enough(b.bottom_right().x, 50.0));
        assert_eq!(b.center(), Vector2::zero());
    }

    #[test]
    fn box_rejects_non_positive_size() {
        for size in [
            Vector2::new(0.0, 10.0),
            Vector2::new(10.0, 0.0),
            Vector2::new(-1.0, 10.0),
            Vector2::new(10.0, -0.5),
            Vector2::new(f64::NAN, 10.0),
        ] {
            assert!(matches!(
                Box2D::new(Vector2::zero(), size),
                Err(GeomError::Validation(_))
            ));
        }
    }

    #[test]
    fn box_set_size_revalidates() {
        let mut b = Box2D::new(Vector2::zero(), Vector2::new(1.0, 1.0)).unwrap();
        assert!(b.set_size(Vector2::new(0.0, 1.0)).is_err());
        assert_eq!(b.size(), Vector2::new(1.0, 1.0));
        b.set_size(Vector2::new(2.0, 3.0)).unwrap();
        assert_eq!(b.area(), 6.0);
    }

    // ==================== Rect ====================

    #[test]
    fn rect_dimensions() {
        let r = Rect::new(Vector2::zero(), Vector2::new(10.0, 20.0));
        assert_eq!(r.width(), 10.0);
        assert_eq!(r.height(), 20.0);
        let r = Rect::new(Vector2::new(10.0, 5.0), Vector2::new(4.0, 3.0));
        assert_eq!(r.x(), 10.0);
        assert_eq!(r.y(), 5.0);
        assert_eq!(r.x1(), 10.0);
        assert_eq!(r.y1(), 5.0);
        assert_eq!(r.x2(), 14.0);
        assert_eq!(r.y2(), 8.0);
        let r = Rect::new(Vector2::new(10.0, 5.0), Vector2::new(12.0, 30.0));
        assert_eq!(r.area(), 360.0);
        assert_eq!(r.perimeter(), 84.0);
    }

    #[test]
    fn rect_contains() {
        let r = Rect::new(Vector2::new(10.0, 5.0), Vector2::new(12.0, 30.0));
        assert!(r.contains(Vector2::new(15.0, 15.0)));
        assert!(!r.contains(Vector2::new(0.0, 0.0)));
        assert!(r.contains(Vector2::new(10.0, 5.0)));
        assert!(!r.contains(Vector2::new(22.0, 15.0)));
        assert!(!r.contains(Vector2::new(15.0, 35.0)));
    }

    #[test]
    fn rect_translate_and_scale() {
        let mut r = Rect::default();
        r.translate(Vector2::new(10.0, 5.0));
        assert_eq!(r.position, Vector2::new(10.0, 5.0));

        let mut r = Rect::new(Vector2::zero(), Vector2::new(20.0, 20.0));
        r.scale(5.0);
        assert_eq!(r.area(), 10_000.0);
        assert_eq!(r.width(), 100.0);
    }

    #[test]
    fn rect_equality() {
        let a = Rect::new(Vector2::new(10.0, 20.0), Vector2::new(30.0, 40.0));
        assert_eq!(a, Rect::new(Vector2::new(10.0, 20.0), Vector2::new(30.0, 40.0)));
        assert_ne!(a, Rect::new(Vector2::new(10.0, 15.0), Vector2::new(30.0, 40.0)));
        assert_ne!(a, Rect::new(Vector2::new(10.0, 20.0), Vector2::new(20.0, 40.0)));
    }

    #[test]
    fn rect_packing() {
        let r = Rect::new(Vector2::new(10.0, 20.0), Vector2::new(20.0, 30.0));
        let bytes = r.to_bytes().unwrap();
        assert_eq!(bytes.len(), 32);
        assert_eq!(&bytes[..16], Vector2::new(10.0, 20.0).to_bytes().unwrap());
        assert_eq!(Rect::from_bytes(&bytes).unwrap(), r);
        assert_eq!(
            Rect::default().to_bytes().unwrap().len(),
            Vector2::PACKED_LEN * 2
        );
    }

    #[test]
    fn rect_allows_negative_size() {
        let r = Rect::new(Vector2::zero(), Vector2::new(-5.0, 5.0));
        assert_eq!(r.area(), -25.0);
        assert!(!r.contains(Vector2::new(-1.0, 1.0)));
    }

    // ==================== Circle ====================

    #[test]
    fn circle_measurements() {
        let c = Circle::with_radius(5.0);
        assert_eq!(c.radius, 5.0);
        assert_eq!(c.area(), PI * 25.0);
        assert_eq!(c.diameter(), 10.0);
        let c = Circle::new(1.0, Vector2::new(10.0, 15.0));
        assert_eq!(c.position, Vector2::new(10.0, 15.0));
    }

    #[test]
    fn circle_contains() {
        let c = Circle::new(2.0, Vector2::new(3.0, 0.0));
        assert!(c.contains(Vector2::new(2.0, 1.0)));
        assert!(!c.contains(Vector2::new(0.0, 0.0)));
        assert!(!c.contains(Vector2::new(5.0, 0.0)));
    }

    #[test]
    fn circle_translate_and_scale() {
        let mut c = Circle::default();
        assert_eq!(c.radius, 1.0);
        c.translate(Vector2::new(10.0, 5.0));
        assert_eq!(c.position, Vector2::new(10.0, 5.0));
        c.translate(Vector2::new(-10.0, 5.0));
        assert_eq!(c.position, Vector2::new(0.0, 10.0));

        c.scale(5.0);
        assert_eq!(c.radius, 5.0);
        c.scale(0.2);
        assert_eq!(c.radius, 5.0 * 0.2);
    }

    #[test]
    fn circle_packing() {
        let c = Circle::new(1.0, Vector2::new(10.0, 40.0));
        let bytes = c.to_bytes().unwrap();
        assert_eq!(bytes.len(), 8 + Vector2::PACKED_LEN);
        assert_eq!(&bytes[..8], &1.0_f64.to_le_bytes());
        assert_eq!(Circle::from_bytes(&bytes).unwrap(), c);
        assert!(Circle::from_bytes(&bytes[..16]).is_err());
    }

    #[test]
    fn circle_equality() {
        let a = Circle::new(3.0, Vector2::new(2.0, 5.2));
        assert_eq!(a, Circle::new(3.0, Vector2::new(2.0, 5.2)));
        assert_ne!(a, Circle::new(3.5, Vector2::new(2.0, 5.2)));
    }

    // ==================== Line ====================

    #[test]
    fn line_length() {
        assert_eq!(Line::new(Vector2::zero(), Vector2::new(10.0, 0.0)).length(), 10.0);
        let p = Vector2::new(5.0, 10.0);
        assert_eq!(Line::new(p, p).length(), 0.0);
    }

    #[test]
    fn line_intersection() {
        let l1 = Line::new(Vector2::zero(), Vector2::new(10.0, 10.0));
        let l2 = Line::new(Vector2::new(0.0, 10.0), Vector2::new(10.0, 0.0));
        assert_eq!(l1.intersection(&l2).unwrap(), Vector2::new(5.0, 5.0));
        assert_eq!(l2.intersection(&l1).unwrap(), Vector2::new(5.0, 5.0));

        let l3 = Line::new(Vector2::new(0.0, 1.0), Vector2::new(2.0, 2.0));
        let l4 = Line::new(Vector2::new(0.0, 4.0), Vector2::new(1.0, 2.0));
        assert_eq!(l3.intersection(&l4).unwrap(), Vector2::new(1.2, 1.6));
    }

    #[test]
    fn line_intersection_unsupported() {
        let degenerate = Line::new(Vector2::zero(), Vector2::zero());
        assert!(matches!(
            degenerate.intersection(&degenerate),
            Err(GeomError::Unsupported(_))
        ));

        let vertical = Line::new(Vector2::new(1.0, 0.0), Vector2::new(1.0, 10.0));
        let other = Line::new(Vector2::new(11.0, 0.0), Vector2::new(10.0, 10.0));
        assert!(matches!(vertical.intersection(&other), Err(GeomError::Unsupported(_))));
        assert!(matches!(other.intersection(&vertical), Err(GeomError::Unsupported(_))));

        let l1 = Line::new(Vector2::zero(), Vector2::new(10.0, 10.0));
        let l2 = Line::new(Vector2::new(5.0, 5.0), Vector2::new(15.0, 15.0));
        assert!(matches!(l1.intersection(&l2), Err(GeomError::Unsupported(_))));
    }
}
