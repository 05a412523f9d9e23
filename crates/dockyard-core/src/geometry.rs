#![forbid(unsafe_code)]

//! Geometric primitives in logical pixels.
//!
//! All coordinates are `f32` with the origin at the top-left corner and `y`
//! growing downwards. [`Offset`] doubles as a point and a displacement, the
//! same way the host runtime reports positions.

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A 2D displacement or position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    /// Horizontal component.
    pub dx: f32,
    /// Vertical component.
    pub dy: f32,
}

impl Offset {
    /// The zero offset.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Sentinel meaning "no value yet". Both components are `+∞`.
    pub const UNSET: Self = Self::new(f32::INFINITY, f32::INFINITY);

    /// Create a new offset.
    #[inline]
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Whether both components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.dx.is_finite() && self.dy.is_finite()
    }

    /// Whether this offset carries the [`Offset::UNSET`] sentinel (or any
    /// other non-finite component).
    #[inline]
    pub fn is_unset(&self) -> bool {
        !self.is_finite()
    }

    /// Euclidean length.
    #[inline]
    pub fn distance(&self) -> f32 {
        self.dx.hypot(self.dy)
    }

    /// Linear interpolation between `self` and `other` at `t`.
    ///
    /// `t` is not clamped; easing curves are expected to do that.
    #[inline]
    pub fn lerp(self, other: Offset, t: f32) -> Offset {
        Offset::new(
            self.dx + (other.dx - self.dx) * t,
            self.dy + (other.dy - self.dy) * t,
        )
    }

    /// Returns `Some(self)` if finite, `None` for the sentinel.
    #[inline]
    pub fn finite(self) -> Option<Offset> {
        self.is_finite().then_some(self)
    }
}

impl Add for Offset {
    type Output = Offset;

    #[inline]
    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl AddAssign for Offset {
    #[inline]
    fn add_assign(&mut self, rhs: Offset) {
        self.dx += rhs.dx;
        self.dy += rhs.dy;
    }
}

impl Sub for Offset {
    type Output = Offset;

    #[inline]
    fn sub(self, rhs: Offset) -> Offset {
        Offset::new(self.dx - rhs.dx, self.dy - rhs.dy)
    }
}

impl SubAssign for Offset {
    #[inline]
    fn sub_assign(&mut self, rhs: Offset) {
        self.dx -= rhs.dx;
        self.dy -= rhs.dy;
    }
}

impl Neg for Offset {
    type Output = Offset;

    #[inline]
    fn neg(self) -> Offset {
        Offset::new(-self.dx, -self.dy)
    }
}

impl Mul<f32> for Offset {
    type Output = Offset;

    #[inline]
    fn mul(self, rhs: f32) -> Offset {
        Offset::new(self.dx * rhs, self.dy * rhs)
    }
}

/// Width and height of a laid-out element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Width in logical pixels.
    pub width: f32,
    /// Height in logical pixels.
    pub height: f32,
}

impl Size {
    /// The empty size.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check if either dimension is zero or negative.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// An axis-aligned rectangle for layout bounds and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: f32,
    /// Top edge (inclusive).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from its top-left corner and size.
    #[inline]
    pub const fn from_origin_size(origin: Offset, size: Size) -> Self {
        Self::new(origin.dx, origin.dy, size.width, size.height)
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Offset {
        Offset::new(self.x, self.y)
    }

    /// Dimensions.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> Offset {
        Offset::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    /// Check if a point is inside the rectangle (right/bottom exclusive).
    #[inline]
    pub fn contains(&self, point: Offset) -> bool {
        point.dx >= self.x
            && point.dx < self.right()
            && point.dy >= self.y
            && point.dy < self.bottom()
    }

    /// The same rectangle moved by `offset`.
    #[inline]
    pub fn translate(&self, offset: Offset) -> Rect {
        Rect::new(
            self.x + offset.dx,
            self.y + offset.dy,
            self.width,
            self.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_is_not_finite() {
        assert!(Offset::UNSET.is_unset());
        assert!(!Offset::ZERO.is_unset());
        assert_eq!(Offset::UNSET.finite(), None);
        assert_eq!(Offset::new(1.0, 2.0).finite(), Some(Offset::new(1.0, 2.0)));
    }

    #[test]
    fn offset_arithmetic() {
        let a = Offset::new(3.0, 4.0);
        let b = Offset::new(1.0, -1.0);
        assert_eq!(a + b, Offset::new(4.0, 3.0));
        assert_eq!(a - b, Offset::new(2.0, 5.0));
        assert_eq!(-a, Offset::new(-3.0, -4.0));
        assert_eq!(a * 2.0, Offset::new(6.0, 8.0));
        assert!((a.distance() - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn offset_assign_ops() {
        let mut a = Offset::new(1.0, 1.0);
        a += Offset::new(2.0, 3.0);
        assert_eq!(a, Offset::new(3.0, 4.0));
        a -= Offset::new(3.0, 4.0);
        assert_eq!(a, Offset::ZERO);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Offset::new(0.0, 10.0);
        let b = Offset::new(100.0, -10.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Offset::new(50.0, 0.0));
    }

    #[test]
    fn unset_minus_finite_stays_unset() {
        let raw = Offset::UNSET - Offset::new(64.0, 0.0);
        assert!(raw.is_unset());
    }

    #[test]
    fn rect_edges_and_contains() {
        let r = Rect::new(10.0, 20.0, 64.0, 64.0);
        assert_eq!(r.right(), 74.0);
        assert_eq!(r.bottom(), 84.0);
        assert_eq!(r.center(), Offset::new(42.0, 52.0));
        assert!(r.contains(Offset::new(10.0, 20.0)));
        assert!(!r.contains(Offset::new(74.0, 20.0)));
        assert!(!r.contains(Offset::new(9.9, 50.0)));
    }

    #[test]
    fn rect_translate_keeps_size() {
        let r = Rect::new(0.0, 0.0, 64.0, 64.0).translate(Offset::new(64.0, -8.0));
        assert_eq!(r.origin(), Offset::new(64.0, -8.0));
        assert_eq!(r.size(), Size::new(64.0, 64.0));
    }

    #[test]
    fn rect_empty() {
        assert!(Rect::new(0.0, 0.0, 0.0, 10.0).is_empty());
        assert!(!Rect::from_origin_size(Offset::ZERO, Size::new(1.0, 1.0)).is_empty());
        assert!(Size::ZERO.is_empty());
    }
}
