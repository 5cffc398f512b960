//! Sizes, vectors and axes in viewport coordinates.
//!
//! Everything is `f64`: gesture input arrives in fractional points and the
//! scale ratio is continuous, so integer pixel geometry would lose precision
//! on every callback.

use core::ops::{Add, AddAssign, Mul, Neg, Sub};

use num_traits::Float;

/// One of the two layout axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Width / x.
    Horizontal,
    /// Height / y.
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const BOTH: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];
}

/// Width × height in points.
///
/// Used for image intrinsic sizes, viewport sizes and derived display sizes.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in points.
    pub width: f64,
    /// Height in points.
    pub height: f64,
}

impl Size {
    /// The empty size.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Extent along `axis`.
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Both dimensions multiplied by `factor`.
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }

    /// Finite and strictly positive on both axes.
    pub fn is_valid(&self) -> bool {
        Float::is_finite(self.width)
            && Float::is_finite(self.height)
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// A 2D vector in viewport coordinates.
///
/// Offsets are measured from the viewport center to the displayed image
/// center; drag translations are finger movement since gesture start.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new vector.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component along `axis`.
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Copy with the component along `axis` replaced.
    pub fn with(mut self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::Horizontal => self.x = value,
            Axis::Vertical => self.y = value,
        }
        self
    }

    /// Both components finite.
    pub fn is_finite(&self) -> bool {
        Float::is_finite(self.x) && Float::is_finite(self.y)
    }

    /// Componentwise `|a - b| <= epsilon`.
    pub fn approx_eq(&self, other: Vec2, epsilon: f64) -> bool {
        Float::abs(self.x - other.x) <= epsilon && Float::abs(self.y - other.y) <= epsilon
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}
