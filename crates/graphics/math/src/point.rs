use super::Vec2;

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A position in a 2D coordinate system.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2D<T = f32> {
    offset_from_origin: Vec2<T>,
}

impl<T> Point2D<T> {
    #[inline]
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self::from_offset(Vec2::new(x, y))
    }

    /// Creates the point that is displaced from the origin by `offset_from_origin`
    #[inline]
    #[must_use]
    pub const fn from_offset(offset_from_origin: Vec2<T>) -> Self {
        Self { offset_from_origin }
    }
}

impl<T: Default> Point2D<T> {
    #[inline]
    #[must_use]
    pub fn origin() -> Self {
        Self::default()
    }
}

impl<T: Copy> Point2D<T> {
    /// The displacement of `self` from the origin of the coordinate system
    #[inline]
    #[must_use]
    pub const fn offset_from_origin(&self) -> Vec2<T> {
        self.offset_from_origin
    }

    /// The displacement of `self` along the x axis
    #[inline]
    #[must_use]
    pub const fn x(&self) -> T {
        self.offset_from_origin.x
    }

    /// The displacement of `self` along the y axis
    #[inline]
    #[must_use]
    pub const fn y(&self) -> T {
        self.offset_from_origin.y
    }
}

impl Point2D<f32> {
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.offset_from_origin.is_valid()
    }
}

impl Point2D<f64> {
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.offset_from_origin.is_valid()
    }
}

impl<T: Add<Output = T>> Add<Vec2<T>> for Point2D<T> {
    type Output = Self;

    fn add(self, d: Vec2<T>) -> Self::Output {
        Self::from_offset(self.offset_from_origin + d)
    }
}

impl<T: Add<Output = T> + Neg<Output = T>> Sub<Vec2<T>> for Point2D<T> {
    type Output = Self;

    fn sub(self, d: Vec2<T>) -> Self::Output {
        Self::from_offset(self.offset_from_origin.minus(d))
    }
}

/// The displacement that leads from `rhs` to `self`
impl<T: Sub<Output = T>> Sub for Point2D<T> {
    type Output = Vec2<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.offset_from_origin - rhs.offset_from_origin
    }
}

impl<T: AddAssign> AddAssign<Vec2<T>> for Point2D<T> {
    fn add_assign(&mut self, d: Vec2<T>) {
        self.offset_from_origin += d;
    }
}

impl<T: AddAssign + Neg<Output = T>> SubAssign<Vec2<T>> for Point2D<T> {
    fn sub_assign(&mut self, d: Vec2<T>) {
        self.offset_from_origin -= d;
    }
}

impl<T> From<Vec2<T>> for Point2D<T> {
    fn from(offset_from_origin: Vec2<T>) -> Self {
        Self::from_offset(offset_from_origin)
    }
}
