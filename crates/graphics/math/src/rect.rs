use super::{Point2D, Vec2};

use std::ops;

/// A rectangle in a cartesian coordinate system with sides parallel to the axes
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect<T = f32> {
    top_left: Point2D<T>,
    bottom_right: Point2D<T>,
}

impl<T> Rect<T> {
    #[must_use]
    pub const fn from_corners(top_left: Point2D<T>, bottom_right: Point2D<T>) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }
}

impl<T> Rect<T>
where
    T: Copy,
{
    pub const fn top_left(&self) -> Point2D<T> {
        self.top_left
    }

    pub const fn top_right(&self) -> Point2D<T> {
        Point2D::new(self.bottom_right.x(), self.top_left.y())
    }

    pub const fn bottom_left(&self) -> Point2D<T> {
        Point2D::new(self.top_left.x(), self.bottom_right.y())
    }

    pub const fn bottom_right(&self) -> Point2D<T> {
        self.bottom_right
    }
}

impl<T> Rect<T>
where
    T: ops::Add<Output = T> + ops::Sub<Output = T> + Copy,
{
    pub fn from_position_and_size(top_left: Point2D<T>, width: T, height: T) -> Self {
        Self {
            top_left,
            bottom_right: top_left + Vec2::new(width, height),
        }
    }

    /// Returns `self` translated by `offset`, keeping its size
    #[must_use]
    pub fn offset_by(&self, offset: Vec2<T>) -> Self {
        Self::from_position_and_size(self.top_left + offset, self.width(), self.height())
    }

    pub fn width(&self) -> T {
        self.bottom_right.x() - self.top_left.x()
    }

    pub fn height(&self) -> T {
        self.bottom_right.y() - self.top_left.y()
    }
}

impl<T> Rect<T>
where
    T: PartialOrd + Copy,
{
    /// Returns `true` if `point` lies inside `self` or on its border
    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: Point2D<T>) -> bool {
        (self.top_left.x()..=self.bottom_right.x()).contains(&point.x())
            && (self.top_left.y()..=self.bottom_right.y()).contains(&point.y())
    }
}

impl Rect<f32> {
    /// Returns `true` if no coordinate of either corner is NaN or infinite
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.top_left.is_valid() && self.bottom_right.is_valid()
    }
}

impl Rect<f64> {
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.top_left.is_valid() && self.bottom_right.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::{Point2D, Rect, Vec2};

    #[test]
    fn corners() {
        let rect = Rect::from_corners(Point2D::new(1, 2), Point2D::new(4, 6));

        assert_eq!(rect.top_left(), Point2D::new(1, 2));
        assert_eq!(rect.top_right(), Point2D::new(4, 2));
        assert_eq!(rect.bottom_left(), Point2D::new(1, 6));
        assert_eq!(rect.bottom_right(), Point2D::new(4, 6));
    }

    #[test]
    fn size() {
        let rect = Rect::from_position_and_size(Point2D::new(1., 1.), 3., 2.);

        assert_eq!(rect.width(), 3.);
        assert_eq!(rect.height(), 2.);
        assert_eq!(rect.bottom_right(), Point2D::new(4., 3.));
    }

    #[test]
    fn offset_by() {
        let rect = Rect::from_corners(Point2D::new(0, 0), Point2D::new(2, 3));
        let moved = rect.offset_by(Vec2::new(-1, 5));

        assert_eq!(moved.top_left(), Point2D::new(-1, 5));
        assert_eq!(moved.bottom_right(), Point2D::new(1, 8));
        assert_eq!(moved.width(), rect.width());
        assert_eq!(moved.height(), rect.height());
    }

    #[test]
    fn contains_point() {
        let rect = Rect::from_corners(Point2D::new(0., 0.), Point2D::new(1., 1.));

        assert!(rect.contains_point(Point2D::new(0.5, 0.5)));

        // The border is part of the rectangle
        assert!(rect.contains_point(Point2D::new(1., 0.)));

        assert!(!rect.contains_point(Point2D::new(1.5, 0.5)));
        assert!(!rect.contains_point(Point2D::new(0.5, f32::NAN)));
    }

    #[test]
    fn validity() {
        let valid = Rect::<f32>::from_corners(Point2D::new(0., 0.), Point2D::new(1., 1.));
        let invalid = Rect::from_corners(Point2D::new(0., 0.), Point2D::new(f32::INFINITY, 1.));

        assert!(valid.is_valid());
        assert!(!invalid.is_valid());
    }
}
