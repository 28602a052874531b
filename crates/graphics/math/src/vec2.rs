use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Generate a trait impl for an operation involving two [Vec2]s, like [Add] or [Sub]
macro_rules! impl_bin_op {
    ($trait: ident, $fn: ident, $op: tt) => {
        impl<T: $trait<T, Output = T>> $trait for Vec2<T> {
            type Output = Vec2<T>;

            fn $fn(self, rhs: Self) -> Self::Output {
                Self {
                    x: self.x $op rhs.x,
                    y: self.y $op rhs.y,
                }
            }
        }
    };
}

/// Generate a trait impl for scaling a [Vec2] by a value of its component type
macro_rules! impl_scalar_op {
    ($trait: ident, $fn: ident, $op: tt) => {
        impl<T: $trait<T, Output = T> + Copy> $trait<T> for Vec2<T> {
            type Output = Vec2<T>;

            fn $fn(self, rhs: T) -> Self::Output {
                Self {
                    x: self.x $op rhs,
                    y: self.y $op rhs,
                }
            }
        }
    };
}

/// Generate `is_valid` for floating point displacements
macro_rules! impl_validity {
    ($float: ty) => {
        impl Vec2<$float> {
            /// Returns `true` if neither component is NaN or infinite
            #[inline]
            #[must_use]
            pub fn is_valid(&self) -> bool {
                self.x.is_finite() && self.y.is_finite()
            }
        }
    };
}

/// A displacement in a cartesian coordinate system.
///
/// A [Vec2] describes an offset, not a position. Positions are
/// [Point2D](crate::Point2D)s.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2<T = f32> {
    pub x: T,
    pub y: T,
}

impl<T> Vec2<T> {
    #[inline]
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Add<Output = T>> Vec2<T> {
    /// Returns `self` offset by `d`
    #[inline]
    #[must_use]
    pub fn plus(self, d: Self) -> Self {
        self + d
    }
}

impl<T: Neg<Output = T>> Vec2<T> {
    /// Returns the negation of `self`
    #[inline]
    #[must_use]
    pub fn negated(self) -> Self {
        -self
    }
}

impl<T: Neg<Output = T> + Copy> Vec2<T> {
    /// Replaces `self` by its negation
    #[inline]
    pub fn negate(&mut self) {
        *self = self.negated();
    }
}

impl<T: Add<Output = T> + Neg<Output = T>> Vec2<T> {
    /// Returns `self` offset by the negation of `d`
    ///
    /// `self` is taken by value, the receiver is left untouched.
    #[inline]
    #[must_use]
    pub fn minus(self, d: Self) -> Self {
        self.plus(d.negated())
    }
}

impl_validity!(f32);
impl_validity!(f64);

impl_bin_op!(Add, add, +);
impl_bin_op!(Sub, sub, -);

impl_scalar_op!(Mul, mul, *);
impl_scalar_op!(Div, div, /);

impl<T: Neg<Output = T>> Neg for Vec2<T> {
    type Output = Vec2<T>;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T: AddAssign> AddAssign for Vec2<T> {
    /// Offsets `self` by `d`
    fn add_assign(&mut self, d: Self) {
        self.x += d.x;
        self.y += d.y;
    }
}

impl<T: AddAssign + Neg<Output = T>> SubAssign for Vec2<T> {
    /// Offsets `self` by the negation of `d`
    fn sub_assign(&mut self, d: Self) {
        *self += d.negated();
    }
}

impl<T> From<[T; 2]> for Vec2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Vec2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> From<Vec2<T>> for [T; 2] {
    fn from(value: Vec2<T>) -> Self {
        [value.x, value.y]
    }
}
