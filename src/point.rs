use core::fmt::Debug;
use core::ops::Index;

use num_traits::{Float, One};

use super::*;

/// Trait defined over generic points P whose coordinates are of type `Scalar`.
/// Many libraries already provide point types and the arithmetic that curves
/// need, so implementing it is mostly wrapping.
/// Keeping the trait as minimal as possible to make integration with other libraries easy.
pub trait Point:
    Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<<Self as Point>::Scalar, Output = Self>
    + Copy
    + PartialEq
    + Default
    + Debug
{
    type Scalar: Float + Default + Debug;

    /// Number of coordinate axes.
    const DIM: usize;
}

/// Component access by axis index, e.g. `[0, 1] -> [x, y]`.
pub trait PointIndex: Point + Index<usize, Output = <Self as Point>::Scalar> {}

impl<P> PointIndex for P where P: Point + Index<usize, Output = <P as Point>::Scalar> {}

/// Euclidean norms of a point interpreted as a vector.
pub trait PointNorm: Point {
    fn squared_norm(&self) -> Self::Scalar;

    fn norm(&self) -> Self::Scalar {
        self.squared_norm().sqrt()
    }

    /// Distance between `self` and `other`.
    fn distance(&self, other: Self) -> Self::Scalar {
        (*self - other).norm()
    }
}

/// Linear interpolation `a * (1 - t) + b * t`, computed per coordinate.
///
/// `t` is not clamped, values outside of `[0, 1]` extrapolate along the line
/// through `a` and `b`.
#[inline]
pub fn lerp<P: Point>(a: P, b: P, t: P::Scalar) -> P {
    a * (P::Scalar::one() - t) + b * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        let pairs = [
            (Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)),
            (Point2::new(-3.5, 1.77), Point2::new(4.3, -2.0)),
            (Point2::new(1e6, -1e-6), Point2::new(-7.0, 0.25)),
        ];
        for (a, b) in pairs {
            assert_eq!(lerp(a, b, 0.0), a);
            assert_eq!(lerp(a, b, 1.0), b);
        }
    }

    #[test]
    fn lerp_midpoint_and_extrapolation() {
        let a = Point2::new(0.0, 2.0);
        let b = Point2::new(4.0, -2.0);
        assert!((lerp(a, b, 0.5) - Point2::new(2.0, 0.0)).squared_norm() < EPSILON);
        // no clamping: t = 2 lands one full step beyond b
        assert!((lerp(a, b, 2.0) - Point2::new(8.0, -6.0)).squared_norm() < EPSILON);
        assert!((lerp(a, b, -1.0) - Point2::new(-4.0, 6.0)).squared_norm() < EPSILON);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        approx::assert_relative_eq!(a.distance(b), 5.0);
        approx::assert_relative_eq!(b.distance(a), 5.0);
    }
}
