use core::fmt;
use core::ops::{Index, IndexMut, Neg};

use num_traits::Float;

use super::*;
use super::point::{Point, PointNorm};

/// A point (or vector) in the plane with coordinates of type `T`.
///
/// Replaces coordinate arrays with broadcasting arithmetic: every operation is
/// spelled out per component.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Point2 { x, y }
    }
}

impl<T: Float> Point2<T> {
    /// Componentwise check that both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<T> Add for Point2<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, other: Point2<T>) -> Point2<T> {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T> Sub for Point2<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T> Mul<T> for Point2<T>
where
    T: Mul<T, Output = T> + Copy,
{
    type Output = Point2<T>;

    fn mul(self, rhs: T) -> Point2<T> {
        Point2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<T> Neg for Point2<T>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self {
        Point2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T> Index<usize> for Point2<T> {
    type Output = T;

    fn index(&self, axis: usize) -> &T {
        match axis {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Point2 has no axis {}", axis),
        }
    }
}

impl<T> IndexMut<usize> for Point2<T> {
    fn index_mut(&mut self, axis: usize) -> &mut T {
        match axis {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Point2 has no axis {}", axis),
        }
    }
}

impl<T> From<[T; 2]> for Point2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Point2 { x, y }
    }
}

impl<T> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        Point2 { x, y }
    }
}

impl<T> From<Point2<T>> for [T; 2] {
    fn from(p: Point2<T>) -> Self {
        [p.x, p.y]
    }
}

/// Formats as a coordinate pair literal, e.g. `[0.2, 1]`.
impl<T: fmt::Display> fmt::Display for Point2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

impl<T> Point for Point2<T>
where
    T: Float + Default + fmt::Debug,
{
    type Scalar = T;
    const DIM: usize = 2;
}

impl<T> PointNorm for Point2<T>
where
    T: Float + Default + fmt::Debug,
{
    fn squared_norm(&self) -> T {
        self.x * self.x + self.y * self.y
    }
}
