use num_traits::One;

use super::*;
use super::point::{lerp, Point};
use super::spline::Spline;
use super::{CurveError, QuadraticBezier};

/// A 2d cubic Bezier curve defined by four points: the starting point, two successive
/// control points and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * start + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * end```
///
/// The points are stored as `[start, ctrl1, ctrl2, end]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier<P> {
    pub(crate) control_points: [P; 4],
}

impl<P> CubicBezier<P>
where
    P: Point,
{
    pub fn new(start: P, ctrl1: P, ctrl2: P, end: P) -> Self {
        CubicBezier {
            control_points: [start, ctrl1, ctrl2, end],
        }
    }

    /// Build a curve from a control path, which must hold exactly four points.
    pub fn from_slice(points: &[P]) -> Result<Self, CurveError> {
        match *points {
            [start, ctrl1, ctrl2, end] => Ok(CubicBezier::new(start, ctrl1, ctrl2, end)),
            _ => Err(CurveError::WrongControlCount {
                expected: 4,
                found: points.len(),
            }),
        }
    }

    pub fn start(&self) -> P {
        self.control_points[0]
    }

    pub fn end(&self) -> P {
        self.control_points[3]
    }

    pub fn control_points(&self) -> [P; 4] {
        self.control_points
    }

    /// Evaluate a CubicBezier curve at t using the numerically stable De Casteljau algorithm.
    /// `t` is not clamped: outside of [0,1] the curve extrapolates beyond the
    /// convex hull of its control points.
    pub fn eval(&self, t: P::Scalar) -> P {
        let [start, ctrl1, ctrl2, end] = self.control_points;
        // unrolled de casteljau algorithm
        // _1ab is the first iteration from first (a) to second (b) control point and so on
        let ctrl_1ab = lerp(start, ctrl1, t);
        let ctrl_1bc = lerp(ctrl1, ctrl2, t);
        let ctrl_1cd = lerp(ctrl2, end, t);
        // second iteration
        let ctrl_2ab = lerp(ctrl_1ab, ctrl_1bc, t);
        let ctrl_2bc = lerp(ctrl_1bc, ctrl_1cd, t);
        // third iteration, final point on the curve
        lerp(ctrl_2ab, ctrl_2bc, t)
    }

    /// Return the derivative function (the velocity of the curve).
    /// The derivative is also a bezier curve but of degree n-1 (cubic->quadratic),
    /// its derivative in turn is the acceleration, a line.
    /// Since it returns the derivative function, eval() needs to be called separately
    pub fn derivative(&self) -> QuadraticBezier<P> {
        let [start, ctrl1, ctrl2, end] = self.control_points;
        let three = P::Scalar::one() + P::Scalar::one() + P::Scalar::one();
        QuadraticBezier {
            start: (ctrl1 - start) * three,
            ctrl: (ctrl2 - ctrl1) * three,
            end: (end - ctrl2) * three,
        }
    }
}

impl<P> Spline<P> for CubicBezier<P>
where
    P: Point,
{
    fn eval(&self, t: P::Scalar) -> P {
        CubicBezier::eval(self, t)
    }

    fn control_points(&self) -> &[P] {
        &self.control_points
    }

    fn control_points_mut(&mut self) -> &mut [P] {
        &mut self.control_points
    }
}

impl<P: Point> TryFrom<&[P]> for CubicBezier<P> {
    type Error = CurveError;

    fn try_from(points: &[P]) -> Result<Self, Self::Error> {
        CubicBezier::from_slice(points)
    }
}
