use num_traits::One;

use super::*;
use super::line::LineSegment;
use super::point::{lerp, Point};

/// A quadratic Bezier curve defined by three points: the starting point, a
/// single control point and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * start + 2 * (1 - t) * t * ctrl + t² * end```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadraticBezier<P> {
    pub(crate) start: P,
    pub(crate) ctrl: P,
    pub(crate) end: P,
}

impl<P> QuadraticBezier<P>
where
    P: Point,
{
    pub fn new(start: P, ctrl: P, end: P) -> Self {
        QuadraticBezier { start, ctrl, end }
    }

    pub fn start(&self) -> P {
        self.start
    }

    pub fn ctrl(&self) -> P {
        self.ctrl
    }

    pub fn end(&self) -> P {
        self.end
    }

    /// Evaluate the curve at t using De Casteljau's algorithm (two levels of lerp)
    pub fn eval(&self, t: P::Scalar) -> P {
        // _1ab is the first iteration from first (a) to second (b) control point and so on
        let ctrl_1ab = lerp(self.start, self.ctrl, t);
        let ctrl_1bc = lerp(self.ctrl, self.end, t);
        // second iteration, final point on the curve
        lerp(ctrl_1ab, ctrl_1bc, t)
    }

    /// Return the derivative function.
    /// The derivative is also a bezier curve but of degree n-1 - In the case of quadratic it is just a line.
    /// Since it returns the derivative function, eval() needs to be called separately
    pub fn derivative(&self) -> LineSegment<P> {
        let two = P::Scalar::one() + P::Scalar::one();
        LineSegment {
            start: (self.ctrl - self.start) * two,
            end: (self.end - self.ctrl) * two,
        }
    }
}
