use super::*;
use super::point::{lerp, Point};

/// LineSegment defined by a start and an endpoint, evaluatable
/// anywhere inbetween using interpolation parameter t: [0,1] in eval().
/// A LineSegment is equal to a linear Bezier curve. The editors meet it as the
/// derivative of a quadratic segment, i.e. the acceleration of a cubic curve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineSegment<P> {
    pub(crate) start: P,
    pub(crate) end: P,
}

impl<P> LineSegment<P>
where
    P: Point,
{
    pub fn new(start: P, end: P) -> Self {
        LineSegment { start, end }
    }

    pub fn start(&self) -> P {
        self.start
    }

    pub fn end(&self) -> P {
        self.end
    }

    pub fn eval(&self, t: P::Scalar) -> P {
        lerp(self.start, self.end, t)
    }

    /// Return the derivative, which for a line is the constant vector from start to end.
    pub fn derivative(&self) -> P {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::PointNorm;

    /// Check whether a line segment interpolation p + t*(q-p) at t=0.5
    /// yields equal distance to the start (p)/end (q) points (up to machine accuracy).
    #[test]
    fn line_segment_interpolation() {
        let line = LineSegment::new(Point2::new(0f64, 1.77f64), Point2::new(4.3f64, 3f64));

        let mid = line.eval(0.5);
        assert!(
            ((mid - line.start).squared_norm() - (mid - line.end).squared_norm()).abs() < EPSILON
        )
    }

    #[test]
    fn line_segment_derivative() {
        let line = LineSegment::new(Point2::new(0f64, 0f64), Point2::new(4f64, 2f64));
        assert!((line.eval(0.25) - Point2::new(1.0, 0.5)).squared_norm() < EPSILON);
        assert_eq!(line.derivative(), Point2::new(4.0, 2.0));
    }
}
