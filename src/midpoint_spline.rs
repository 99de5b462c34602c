//! Piecewise quadratic spline through the midpoints of a control path.

use core::slice;

use num_traits::{One, Zero};

use super::*;
use super::point::{lerp, Point};
use super::segment::segment_parameter;
use super::spline::Spline;
use super::{CurveError, QuadraticBezier};

/// Minimum number of control points needed to form one segment.
pub const MIN_CONTROL_POINTS: usize = 3;

/// A smooth path built from quadratic Bezier segments, one per interior control point.
///
/// Segment `i` starts at the midpoint of `points[i]` and `points[i + 1]`, ends at
/// the midpoint of `points[i + 1]` and `points[i + 2]` and uses `points[i + 1]`
/// as its single interior control. The curve therefore passes through the
/// midpoints of the control path (not the control points themselves) and
/// adjacent segments share their endpoints.
///
/// Generic parameters:
/// P: Generic points 'P' as defined by their Point trait
/// const generic parameters:
/// N: Capacity for control points
///
/// # Examples
/// ```rust
/// use curve_editor::{MidpointSpline, Point2};
///
/// let spline: MidpointSpline<Point2<f64>, 4> = MidpointSpline::from_slice(&[
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ])
/// .unwrap();
///
/// assert_eq!(spline.segment_count(), 2);
/// assert_eq!(spline.eval(0.0), Point2::new(1.0, 0.0));
/// assert_eq!(spline.eval(1.0), Point2::new(1.0, 2.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MidpointSpline<P, const N: usize>
where
    P: Point,
    [P; N]: tinyvec::Array<Item = P>,
{
    control_points: ArrayVec<[P; N]>,
}

impl<P, const N: usize> MidpointSpline<P, N>
where
    P: Point,
    [P; N]: tinyvec::Array<Item = P>,
{
    /// Create a spline over a copy of `points`.
    /// Fails if there are fewer than three points or more than the capacity `N`.
    pub fn from_slice(points: &[P]) -> Result<Self, CurveError> {
        if points.len() < MIN_CONTROL_POINTS {
            return Err(CurveError::TooFewControlPoints {
                minimum: MIN_CONTROL_POINTS,
                found: points.len(),
            });
        }
        if points.len() > N {
            return Err(CurveError::CapacityExceeded {
                capacity: N,
                found: points.len(),
            });
        }

        let mut control_points = ArrayVec::new();
        control_points.extend_from_slice(points);
        Ok(MidpointSpline { control_points })
    }

    /// Returns an iterator over the control points.
    pub fn control_points(&self) -> slice::Iter<'_, P> {
        self.control_points.iter()
    }

    /// Return the number of control points.
    pub fn len(&self) -> usize {
        self.control_points.len()
    }

    /// Never true for a constructed spline, provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.control_points.is_empty()
    }

    /// Number of quadratic segments, two less than the number of control points.
    pub fn segment_count(&self) -> usize {
        self.control_points.len() - 2
    }

    /// Return the quadratic Bezier segment at `index`, or None if out of range.
    pub fn segment(&self, index: usize) -> Option<QuadraticBezier<P>> {
        if index >= self.segment_count() {
            return None;
        }
        let half = P::Scalar::one() / (P::Scalar::one() + P::Scalar::one());
        let pl = self.control_points[index];
        let pm = self.control_points[index + 1];
        let pr = self.control_points[index + 2];
        Some(QuadraticBezier::new(lerp(pl, pm, half), pm, lerp(pm, pr, half)))
    }

    /// Iterate over all segments in path order.
    pub fn segments(&self) -> impl Iterator<Item = QuadraticBezier<P>> + '_ {
        (0..self.segment_count()).filter_map(move |index| self.segment(index))
    }

    /// Evaluate a point along the path for `t` in `[0, 1]`.
    /// Values outside the range are clamped to the path ends.
    pub fn eval(&self, t: P::Scalar) -> P {
        let (local_t, index) = segment_parameter(t, self.segment_count());
        // segment_parameter only returns indices below segment_count() (which is >= 1)
        match self.segment(index) {
            Some(segment) => segment.eval(local_t),
            None => self.control_points[0],
        }
    }

    /// Return the start point of the path, the midpoint of the first two control points.
    pub fn start(&self) -> P {
        self.eval(P::Scalar::zero())
    }

    /// Return the end point of the path, the midpoint of the last two control points.
    pub fn end(&self) -> P {
        self.eval(P::Scalar::one())
    }
}

impl<P, const N: usize> Spline<P> for MidpointSpline<P, N>
where
    P: Point,
    [P; N]: tinyvec::Array<Item = P>,
{
    fn eval(&self, t: P::Scalar) -> P {
        MidpointSpline::eval(self, t)
    }

    fn control_points(&self) -> &[P] {
        self.control_points.as_slice()
    }

    fn control_points_mut(&mut self) -> &mut [P] {
        self.control_points.as_mut_slice()
    }
}
