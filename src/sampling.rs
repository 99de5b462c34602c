//! Uniform sampling of a curve into a fixed capacity polyline.

use core::slice;

use num_traits::{Float, NumCast, One, Zero};
use tinyvec::TinyVec;

use super::*;
use super::point::{Point, PointNorm};
use super::spline::Spline;
use super::CurveError;

/// Number of samples stored inline. Larger sample counts spill to the heap.
pub const INLINE_SAMPLES: usize = 256;

/// Iterate over `steps` parameters evenly spaced over `[0, 1]`, both ends included.
/// A single step yields just `0`.
pub fn linspace<F: Float>(steps: usize) -> impl Iterator<Item = F> {
    let last = steps.saturating_sub(1);
    let denominator = <F as NumCast>::from(last.max(1)).unwrap_or_else(F::one);
    (0..steps).map(move |i| {
        if i == last && last > 0 {
            F::one()
        } else {
            <F as NumCast>::from(i).unwrap_or_else(F::zero) / denominator
        }
    })
}

/// The polyline obtained by evaluating a curve at `steps` uniformly spaced
/// parameters. Up to `INLINE_SAMPLES` points are stored inline, so resampling
/// on every redraw does not allocate for the usual step counts.
#[derive(Clone, Debug, PartialEq)]
pub struct SampledCurve<P: Point> {
    points: TinyVec<[P; INLINE_SAMPLES]>,
}

impl<P> SampledCurve<P>
where
    P: Point,
{
    /// Evaluate `curve` at `steps` parameters from `linspace`.
    /// Fails if `steps` is zero.
    pub fn sample<S>(curve: &S, steps: usize) -> Result<Self, CurveError>
    where
        S: Spline<P> + ?Sized,
    {
        let mut sampled = SampledCurve {
            points: TinyVec::new(),
        };
        sampled.resample(curve, steps)?;
        Ok(sampled)
    }

    /// Recompute all points from scratch, reusing the storage.
    pub fn resample<S>(&mut self, curve: &S, steps: usize) -> Result<(), CurveError>
    where
        S: Spline<P> + ?Sized,
    {
        if steps == 0 {
            return Err(CurveError::InvalidSampleCount { steps });
        }
        self.points.clear();
        self.points.reserve(steps);
        for t in linspace::<P::Scalar>(steps) {
            self.points.push(curve.eval(t));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[P] {
        self.points.as_slice()
    }

    pub fn iter(&self) -> slice::Iter<'_, P> {
        self.points.iter()
    }

    pub fn first(&self) -> Option<P> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<P> {
        self.points.last().copied()
    }

    /// Approximates the arc length of the curve by summing the straight line
    /// pieces between consecutive samples.
    pub fn arclen(&self) -> P::Scalar
    where
        P: PointNorm,
    {
        self.points
            .windows(2)
            .fold(P::Scalar::zero(), |len, pair| len + pair[0].distance(pair[1]))
    }
}

impl<'a, P: Point> IntoIterator for &'a SampledCurve<P> {
    type Item = &'a P;
    type IntoIter = slice::Iter<'a, P>;

    fn into_iter(self) -> slice::Iter<'a, P> {
        self.points.iter()
    }
}
