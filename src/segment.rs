//! Mapping of a global curve parameter onto the segments of a piecewise curve.

use num_traits::{Float, NumCast, One, Zero};

use super::*;

/// Split the global parameter `value` of a curve made of `count` equally
/// weighted segments into `(local_t, segment_index)`.
///
/// Global `[0, 1]` is divided into `count` sub-intervals, each mapped back onto
/// local `[0, 1]`. Out of range input is clamped instead of rejected:
/// - `value < 0` or `count == 0` yields `(0, 0)`, the start of the first segment
/// - `value > 1`, or `value * count` landing on `count` (i.e. `value == 1`),
///   yields `(1, count - 1)`, the end of the last segment
///
/// A NaN `value` passes both checks and comes back as `(NaN, 0)`.
///
/// ```rust
/// use curve_editor::segment_parameter;
///
/// assert_eq!(segment_parameter(0.0, 4), (0.0, 0));
/// assert_eq!(segment_parameter(1.0, 4), (1.0, 3));
/// assert_eq!(segment_parameter(0.625, 4), (0.5, 2));
/// ```
pub fn segment_parameter<F: Float>(value: F, count: usize) -> (F, usize) {
    if value < F::zero() || count == 0 {
        return (F::zero(), 0);
    }

    let count_scalar = <F as NumCast>::from(count).unwrap_or_else(F::infinity);
    let scaled = value * count_scalar;
    let floor = scaled.floor();
    let index = num_traits::cast::<F, usize>(floor).unwrap_or(0);
    if value > F::one() || index == count {
        return (F::one(), count - 1);
    }

    (scaled - floor, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn endpoints() {
        for count in 1..=32 {
            assert_eq!(segment_parameter(0.0f64, count), (0.0, 0));
            assert_eq!(segment_parameter(1.0f64, count), (1.0, count - 1));
        }
    }

    #[test]
    fn interior_values_select_their_segment() {
        let nsteps = 997;
        for count in 1..=12 {
            for i in 1..nsteps {
                let value = i as f64 / nsteps as f64;
                let (local, index) = segment_parameter(value, count);
                let lower = index as f64 / count as f64;
                let upper = (index + 1) as f64 / count as f64;
                assert!(index < count);
                assert!(lower <= value && value < upper, "{} not in [{}, {})", value, lower, upper);
                assert!((0.0..1.0).contains(&local));
                assert_relative_eq!(lower + local / count as f64, value, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn strictly_between_boundaries() {
        // strictly between k/4 and (k+1)/4
        assert_eq!(segment_parameter(0.1, 4).1, 0);
        assert_eq!(segment_parameter(0.3, 4).1, 1);
        assert_eq!(segment_parameter(0.6, 4).1, 2);
        assert_eq!(segment_parameter(0.9, 4).1, 3);
        let (local, index) = segment_parameter(0.625f64, 4);
        assert_eq!(index, 2);
        assert_relative_eq!(local, 0.5);
    }

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(segment_parameter(-0.5f64, 4), (0.0, 0));
        assert_eq!(segment_parameter(1.5f64, 4), (1.0, 3));
        assert_eq!(segment_parameter(f64::INFINITY, 4), (1.0, 3));
        assert_eq!(segment_parameter(f64::NEG_INFINITY, 4), (0.0, 0));
    }

    #[test]
    fn zero_segments() {
        for value in [-1.0f64, 0.0, 0.5, 1.0, 7.0] {
            assert_eq!(segment_parameter(value, 0), (0.0, 0));
        }
    }

    #[test]
    fn single_segment_is_identity() {
        for value in [0.0f32, 0.25, 0.5, 0.75] {
            assert_eq!(segment_parameter(value, 1), (value, 0));
        }
        assert_eq!(segment_parameter(1.0f32, 1), (1.0, 0));
    }

    #[test]
    fn nan_falls_through() {
        let (local, index) = segment_parameter(f64::NAN, 3);
        assert!(local.is_nan());
        assert_eq!(index, 0);
    }
}
