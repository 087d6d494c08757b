//! `arange` with **inclusive** endpoints.
//!
//! * All-integral input within ±2^53 is stepped with exact `i64` arithmetic
//!   and the bound is pushed one unit past `max`, so `max` is hit whenever the
//!   step lands on it.
//! * Anything else is stepped in `f64` with the bound pushed by `step / 2`.
//!   Accumulated round-off could otherwise drop or duplicate the endpoint;
//!   this is a tolerance, not an exact-inclusion guarantee.

use ndarray::Array1;

use crate::core::error::{FigError, Result};

/// Largest magnitude below which every integer is exact in `f64`.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Integral and small enough to step exactly in `i64`.
#[inline]
fn is_integral(v: f64) -> bool {
    v.fract() == 0.0 && v.abs() <= MAX_EXACT_INT
}

/// Inclusive range in the shape of `numpy.arange(min, *rest)`.
///
/// * `arange(max, &[])` counts `0..=max`
/// * `arange(min, &[max])` counts `min..=max`
/// * `arange(min, &[max, step])` steps from `min` to `max` inclusive
#[allow(clippy::cast_possible_truncation)]
pub fn arange(min: f64, rest: &[f64]) -> Result<Array1<f64>> {
    let (start, stop, step) = match *rest {
        [] => (0.0, min, 1.0),
        [max] => (min, max, 1.0),
        [max, step] => (min, max, step),
        _ => return Err(FigError::InvalidArity { got: rest.len() + 1 }),
    };

    let finite = start.is_finite() && stop.is_finite() && step.is_finite();
    if !finite || step == 0.0 {
        return Err(FigError::InvalidStep {
            min: start,
            max: stop,
            step,
        });
    }

    if is_integral(start) && is_integral(stop) && is_integral(step) {
        Ok(integer_range(start as i64, stop as i64, step as i64))
    } else {
        Ok(float_range(start, stop, step))
    }
}

/// `0..=max`, step 1.
pub fn arange_to(max: f64) -> Result<Array1<f64>> {
    arange(max, &[])
}

/// `min..=max`, step 1.
pub fn arange_between(min: f64, max: f64) -> Result<Array1<f64>> {
    arange(min, &[max])
}

/// `min..=max` stepping by `step`.
pub fn arange_step(min: f64, max: f64, step: f64) -> Result<Array1<f64>> {
    arange(min, &[max, step])
}

#[allow(clippy::cast_precision_loss)]
fn integer_range(start: i64, stop: i64, step: i64) -> Array1<f64> {
    // one unit past `stop` in the stepping direction
    let stop = stop.saturating_add(step.signum());
    let span = stop.saturating_sub(start);
    let count = if span == 0 || span.signum() != step.signum() {
        0
    } else {
        span.unsigned_abs().div_ceil(step.unsigned_abs())
    };
    (0..count)
        .map(|i| start as f64 + i as f64 * step as f64)
        .collect()
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn float_range(start: f64, stop: f64, step: f64) -> Array1<f64> {
    let stop = stop + step / 2.0;
    let count = ((stop - start) / step).ceil();
    let count = if count > 0.0 { count as usize } else { 0 };
    (0..count).map(|i| start + i as f64 * step).collect()
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::{arange, arange_step, arange_to};
    use crate::core::error::FigError;

    #[test]
    fn single_argument_counts_from_zero() {
        assert_eq!(arange_to(5.0).unwrap(), array![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn two_arguments_are_inclusive() {
        assert_eq!(
            arange(0.0, &[5.0]).unwrap(),
            array![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]
        );
        assert_eq!(arange(-2.0, &[1.0]).unwrap(), array![-2.0, -1.0, 0.0, 1.0]);
    }

    #[test]
    fn integer_step_stops_at_last_aligned_value() {
        assert_eq!(arange_step(0.0, 10.0, 3.0).unwrap(), array![0.0, 3.0, 6.0, 9.0]);
        assert_eq!(arange_step(0.0, 9.0, 3.0).unwrap(), array![0.0, 3.0, 6.0, 9.0]);
    }

    #[test]
    fn negative_integer_step_includes_max() {
        assert_eq!(
            arange_step(5.0, 0.0, -1.0).unwrap(),
            array![5.0, 4.0, 3.0, 2.0, 1.0, 0.0]
        );
    }

    #[test]
    fn wrong_direction_is_empty() {
        assert!(arange_step(5.0, 0.0, 1.0).unwrap().is_empty());
        assert!(arange_step(0.0, 1.0, -0.5).unwrap().is_empty());
    }

    #[test]
    fn float_step_includes_endpoint_within_tolerance() {
        let got = arange_step(0.0, 1.0, 0.25).unwrap();
        let want = [0.0, 0.25, 0.5, 0.75, 1.0];
        assert_eq!(got.len(), want.len());
        for (g, w) in got.iter().zip(want) {
            assert!((g - w).abs() < 1e-12);
        }

        let got = arange_step(0.0, 0.3, 0.1).unwrap();
        assert_eq!(got.len(), 4);
        assert!((got[3] - 0.3).abs() < 1e-12);
    }

    #[test]
    fn fractional_bound_promotes_to_float() {
        assert_eq!(arange(0.0, &[1.5]).unwrap(), array![0.0, 1.0]);
        assert_eq!(arange(0.5, &[2.5]).unwrap(), array![0.5, 1.5, 2.5]);
    }

    #[test]
    fn huge_integral_values_step_as_floats() {
        let got = arange_step(0.0, 3e300, 1e300).unwrap();
        assert_eq!(got.len(), 4);
        assert!((got[3] / 3e300 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn too_many_arguments() {
        assert!(matches!(
            arange(1.0, &[2.0, 3.0, 4.0]),
            Err(FigError::InvalidArity { got: 4 })
        ));
    }

    #[test]
    fn zero_or_non_finite_step() {
        assert!(matches!(
            arange_step(0.0, 1.0, 0.0),
            Err(FigError::InvalidStep { .. })
        ));
        assert!(matches!(
            arange_step(0.0, f64::INFINITY, 1.0),
            Err(FigError::InvalidStep { .. })
        ));
    }
}
