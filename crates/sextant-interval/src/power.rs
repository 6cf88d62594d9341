//! Raising intervals to real powers.

use crate::error::IntervalError;
use crate::Interval;

/// Lower bound substituted for zero when an even power is taken of an
/// interval that straddles zero.
pub const EVEN_POWER_FLOOR: f64 = 1e-9;

impl Interval {
    /// Raises every point of the interval to the scalar power `p`.
    ///
    /// # Errors
    ///
    /// - [`IntervalError::InvalidExponent`] if `p` is NaN or infinite.
    /// - [`IntervalError::Domain`] for a negative integer power of an
    ///   interval containing zero, a fractional power of an interval with a
    ///   negative lower bound, or a negative fractional power of an interval
    ///   starting at zero.
    pub fn powf(self, p: f64) -> Result<Self, IntervalError> {
        if !p.is_finite() {
            return Err(IntervalError::InvalidExponent(p));
        }
        if p == 0.0 {
            return Ok(Self::point(1.0));
        }

        let (min, max) = self.bounds();
        if p.fract() == 0.0 {
            if p < 0.0 {
                if self.contains_zero() {
                    return Err(IntervalError::domain("negative integer power", self));
                }
                let reciprocal = Self::hull_of(1.0 / min, 1.0 / max);
                return reciprocal.powf(-p);
            }

            let (lo, hi) = if min >= 0.0 {
                (int_pow(min, p), int_pow(max, p))
            } else if max <= 0.0 {
                (int_pow(max, p), int_pow(min, p))
            } else if p % 2.0 == 0.0 {
                (EVEN_POWER_FLOOR, int_pow(min.abs().max(max.abs()), p))
            } else {
                (int_pow(min, p), int_pow(max, p))
            };
            return Ok(Self::hull_of(lo, hi));
        }

        if min < 0.0 {
            return Err(IntervalError::domain("fractional power", self));
        }
        if min == 0.0 && p < 0.0 {
            return Err(IntervalError::domain("negative fractional power", self));
        }
        Ok(Self::hull_of(min.powf(p), max.powf(p)))
    }
}

#[allow(clippy::cast_possible_truncation)]
fn int_pow(x: f64, p: f64) -> f64 {
    if p.abs() <= f64::from(i32::MAX) {
        x.powi(p as i32)
    } else {
        x.powf(p)
    }
}
