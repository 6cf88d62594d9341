//! Transcendental functions over intervals.
//!
//! Sine and cosine are not monotonic, so besides the endpoint values the
//! extrema at the critical points `k·π/2` inside the interval are taken
//! into account.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::error::IntervalError;
use crate::Interval;

/// Beyond this magnitude consecutive critical points can no longer be told
/// apart in `f64`, and the full range is returned.
const CRITICAL_POINT_LIMIT: f64 = 1e15;

impl Interval {
    /// Encloses `sin(x)` for every `x` in the interval.
    #[must_use]
    pub fn sin(self) -> Self {
        // sin(kπ/2) = 1 for k ≡ 1 and -1 for k ≡ 3 (mod 4).
        periodic(self, f64::sin, 1, 3)
    }

    /// Encloses `cos(x)` for every `x` in the interval.
    #[must_use]
    pub fn cos(self) -> Self {
        // cos(kπ/2) = 1 for k ≡ 0 and -1 for k ≡ 2 (mod 4).
        periodic(self, f64::cos, 0, 2)
    }

    /// Encloses `acos(x)` for every `x` in the interval.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::Domain`] unless the interval lies within
    /// `[-1, 1]`.
    pub fn acos(self) -> Result<Self, IntervalError> {
        if self.min() < -1.0 || self.max() > 1.0 {
            return Err(IntervalError::domain("acos", self));
        }
        // Decreasing on [-1, 1].
        Ok(Self::new(self.max().acos(), self.min().acos()))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn periodic(x: Interval, f: fn(f64) -> f64, peak: i64, trough: i64) -> Interval {
    let unresolved = x.min().abs().max(x.max().abs()) > CRITICAL_POINT_LIMIT;
    if x.width() >= TAU || unresolved {
        return Interval::new(-1.0, 1.0);
    }

    let (a, b) = (f(x.min()), f(x.max()));
    let mut lo = a.min(b);
    let mut hi = a.max(b);

    let (k_start, k_end) = (
        (x.min() / FRAC_PI_2).floor() as i64,
        (x.max() / FRAC_PI_2).ceil() as i64,
    );
    for k in k_start..=k_end {
        if !x.contains(k as f64 * FRAC_PI_2) {
            continue;
        }
        let phase = k.rem_euclid(4);
        if phase == peak {
            hi = 1.0;
        } else if phase == trough {
            lo = -1.0;
        }
    }

    Interval::new(lo, hi)
}
