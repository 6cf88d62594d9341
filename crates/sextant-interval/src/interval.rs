//! The closed interval type and its field-like arithmetic.
//!
//! Addition, subtraction, multiplication and negation are total and are
//! exposed through the `std::ops` traits, with plain `f64` accepted on either
//! side. Division can fail and is exposed as [`Interval::checked_div`].

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::IntervalError;

/// A closed interval `[min, max]` of real numbers.
///
/// Invariant: `min <= max`. A degenerate interval (`min == max`) stands for
/// an exact scalar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    min: f64,
    max: f64,
}

impl Interval {
    /// Creates the interval `[min, max]`.
    ///
    /// The caller guarantees `min <= max`; use [`Interval::try_new`] for
    /// unchecked input.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        debug_assert!(min <= max, "inverted interval bounds [{min}, {max}]");
        Self { min, max }
    }

    /// Creates `[min, max]`, rejecting inverted or NaN bounds.
    pub fn try_new(min: f64, max: f64) -> Result<Self, IntervalError> {
        // NaN fails the comparison as well.
        if min <= max {
            Ok(Self { min, max })
        } else {
            Err(IntervalError::InvertedBounds { min, max })
        }
    }

    /// Creates the degenerate interval `[x, x]`.
    #[must_use]
    pub const fn point(x: f64) -> Self {
        Self { min: x, max: x }
    }

    /// Creates the interval spanning two values given in either order.
    #[must_use]
    pub fn hull_of(a: f64, b: f64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// `n` copies of the box `[min, max]`.
    #[must_use]
    pub fn uniform(min: f64, max: f64, n: usize) -> Vec<Self> {
        vec![Self::new(min, max); n]
    }

    /// One interval per `(min, max)` pair.
    #[must_use]
    pub fn from_pairs(bounds: &[(f64, f64)]) -> Vec<Self> {
        bounds.iter().map(|&(lo, hi)| Self::new(lo, hi)).collect()
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Returns `max - min`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Returns the center of the interval.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.min + self.max)
    }

    /// Returns true if the interval is a single point.
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.min == self.max
    }

    /// Returns true if `x` lies in `[min, max]`.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Returns true if zero lies in `[min, max]`.
    #[must_use]
    pub fn contains_zero(&self) -> bool {
        self.contains(0.0)
    }

    /// Smallest interval containing both `self` and `other`.
    #[must_use]
    pub fn hull(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Divides by `other`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::Domain`] if `other` contains zero.
    pub fn checked_div(self, other: Self) -> Result<Self, IntervalError> {
        if other.contains_zero() {
            return Err(IntervalError::domain("division", other));
        }
        Ok(self * Self::new(1.0 / other.max, 1.0 / other.min))
    }

    /// Returns the pair `(min, max)`.
    #[must_use]
    pub const fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}

impl From<f64> for Interval {
    fn from(x: f64) -> Self {
        Self::point(x)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

impl Add for Interval {
    type Output = Interval;

    fn add(self, rhs: Self) -> Self::Output {
        Interval {
            min: self.min + rhs.min,
            max: self.max + rhs.max,
        }
    }
}

impl Sub for Interval {
    type Output = Interval;

    fn sub(self, rhs: Self) -> Self::Output {
        Interval {
            min: self.min - rhs.max,
            max: self.max - rhs.min,
        }
    }
}

impl Mul for Interval {
    type Output = Interval;

    fn mul(self, rhs: Self) -> Self::Output {
        // 0·∞ is taken as 0.
        let corner = |a: f64, b: f64| {
            let p = a * b;
            if p.is_nan() {
                0.0
            } else {
                p
            }
        };
        let corners = [
            corner(self.min, rhs.min),
            corner(self.min, rhs.max),
            corner(self.max, rhs.min),
            corner(self.max, rhs.max),
        ];
        Interval {
            min: corners.iter().copied().fold(f64::INFINITY, f64::min),
            max: corners.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

impl Neg for Interval {
    type Output = Interval;

    fn neg(self) -> Self::Output {
        Interval {
            min: -self.max,
            max: -self.min,
        }
    }
}

macro_rules! scalar_ops {
    ($($trait:ident :: $method:ident),*) => {$(
        impl $trait<f64> for Interval {
            type Output = Interval;

            fn $method(self, rhs: f64) -> Self::Output {
                $trait::$method(self, Interval::point(rhs))
            }
        }

        impl $trait<Interval> for f64 {
            type Output = Interval;

            fn $method(self, rhs: Interval) -> Self::Output {
                $trait::$method(Interval::point(self), rhs)
            }
        }
    )*};
}

scalar_ops!(Add::add, Sub::sub, Mul::mul);
