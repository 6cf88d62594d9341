//! Property-based soundness tests for interval operations.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::Interval;

    // Strategy for generating intervals with moderate bounds
    fn interval() -> impl Strategy<Value = Interval> {
        (-50.0f64..50.0, 0.0f64..20.0).prop_map(|(lo, w)| Interval::new(lo, lo + w))
    }

    // Strategy for intervals bounded away from zero
    fn nonzero_interval() -> impl Strategy<Value = Interval> {
        prop_oneof![
            (0.1f64..20.0, 0.0f64..10.0).prop_map(|(lo, w)| Interval::new(lo, lo + w)),
            (0.1f64..20.0, 0.0f64..10.0).prop_map(|(hi, w)| Interval::new(-hi - w, -hi)),
        ]
    }

    // A point of `x` selected by `t` in [0, 1]
    fn sample(x: Interval, t: f64) -> f64 {
        (x.min() + t * x.width()).clamp(x.min(), x.max())
    }

    fn encloses(r: Interval, v: f64) -> bool {
        let slack = 1e-9 * (1.0 + v.abs());
        r.min() - slack <= v && v <= r.max() + slack
    }

    proptest! {
        #[test]
        fn add_is_sound(a in interval(), b in interval(), s in 0.0f64..=1.0, t in 0.0f64..=1.0) {
            let (x, y) = (sample(a, s), sample(b, t));
            prop_assert!(encloses(a + b, x + y));
        }

        #[test]
        fn sub_is_sound(a in interval(), b in interval(), s in 0.0f64..=1.0, t in 0.0f64..=1.0) {
            let (x, y) = (sample(a, s), sample(b, t));
            prop_assert!(encloses(a - b, x - y));
        }

        #[test]
        fn mul_is_sound(a in interval(), b in interval(), s in 0.0f64..=1.0, t in 0.0f64..=1.0) {
            let (x, y) = (sample(a, s), sample(b, t));
            prop_assert!(encloses(a * b, x * y));
        }

        #[test]
        fn div_is_sound(
            a in interval(),
            b in nonzero_interval(),
            s in 0.0f64..=1.0,
            t in 0.0f64..=1.0,
        ) {
            let (x, y) = (sample(a, s), sample(b, t));
            let q = a.checked_div(b).unwrap();
            prop_assert!(encloses(q, x / y));
        }

        #[test]
        fn integer_pow_is_sound(a in interval(), p in 1i32..6, s in 0.0f64..=1.0) {
            let x = sample(a, s);
            let r = a.powf(f64::from(p)).unwrap();
            let v = x.powi(p);
            // Even powers across zero start at the positive floor.
            let floor = if p % 2 == 0 && a.contains_zero() { crate::EVEN_POWER_FLOOR } else { 0.0 };
            prop_assert!(encloses(r, v) || v < floor);
        }

        #[test]
        fn negative_pow_is_sound(a in nonzero_interval(), p in 1i32..4, s in 0.0f64..=1.0) {
            let x = sample(a, s);
            let r = a.powf(-f64::from(p)).unwrap();
            prop_assert!(encloses(r, x.powi(-p)));
        }

        #[test]
        fn fractional_pow_is_sound(
            lo in 0.01f64..10.0,
            w in 0.0f64..10.0,
            p in -3.0f64..3.0,
            s in 0.0f64..=1.0,
        ) {
            prop_assume!(p.fract() != 0.0);
            let a = Interval::new(lo, lo + w);
            let x = sample(a, s);
            prop_assert!(encloses(a.powf(p).unwrap(), x.powf(p)));
        }

        #[test]
        fn sin_cos_are_sound(a in interval(), s in 0.0f64..=1.0) {
            let x = sample(a, s);
            prop_assert!(encloses(a.sin(), x.sin()));
            prop_assert!(encloses(a.cos(), x.cos()));
        }

        #[test]
        fn acos_is_sound(lo in -1.0f64..=1.0, hi in -1.0f64..=1.0, s in 0.0f64..=1.0) {
            let a = Interval::hull_of(lo, hi);
            let x = sample(a, s);
            prop_assert!(encloses(a.acos().unwrap(), x.acos()));
        }
    }
}
