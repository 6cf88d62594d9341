//! Property-based tests for evaluation.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use sextant_interval::Interval;

    use crate::{Bindings, ExprArena, Operand};

    /// f(x, y) = x·y² − cos(x) + sin(x + y)/(1 + x²)
    fn sample_expression(arena: &mut ExprArena, bx: Interval, by: Interval) -> Operand {
        let x = arena.variable("x", Some(bx));
        let y = arena.variable("y", Some(by));

        let y2 = arena.pow(y, 2.0);
        let xy2 = arena.mul(x, y2);
        let cx = arena.cos(x);
        let t1 = arena.sub(xy2, cx);
        let xy = arena.add(x, y);
        let s = arena.sin(xy);
        let x2 = arena.pow(x, 2.0);
        let den = arena.add(x2, 1.0);
        let t2 = arena.div(s, den);
        arena.add(t1, t2)
    }

    fn numeric(x: f64, y: f64) -> f64 {
        x * y * y - x.cos() + (x + y).sin() / (1.0 + x * x)
    }

    proptest! {
        #[test]
        fn value_matches_direct_computation(x in -5.0f64..5.0, y in -5.0f64..5.0) {
            let mut arena = ExprArena::new();
            let b = Interval::new(-5.0, 5.0);
            let f = sample_expression(&mut arena, b, b);
            let at = Bindings::new().with("x", x).with("y", y);
            let v = arena.value(f, &at).unwrap();
            prop_assert!((v - numeric(x, y)).abs() < 1e-9);
        }

        #[test]
        fn gradient_matches_central_differences(x in -3.0f64..3.0, y in -3.0f64..3.0) {
            let mut arena = ExprArena::new();
            let b = Interval::new(-3.0, 3.0);
            let f = sample_expression(&mut arena, b, b);
            let at = Bindings::new().with("x", x).with("y", y);
            let (_, g) = arena.value_and_gradient(f, &at).unwrap();

            let h = 1e-6;
            let dx = (numeric(x + h, y) - numeric(x - h, y)) / (2.0 * h);
            let dy = (numeric(x, y + h) - numeric(x, y - h)) / (2.0 * h);
            prop_assert!((g[0] - dx).abs() < 1e-4 * (1.0 + dx.abs()));
            prop_assert!((g[1] - dy).abs() < 1e-4 * (1.0 + dy.abs()));
        }

        #[test]
        fn interval_encloses_every_sample(
            (lx, wx) in (-4.0f64..4.0, 0.0f64..2.0),
            (ly, wy) in (-4.0f64..4.0, 0.0f64..2.0),
            s in 0.0f64..=1.0,
            t in 0.0f64..=1.0,
        ) {
            let bx = Interval::new(lx, lx + wx);
            let by = Interval::new(ly, ly + wy);
            let mut arena = ExprArena::new();
            let f = sample_expression(&mut arena, bx, by);

            let bound = arena.interval(f).unwrap();
            let (x, y) = (lx + s * wx, ly + t * wy);
            let v = numeric(x, y);
            let slack = 1e-6 * (1.0 + v.abs());
            prop_assert!(bound.min() - slack <= v && v <= bound.max() + slack);
        }
    }
}
