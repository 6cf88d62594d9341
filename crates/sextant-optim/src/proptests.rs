//! Property-based tests for the optimization routines.

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use proptest::prelude::*;
    use sextant_core::ExprArena;
    use sextant_interval::Interval;

    use crate::{derivative, root_bisection, SymbolicObjective, Tolerances};

    proptest! {
        #[test]
        fn bisection_finds_root_inside_bracket(
            r in -50.0f64..50.0,
            below in 0.1f64..20.0,
            above in 0.1f64..20.0,
        ) {
            // Increasing cubic with its only real root at r.
            let f = |x: f64| Ok::<_, Infallible>((x - r).powi(3) + (x - r));
            let (a, b) = (r - below, r + above);
            let sol = root_bisection(f, a, b, &Tolerances::default()).unwrap();
            prop_assert!(sol.converged());
            prop_assert!(a <= sol.x && sol.x <= b);
            prop_assert!((sol.x - r).abs() < 1e-5);
        }

        #[test]
        fn central_difference_of_quadratic(
            c2 in -10.0f64..10.0,
            c1 in -10.0f64..10.0,
            x in -10.0f64..10.0,
        ) {
            let f = |t: f64| Ok::<_, Infallible>(c2 * t * t + c1 * t);
            let d = derivative(f, x).unwrap();
            prop_assert!((d - (2.0 * c2 * x + c1)).abs() < 1e-5);
        }

        #[test]
        fn lower_bound_is_below_sampled_values(
            lo in -5.0f64..0.0,
            width in 0.5f64..5.0,
            s in proptest::collection::vec(0.0f64..=1.0, 3),
        ) {
            let bounds = Interval::new(lo, lo + width);
            let mut arena = ExprArena::new();
            let x = arena.variable_group("x", 3, Some(bounds));
            let a = arena.mul(x[0], x[1]);
            let b = arena.cos(x[2]);
            let c = arena.sub(a, b);
            let f = arena.pow(c, 2.0);
            let obj = SymbolicObjective::new(&arena, f, "x");

            let point: Vec<f64> = s.iter().map(|t| lo + t * width).collect();
            let lb = obj.lower_bound().unwrap();
            prop_assert!(lb <= obj.value(&point).unwrap() + 1e-9);
        }
    }
}
