//! Integration tests for sextant-optim.

#[cfg(test)]
mod integration_tests {
    use std::convert::Infallible;

    use sextant_core::{ExprArena, NodeId, Operand};
    use sextant_interval::Interval;
    use sextant_linalg::{Matrix, Reals};

    use crate::{
        gradient, gradient_descent, gradient_descent_root, line_search, OptimError, Status,
        SymbolicObjective, Tolerances,
    };

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn operands(ids: &[NodeId]) -> Vec<Operand> {
        ids.iter().map(Operand::from).collect()
    }

    /// `|A x − b|²` with `A = [[1, 2], [2, 1]]`, `b = [7, 5]`.
    fn booth(arena: &mut ExprArena, x: &[NodeId]) -> Operand {
        let a = Matrix::from_rows(vec![
            vec![Operand::Scalar(1.0), Operand::Scalar(2.0)],
            vec![Operand::Scalar(2.0), Operand::Scalar(1.0)],
        ]);
        let b = Matrix::from_column(vec![Operand::Scalar(7.0), Operand::Scalar(5.0)]);
        let x = Matrix::from_column(operands(x));
        let r = a.matmul(&x, arena).sub(&b, arena);
        // (Σ rᵢ²)^0.5 squared folds back to Σ rᵢ², which keeps every
        // square an even power for interval evaluation.
        let norm = r.norm(arena);
        arena.pow(norm, 2.0)
    }

    fn booth_numeric(x: &[f64]) -> Result<f64, Infallible> {
        Ok((x[0] + 2.0 * x[1] - 7.0).powi(2) + (2.0 * x[0] + x[1] - 5.0).powi(2))
    }

    fn beale(arena: &mut ExprArena, x: &[NodeId]) -> Operand {
        let terms: Vec<Operand> = [(1.5, 1.0), (2.25, 2.0), (2.625, 3.0)]
            .into_iter()
            .map(|(c, k)| {
                let yk = arena.pow(x[1], k);
                let xyk = arena.mul(x[0], yk);
                let r = arena.sub(c, x[0]);
                let r = arena.add(r, xyk);
                arena.pow(r, 2.0)
            })
            .collect();
        arena.sum(terms)
    }

    fn beale_numeric(x: &[f64]) -> Result<f64, Infallible> {
        let (a, b) = (x[0], x[1]);
        Ok((1.5 - a + a * b).powi(2)
            + (2.25 - a + a * b * b).powi(2)
            + (2.625 - a + a * b.powi(3)).powi(2))
    }

    fn rosen(arena: &mut ExprArena, x: &[NodeId]) -> Operand {
        let terms: Vec<Operand> = x
            .windows(2)
            .map(|w| {
                let sq = arena.pow(w[0], 2.0);
                let d = arena.sub(w[1], sq);
                let d2 = arena.pow(d, 2.0);
                let valley = arena.mul(100.0, d2);
                let e = arena.sub(1.0, w[0]);
                let e2 = arena.pow(e, 2.0);
                arena.add(valley, e2)
            })
            .collect();
        arena.sum(terms)
    }

    fn bounded_group(arena: &mut ExprArena, n: usize) -> Vec<NodeId> {
        arena.variable_group("x", n, Some(Interval::new(-10.0, 10.0)))
    }

    fn assert_near(x: &[f64], expected: &[f64], eps: f64) {
        for (a, b) in x.iter().zip(expected) {
            assert!((a - b).abs() < eps, "{x:?} != {expected:?}");
        }
    }

    #[test]
    fn test_symbolic_matches_numeric_functions() {
        let mut arena = ExprArena::new();
        let x = bounded_group(&mut arena, 2);
        let f_booth = booth(&mut arena, &x);
        let f_beale = beale(&mut arena, &x);

        for point in [[0.0, 0.0], [1.0, 3.0], [-2.5, 0.75], [3.0, 0.5]] {
            let ob = SymbolicObjective::new(&arena, f_booth, "x");
            let (v, g) = ob.fgrad(&point).unwrap();
            assert!((v - booth_numeric(&point).unwrap()).abs() < 1e-9);
            assert_near(&g, &gradient(booth_numeric, &point).unwrap(), 1e-5);

            let ob = SymbolicObjective::new(&arena, f_beale, "x");
            let (v, g) = ob.fgrad(&point).unwrap();
            assert!((v - beale_numeric(&point).unwrap()).abs() < 1e-9);
            let fd = gradient(beale_numeric, &point).unwrap();
            for (a, b) in g.iter().zip(&fd) {
                assert!((a - b).abs() < 1e-5 * (1.0 + b.abs()));
            }
        }
    }

    #[test]
    fn test_booth_fixed_step_descent() {
        init_logging();
        let mut arena = ExprArena::new();
        let x = bounded_group(&mut arena, 2);
        let f = booth(&mut arena, &x);
        let obj = SymbolicObjective::new(&arena, f, "x");

        let sol = gradient_descent(|x: &[f64]| obj.fgrad(x), &[0.0, 0.0], &Tolerances::default())
            .unwrap();
        assert!(sol.converged());
        assert_near(&sol.x, &[1.0, 3.0], 2e-2);
    }

    #[test]
    fn test_booth_adaptive_descent_seeded_by_interval() {
        init_logging();
        let mut arena = ExprArena::new();
        let x = bounded_group(&mut arena, 2);
        let f = booth(&mut arena, &x);
        let obj = SymbolicObjective::new(&arena, f, "x");

        let fmin = obj.lower_bound().unwrap();
        assert!((0.0..1e-6).contains(&fmin));

        let tol = Tolerances::default();
        let sol = gradient_descent_root(|x: &[f64]| obj.fgrad(x), &[0.0, 0.0], fmin, &tol).unwrap();
        assert!(sol.converged());
        assert_near(&sol.x, &[1.0, 3.0], 1e-2);
    }

    #[test]
    fn test_booth_line_search() {
        init_logging();
        let mut arena = ExprArena::new();
        let x = bounded_group(&mut arena, 2);
        let f = booth(&mut arena, &x);
        let obj = SymbolicObjective::new(&arena, f, "x");

        let tol = Tolerances::default();
        let sol = line_search(|x: &[f64]| obj.fgrad(x), &[0.0, 0.0], &tol).unwrap();
        assert!(sol.converged());
        assert_near(&sol.x, &[1.0, 3.0], 1e-2);
    }

    #[test]
    fn test_beale_descent_decreases() {
        init_logging();
        let mut arena = ExprArena::new();
        let x = bounded_group(&mut arena, 2);
        let f = beale(&mut arena, &x);
        let obj = SymbolicObjective::new(&arena, f, "x");

        let start = obj.value(&[0.0, 0.0]).unwrap();
        let sol = gradient_descent(|x: &[f64]| obj.fgrad(x), &[0.0, 0.0], &Tolerances::default())
            .unwrap();
        let end = obj.value(&sol.x).unwrap();
        assert!(end < start / 2.0, "{start} -> {end}");
    }

    #[test]
    fn test_rosen_lower_bound_and_descent() {
        init_logging();
        let mut arena = ExprArena::new();
        let x = bounded_group(&mut arena, 5);
        let f = rosen(&mut arena, &x);
        let obj = SymbolicObjective::new(&arena, f, "x");

        let lb = obj.lower_bound().unwrap();
        assert!((0.0..1e-5).contains(&lb));
        assert_eq!(obj.value(&[1.0; 5]).unwrap(), 0.0);
        assert!(lb <= obj.value(&[0.3, -2.0, 7.5, 1.0, -9.0]).unwrap());

        let tol = Tolerances::default().with_step(1e-3);
        let sol = gradient_descent(|x: &[f64]| obj.fgrad(x), &[0.0; 5], &tol).unwrap();
        let end = obj.value(&sol.x).unwrap();
        assert!(end.is_finite() && end < 4.0, "rosen(0) = 4 -> {end}");
    }

    #[test]
    fn test_numeric_matrix_objective() {
        // The same residual built over plain numbers, differentiated by
        // finite differences.
        let residual = |x: &[f64]| -> Result<f64, Infallible> {
            let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 1.0]]);
            let b = Matrix::from_column(vec![7.0, 5.0]);
            let r = a
                .matmul(&Matrix::from_column(x.to_vec()), &mut Reals)
                .sub(&b, &mut Reals);
            Ok(r.dot(&r, &mut Reals))
        };
        let fgrad = |x: &[f64]| -> Result<(f64, Vec<f64>), OptimError> {
            Ok((residual(x)?, gradient(residual, x)?))
        };

        let sol = line_search(fgrad, &[0.0, 0.0], &Tolerances::default()).unwrap();
        assert_eq!(sol.status, Status::Converged);
        assert_near(&sol.x, &[1.0, 3.0], 1e-2);
    }

    #[test]
    fn test_evaluation_errors_abort_the_search() {
        let mut arena = ExprArena::new();
        let x = arena.variable_group("x", 2, None);
        let f = booth(&mut arena, &x);
        // Bound under a different group name, so x0/x1 are missing.
        let obj = SymbolicObjective::new(&arena, f, "y");

        let err = gradient_descent(|x: &[f64]| obj.fgrad(x), &[0.0, 0.0], &Tolerances::default())
            .unwrap_err();
        assert!(matches!(err, OptimError::Eval(_)));
        assert!(matches!(obj.lower_bound(), Err(e) if e.to_string().contains("x0")));
    }
}
