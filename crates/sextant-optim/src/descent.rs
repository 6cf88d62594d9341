//! Gradient-based minimization in several variables.
//!
//! Every routine drives an `fgrad` callback returning the objective value
//! and its gradient at a point. The gradient may come from automatic
//! differentiation ([`SymbolicObjective`](crate::SymbolicObjective)) or from
//! [`gradient`] finite differences.

use crate::config::{Solution, Status, Tolerances};
use crate::error::OptimError;
use crate::scalar::{derivative, minimize_newton};

/// Finite-difference gradient of `f` at `x`, one central difference per
/// coordinate.
///
/// # Errors
///
/// Any error raised by `f`.
pub fn gradient<F, E>(mut f: F, x: &[f64]) -> Result<Vec<f64>, OptimError>
where
    F: FnMut(&[f64]) -> Result<f64, E>,
    E: Into<OptimError>,
{
    let mut z = x.to_vec();
    let mut g = Vec::with_capacity(x.len());
    for i in 0..x.len() {
        let d = derivative(
            |y| {
                z[i] = y;
                f(&z)
            },
            x[i],
        )?;
        z[i] = x[i];
        g.push(d);
    }
    Ok(g)
}

/// `x - scale * g`
fn step_from(x: &[f64], scale: f64, g: &[f64]) -> Vec<f64> {
    x.iter().zip(g).map(|(xi, gi)| xi - scale * gi).collect()
}

/// Minimizes by fixed-step gradient descent, `x ← x − step·∇f(x)`.
///
/// Converges when successive objective values differ by less than `atol`.
///
/// # Errors
///
/// Any error raised by `fgrad`.
pub fn gradient_descent<F, E>(
    mut fgrad: F,
    x0: &[f64],
    tol: &Tolerances,
) -> Result<Solution<Vec<f64>>, OptimError>
where
    F: FnMut(&[f64]) -> Result<(f64, Vec<f64>), E>,
    E: Into<OptimError>,
{
    let mut x = x0.to_vec();
    let (mut fx, mut gx) = fgrad(&x).map_err(Into::into)?;

    for i in 0..tol.max_iterations {
        let xn = step_from(&x, tol.step, &gx);
        let (fxn, gxn) = fgrad(&xn).map_err(Into::into)?;
        log::trace!("descent {i}: f = {fxn}");
        x = xn;
        if (fxn - fx).abs() < tol.atol {
            log::debug!("descent converged after {} iterations, f = {fxn}", i + 1);
            return Ok(Solution::new(x, i + 1, Status::Converged));
        }
        fx = fxn;
        gx = gxn;
    }

    log::debug!("descent stopped at iteration limit, f = {fx}");
    Ok(Solution::new(x, tol.max_iterations, Status::MaxIterations))
}

/// Minimizes with the adaptive step `(f − fmin) / |∇f|²`, a Newton step
/// toward the known (or bounded) minimum value `fmin`.
///
/// A lower bound from interval evaluation is a valid `fmin`; see
/// [`SymbolicObjective::lower_bound`](crate::SymbolicObjective::lower_bound).
/// Stops with [`Status::FlatDerivative`] at a point where `|∇f|² < divtol`.
///
/// # Errors
///
/// Any error raised by `fgrad`.
pub fn gradient_descent_root<F, E>(
    mut fgrad: F,
    x0: &[f64],
    fmin: f64,
    tol: &Tolerances,
) -> Result<Solution<Vec<f64>>, OptimError>
where
    F: FnMut(&[f64]) -> Result<(f64, Vec<f64>), E>,
    E: Into<OptimError>,
{
    let mut x = x0.to_vec();
    let (mut fx, mut gx) = fgrad(&x).map_err(Into::into)?;

    for i in 0..tol.max_iterations {
        let div: f64 = gx.iter().map(|g| g * g).sum();
        if div < tol.divtol {
            log::debug!("adaptive descent: flat gradient after {i} iterations");
            return Ok(Solution::new(x, i, Status::FlatDerivative));
        }
        let xn = step_from(&x, (fx - fmin) / div, &gx);
        let (fxn, gxn) = fgrad(&xn).map_err(Into::into)?;
        log::trace!("adaptive descent {i}: f = {fxn}");
        x = xn;
        if (fxn - fx).abs() < tol.atol {
            log::debug!("adaptive descent converged after {} iterations, f = {fxn}", i + 1);
            return Ok(Solution::new(x, i + 1, Status::Converged));
        }
        fx = fxn;
        gx = gxn;
    }

    log::debug!("adaptive descent stopped at iteration limit, f = {fx}");
    Ok(Solution::new(x, tol.max_iterations, Status::MaxIterations))
}

/// Minimizes by repeated line searches along the gradient direction.
///
/// Each iteration minimizes `t ↦ f(x + t·∇f(x))` with [`minimize_newton`]
/// (tolerance `inner_atol`) and moves to the best point on the line.
///
/// # Errors
///
/// Any error raised by `fgrad`.
pub fn line_search<F, E>(
    mut fgrad: F,
    x0: &[f64],
    tol: &Tolerances,
) -> Result<Solution<Vec<f64>>, OptimError>
where
    F: FnMut(&[f64]) -> Result<(f64, Vec<f64>), E>,
    E: Into<OptimError>,
{
    let inner = Tolerances {
        atol: tol.inner_atol,
        ..tol.clone()
    };
    let mut x = x0.to_vec();
    let (mut fx, mut gx) = fgrad(&x).map_err(Into::into)?;

    for i in 0..tol.max_iterations {
        let t = {
            let along = |t: f64| fgrad(&step_from(&x, -t, &gx)).map(|(v, _)| v);
            minimize_newton(along, 0.0, &inner)?.x
        };
        let xn = step_from(&x, -t, &gx);
        let (fxn, gxn) = fgrad(&xn).map_err(Into::into)?;
        log::trace!("line search {i}: t = {t}, f = {fxn}");
        x = xn;
        if (fxn - fx).abs() < tol.atol {
            log::debug!("line search converged after {} iterations, f = {fxn}", i + 1);
            return Ok(Solution::new(x, i + 1, Status::Converged));
        }
        fx = fxn;
        gx = gxn;
    }

    log::debug!("line search stopped at iteration limit, f = {fx}");
    Ok(Solution::new(x, tol.max_iterations, Status::MaxIterations))
}
