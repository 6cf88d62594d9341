//! One-dimensional root finding and minimization.
//!
//! The objective is any `FnMut(f64) -> Result<f64, E>`; its error is
//! converted into [`OptimError`] and aborts the search.

use crate::config::{Solution, Status, Tolerances, FD_STEP};
use crate::error::OptimError;

/// Finds a root of `f` in `[a, b]` by bisection.
///
/// Stops when `|f(c)| < atol` at a midpoint `c`.
///
/// # Errors
///
/// - [`OptimError::InvalidBracket`] unless `a < b`.
/// - [`OptimError::NoSignChange`] unless `f(a)` and `f(b)` have opposite
///   signs.
/// - Any error raised by `f`.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn root_bisection<F, E>(
    mut f: F,
    mut a: f64,
    mut b: f64,
    tol: &Tolerances,
) -> Result<Solution<f64>, OptimError>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: Into<OptimError>,
{
    if !(a < b) {
        return Err(OptimError::InvalidBracket { a, b });
    }
    let mut fa = f(a).map_err(Into::into)?;
    let fb = f(b).map_err(Into::into)?;
    if !(fa * fb < 0.0) {
        return Err(OptimError::NoSignChange { a, b, fa, fb });
    }

    let mut c = (a + b) / 2.0;
    for i in 0..tol.max_iterations {
        c = (a + b) / 2.0;
        let fc = f(c).map_err(Into::into)?;
        log::trace!("bisection {i}: [{a}, {b}], f({c}) = {fc}");
        if fc.abs() < tol.atol {
            log::debug!("bisection converged to {c} after {} iterations", i + 1);
            return Ok(Solution::new(c, i + 1, Status::Converged));
        }
        if fa * fc < 0.0 {
            b = c;
        } else {
            a = c;
            fa = fc;
        }
    }

    log::debug!("bisection stopped at {c}: iteration limit reached");
    Ok(Solution::new(c, tol.max_iterations, Status::MaxIterations))
}

/// First derivative by central difference.
///
/// # Errors
///
/// Any error raised by `f`.
pub fn derivative<F, E>(mut f: F, x: f64) -> Result<f64, OptimError>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: Into<OptimError>,
{
    let fp = f(x + FD_STEP).map_err(Into::into)?;
    let fm = f(x - FD_STEP).map_err(Into::into)?;
    Ok((fp - fm) / 2.0 / FD_STEP)
}

/// Second derivative by central difference.
///
/// # Errors
///
/// Any error raised by `f`.
pub fn second_derivative<F, E>(f: F, x: f64) -> Result<f64, OptimError>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: Into<OptimError>,
{
    derivatives(f, x).map(|(_, _, d2)| d2)
}

/// `f(x)`, `f'(x)` and `f''(x)` from three evaluations.
///
/// # Errors
///
/// Any error raised by `f`.
pub fn derivatives<F, E>(mut f: F, x: f64) -> Result<(f64, f64, f64), OptimError>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: Into<OptimError>,
{
    let fp = f(x + FD_STEP).map_err(Into::into)?;
    let fc = f(x).map_err(Into::into)?;
    let fm = f(x - FD_STEP).map_err(Into::into)?;
    Ok((
        fc,
        (fp - fm) / 2.0 / FD_STEP,
        (fp - 2.0 * fc + fm) / (FD_STEP * FD_STEP),
    ))
}

/// Finds a root of `f` by Newton's method from `x0`, with finite-difference
/// derivatives.
///
/// Converges when successive function values differ by less than `atol`.
/// Stops with [`Status::FlatDerivative`] at a point where `|f'| < divtol`.
///
/// # Errors
///
/// Any error raised by `f`.
pub fn root_newton<F, E>(mut f: F, x0: f64, tol: &Tolerances) -> Result<Solution<f64>, OptimError>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: Into<OptimError>,
{
    let mut x = x0;
    let mut fx = f(x).map_err(Into::into)?;
    let mut d = derivative(&mut f, x)?;
    let mut xn = x;

    for i in 0..tol.max_iterations {
        if d.abs() < tol.divtol {
            log::debug!("newton root: flat derivative at {x}");
            return Ok(Solution::new(x, i, Status::FlatDerivative));
        }
        xn = x - fx / d;
        let fxn = f(xn).map_err(Into::into)?;
        log::trace!("newton root {i}: x = {xn}, f = {fxn}");
        if (fx - fxn).abs() < tol.atol {
            log::debug!("newton root converged to {xn} after {} iterations", i + 1);
            return Ok(Solution::new(xn, i + 1, Status::Converged));
        }
        d = derivative(&mut f, xn)?;
        x = xn;
        fx = fxn;
    }

    Ok(Solution::new(xn, tol.max_iterations, Status::MaxIterations))
}

/// Finds a stationary point of `f` by Newton's method on `f'`, from `x0`.
///
/// Converges when successive function values differ by less than `atol`.
/// Stops with [`Status::FlatDerivative`] where `|f''| < divtol`.
///
/// # Errors
///
/// Any error raised by `f`.
pub fn minimize_newton<F, E>(
    mut f: F,
    x0: f64,
    tol: &Tolerances,
) -> Result<Solution<f64>, OptimError>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: Into<OptimError>,
{
    let mut x = x0;
    let (mut fx, mut d1, mut d2) = derivatives(&mut f, x)?;
    let mut xn = x;

    for i in 0..tol.max_iterations {
        if d2.abs() < tol.divtol {
            log::debug!("newton minimum: flat second derivative at {x}");
            return Ok(Solution::new(x, i, Status::FlatDerivative));
        }
        xn = x - d1 / d2;
        let (fxn, d1n, d2n) = derivatives(&mut f, xn)?;
        log::trace!("newton minimum {i}: x = {xn}, f = {fxn}");
        if (fxn - fx).abs() < tol.atol {
            log::debug!("newton minimum converged to {xn} after {} iterations", i + 1);
            return Ok(Solution::new(xn, i + 1, Status::Converged));
        }
        x = xn;
        (fx, d1, d2) = (fxn, d1n, d2n);
    }

    Ok(Solution::new(xn, tol.max_iterations, Status::MaxIterations))
}
