//! Stopping criteria shared by every routine.

/// Step used by the central finite-difference formulas.
pub const FD_STEP: f64 = 1e-6;

/// Tolerances and iteration limits.
#[derive(Clone, Debug, PartialEq)]
pub struct Tolerances {
    /// Stop once successive objective values differ by less than this.
    pub atol: f64,
    /// A derivative or squared gradient norm below this counts as flat.
    pub divtol: f64,
    /// `atol` of the one-dimensional search inside [`line_search`](crate::line_search).
    pub inner_atol: f64,
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Fixed step of [`gradient_descent`](crate::gradient_descent).
    pub step: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            atol: 1e-6,
            divtol: 1e-50,
            inner_atol: 1e-6,
            max_iterations: 1000,
            step: 1e-2,
        }
    }
}

impl Tolerances {
    /// Sets `atol`.
    #[must_use]
    pub fn with_atol(mut self, atol: f64) -> Self {
        self.atol = atol;
        self
    }

    /// Sets `max_iterations`.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the fixed descent step.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }
}

/// Why a routine stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// The convergence criterion was met.
    Converged,
    /// The iteration limit was reached first.
    MaxIterations,
    /// A derivative (or gradient) vanished, so no further step was possible.
    FlatDerivative,
}

/// Result of an iterative search.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<X> {
    /// The final iterate.
    pub x: X,
    /// Number of completed iterations.
    pub iterations: usize,
    /// Why the search stopped.
    pub status: Status,
}

impl<X> Solution<X> {
    pub(crate) fn new(x: X, iterations: usize, status: Status) -> Self {
        Self {
            x,
            iterations,
            status,
        }
    }

    /// Returns true if the search converged.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}
