//! Real cubic root by Newton's method.
//!
//! Iterates `z' = (2z + x / z²) / 3` (Newton on `f(z) = z³ - x`) from the
//! seed `z = x / 3` and stops once a step moves the estimate by less than an
//! absolute tolerance. The last accepted estimate is returned unrounded.
//!
//! The iteration is bounded. Far from the root each step only shrinks the
//! estimate by a third, so inputs near `f64::MAX` need on the order of a
//! thousand steps; the default cap leaves headroom for that. Inputs whose
//! result is large can also oscillate between two neighbouring floats that
//! never differ by less than the tolerance. When the cap is hit, or `z²`
//! underflows and the iterate blows up, the solver answers with `f64::cbrt`.
//!
//! The tolerance is absolute, so small inputs stop early. Once the estimate
//! falls to a few times `1e-10` the steps are already below the tolerance,
//! and inputs between roughly `1e-160` and `1e-27` come back near `2.5e-10`
//! whatever their true root. Those results still cube to within about
//! `1e-27` of the input in absolute terms. Below that band `z²` underflows on
//! the first step and the `f64::cbrt` fallback applies.

/// Absolute step size below which the iteration is considered converged.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Upper bound on Newton steps for a single input.
pub const MAX_ITERATIONS: u32 = 2_000;

/// Newton cubic-root solver parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeRootSolver {
    tolerance: f64,
    max_iterations: u32,
}

impl Default for CubeRootSolver {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: MAX_ITERATIONS,
        }
    }
}

impl CubeRootSolver {
    /// Build a solver with a custom tolerance and iteration cap.
    ///
    /// A non-positive tolerance never converges, so every input ends on the
    /// `f64::cbrt` fallback once `max_iterations` is spent.
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Compute the real cubic root of `x`.
    ///
    /// Zero (of either sign) maps to `0.0` without iterating, since the
    /// update divides by `z²`. Non-finite input is returned as-is.
    pub fn solve(&self, x: f64) -> f64 {
        if x == 0.0 {
            return 0.0;
        }
        if !x.is_finite() {
            return x;
        }

        let mut z = x / 3.0;
        for _ in 0..self.max_iterations {
            let next = (2.0 * z + x / (z * z)) / 3.0;
            if !next.is_finite() {
                break;
            }
            if (next - z).abs() < self.tolerance {
                return z;
            }
            z = next;
        }

        x.cbrt()
    }
}

/// Real cubic root of `x` with the default solver parameters.
pub fn cube_root(x: f64) -> f64 {
    CubeRootSolver::default().solve(x)
}
