/// A solver's estimate together with its residual and iteration count.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution<X, R> {
    /// The solution estimate.
    pub x: X,
    /// Residual (or error estimate) at `x`.
    pub residual: R,
    /// Iterations performed.
    pub iters: usize,
}

/// How an iterative method terminated.
///
/// Precondition violations (bad brackets, singular Jacobians, invalid
/// configs) are reported as `Err` by each solver; this type only describes
/// runs that started correctly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<X, R> {
    /// Converged according to the configured tolerances.
    Converged(Solution<X, R>),

    /// Reached the iteration limit; carries the last estimate.
    NotConverged(Solution<X, R>),

    /// Stopped early due to an observer decision; carries the last estimate.
    StoppedByObserver(Solution<X, R>),

    /// The iteration was detected to diverge. No estimate is reported.
    Diverged,
}

impl<X, R> Outcome<X, R> {
    /// Returns true for [`Outcome::Converged`].
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged(_))
    }

    /// Returns true for [`Outcome::Diverged`].
    #[must_use]
    pub fn is_diverged(&self) -> bool {
        matches!(self, Self::Diverged)
    }

    /// Returns the attached solution, if any.
    #[must_use]
    pub fn solution(&self) -> Option<&Solution<X, R>> {
        match self {
            Self::Converged(s) | Self::NotConverged(s) | Self::StoppedByObserver(s) => Some(s),
            Self::Diverged => None,
        }
    }

    /// Returns the solution only if the run converged.
    #[must_use]
    pub fn converged(self) -> Option<Solution<X, R>> {
        match self {
            Self::Converged(s) => Some(s),
            _ => None,
        }
    }

    /// A short label for reports.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Converged(_) => "converged",
            Self::NotConverged(_) => "did not converge",
            Self::StoppedByObserver(_) => "stopped by observer",
            Self::Diverged => "the method is divergent",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diverged_has_no_solution() {
        let outcome: Outcome<f64, f64> = Outcome::Diverged;

        assert!(outcome.is_diverged());
        assert!(outcome.solution().is_none());
        assert!(outcome.converged().is_none());
    }

    #[test]
    fn not_converged_keeps_last_estimate() {
        let outcome = Outcome::NotConverged(Solution {
            x: 1.5,
            residual: 0.25,
            iters: 100,
        });

        assert!(!outcome.is_converged());
        assert_eq!(outcome.solution().map(|s| s.iters), Some(100));
        assert_eq!(outcome.label(), "did not converge");
    }
}
