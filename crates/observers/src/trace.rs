use numlab_core::Observer;
use tracing::Level;

use crate::traits::{HasIteration, HasResidual};

/// Logs every solver event through [`tracing`].
///
/// Each event becomes a `tracing` event at the configured level with
/// `solver`, `iter` and `residual` fields. Never returns an action.
#[derive(Debug, Clone, Copy)]
pub struct TraceObserver {
    solver: &'static str,
    level: Level,
}

impl TraceObserver {
    /// Creates an observer that logs at `DEBUG` under the given solver name.
    #[must_use]
    pub fn new(solver: &'static str) -> Self {
        Self {
            solver,
            level: Level::DEBUG,
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }
}

impl<E, A> Observer<E, A> for TraceObserver
where
    E: HasIteration + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let (solver, iter, residual) = (self.solver, event.iteration(), event.residual());
        match self.level {
            Level::ERROR => tracing::error!(solver, iter, residual, "iteration"),
            Level::WARN => tracing::warn!(solver, iter, residual, "iteration"),
            Level::INFO => tracing::info!(solver, iter, residual, "iteration"),
            Level::DEBUG => tracing::debug!(solver, iter, residual, "iteration"),
            _ => tracing::trace!(solver, iter, residual, "iteration"),
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use numlab_solvers::equation::newton;

    #[test]
    fn observes_without_steering() {
        let config = newton::Config::default();
        let unobserved = newton::solve_unobserved(|x| x * x - 2.0, 1.0, &config).expect("should solve");
        let traced = newton::solve(
            |x| x * x - 2.0,
            1.0,
            &config,
            TraceObserver::new("newton").with_level(Level::INFO),
        )
        .expect("should solve");

        assert_eq!(traced, unobserved);
    }
}
