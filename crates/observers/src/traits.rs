//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasIteration`]: events that carry an iteration (or step) counter
//! - [`HasResidual`]: events that carry a scalar residual
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use numlab_core::Observer;
//! use numlab_observers::traits::{CanStopEarly, HasIteration, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//! }
//!
//! impl<E: HasIteration + HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.iteration() >= self.min_iters && event.residual().abs() < self.tolerance)
//!             .then(A::stop_early)
//!     }
//! }
//! ```

use numlab_interp::narrowing;
use numlab_solvers::{
    equation::{bisection, newton},
    ode,
    system,
};

/// An event that carries an iteration counter.
pub trait HasIteration {
    /// Returns the iteration (or integration step) this event reports.
    fn iteration(&self) -> usize;
}

/// An event that carries a scalar residual.
pub trait HasResidual {
    /// Returns the residual for this event.
    ///
    /// Vector-valued residuals report their largest absolute component.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- HasIteration ---

impl HasIteration for bisection::Event {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl HasIteration for newton::Event {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl HasIteration for system::newton::Event {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl HasIteration for ode::Event {
    fn iteration(&self) -> usize {
        self.step
    }
}

impl HasIteration for narrowing::Event {
    fn iteration(&self) -> usize {
        self.iter
    }
}

// --- HasResidual ---

impl HasResidual for bisection::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

impl HasResidual for newton::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

impl HasResidual for system::newton::Event {
    fn residual(&self) -> f64 {
        self.residual.abs().max_component()
    }
}

/// The worst sampled truncation bound plays the role of a residual.
impl HasResidual for narrowing::Event {
    fn residual(&self) -> f64 {
        self.worst
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for system::newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for ode::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for narrowing::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use numlab_core::{Observer, Outcome, Solution, Vector2};

    struct StopAfter(usize);

    impl<E: HasIteration, A: CanStopEarly> Observer<E, A> for StopAfter {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.iteration() >= self.0).then(A::stop_early)
        }
    }

    #[test]
    fn one_observer_stops_different_solvers() {
        let config = bisection::Config::new(1e-12, 100).expect("valid config");
        let outcome = bisection::solve(|x| x * x - 2.0, [0.0, 2.0], &config, StopAfter(4))
            .expect("should stop cleanly");
        assert!(matches!(
            outcome,
            Outcome::StoppedByObserver(Solution { iters: 4, .. })
        ));

        let config = newton::Config::new(1e-14, 0.5, 0.5, 100).expect("valid config");
        let outcome = newton::solve(|x| x * x - 2.0, 1.0, &config, StopAfter(2))
            .expect("should stop cleanly");
        assert!(matches!(
            outcome,
            Outcome::StoppedByObserver(Solution { iters: 2, .. })
        ));
    }

    #[test]
    fn system_residual_is_largest_component() {
        let event = system::newton::Event {
            iter: 1,
            x: Vector2::new(0.0, 0.0),
            delta: Vector2::new(0.1, 0.1),
            residual: Vector2::new(0.5, -2.0),
        };

        assert_eq!(event.residual(), 2.0);
        assert_eq!(event.iteration(), 1);
    }

    #[test]
    fn ode_iteration_is_the_step_index() {
        let event = ode::Event {
            step: 7,
            x: 1.35,
            y: 0.9,
        };

        assert_eq!(event.iteration(), 7);
    }
}
