//! Newton's method with a forward-difference slope.
//!
//! Each iteration replaces the derivative with the secant slope over a step
//! `h`, then shrinks `h` by a constant factor:
//!
//! ```text
//! x' = x − f(x)·h / (f(x + h) − f(x))
//! h' = h·delta
//! ```
//!
//! The run stops once successive iterates are within `x_tol` of each other.

mod action;
mod config;
mod error;
mod event;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;

use numlab_core::{Observer, Outcome, Solution};

/// Finds a root of `f` starting from `x0`.
///
/// Reaching `max_iters` yields [`Outcome::NotConverged`] with the last
/// iterate.
///
/// # Errors
///
/// Returns an error if `x0` is not finite, if the secant slope vanishes or
/// is not finite, or if an iterate becomes non-finite.
pub fn solve<F, Obs>(
    f: F,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Outcome<f64, f64>, Error>
where
    F: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    if !x0.is_finite() {
        return Err(Error::NonFiniteStart { x: x0 });
    }

    let mut x = x0;
    let mut h = config.step();
    let mut fx = f(x);

    for iter in 1..=config.max_iters() {
        let rise = f(x + h) - fx;
        #[allow(clippy::float_cmp)]
        if rise == 0.0 || !rise.is_finite() {
            return Err(Error::ZeroSlope { x, h });
        }

        let next = x - fx * h / rise;
        if !next.is_finite() {
            return Err(Error::NonFiniteIterate { iter, x: next });
        }

        let step = (next - x).abs();
        x = next;
        fx = f(x);
        h *= config.shrink();

        let solution = Solution {
            x,
            residual: fx,
            iters: iter,
        };

        let event = Event {
            iter,
            x,
            step,
            residual: fx,
            h,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Outcome::StoppedByObserver(solution));
        }

        if step <= config.x_tol() {
            return Ok(Outcome::Converged(solution));
        }
    }

    Ok(Outcome::NotConverged(Solution {
        x,
        residual: fx,
        iters: config.max_iters(),
    }))
}

/// Runs the secant-slope Newton method without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F>(f: F, x0: f64, config: &Config) -> Result<Outcome<f64, f64>, Error>
where
    F: Fn(f64) -> f64,
{
    solve(f, x0, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn cubic(x: f64) -> f64 {
        x.powi(3) + 0.3 * x.powi(2) - 5.7 * x + 2.2
    }

    #[test]
    fn converges_to_a_cubic_root() {
        let outcome = solve_unobserved(cubic, 0.0, &Config::default()).expect("should solve");

        let solution = outcome.converged().expect("converged");
        assert!(solution.residual.abs() < 1e-3);
        assert_relative_eq!(solution.residual, cubic(solution.x));
    }

    #[test]
    fn matches_bisection_on_the_same_bracket() {
        use crate::equation::bisection;

        let tight = Config::new(1e-10, 0.5, 0.5, 100).expect("valid config");
        let newton = solve_unobserved(cubic, 0.0, &tight)
            .expect("should solve")
            .converged()
            .expect("converged");

        let bracketed = bisection::Config::new(1e-10, 200).expect("valid config");
        let bisection = bisection::solve_unobserved(cubic, [0.0, 1.0], &bracketed)
            .expect("should solve")
            .converged()
            .expect("converged");

        assert_relative_eq!(newton.x, bisection.x, epsilon = 1e-8);
    }

    #[test]
    fn step_shrinks_every_iteration() {
        let mut steps = Vec::new();
        let observer = |event: &Event| {
            steps.push(event.h);
            None
        };
        solve(cubic, 3.0, &Config::default(), observer).expect("should solve");

        assert!(steps.len() >= 2);
        for pair in steps.windows(2) {
            assert_relative_eq!(pair[1], 0.5 * pair[0]);
        }
    }

    #[test]
    fn flat_function_is_a_zero_slope_error() {
        let result = solve_unobserved(|_| 1.0, 0.0, &Config::default());

        assert!(matches!(result, Err(Error::ZeroSlope { .. })));
    }

    #[test]
    fn rejects_non_finite_start() {
        let result = solve_unobserved(cubic, f64::INFINITY, &Config::default());

        assert!(matches!(result, Err(Error::NonFiniteStart { .. })));
    }

    #[test]
    fn iteration_cap_reports_not_converged() {
        // No real root: the iterates wander without settling.
        let config = Config::new(1e-12, 0.5, 0.9, 10).expect("valid config");
        let outcome = solve_unobserved(|x| x * x + 1.0, 0.3, &config).expect("should run");

        assert!(matches!(outcome, Outcome::NotConverged(Solution { iters: 10, .. })));
    }

    #[test]
    fn observer_can_stop_iteration() {
        let observer = |event: &Event| (event.iter == 1).then_some(Action::StopEarly);
        let outcome = solve(cubic, 3.0, &Config::default(), observer).expect("should stop");

        assert!(matches!(
            outcome,
            Outcome::StoppedByObserver(Solution { iters: 1, .. })
        ));
    }
}
