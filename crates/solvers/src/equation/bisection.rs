//! Bisection on a bracketed interval.
//!
//! The bracket is halved until its width drops below `2·x_tol` or a midpoint
//! lands exactly on a root. Convergence is guaranteed for a continuous
//! function whose endpoint residuals differ in sign.

mod action;
mod bracket;
mod config;
mod error;
mod event;

pub use action::Action;
pub use bracket::{Bracket, BracketError};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;

use numlab_core::{Observer, Outcome, Solution};

use bracket::ordered;

/// Finds a root of `f` inside `bracket` using bisection.
///
/// Observers see each midpoint evaluation together with the bracket it
/// halves, and may stop the run early.
///
/// An endpoint whose residual is exactly zero is returned as converged with
/// zero iterations. Reaching `max_iters` yields [`Outcome::NotConverged`]
/// carrying the midpoint of the final bracket.
///
/// # Errors
///
/// Returns an error if the bracket is invalid (non-finite, zero width, or no
/// sign change) or if `f` produces a non-finite residual.
pub fn solve<F, Obs>(
    f: F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Outcome<f64, f64>, Error>
where
    F: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    let [left, right] = ordered(bracket)?;

    let left_residual = residual(&f, left)?;
    #[allow(clippy::float_cmp)]
    if left_residual == 0.0 {
        return Ok(Outcome::Converged(Solution {
            x: left,
            residual: left_residual,
            iters: 0,
        }));
    }

    let right_residual = residual(&f, right)?;
    #[allow(clippy::float_cmp)]
    if right_residual == 0.0 {
        return Ok(Outcome::Converged(Solution {
            x: right,
            residual: right_residual,
            iters: 0,
        }));
    }

    let mut bracket = Bracket::new([left, right], left_residual, right_residual)?;

    for iter in 1..=config.max_iters() {
        let mid = bracket.midpoint();
        let mid_residual = residual(&f, mid)?;
        let solution = Solution {
            x: mid,
            residual: mid_residual,
            iters: iter,
        };

        let event = Event {
            iter,
            bracket: bracket.as_array(),
            x: mid,
            residual: mid_residual,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Outcome::StoppedByObserver(solution));
        }

        #[allow(clippy::float_cmp)]
        if mid_residual == 0.0 || bracket.is_converged(config.x_tol()) {
            return Ok(Outcome::Converged(solution));
        }

        bracket.shrink(mid, mid_residual);
    }

    let x = bracket.midpoint();
    Ok(Outcome::NotConverged(Solution {
        x,
        residual: residual(&f, x)?,
        iters: config.max_iters(),
    }))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or `f` produces a non-finite
/// residual.
pub fn solve_unobserved<F>(
    f: F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Outcome<f64, f64>, Error>
where
    F: Fn(f64) -> f64,
{
    solve(f, bracket, config, ())
}

fn residual(f: impl Fn(f64) -> f64, x: f64) -> Result<f64, Error> {
    let residual = f(x);
    if residual.is_finite() {
        Ok(residual)
    } else {
        Err(Error::NonFiniteResidual { x, residual })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn cubic(x: f64) -> f64 {
        x.powi(3) + 0.3 * x.powi(2) - 5.7 * x + 2.2
    }

    #[test]
    fn finds_square_root() {
        let config = Config::new(1e-10, 200).expect("valid config");
        let outcome = solve_unobserved(|x| x * x - 9.0, [0.0, 10.0], &config).expect("should solve");

        let solution = outcome.converged().expect("converged");
        assert_relative_eq!(solution.x, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn converged_bracket_is_narrower_than_twice_the_tolerance() {
        let config = Config::default();

        let mut last_bracket = [0.0, 0.0];
        let observer = |event: &Event| {
            last_bracket = event.bracket;
            None
        };
        let outcome = solve(cubic, [0.0, 1.0], &config, observer).expect("should solve");

        let solution = outcome.converged().expect("converged");
        assert!(last_bracket[1] - last_bracket[0] < 2.0 * config.x_tol());
        assert!(solution.residual.abs() < 1e-2);
        assert_relative_eq!(solution.residual, cubic(solution.x));
    }

    #[test]
    fn zero_endpoint_converges_immediately() {
        let outcome =
            solve_unobserved(|x| x * x - 4.0, [2.0, 3.0], &Config::default()).expect("should solve");

        assert_eq!(
            outcome,
            Outcome::Converged(Solution {
                x: 2.0,
                residual: 0.0,
                iters: 0
            })
        );
    }

    #[test]
    fn exact_midpoint_root_stops_the_loop() {
        let outcome = solve_unobserved(|x| x - 1.0, [0.0, 2.0], &Config::default()).expect("should solve");

        let solution = outcome.converged().expect("converged");
        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.x, 1.0);
    }

    #[test]
    fn normalizes_reversed_bracket() {
        let config = Config::new(1e-10, 200).expect("valid config");
        let outcome = solve_unobserved(|x| x * x - 36.0, [10.0, 0.0], &config).expect("should solve");

        assert_relative_eq!(outcome.converged().expect("converged").x, 6.0, epsilon = 1e-9);
    }

    #[test]
    fn errors_on_no_sign_change() {
        let result = solve_unobserved(|x| x * x + 1.0, [-1.0, 1.0], &Config::default());

        assert!(matches!(
            result,
            Err(Error::InvalidBracket(BracketError::NoSignChange))
        ));
    }

    #[test]
    fn errors_on_degenerate_bracket() {
        let result = solve_unobserved(cubic, [5.0, 5.0], &Config::default());
        assert!(matches!(
            result,
            Err(Error::InvalidBracket(BracketError::ZeroWidth))
        ));

        let result = solve_unobserved(cubic, [f64::NAN, 5.0], &Config::default());
        assert!(matches!(
            result,
            Err(Error::InvalidBracket(BracketError::NonFinite))
        ));
    }

    #[test]
    fn errors_on_non_finite_residual() {
        let result = solve_unobserved(|x: f64| (x - 0.5).ln(), [0.0, 2.0], &Config::default());

        assert!(matches!(result, Err(Error::NonFiniteResidual { .. })));
    }

    #[test]
    fn iteration_cap_reports_not_converged() {
        let config = Config::new(1e-12, 5).expect("valid config");
        let outcome = solve_unobserved(cubic, [0.0, 1.0], &config).expect("should run");

        assert!(matches!(outcome, Outcome::NotConverged(Solution { iters: 5, .. })));
    }

    #[test]
    fn observer_can_stop_iteration() {
        let mut calls = 0usize;
        let observer = |event: &Event| {
            calls += 1;
            (event.iter >= 3).then_some(Action::StopEarly)
        };

        let config = Config::new(1e-12, 200).expect("valid config");
        let outcome = solve(cubic, [0.0, 1.0], &config, observer).expect("should stop cleanly");

        assert!(matches!(
            outcome,
            Outcome::StoppedByObserver(Solution { iters: 3, .. })
        ));
        assert_eq!(calls, 3);
    }
}
