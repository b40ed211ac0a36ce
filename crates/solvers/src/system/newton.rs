//! Newton's method for two-equation systems, in full and modified form.
//!
//! The full method rebuilds the Jacobian inverse at every iterate:
//!
//! ```text
//! v' = v − J⁻¹(v)·F(v)
//! ```
//!
//! The modified method inverts the Jacobian once at the start point and
//! reuses it. It is cheaper per step but may diverge; divergence is detected
//! when both components of the update grow from one iteration to the next.

mod action;
mod config;
mod error;
mod event;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;

use numlab_core::{Matrix2, Observer, Outcome, Solution, Vector2};

use super::EquationSystem;

/// Solves `F(v) = 0` from `v0` with the full Newton method.
///
/// Converges once the largest component of `|v' − v|` is within `x_tol`.
/// Reaching `max_iters` yields [`Outcome::NotConverged`].
///
/// # Errors
///
/// Returns an error if `v0` is not finite, if the Jacobian is singular at an
/// iterate, or if an iterate becomes non-finite.
pub fn solve<S, Obs>(
    system: &S,
    v0: Vector2,
    config: &Config,
    mut observer: Obs,
) -> Result<Outcome<Vector2, Vector2>, Error>
where
    S: EquationSystem + ?Sized,
    Obs: Observer<Event, Action>,
{
    check_start(v0)?;

    let mut v = v0;
    let mut residuals = system.residuals(v);

    for iter in 1..=config.max_iters() {
        let inverse = invert(system.jacobian(v), v)?;
        let next = v - inverse * residuals;
        if !next.is_finite() {
            return Err(Error::NonFiniteIterate { iter, at: next });
        }

        let delta = (next - v).abs();
        v = next;
        residuals = system.residuals(v);

        if let Some(outcome) = step(&mut observer, iter, v, delta, residuals, config) {
            return Ok(outcome);
        }
    }

    Ok(Outcome::NotConverged(Solution {
        x: v,
        residual: residuals,
        iters: config.max_iters(),
    }))
}

/// Solves `F(v) = 0` from `v0` with the modified Newton method.
///
/// Returns [`Outcome::Diverged`] when both components of the update strictly
/// increase compared with the previous iteration, or when an iterate becomes
/// non-finite.
///
/// # Errors
///
/// Returns an error if `v0` is not finite or the Jacobian at `v0` is
/// singular.
pub fn solve_modified<S, Obs>(
    system: &S,
    v0: Vector2,
    config: &Config,
    mut observer: Obs,
) -> Result<Outcome<Vector2, Vector2>, Error>
where
    S: EquationSystem + ?Sized,
    Obs: Observer<Event, Action>,
{
    check_start(v0)?;

    let inverse = invert(system.jacobian(v0), v0)?;
    let mut v = v0;
    let mut residuals = system.residuals(v);
    let mut previous: Option<Vector2> = None;

    for iter in 1..=config.max_iters() {
        let next = v - inverse * residuals;
        if !next.is_finite() {
            return Ok(Outcome::Diverged);
        }

        let delta = (next - v).abs();
        if previous.is_some_and(|p| delta.x > p.x && delta.y > p.y) {
            return Ok(Outcome::Diverged);
        }
        previous = Some(delta);

        v = next;
        residuals = system.residuals(v);

        if let Some(outcome) = step(&mut observer, iter, v, delta, residuals, config) {
            return Ok(outcome);
        }
    }

    Ok(Outcome::NotConverged(Solution {
        x: v,
        residual: residuals,
        iters: config.max_iters(),
    }))
}

/// Runs the full Newton method without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<S>(
    system: &S,
    v0: Vector2,
    config: &Config,
) -> Result<Outcome<Vector2, Vector2>, Error>
where
    S: EquationSystem + ?Sized,
{
    solve(system, v0, config, ())
}

/// Runs the modified Newton method without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve_modified`].
pub fn solve_modified_unobserved<S>(
    system: &S,
    v0: Vector2,
    config: &Config,
) -> Result<Outcome<Vector2, Vector2>, Error>
where
    S: EquationSystem + ?Sized,
{
    solve_modified(system, v0, config, ())
}

fn check_start(v0: Vector2) -> Result<(), Error> {
    if v0.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteStart { at: v0 })
    }
}

fn invert(jacobian: Matrix2, at: Vector2) -> Result<Matrix2, Error> {
    jacobian
        .inverse()
        .map_err(|err| Error::SingularJacobian { at, det: err.det })
}

/// Emits the iteration event and decides whether the run is over.
fn step<Obs>(
    observer: &mut Obs,
    iter: usize,
    v: Vector2,
    delta: Vector2,
    residuals: Vector2,
    config: &Config,
) -> Option<Outcome<Vector2, Vector2>>
where
    Obs: Observer<Event, Action>,
{
    let solution = Solution {
        x: v,
        residual: residuals,
        iters: iter,
    };

    let event = Event {
        iter,
        x: v,
        delta,
        residual: residuals,
    };

    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Some(Outcome::StoppedByObserver(solution));
    }

    (delta.max_component() <= config.x_tol()).then_some(Outcome::Converged(solution))
}
