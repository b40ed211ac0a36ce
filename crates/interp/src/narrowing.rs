//! Valuable-range narrowing.
//!
//! Shrinks an interval from both ends until the truncation bound of the
//! interpolating polynomial stays below a tolerance. Each iteration
//! re-tabulates the current range and samples the bound at the cell
//! midpoints, since at the nodes themselves `ω = 0` and the bound vanishes.

use numlab_core::{Evaluator, Observer, Outcome, Solution, tabulate_closed, tabulate_moved};
use thiserror::Error;

use crate::{
    InterpError,
    truncation::{Reference, TruncationBound},
};

/// Configuration for [`narrow`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    partitions: usize,
    shrink_factor: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a narrowing config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("partition count must be at least 1")]
    Partitions,

    #[error("shrink factor must be finite and positive")]
    ShrinkFactor,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-4,
            partitions: 4,
            shrink_factor: 100.0,
            max_iters: 10_000,
        }
    }
}

impl Config {
    /// Creates a config that moves each end by `100·tolerance` per
    /// iteration.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive or
    /// `partitions` is zero.
    pub fn new(tolerance: f64, partitions: usize, max_iters: usize) -> Result<Self, ConfigError> {
        Self::with_shrink_factor(tolerance, partitions, 100.0, max_iters)
    }

    /// Creates a config that moves each end by `shrink_factor·tolerance`
    /// per iteration.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of range.
    pub fn with_shrink_factor(
        tolerance: f64,
        partitions: usize,
        shrink_factor: f64,
        max_iters: usize,
    ) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if partitions == 0 {
            return Err(ConfigError::Partitions);
        }
        if !shrink_factor.is_finite() || shrink_factor <= 0.0 {
            return Err(ConfigError::ShrinkFactor);
        }

        Ok(Self {
            tolerance,
            partitions,
            shrink_factor,
            max_iters,
        })
    }

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    #[must_use]
    pub fn partitions(&self) -> usize {
        self.partitions
    }

    /// Returns how far each end moves per iteration.
    #[must_use]
    pub fn shrink_step(&self) -> f64 {
        self.shrink_factor * self.tolerance
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

/// Event emitted once per examined range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Number of shrinks applied so far.
    pub iter: usize,
    /// The range being examined.
    pub range: [f64; 2],
    /// Largest sampled bound on that range.
    pub worst: f64,
}

/// Control actions supported by [`narrow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop and report the range examined last.
    StopEarly,
}

/// Narrows `range` until the relative truncation bound of `evaluator`'s
/// interpolant is below the tolerance at every cell midpoint.
///
/// On success the outcome holds the surviving `[left, right]`, the worst
/// sampled bound, and the number of shrinks. Hitting `max_iters` or
/// shrinking the range to nothing yields [`Outcome::NotConverged`] with the
/// last range examined.
///
/// # Errors
///
/// Returns an error if a range cannot be tabulated, the evaluator cannot
/// supply the needed derivative, or the bound is not finite at a sample
/// (for example where the function is undefined).
pub fn narrow<E, Obs>(
    evaluator: &E,
    range: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Outcome<[f64; 2], f64>, InterpError>
where
    E: Evaluator,
    Obs: Observer<Event, Action>,
{
    let [mut left, mut right] = if range[0] <= range[1] {
        range
    } else {
        [range[1], range[0]]
    };

    let mut iter = 0;
    loop {
        let worst = worst_bound(evaluator, [left, right], config.partitions())?;
        let solution = Solution {
            x: [left, right],
            residual: worst,
            iters: iter,
        };

        let event = Event {
            iter,
            range: [left, right],
            worst,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Outcome::StoppedByObserver(solution));
        }

        if worst < config.tolerance() {
            return Ok(Outcome::Converged(solution));
        }

        let step = config.shrink_step();
        if iter >= config.max_iters() || right - left <= 2.0 * step {
            return Ok(Outcome::NotConverged(solution));
        }
        left += step;
        right -= step;
        iter += 1;
    }
}

/// Runs [`narrow`] without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`narrow`].
pub fn narrow_unobserved<E: Evaluator>(
    evaluator: &E,
    range: [f64; 2],
    config: &Config,
) -> Result<Outcome<[f64; 2], f64>, InterpError> {
    narrow(evaluator, range, config, ())
}

/// Largest relative bound over the cell midpoints of `range`.
fn worst_bound<E: Evaluator>(evaluator: &E, range: [f64; 2], partitions: usize) -> Result<f64, InterpError> {
    let [left, right] = range;
    let grid = tabulate_closed(|x| evaluator.value(x), left, right, partitions)?;
    let bound = TruncationBound::new(evaluator, &grid)?;
    let samples = tabulate_moved(|x| x, left, right, partitions)?;

    samples.x().iter().try_fold(0.0, |worst: f64, &x| {
        let sample = bound.relative(x, Reference::Function);
        if sample.is_finite() {
            Ok(worst.max(sample))
        } else {
            Err(InterpError::NonFiniteBound { x })
        }
    })
}
