//! Fixed-step integrators for first-order ODEs `y' = f(x, y)`.
//!
//! [`Method::solve`] tabulates the solution on `x0 + k·h` with explicit Euler
//! or classic fourth-order Runge–Kutta. [`step_doubling`] repeats the run at
//! `2h` and reports the largest difference on shared nodes, which serves as
//! the error estimate of the fine run.
//!
//! # Example
//!
//! ```
//! use numlab_solvers::ode::{InitialValueProblem, Method};
//!
//! let problem = InitialValueProblem::new(0.0, 1.0, 1.0);
//! let solution = Method::RungeKutta4
//!     .solve_unobserved(|_x, y| y, &problem, 0.1)
//!     .unwrap();
//!
//! let (x, y) = solution.grid.node(10).unwrap();
//! assert!((x - 1.0).abs() < 1e-12);
//! assert!((y - 1f64.exp()).abs() < 1e-5);
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use numlab_core::{Grid, MAX_NODES, Observer};

/// Nodes closer than this are treated as the same point by [`delta`].
pub const NODE_MATCH_TOL: f64 = 1e-4;

/// The interval `[x0, xn]` and the starting value `y(x0) = y0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialValueProblem {
    pub x0: f64,
    pub xn: f64,
    pub y0: f64,
}

impl InitialValueProblem {
    #[must_use]
    pub fn new(x0: f64, xn: f64, y0: f64) -> Self {
        Self { x0, xn, y0 }
    }

    /// Returns the number of steps of size `h` that cover the interval,
    /// rounded to the nearest whole step.
    ///
    /// # Errors
    ///
    /// Returns an error if the problem or step is not usable, including a
    /// step so small that the run would exceed [`MAX_NODES`].
    pub fn steps(&self, h: f64) -> Result<usize, Error> {
        for value in [self.x0, self.xn, self.y0] {
            if !value.is_finite() {
                return Err(Error::NonFiniteInput { value });
            }
        }
        if self.xn <= self.x0 {
            return Err(Error::EmptyInterval {
                x0: self.x0,
                xn: self.xn,
            });
        }
        if !h.is_finite() || h <= 0.0 {
            return Err(Error::InvalidStep { h });
        }

        let width = self.xn - self.x0;
        let count = (width / h).round();
        #[allow(clippy::cast_precision_loss)]
        if count >= MAX_NODES as f64 {
            return Err(Error::StepTooSmall { h, width });
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = count as usize;
        if steps == 0 {
            return Err(Error::StepTooLarge { h, width });
        }
        Ok(steps)
    }
}

/// A single-step integration scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Explicit Euler, first order.
    Euler,
    /// Classic Runge–Kutta, fourth order.
    RungeKutta4,
}

impl Method {
    /// Advances `y` from `x` to `x + h`.
    pub fn advance(self, f: impl Fn(f64, f64) -> f64, x: f64, y: f64, h: f64) -> f64 {
        match self {
            Method::Euler => y + h * f(x, y),
            Method::RungeKutta4 => {
                let k1 = f(x, y);
                let k2 = f(x + h / 2.0, y + k1 * h / 2.0);
                let k3 = f(x + h / 2.0, y + k2 * h / 2.0);
                let k4 = f(x + h, y + k3 * h);
                y + (h / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4)
            }
        }
    }

    /// Tabulates the solution of `y' = f(x, y)` on `x0 + k·h`.
    ///
    /// The observer receives the initial node as step 0 and every later
    /// node as it is produced; [`Action::StopEarly`] ends the run with the
    /// nodes computed so far.
    ///
    /// # Errors
    ///
    /// Returns an error if the problem or step is invalid or the solution
    /// becomes non-finite.
    pub fn solve<F, Obs>(
        self,
        f: F,
        problem: &InitialValueProblem,
        h: f64,
        mut observer: Obs,
    ) -> Result<Solution, Error>
    where
        F: Fn(f64, f64) -> f64,
        Obs: Observer<Event, Action>,
    {
        let steps = problem.steps(h)?;

        let mut xs = Vec::with_capacity(steps + 1);
        let mut ys = Vec::with_capacity(steps + 1);
        let (mut x, mut y) = (problem.x0, problem.y0);
        xs.push(x);
        ys.push(y);

        let mut status = Status::Complete;
        let mut completed = 0;

        if let Some(Action::StopEarly) = observer.observe(&Event { step: 0, x, y }) {
            status = Status::StoppedByObserver;
        } else {
            for step in 1..=steps {
                y = self.advance(&f, x, y, h);
                #[allow(clippy::cast_precision_loss)]
                let offset = step as f64 * h;
                x = problem.x0 + offset;
                if !y.is_finite() {
                    return Err(Error::NonFiniteState { step, x });
                }

                xs.push(x);
                ys.push(y);
                completed = step;

                if let Some(Action::StopEarly) = observer.observe(&Event { step, x, y }) {
                    status = Status::StoppedByObserver;
                    break;
                }
            }
        }

        Ok(Solution {
            status,
            grid: Grid::new(xs, ys)?,
            steps: completed,
        })
    }

    /// Tabulates the solution without observation.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Method::solve`].
    pub fn solve_unobserved<F>(self, f: F, problem: &InitialValueProblem, h: f64) -> Result<Solution, Error>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.solve(f, problem, h, ())
    }
}

/// Runs explicit Euler without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`Method::solve`].
pub fn euler<F>(f: F, problem: &InitialValueProblem, h: f64) -> Result<Grid, Error>
where
    F: Fn(f64, f64) -> f64,
{
    Ok(Method::Euler.solve_unobserved(f, problem, h)?.grid)
}

/// Runs classic Runge–Kutta without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`Method::solve`].
pub fn rk4<F>(f: F, problem: &InitialValueProblem, h: f64) -> Result<Grid, Error>
where
    F: Fn(f64, f64) -> f64,
{
    Ok(Method::RungeKutta4.solve_unobserved(f, problem, h)?.grid)
}

/// Solutions at `h` and `2h` and the largest difference between them.
#[derive(Debug, Clone, PartialEq)]
pub struct StepDoubling {
    pub single: Grid,
    pub double: Grid,
    pub delta: f64,
}

/// Solves at `h` and `2h` and compares the runs with [`delta`].
///
/// # Errors
///
/// Returns an error if either run fails or the grids share no nodes.
pub fn step_doubling<F>(method: Method, f: F, problem: &InitialValueProblem, h: f64) -> Result<StepDoubling, Error>
where
    F: Fn(f64, f64) -> f64,
{
    let single = method.solve_unobserved(&f, problem, h)?.grid;
    let double = method.solve_unobserved(&f, problem, 2.0 * h)?.grid;
    let delta = delta(&single, &double)?;

    Ok(StepDoubling {
        single,
        double,
        delta,
    })
}

/// Returns the largest `|y_single[2i] − y_double[i]|` over nodes where the
/// two grids agree to within [`NODE_MATCH_TOL`].
///
/// # Errors
///
/// Returns [`Error::NoMatchingNodes`] if no node pair matches.
pub fn delta(single: &Grid, double: &Grid) -> Result<f64, Error> {
    (0..double.len())
        .filter_map(|i| {
            let (xs, ys) = single.node(2 * i)?;
            let (xd, yd) = double.node(i)?;
            ((xs - xd).abs() < NODE_MATCH_TOL).then_some((ys - yd).abs())
        })
        .reduce(f64::max)
        .ok_or(Error::NoMatchingNodes)
}
