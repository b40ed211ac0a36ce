//! Lab 6: `y' = 2/x² − y²`, `y(1) = 1` on `[1, 2]` by Runge–Kutta and Euler,
//! with step-doubling deltas and the exact solution for comparison.

use numlab_core::{
    Grid, Plotter, Renderer, tabulate_closed,
    output::{Figure, Series, Table},
};
use numlab_solvers::ode::{InitialValueProblem, Method, StepDoubling, step_doubling};

use crate::{Error, sinks::Sinks};

/// Inputs of the ODE lab.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(default))]
pub struct Config {
    pub x0: f64,
    pub xn: f64,
    pub y0: f64,
    pub step: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            x0: 1.0,
            xn: 2.0,
            y0: 1.0,
            step: 0.05,
        }
    }
}

/// Results of the ODE lab.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub rk4: StepDoubling,
    pub euler: StepDoubling,
    /// The exact solution on the nodes of the fine grids.
    pub exact: Grid,
    /// Largest `|y − y_exact|` of the fine Runge–Kutta grid.
    pub rk4_error: f64,
    /// Largest `|y − y_exact|` of the fine Euler grid.
    pub euler_error: f64,
}

/// The right-hand side `f(x, y)`.
#[must_use]
pub fn slope(x: f64, y: f64) -> f64 {
    2.0 / (x * x) - y * y
}

/// The exact solution `(4x³ − 1) / (x(1 + 2x³))` for `y(1) = 1`.
#[must_use]
pub fn exact(x: f64) -> f64 {
    (4.0 * x.powi(3) - 1.0) / (x * (1.0 + 2.0 * x.powi(3)))
}

/// Integrates with both methods and compares them against each other and
/// against the exact solution.
///
/// # Errors
///
/// Returns an error if the problem or step is unusable, the integration
/// blows up, or a sink fails.
pub fn run<R: Renderer, P: Plotter>(config: &Config, renderer: R, plotter: P) -> Result<Report, Error> {
    let mut sinks = Sinks::new(renderer, plotter);
    let problem = InitialValueProblem::new(config.x0, config.xn, config.y0);
    let steps = problem.steps(config.step)?;

    let rk4 = step_doubling(Method::RungeKutta4, slope, &problem, config.step)?;
    sinks.table(&grid_table("Runge-Kutta", &rk4.single))?;
    sinks.value("Δ(Runge-Kutta)", rk4.delta)?;

    let euler = step_doubling(Method::Euler, slope, &problem, config.step)?;
    sinks.table(&grid_table("Euler", &euler.single))?;
    sinks.value("Δ(Euler)", euler.delta)?;

    let exact_grid = tabulate_closed(exact, config.x0, config.xn, steps)?;
    sinks.table(&grid_table("Exact solution", &exact_grid))?;

    let rk4_error = max_error(&rk4.single);
    let euler_error = max_error(&euler.single);
    sinks.value("Largest Runge-Kutta error", rk4_error)?;
    sinks.value("Largest Euler error", euler_error)?;

    sinks.plot(
        &Figure::new("y' = 2/x² − y²")
            .x_domain([0.6, 3.4])
            .y_domain([-0.5, 2.5])
            .with(Series::new("Runge-Kutta", rk4.single.points()))
            .with(Series::new("Euler", euler.single.points()))
            .with(Series::sampled("exact", exact, [config.x0, config.xn], 200)),
    )?;

    Ok(Report {
        rk4,
        euler,
        exact: exact_grid,
        rk4_error,
        euler_error,
    })
}

fn grid_table(title: &str, grid: &Grid) -> Table {
    Table::new(title, &["x", "y"]).column(grid.x()).column(grid.y())
}

fn max_error(grid: &Grid) -> f64 {
    grid.iter().map(|(x, y)| (y - exact(x)).abs()).fold(0.0, f64::max)
}
