//! Lab 2: the system
//!
//! ```text
//! sin(x + 0.5) − 1 − y = 0
//! x + cos(y − 2)       = 0
//! ```
//!
//! solved with full and modified Newton from the same starting point.

use numlab_core::{
    Matrix2, Outcome, Plotter, Renderer, Vector2,
    output::{Figure, Series, Style},
};
use numlab_observers::History;
use numlab_solvers::system::{FnSystem, newton};

use crate::{Error, sinks::Sinks};

/// Inputs of the nonlinear-system lab.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(default))]
pub struct Config {
    /// Starting point `(x0, y0)`.
    pub start: [f64; 2],
    pub tolerance: f64,
    pub max_iters: usize,
    /// Range of both axes in the plot.
    pub plot_domain: [f64; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start: [0.0, 0.0],
            tolerance: 1e-5,
            max_iters: 100,
            plot_domain: [-1.5, 1.5],
        }
    }
}

/// Results of the nonlinear-system lab.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub newton: Outcome<Vector2, Vector2>,
    pub modified: Outcome<Vector2, Vector2>,
    pub newton_history: History,
    pub modified_history: History,
}

#[must_use]
pub fn residuals(v: Vector2) -> Vector2 {
    Vector2::new((v.x + 0.5).sin() - 1.0 - v.y, v.x + (v.y - 2.0).cos())
}

#[must_use]
pub fn jacobian(v: Vector2) -> Matrix2 {
    Matrix2::new([[(v.x + 0.5).cos(), -1.0], [1.0, -(v.y - 2.0).sin()]])
}

/// Runs full and modified Newton and reports both outcomes.
///
/// # Errors
///
/// Returns an error if the config is invalid, the Jacobian is singular where
/// it must be inverted, or a sink fails.
pub fn run<R: Renderer, P: Plotter>(config: &Config, renderer: R, plotter: P) -> Result<Report, Error> {
    let mut sinks = Sinks::new(renderer, plotter);
    let system = FnSystem::new(residuals, jacobian);
    let start = Vector2::from(config.start);
    let solver_config = newton::Config::new(config.tolerance, config.max_iters)?;

    let mut newton_history = History::new();
    let newton = newton::solve(&system, start, &solver_config, &mut newton_history)?;
    sinks.outcome("Newton", &newton, pair, scientific_pair)?;

    let mut modified_history = History::new();
    let modified = newton::solve_modified(&system, start, &solver_config, &mut modified_history)?;
    sinks.outcome("Modified Newton", &modified, pair, scientific_pair)?;

    let domain = config.plot_domain;
    let second = Series::sampled("x + cos(y − 2) = 0", |y| -(y - 2.0).cos(), domain, 400);
    let mut figure = Figure::new("Nonlinear system")
        .x_domain(domain)
        .y_domain(domain)
        .with(Series::sampled("sin(x + 0.5) − 1 − y = 0", |x| (x + 0.5).sin() - 1.0, domain, 400))
        .with(Series::new(
            second.name,
            second.points.into_iter().map(|[y, x]| [x, y]).collect(),
        ));
    if let Some(solution) = newton.solution() {
        figure = figure.with(Series::new("solution", vec![solution.x.to_array()]).style(Style::Points));
    }
    sinks.plot(&figure)?;

    Ok(Report {
        newton,
        modified,
        newton_history,
        modified_history,
    })
}

fn pair(v: &Vector2) -> String {
    format!("({:.6}, {:.6})", v.x, v.y)
}

fn scientific_pair(v: &Vector2) -> String {
    format!("({:e}, {:e})", v.x, v.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use numlab_observers::{FigureRecorder, TextRenderer};

    #[test]
    fn both_methods_agree_on_the_default_start() {
        let report = run(&Config::default(), (), ()).expect("lab should run");

        let full = report.newton.converged().expect("newton converges");
        let modified = report.modified.converged().expect("modified newton converges");

        assert_relative_eq!(full.x.x, 0.537_853, epsilon = 1e-5);
        assert_relative_eq!(full.x.y, -0.138_685, epsilon = 1e-5);
        assert_relative_eq!(modified.x.x, full.x.x, epsilon = 1e-4);
        assert_relative_eq!(modified.x.y, full.x.y, epsilon = 1e-4);
        assert!(modified.iters > full.iters);
        assert_eq!(report.newton_history.len(), full.iters);
    }

    #[test]
    fn analytic_jacobian_matches_finite_differences() {
        let v = Vector2::new(0.3, -0.7);
        let h = 1e-6;
        let exact = jacobian(v);

        let dx = (residuals(Vector2::new(v.x + h, v.y)) - residuals(v)) * (1.0 / h);
        let dy = (residuals(Vector2::new(v.x, v.y + h)) - residuals(v)) * (1.0 / h);

        assert_relative_eq!(exact[(0, 0)], dx.x, epsilon = 1e-5);
        assert_relative_eq!(exact[(1, 0)], dx.y, epsilon = 1e-5);
        assert_relative_eq!(exact[(0, 1)], dy.x, epsilon = 1e-5);
        assert_relative_eq!(exact[(1, 1)], dy.y, epsilon = 1e-5);
    }

    #[test]
    fn renders_status_lines_and_marks_the_solution() {
        let mut text = TextRenderer::new(Vec::new());
        let mut figures = FigureRecorder::new();
        run(&Config::default(), &mut text, &mut figures).expect("lab should run");

        let output = String::from_utf8(text.into_inner()).expect("utf-8 output");
        assert!(output.contains("Newton status: converged"));
        assert!(output.contains("Modified Newton status: converged"));

        let figure = figures.find("Nonlinear system").expect("system figure");
        assert_eq!(figure.series.len(), 3);
        assert_eq!(figure.series[2].style, Style::Points);
    }
}
