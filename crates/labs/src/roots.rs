//! Lab 1: a root of `x³ + 0.3x² − 5.7x + 2.2` by bisection and by Newton's
//! method with a shrinking secant step.

use numlab_core::{
    Outcome, Plotter, Renderer,
    output::{Figure, Series},
};
use numlab_observers::History;
use numlab_solvers::equation::{bisection, newton};

use crate::{Error, sinks::Sinks};

/// Inputs of the root-finding lab.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(default))]
pub struct Config {
    /// Interval searched by bisection.
    pub bracket: [f64; 2],
    /// Starting point for Newton's method.
    pub x0: f64,
    /// Tolerance on `x` shared by both methods.
    pub tolerance: f64,
    /// Initial secant step `h`.
    pub step: f64,
    /// Factor applied to `h` after every Newton iteration.
    pub shrink: f64,
    pub max_iters: usize,
    /// Range of the function plot.
    pub plot_domain: [f64; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bracket: [0.0, 1.0],
            x0: 3.0,
            tolerance: 1e-3,
            step: 0.5,
            shrink: 0.5,
            max_iters: 200,
            plot_domain: [-4.0, 3.0],
        }
    }
}

/// Results of the root-finding lab.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub bisection: Outcome<f64, f64>,
    pub newton: Outcome<f64, f64>,
    /// `[iteration, residual]` for every bisection midpoint.
    pub bisection_history: History,
    /// `[iteration, residual]` for every Newton iterate.
    pub newton_history: History,
}

#[must_use]
pub fn function(x: f64) -> f64 {
    x.powi(3) + 0.3 * x.powi(2) - 5.7 * x + 2.2
}

/// Runs both root finders and reports their solutions.
///
/// # Errors
///
/// Returns an error if the config is invalid, a solver rejects its input, or
/// a sink fails.
pub fn run<R: Renderer, P: Plotter>(config: &Config, renderer: R, plotter: P) -> Result<Report, Error> {
    let mut sinks = Sinks::new(renderer, plotter);

    let bisection_config = bisection::Config::new(config.tolerance, config.max_iters)?;
    let mut bisection_history = History::new();
    let bisection = bisection::solve(function, config.bracket, &bisection_config, &mut bisection_history)?;
    sinks.outcome("Bisection", &bisection, |x| format!("{x:.6}"), ToString::to_string)?;

    let newton_config = newton::Config::new(config.tolerance, config.step, config.shrink, config.max_iters)?;
    let mut newton_history = History::new();
    let newton = newton::solve(function, config.x0, &newton_config, &mut newton_history)?;
    sinks.outcome("Newton", &newton, |x| format!("{x:.6}"), ToString::to_string)?;

    sinks.plot(
        &Figure::new("x³ + 0.3x² − 5.7x + 2.2")
            .x_domain(config.plot_domain)
            .with(Series::sampled("f(x)", function, config.plot_domain, 400)),
    )?;
    sinks.plot(
        &Figure::new("Residual by iteration")
            .with(bisection_history.to_series("bisection"))
            .with(newton_history.to_series("Newton")),
    )?;

    Ok(Report {
        bisection,
        newton,
        bisection_history,
        newton_history,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use numlab_observers::FigureRecorder;

    #[test]
    fn both_methods_find_roots_of_the_cubic() {
        let report = run(&Config::default(), (), ()).expect("lab should run");

        let bisection = report.bisection.converged().expect("bisection converges");
        assert!((0.0..=1.0).contains(&bisection.x));
        assert!(bisection.residual.abs() < 1e-2);
        assert_eq!(report.bisection_history.len(), bisection.iters);

        let newton = report.newton.converged().expect("newton converges");
        assert_relative_eq!(newton.x, 2.0, epsilon = 1e-3);
        assert_eq!(report.newton_history.len(), newton.iters);
    }

    #[test]
    fn plots_function_and_convergence() {
        let mut figures = FigureRecorder::new();
        run(&Config::default(), (), &mut figures).expect("lab should run");

        assert_eq!(figures.figures().len(), 2);
        let history = figures.find("Residual by iteration").expect("convergence figure");
        assert_eq!(history.series.len(), 2);
    }

    #[test]
    fn bracket_without_sign_change_is_an_error() {
        let config = Config {
            bracket: [3.0, 4.0],
            ..Config::default()
        };

        assert!(matches!(
            run(&config, (), ()),
            Err(Error::Bisection(bisection::Error::InvalidBracket(_)))
        ));
    }

    #[test]
    fn invalid_shrink_is_a_config_error() {
        let config = Config {
            shrink: 1.5,
            ..Config::default()
        };

        assert!(matches!(run(&config, (), ()), Err(Error::NewtonConfig(_))));
    }
}
