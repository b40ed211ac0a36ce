//! Lab 3: Lagrange and Newton interpolation of `8π·√(12 + πx)` with
//! truncation error bounds and the narrowest range that meets a tolerance.

use numlab_core::{
    Analytic, Outcome, Plotter, Renderer, tabulate, tabulate_moved,
    output::{Figure, Series, Table},
};
use numlab_interp::{
    Interpolant, Lagrange, Newton,
    narrowing,
    truncation::{Reference, TruncationBound},
};
use numlab_observers::History;

use crate::{Error, sinks::Sinks};

/// The lab function paired with its closed-form derivatives.
pub type LabEvaluator = Analytic<fn(f64) -> f64, fn(usize, f64) -> Option<f64>>;

/// Inputs of the interpolation lab.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(default))]
pub struct Config {
    /// Interval that is tabulated.
    pub domain: [f64; 2],
    pub partitions: usize,
    /// Relative bound the narrowed range must meet.
    pub tolerance: f64,
    /// Point at which the interpolants and bounds are reported.
    pub probe: f64,
    /// Position of the second probe as a fraction of the narrowed range.
    pub range_probe: f64,
    /// Degree of the Newton polynomial.
    pub newton_degree: usize,
    pub max_iters: usize,
    /// Points per sampled curve.
    pub samples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: [0.0, 3.5],
            partitions: 4,
            tolerance: 1e-4,
            probe: 1.3,
            range_probe: 0.3,
            newton_degree: 3,
            max_iters: 10_000,
            samples: 200,
        }
    }
}

/// Relative truncation bounds at the probe, one per reference value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Errors {
    pub function: f64,
    pub lagrange: f64,
    pub newton: f64,
}

/// Results of the interpolation lab.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// `f` at the probe.
    pub value: f64,
    pub lagrange: f64,
    pub newton: f64,
    /// The Lagrange polynomial evaluated at each node.
    pub node_values: Vec<f64>,
    pub errors: Errors,
    pub range: Outcome<[f64; 2], f64>,
    /// Bound at the probe inside the narrowed range, if one was found.
    pub range_error: Option<f64>,
}

#[must_use]
pub fn function(x: f64) -> f64 {
    8.0 * std::f64::consts::PI * (12.0 + std::f64::consts::PI * x).sqrt()
}

/// The derivative of [`function`] of any order.
#[must_use]
pub fn derivative(order: usize, x: f64) -> Option<f64> {
    use std::f64::consts::PI;

    #[allow(clippy::cast_precision_loss)]
    let falling: f64 = (0..order).map(|k| 0.5 - k as f64).product();
    #[allow(clippy::cast_precision_loss)]
    let power = 0.5 - order as f64;
    let order = i32::try_from(order).ok()?;
    Some(8.0 * PI * falling * PI.powi(order) * (12.0 + PI * x).powf(power))
}

#[must_use]
pub fn evaluator() -> LabEvaluator {
    Analytic::new(function as fn(f64) -> f64, derivative as fn(usize, f64) -> Option<f64>)
}

/// Interpolates the lab function, bounds the error, and narrows the range.
///
/// # Errors
///
/// Returns an error if the config is invalid, the domain cannot be
/// tabulated, or a sink fails.
pub fn run<R: Renderer, P: Plotter>(config: &Config, renderer: R, plotter: P) -> Result<Report, Error> {
    let mut sinks = Sinks::new(renderer, plotter);
    let evaluator = evaluator();
    let [from, to] = config.domain;

    let grid = tabulate(function, from, to, config.partitions)?;
    let lagrange = Lagrange::new(&grid)?;
    let newton = Newton::with_degree(&grid, config.newton_degree)?;

    let x = config.probe;
    let value = function(x);
    sinks.value("x", x)?;
    sinks.value("Function value", value)?;
    sinks.value("Lagrange solution", lagrange.eval(x))?;
    sinks.value("Newton solution", newton.eval(x))?;

    let node_values = lagrange.node_values();
    sinks.table(
        &Table::new("Lagrange polynomial", &["x", "f(x)", "L(x)"])
            .column(grid.x())
            .column(grid.y())
            .column(node_values.clone()),
    )?;

    let bound = TruncationBound::with_newton_degree(&evaluator, &grid, config.newton_degree)?;
    let errors = Errors {
        function: bound.relative(x, Reference::Function),
        lagrange: bound.relative(x, Reference::Lagrange),
        newton: bound.relative(x, Reference::Newton),
    };
    sinks.value("Error", errors.function)?;
    sinks.value("Lagrange error", errors.lagrange)?;
    sinks.value("Newton error", errors.newton)?;

    sinks.plot(
        &Figure::new("Function, Lagrange and Newton")
            .x_domain(config.domain)
            .y_domain([80.0, 120.0])
            .with(Series::sampled("f(x)", function, config.domain, config.samples))
            .with(Series::sampled("Lagrange", |x| lagrange.eval(x), config.domain, config.samples))
            .with(Series::sampled("Newton", |x| newton.eval(x), config.domain, config.samples)),
    )?;

    let moved = tabulate_moved(function, from, to, config.partitions)?;
    let moved_bound = TruncationBound::new(&evaluator, &moved)?;
    sinks.plot(
        &Figure::new("Errors").x_domain(config.domain).with(Series::sampled(
            "relative bound",
            |x| moved_bound.relative(x, Reference::Function),
            config.domain,
            config.samples,
        )),
    )?;

    let narrowing_config = narrowing::Config::new(config.tolerance, config.partitions, config.max_iters)?;
    let mut history = History::new();
    let range = narrowing::narrow(&evaluator, config.domain, &narrowing_config, &mut history)?;
    sinks.outcome(
        "Valuable range",
        &range,
        |[left, right]| format!("[{left:.6}, {right:.6}]"),
        ToString::to_string,
    )?;

    let range_error = match range {
        Outcome::Converged(solution) => {
            let [left, right] = solution.x;
            let narrowed = tabulate(function, left, right, config.partitions)?;
            let probe = left + config.range_probe * (right - left);
            let error = TruncationBound::new(&evaluator, &narrowed)?.relative(probe, Reference::Function);
            sinks.value("Range probe", probe)?;
            sinks.value("Range error", error)?;
            Some(error)
        }
        _ => None,
    };

    Ok(Report {
        value,
        lagrange: lagrange.eval(x),
        newton: newton.eval(x),
        node_values,
        errors,
        range,
        range_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use numlab_core::{CentralDifference, Evaluator, Solution};
    use numlab_observers::FigureRecorder;

    #[test]
    fn closed_form_derivatives_match_finite_differences() {
        let numeric = CentralDifference::new(function);
        for order in 1..=2 {
            assert_relative_eq!(
                derivative(order, 1.2).expect("available"),
                numeric.derivative(order, 1.2).expect("available"),
                max_relative = 1e-3
            );
        }
    }

    #[test]
    fn interpolants_track_the_function_at_the_probe() {
        let report = run(&Config::default(), (), ()).expect("lab should run");

        assert_relative_eq!(report.lagrange, report.value, max_relative = 1e-4);
        assert_relative_eq!(report.newton, report.value, max_relative = 1e-4);
        for (node_value, x) in report.node_values.iter().zip([0.0, 0.875, 1.75, 2.625, 3.5]) {
            assert_relative_eq!(*node_value, function(x), max_relative = 1e-12);
        }
    }

    #[test]
    fn truncation_errors_share_one_scale() {
        let errors = run(&Config::default(), (), ()).expect("lab should run").errors;

        assert_relative_eq!(errors.function, 1.1277e-6, max_relative = 1e-3);
        assert_relative_eq!(errors.lagrange, errors.function, max_relative = 1e-4);
        assert_relative_eq!(errors.newton, errors.function, max_relative = 1e-4);
    }

    #[test]
    fn whole_domain_already_meets_the_tolerance() {
        let report = run(&Config::default(), (), ()).expect("lab should run");

        assert!(matches!(
            report.range,
            Outcome::Converged(Solution { x: [0.0, 3.5], iters: 0, .. })
        ));
        assert_relative_eq!(
            report.range_error.expect("range found"),
            7.9187e-7,
            max_relative = 1e-3
        );
    }

    #[test]
    fn error_curve_stays_small_between_midpoints() {
        let mut figures = FigureRecorder::new();
        run(&Config::default(), (), &mut figures).expect("lab should run");

        let errors = figures.find("Errors").expect("error figure");
        let worst = errors.series[0].points.iter().map(|p| p[1]).fold(0.0, f64::max);
        assert!(worst < 1e-4);
    }
}
