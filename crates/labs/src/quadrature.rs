//! Lab 5: `∫ √x·ln x dx` over `[1, 3]` by the trapezoid and Simpson rules,
//! checked against the Newton–Leibniz value.

use numlab_core::{
    Plotter, Renderer,
    output::{Figure, Series, Table},
};
use numlab_solvers::quadrature::{Estimate, Rule, newton_leibniz};

use crate::{Error, sinks::Sinks};

/// Inputs of the quadrature lab.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(default))]
pub struct Config {
    pub from: f64,
    pub to: f64,
    /// Requested step `h`; it is corrected so the interval count is a
    /// multiple of four.
    pub step: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            from: 1.0,
            to: 3.0,
            step: 0.1,
        }
    }
}

/// Results of the quadrature lab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub trapezoid: Estimate,
    pub simpson: Estimate,
    /// Newton–Leibniz value from the antiderivative.
    pub exact: f64,
}

#[must_use]
pub fn function(x: f64) -> f64 {
    x.sqrt() * x.ln()
}

/// `2x^{3/2}(3 ln x − 2) / 9`.
#[must_use]
pub fn antiderivative(x: f64) -> f64 {
    2.0 * x.powf(1.5) * (3.0 * x.ln() - 2.0) / 9.0
}

/// Integrates with both rules at `h` and `2h` and reports their Richardson
/// error estimates.
///
/// # Errors
///
/// Returns an error if the bounds or step are unusable or a sink fails.
pub fn run<R: Renderer, P: Plotter>(config: &Config, renderer: R, plotter: P) -> Result<Report, Error> {
    let mut sinks = Sinks::new(renderer, plotter);

    let trapezoid = Rule::Trapezoid.estimate(function, config.from, config.to, config.step)?;
    sinks.value("Trapezoid with h", trapezoid.fine)?;
    sinks.value("Trapezoid with 2h", trapezoid.coarse)?;
    sinks.value("Trapezoid error", trapezoid.error)?;

    let simpson = Rule::Simpson.estimate(function, config.from, config.to, config.step)?;
    sinks.value("Simpson with h", simpson.fine)?;
    sinks.value("Simpson with 2h", simpson.coarse)?;
    sinks.value("Simpson error", simpson.error)?;

    let exact = newton_leibniz(antiderivative, config.from, config.to);
    sinks.value("Newton-Leibniz", exact)?;

    sinks.table(
        &Table::new("Summary", &["h", "trapezoid", "Simpson"])
            .column(trapezoid.steps)
            .column([trapezoid.fine, trapezoid.coarse])
            .column([simpson.fine, simpson.coarse]),
    )?;

    let domain = [config.from, config.to];
    sinks.plot(
        &Figure::new("√x·ln x")
            .x_domain(domain)
            .with(Series::sampled("f(x)", function, domain, 200)),
    )?;

    Ok(Report {
        trapezoid,
        simpson,
        exact,
    })
}
