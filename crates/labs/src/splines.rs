//! Lab 4: linear, natural cubic and parabolic splines of the interpolation
//! lab function, compared by their largest absolute error.

use numlab_core::{
    Plotter, Renderer, tabulate,
    output::{Figure, Series, Table},
};
use numlab_interp::{CubicSpline, Interpolant, LinearSpline, ParabolicSpline};

use crate::{Error, interpolation::function, sinks::Sinks};

/// Inputs of the spline lab.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(default))]
pub struct Config {
    pub domain: [f64; 2],
    pub partitions: usize,
    /// Points at which each spline is compared with the function.
    pub samples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: [0.0, 3.5],
            partitions: 4,
            samples: 200,
        }
    }
}

/// Largest sampled `|spline(x) − f(x)|` of each spline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub linear: f64,
    pub cubic: f64,
    pub parabolic: f64,
}

/// Builds the three splines and reports how far each strays from `f`.
///
/// # Errors
///
/// Returns an error if the domain cannot be tabulated, the grid is too small
/// for a spline, or a sink fails.
pub fn run<R: Renderer, P: Plotter>(config: &Config, renderer: R, plotter: P) -> Result<Report, Error> {
    let mut sinks = Sinks::new(renderer, plotter);
    let [from, to] = config.domain;

    let grid = tabulate(function, from, to, config.partitions)?;
    let linear = LinearSpline::new(&grid)?;
    let cubic = CubicSpline::new(&grid)?;
    let parabolic = ParabolicSpline::new(&grid)?;

    sinks.table(
        &Table::new("Nodes", &["x", "f(x)"])
            .column(grid.x())
            .column(grid.y()),
    )?;

    let splines: [(&str, &dyn Interpolant); 3] = [
        ("linear", &linear),
        ("cubic", &cubic),
        ("parabolic", &parabolic),
    ];

    let mut curves = Figure::new("Function and splines")
        .x_domain(config.domain)
        .y_domain([80.0, 125.0]);
    let mut errors = Figure::new("Spline errors").x_domain(config.domain);
    let mut worst = [0.0; 3];
    for (slot, (name, spline)) in worst.iter_mut().zip(splines) {
        let error = Series::sampled(
            name,
            |x| (spline.eval(x) - function(x)).abs(),
            config.domain,
            config.samples,
        );
        *slot = error.points.iter().map(|p| p[1]).fold(0.0, f64::max);
        sinks.value(&format!("Largest {name} spline error"), *slot)?;

        curves = curves.with(Series::sampled(name, |x| spline.eval(x), config.domain, config.samples));
        errors = errors.with(error);
    }
    curves = curves.with(Series::sampled("f(x)", function, config.domain, config.samples));

    sinks.plot(&curves)?;
    sinks.plot(&errors)?;

    let [linear, cubic, parabolic] = worst;
    Ok(Report {
        linear,
        cubic,
        parabolic,
    })
}
