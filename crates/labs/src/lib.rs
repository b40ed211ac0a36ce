//! The six numlab lab runs.
//!
//! Each module pairs a `Config`, whose `Default` holds the classic lab
//! constants, with a `run` function that solves its problem, writes values
//! and tables to a [`Renderer`], and hands figures to a [`Plotter`]. Runs
//! return a report with the raw numbers, so callers never have to parse
//! rendered output.
//!
//! - [`roots`]: bisection and secant-slope Newton on a cubic
//! - [`systems`]: full and modified Newton on a 2×2 nonlinear system
//! - [`interpolation`]: Lagrange and Newton polynomials, truncation bounds,
//!   and range narrowing
//! - [`splines`]: linear, cubic and parabolic splines
//! - [`quadrature`]: trapezoid and Simpson rules with Richardson estimates
//! - [`ode`]: Runge–Kutta and Euler with step doubling
//!
//! [`Renderer`]: numlab_core::Renderer
//! [`Plotter`]: numlab_core::Plotter

mod error;
mod sinks;

pub mod interpolation;
pub mod ode;
pub mod quadrature;
pub mod roots;
pub mod splines;
pub mod systems;

pub use error::{Error, SinkError};

use numlab_core::{Plotter, Renderer};

/// Configuration of every lab.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(default))]
pub struct Labs {
    pub roots: roots::Config,
    pub systems: systems::Config,
    pub interpolation: interpolation::Config,
    pub splines: splines::Config,
    pub quadrature: quadrature::Config,
    pub ode: ode::Config,
}

/// Runs every lab in order, announcing each one through the renderer.
///
/// # Errors
///
/// Stops at the first lab that fails and returns its error.
pub fn run_all<R: Renderer, P: Plotter>(labs: &Labs, mut renderer: R, mut plotter: P) -> Result<(), Error> {
    announce(&mut renderer, "1. Roots of a cubic")?;
    roots::run(&labs.roots, &mut renderer, &mut plotter)?;

    announce(&mut renderer, "2. Nonlinear system")?;
    systems::run(&labs.systems, &mut renderer, &mut plotter)?;

    announce(&mut renderer, "3. Polynomial interpolation")?;
    interpolation::run(&labs.interpolation, &mut renderer, &mut plotter)?;

    announce(&mut renderer, "4. Splines")?;
    splines::run(&labs.splines, &mut renderer, &mut plotter)?;

    announce(&mut renderer, "5. Quadrature")?;
    quadrature::run(&labs.quadrature, &mut renderer, &mut plotter)?;

    announce(&mut renderer, "6. Ordinary differential equation")?;
    ode::run(&labs.ode, &mut renderer, &mut plotter)?;

    Ok(())
}

fn announce<R: Renderer>(renderer: &mut R, title: &str) -> Result<(), Error> {
    renderer
        .value("Lab", &title)
        .map_err(|e| Error::Render(Box::new(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use numlab_observers::{FigureRecorder, TextRenderer};

    #[test]
    fn runs_every_lab_with_default_constants() {
        let mut text = TextRenderer::new(Vec::new());
        let mut figures = FigureRecorder::new();
        run_all(&Labs::default(), &mut text, &mut figures).expect("all labs should run");

        let output = String::from_utf8(text.into_inner()).expect("utf-8 output");
        assert_eq!(output.matches("Lab: ").count(), 6);
        assert_eq!(figures.figures().len(), 9);
    }

    #[test]
    fn stops_at_the_first_failing_lab() {
        let labs = Labs {
            quadrature: quadrature::Config {
                step: -1.0,
                ..quadrature::Config::default()
            },
            ..Labs::default()
        };

        assert!(matches!(run_all(&labs, (), ()), Err(Error::Quadrature(_))));
    }

    #[cfg(feature = "serde-derive")]
    #[test]
    fn partial_json_falls_back_to_defaults() {
        let labs: Labs = serde_json::from_str(r#"{ "ode": { "step": 0.1 }, "roots": { "x0": 0.0 } }"#)
            .expect("valid json");

        assert_eq!(labs.ode.step, 0.1);
        assert_eq!(labs.ode.xn, ode::Config::default().xn);
        assert_eq!(labs.roots.x0, 0.0);
        assert_eq!(labs.systems, systems::Config::default());

        let round_trip: Labs = serde_json::from_str(&serde_json::to_string(&labs).expect("serializes"))
            .expect("deserializes");
        assert_eq!(round_trip, labs);
    }
}
