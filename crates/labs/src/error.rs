use numlab_core::GridError;
use numlab_interp::{InterpError, narrowing};
use numlab_solvers::{
    equation::{bisection, newton},
    ode, quadrature, system,
};
use thiserror::Error;

/// Boxed error from an injected sink.
pub type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur during a lab run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bisection config: {0}")]
    BisectionConfig(#[from] bisection::ConfigError),

    #[error("invalid Newton config: {0}")]
    NewtonConfig(#[from] newton::ConfigError),

    #[error("invalid system Newton config: {0}")]
    SystemConfig(#[from] system::newton::ConfigError),

    #[error("invalid narrowing config: {0}")]
    NarrowingConfig(#[from] narrowing::ConfigError),

    #[error("bisection failed: {0}")]
    Bisection(#[from] bisection::Error),

    #[error("Newton's method failed: {0}")]
    Newton(#[from] newton::Error),

    #[error("system Newton failed: {0}")]
    System(#[from] system::newton::Error),

    #[error("interpolation failed: {0}")]
    Interp(#[from] InterpError),

    #[error("quadrature failed: {0}")]
    Quadrature(#[from] quadrature::Error),

    #[error("ODE integration failed: {0}")]
    Ode(#[from] ode::Error),

    #[error("tabulation failed: {0}")]
    Grid(#[from] GridError),

    #[error("renderer failed: {0}")]
    Render(#[source] SinkError),

    #[error("plotter failed: {0}")]
    Plot(#[source] SinkError),
}
