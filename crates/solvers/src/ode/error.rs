use numlab_core::{GridError, MAX_NODES};
use thiserror::Error;

/// Errors that can occur during ODE integration.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("initial value problem input is not finite: {value}")]
    NonFiniteInput { value: f64 },

    #[error("interval [{x0}, {xn}] is empty")]
    EmptyInterval { x0: f64, xn: f64 },

    #[error("step must be finite and positive, got {h}")]
    InvalidStep { h: f64 },

    #[error("step {h} is wider than the interval width {width}")]
    StepTooLarge { h: f64, width: f64 },

    #[error("step {h} needs more than {max} steps to cover a width of {width}", max = MAX_NODES)]
    StepTooSmall { h: f64, width: f64 },

    #[error("solution became non-finite at step {step} (x = {x})")]
    NonFiniteState { step: usize, x: f64 },

    #[error("the two grids share no nodes")]
    NoMatchingNodes,

    #[error("invalid solution grid: {0}")]
    Grid(#[from] GridError),
}
