use numlab_core::MAX_NODES;
use thiserror::Error;

/// Errors that can occur during quadrature.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("integration bound is not finite: {value}")]
    NonFiniteBound { value: f64 },

    #[error("integration interval has zero width at {value}")]
    ZeroWidth { value: f64 },

    #[error("step must be finite and positive, got {step}")]
    InvalidStep { step: f64 },

    #[error("step {step} leaves fewer than four intervals on a width of {width}")]
    StepTooLarge { step: f64, width: f64 },

    #[error("step {step} needs more than {max} nodes to cover a width of {width}", max = MAX_NODES)]
    StepTooSmall { step: f64, width: f64 },

    #[error("Simpson's rule needs an even interval count, got {intervals}")]
    OddIntervals { intervals: usize },

    #[error("integrand is not finite at x = {x}")]
    NonFiniteValue { x: f64 },
}
