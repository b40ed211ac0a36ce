use numlab_core::{EvalError, GridError};
use thiserror::Error;

/// Errors from interpolant construction and error estimation.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InterpError {
    #[error("needs at least {required} nodes, got {got}")]
    TooFewNodes { required: usize, got: usize },

    #[error("truncation bound is not finite at x = {x}")]
    NonFiniteBound { x: f64 },

    #[error("derivative unavailable: {0}")]
    Derivative(#[from] EvalError),

    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),
}

/// Fails unless `got >= required`.
pub(crate) fn require_nodes(required: usize, got: usize) -> Result<(), InterpError> {
    if got < required {
        Err(InterpError::TooFewNodes { required, got })
    } else {
        Ok(())
    }
}
