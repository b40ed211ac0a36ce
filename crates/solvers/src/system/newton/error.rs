use numlab_core::Vector2;
use thiserror::Error;

/// Errors that can occur during system Newton solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("starting point is not finite: ({}, {})", .at.x, .at.y)]
    NonFiniteStart { at: Vector2 },

    #[error("jacobian is singular at ({}, {}) (determinant {det})", .at.x, .at.y)]
    SingularJacobian { at: Vector2, det: f64 },

    #[error("iterate became non-finite at iteration {iter}")]
    NonFiniteIterate { iter: usize, at: Vector2 },
}
