use thiserror::Error;

/// Errors that can occur during secant-slope Newton solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("starting point is not finite: {x}")]
    NonFiniteStart { x: f64 },

    #[error("secant slope vanished at x = {x} (h = {h})")]
    ZeroSlope { x: f64, h: f64 },

    #[error("iterate became non-finite at iteration {iter}: {x}")]
    NonFiniteIterate { iter: usize, x: f64 },
}
