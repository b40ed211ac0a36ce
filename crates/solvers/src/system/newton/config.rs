use thiserror::Error;

/// Configuration shared by the full and modified system Newton solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    x_tol: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a system Newton config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_tol must be finite and positive")]
    XTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            x_tol: 1e-5,
            max_iters: 100,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `x_tol` is non-positive or non-finite.
    pub fn new(x_tol: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !x_tol.is_finite() || x_tol <= 0.0 {
            return Err(ConfigError::XTol);
        }

        Ok(Self { x_tol, max_iters })
    }

    /// Returns the tolerance on the largest update component.
    #[must_use]
    pub fn x_tol(&self) -> f64 {
        self.x_tol
    }

    /// Returns the iteration cap.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
