use thiserror::Error;

/// Configuration for the secant-slope Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    x_tol: f64,
    step: f64,
    shrink: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a secant-slope Newton config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_tol must be finite and positive")]
    XTol,

    #[error("step must lie in (0, 1)")]
    Step,

    #[error("shrink factor must lie in (0, 1)")]
    Shrink,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            x_tol: 1e-3,
            step: 0.5,
            shrink: 0.5,
            max_iters: 100,
        }
    }
}

impl Config {
    /// Creates a new config with validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `x_tol` is non-positive or non-finite, or if
    /// `step` or `shrink` falls outside the open interval `(0, 1)`.
    pub fn new(x_tol: f64, step: f64, shrink: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !x_tol.is_finite() || x_tol <= 0.0 {
            return Err(ConfigError::XTol);
        }
        if !(step > 0.0 && step < 1.0) {
            return Err(ConfigError::Step);
        }
        if !(shrink > 0.0 && shrink < 1.0) {
            return Err(ConfigError::Shrink);
        }

        Ok(Self {
            x_tol,
            step,
            shrink,
            max_iters,
        })
    }

    /// Returns the tolerance on the distance between successive iterates.
    #[must_use]
    pub fn x_tol(&self) -> f64 {
        self.x_tol
    }

    /// Returns the initial difference step `h`.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the factor applied to `h` after every iteration.
    #[must_use]
    pub fn shrink(&self) -> f64 {
        self.shrink
    }

    /// Returns the iteration cap.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
