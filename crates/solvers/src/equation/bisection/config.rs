use thiserror::Error;

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    x_tol: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a bisection config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_tol must be finite and positive")]
    XTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            x_tol: 1e-3,
            max_iters: 200,
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

    /// Returns the root tolerance; the run stops once the bracket is
    /// narrower than twice this value.
    #[must_use]
    pub fn x_tol(&self) -> f64 {
        self.x_tol
    }

    /// Returns the maximum number of halvings.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_tolerance() {
        assert_eq!(Config::new(0.0, 10), Err(ConfigError::XTol));
        assert_eq!(Config::new(f64::NAN, 10), Err(ConfigError::XTol));
        assert!(Config::new(1e-6, 10).is_ok());
    }
}
