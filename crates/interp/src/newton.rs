use numlab_core::Grid;

use crate::{Interpolant, InterpError, error::require_nodes};

/// Newton's divided-difference form of the interpolating polynomial.
///
/// The divided-difference table is built in place, keeping only the leading
/// coefficient of each level:
///
/// ```text
/// N(x) = c₀ + c₁(x − x₀) + c₂(x − x₀)(x − x₁) + …
/// ```
///
/// Evaluation uses Horner's scheme on the nested form.
#[derive(Debug, Clone)]
pub struct Newton<'g> {
    grid: &'g Grid,
    coeffs: Vec<f64>,
}

impl<'g> Newton<'g> {
    /// Builds the polynomial through every node of `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`InterpError::TooFewNodes`] if the grid has fewer than two
    /// nodes.
    pub fn new(grid: &'g Grid) -> Result<Self, InterpError> {
        require_nodes(2, grid.len())?;
        Self::with_degree(grid, grid.len() - 1)
    }

    /// Builds the degree-`degree` polynomial through the first
    /// `degree + 1` nodes of `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`InterpError::TooFewNodes`] if the grid has fewer than
    /// `degree + 1` nodes.
    pub fn with_degree(grid: &'g Grid, degree: usize) -> Result<Self, InterpError> {
        let count = degree + 1;
        require_nodes(count, grid.len())?;

        let xs = &grid.x()[..count];
        let mut coeffs = grid.y()[..count].to_vec();
        for level in 1..count {
            for i in (level..count).rev() {
                coeffs[i] = (coeffs[i] - coeffs[i - 1]) / (xs[i] - xs[i - level]);
            }
        }

        Ok(Self { grid, coeffs })
    }

    /// Returns the polynomial degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns the divided-difference coefficients `c₀, c₁, …`.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }
}

impl Interpolant for Newton<'_> {
    fn eval(&self, x: f64) -> f64 {
        let xs = self.grid.x();
        let n = self.degree();
        (0..n)
            .rev()
            .fold(self.coeffs[n], |acc, k| acc * (x - xs[k]) + self.coeffs[k])
    }
}
