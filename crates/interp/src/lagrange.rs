use numlab_core::Grid;

use crate::{Interpolant, InterpError, error::require_nodes};

/// The Lagrange interpolating polynomial through every node of a grid.
///
/// Evaluated in product form:
///
/// ```text
/// L(x) = Σᵢ yᵢ · Πⱼ≠ᵢ (x − xⱼ) / (xᵢ − xⱼ)
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Lagrange<'g> {
    grid: &'g Grid,
}

impl<'g> Lagrange<'g> {
    /// Builds the interpolant over all nodes of `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`InterpError::TooFewNodes`] if the grid has fewer than two
    /// nodes.
    pub fn new(grid: &'g Grid) -> Result<Self, InterpError> {
        require_nodes(2, grid.len())?;
        Ok(Self { grid })
    }

    /// Returns the grid this interpolant was built from.
    #[must_use]
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    /// Evaluates the polynomial at each node, in node order.
    #[must_use]
    pub fn node_values(&self) -> Vec<f64> {
        self.grid.x().iter().map(|&x| self.eval(x)).collect()
    }
}

impl Interpolant for Lagrange<'_> {
    fn eval(&self, x: f64) -> f64 {
        let xs = self.grid.x();
        self.grid
            .iter()
            .enumerate()
            .map(|(i, (xi, yi))| {
                let basis: f64 = xs
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(_, &xj)| (x - xj) / (xi - xj))
                    .product();
                yi * basis
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn reproduces_node_values() {
        let grid = Grid::from_fn(vec![0.0, 0.5, 1.5, 2.0], f64::exp).expect("valid grid");
        let lagrange = Lagrange::new(&grid).expect("enough nodes");

        for (value, expected) in lagrange.node_values().into_iter().zip(grid.y()) {
            assert_relative_eq!(value, *expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn is_exact_for_polynomials_of_lower_degree() {
        let cubic = |x: f64| 2.0 * x.powi(3) - x + 4.0;
        let grid = Grid::from_fn(vec![-1.0, 0.0, 1.0, 3.0], cubic).expect("valid grid");
        let lagrange = Lagrange::new(&grid).expect("enough nodes");

        assert_relative_eq!(lagrange.eval(2.0), cubic(2.0), max_relative = 1e-12);
    }

    #[test]
    fn needs_two_nodes() {
        let grid = Grid::new(vec![1.0], vec![2.0]).expect("valid grid");

        assert_eq!(
            Lagrange::new(&grid).err(),
            Some(InterpError::TooFewNodes { required: 2, got: 1 })
        );
    }
}
