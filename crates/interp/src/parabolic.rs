use numlab_core::Grid;

use crate::{Interpolant, InterpError, error::require_nodes, interval::find_interval};

/// Piecewise quadratic spline.
///
/// For the interval ending at node `i` (`1 <= i <= n`), with
/// `hᵢ = xᵢ − xᵢ₋₁` and `gᵢ = (yᵢ₋₁ − yᵢ)/hᵢ`:
///
/// ```text
/// cₙ = gₙ / hₙ
/// cᵢ = (gᵢ − cᵢ₊₁·hᵢ₊₁) / hᵢ
/// bᵢ = (yᵢ − yᵢ₋₁)/hᵢ − hᵢ·cᵢ
/// aᵢ = yᵢ₋₁
/// P(x) = aᵢ + bᵢ(x − xᵢ₋₁) + cᵢ(x − xᵢ₋₁)²
/// ```
///
/// Every piece passes through both of its nodes.
#[derive(Debug, Clone)]
pub struct ParabolicSpline<'g> {
    grid: &'g Grid,
    coeffs: Vec<[f64; 3]>,
}

impl<'g> ParabolicSpline<'g> {
    /// Builds the spline coefficients of `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`InterpError::TooFewNodes`] if the grid has fewer than two
    /// nodes.
    pub fn new(grid: &'g Grid) -> Result<Self, InterpError> {
        require_nodes(2, grid.len())?;
        let (xs, ys) = (grid.x(), grid.y());
        let pieces = grid.len() - 1;

        // Index k covers [x_k, x_{k+1}].
        let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
        let g: Vec<f64> = ys
            .windows(2)
            .zip(&h)
            .map(|(w, &hk)| (w[0] - w[1]) / hk)
            .collect();

        let mut c = vec![0.0; pieces];
        c[pieces - 1] = g[pieces - 1] / h[pieces - 1];
        for k in (0..pieces - 1).rev() {
            c[k] = (g[k] - c[k + 1] * h[k + 1]) / h[k];
        }

        let coeffs = (0..pieces)
            .map(|k| {
                let b = (ys[k + 1] - ys[k]) / h[k] - h[k] * c[k];
                [ys[k], b, c[k]]
            })
            .collect();

        Ok(Self { grid, coeffs })
    }

    /// Returns `[a, b, c]` for each interval, left to right.
    #[must_use]
    pub fn coefficients(&self) -> &[[f64; 3]] {
        &self.coeffs
    }
}

impl Interpolant for ParabolicSpline<'_> {
    fn eval(&self, x: f64) -> f64 {
        let k = find_interval(self.grid.x(), x);
        let t = x - self.grid.x()[k];
        let [a, b, c] = self.coeffs[k];
        a + b * t + c * t * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn passes_through_every_node() {
        let grid = Grid::from_fn(vec![0.0, 0.875, 1.75, 2.625, 3.5], |x: f64| (12.0 + x).sqrt())
            .expect("valid grid");
        let spline = ParabolicSpline::new(&grid).expect("enough nodes");

        for (x, y) in grid.iter() {
            assert_relative_eq!(spline.eval(x), y, epsilon = 1e-12);
        }
    }

    #[test]
    fn last_piece_follows_the_recurrence() {
        let grid = Grid::new(vec![0.0, 1.0, 3.0], vec![1.0, 2.0, 0.0]).expect("valid grid");
        let spline = ParabolicSpline::new(&grid).expect("enough nodes");

        // g₂ = (2 − 0)/2 = 1, c₂ = g₂/h₂ = 0.5
        // g₁ = (1 − 2)/1 = −1, c₁ = (g₁ − c₂·h₂)/h₁ = −2
        let coeffs = spline.coefficients();
        assert_relative_eq!(coeffs[1][2], 0.5);
        assert_relative_eq!(coeffs[0][2], -2.0);
        assert_relative_eq!(coeffs[0][1], 3.0);
    }
}
