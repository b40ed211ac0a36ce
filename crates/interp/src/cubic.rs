use numlab_core::Grid;

use crate::{Interpolant, InterpError, error::require_nodes, interval::find_interval};

/// Natural cubic spline.
///
/// On each interval `[xᵢ, xᵢ₊₁]`:
///
/// ```text
/// Sᵢ(x) = aᵢ + bᵢ·t + cᵢ·t² + dᵢ·t³,   t = x − xᵢ
/// ```
///
/// with `cᵢ = S''(xᵢ)/2` and the natural end conditions `c₀ = cₙ₋₁ = 0`.
/// The interior `cᵢ` solve the tridiagonal system
///
/// ```text
/// hᵢ₋₁·cᵢ₋₁ + 2(hᵢ₋₁ + hᵢ)·cᵢ + hᵢ·cᵢ₊₁ = 3(δᵢ − δᵢ₋₁)
/// ```
///
/// by forward elimination and back substitution, where `hᵢ = xᵢ₊₁ − xᵢ` and
/// `δᵢ = (yᵢ₊₁ − yᵢ)/hᵢ`.
#[derive(Debug, Clone)]
pub struct CubicSpline<'g> {
    grid: &'g Grid,
    coeffs: Vec<[f64; 4]>,
}

impl<'g> CubicSpline<'g> {
    /// Solves for the spline coefficients of `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`InterpError::TooFewNodes`] if the grid has fewer than three
    /// nodes.
    pub fn new(grid: &'g Grid) -> Result<Self, InterpError> {
        let n = grid.len();
        require_nodes(3, n)?;
        let (xs, ys) = (grid.x(), grid.y());

        let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
        let delta: Vec<f64> = ys
            .windows(2)
            .zip(&h)
            .map(|(w, &hi)| (w[1] - w[0]) / hi)
            .collect();

        // Forward sweep over interior rows 1..n-1; row 0 is the natural end.
        let mut upper = vec![0.0; n];
        let mut rhs = vec![0.0; n];
        for i in 1..n - 1 {
            let diag = 2.0 * (h[i - 1] + h[i]) - h[i - 1] * upper[i - 1];
            upper[i] = h[i] / diag;
            rhs[i] = (3.0 * (delta[i] - delta[i - 1]) - h[i - 1] * rhs[i - 1]) / diag;
        }

        let mut c = vec![0.0; n];
        for i in (1..n - 1).rev() {
            c[i] = rhs[i] - upper[i] * c[i + 1];
        }

        let coeffs = (0..n - 1)
            .map(|i| {
                let b = delta[i] - h[i] * (2.0 * c[i] + c[i + 1]) / 3.0;
                let d = (c[i + 1] - c[i]) / (3.0 * h[i]);
                [ys[i], b, c[i], d]
            })
            .collect();

        Ok(Self { grid, coeffs })
    }

    /// Returns `[a, b, c, d]` for each interval, left to right.
    #[must_use]
    pub fn coefficients(&self) -> &[[f64; 4]] {
        &self.coeffs
    }
}

impl Interpolant for CubicSpline<'_> {
    fn eval(&self, x: f64) -> f64 {
        let i = find_interval(self.grid.x(), x);
        let t = x - self.grid.x()[i];
        let [a, b, c, d] = self.coeffs[i];
        a + t * (b + t * (c + t * d))
    }
}
