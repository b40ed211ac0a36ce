//! Truncation error bound for polynomial interpolation.
//!
//! For an interpolating polynomial through `n + 1` nodes,
//!
//! ```text
//! |f(x) − P(x)| <= M·ω(x) / (n + 1)!,   ω(x) = |Π (x − xᵢ)|
//! ```
//!
//! where `M` bounds the `(n + 1)`-th derivative of `f`. Here `M` is taken as
//! that derivative evaluated at the rightmost node, and the bound is reported
//! relative to a chosen [`Reference`] value at `x`.

use numlab_core::{Evaluator, Grid};

use crate::{Interpolant, InterpError, Lagrange, Newton};

/// Which value divides the absolute bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reference {
    /// The interpolated function itself.
    #[default]
    Function,
    /// The Lagrange interpolant.
    Lagrange,
    /// The Newton interpolant.
    Newton,
}

/// Returns `|Π (x − xᵢ)|` over `nodes`.
#[must_use]
pub fn omega(nodes: &[f64], x: f64) -> f64 {
    nodes.iter().map(|&xi| x - xi).product::<f64>().abs()
}

/// Returns `n!` as a float.
#[must_use]
pub fn factorial(n: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    (1..=n).map(|k| k as f64).product()
}

/// The relative truncation bound of one grid.
///
/// The derivative constant and factorial are computed once at
/// construction, and the bound can then be evaluated at any `x`.
#[derive(Debug, Clone)]
pub struct TruncationBound<'g, E> {
    evaluator: E,
    grid: &'g Grid,
    lagrange: Lagrange<'g>,
    newton: Newton<'g>,
    scale: f64,
}

impl<'g, E: Evaluator> TruncationBound<'g, E> {
    /// Prepares the bound for `grid`, the tabulation of `evaluator`.
    ///
    /// The Newton reference interpolates every node of the grid; use
    /// [`TruncationBound::with_newton_degree`] for a lower-degree one.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid has fewer than two nodes or the
    /// evaluator cannot supply the derivative of order `grid.len()`.
    pub fn new(evaluator: E, grid: &'g Grid) -> Result<Self, InterpError> {
        let newton = Newton::new(grid)?;
        Self::build(evaluator, grid, newton)
    }

    /// Like [`TruncationBound::new`], but the Newton reference only
    /// interpolates the first `degree + 1` nodes.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is too small for `degree` or the
    /// derivative is unavailable.
    pub fn with_newton_degree(evaluator: E, grid: &'g Grid, degree: usize) -> Result<Self, InterpError> {
        let newton = Newton::with_degree(grid, degree)?;
        Self::build(evaluator, grid, newton)
    }

    fn build(evaluator: E, grid: &'g Grid, newton: Newton<'g>) -> Result<Self, InterpError> {
        let lagrange = Lagrange::new(grid)?;
        let order = grid.len();
        let rightmost = grid.x()[order - 1];
        let derivative = evaluator.derivative(order, rightmost)?;

        Ok(Self {
            evaluator,
            grid,
            lagrange,
            newton,
            scale: derivative / factorial(order),
        })
    }

    /// Returns `M / (n + 1)!`.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the absolute bound `|M·ω(x) / (n + 1)!|`.
    #[must_use]
    pub fn absolute(&self, x: f64) -> f64 {
        (self.scale * omega(self.grid.x(), x)).abs()
    }

    /// Returns the bound at `x` divided by `|reference(x)|`.
    #[must_use]
    pub fn relative(&self, x: f64, reference: Reference) -> f64 {
        let divisor = match reference {
            Reference::Function => self.evaluator.value(x),
            Reference::Lagrange => self.lagrange.eval(x),
            Reference::Newton => self.newton.eval(x),
        };
        self.absolute(x) / divisor.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use numlab_core::{Analytic, CentralDifference, EvalError, tabulate};

    #[test]
    fn omega_vanishes_at_nodes() {
        let nodes = [0.0, 1.0, 2.0];

        assert_eq!(omega(&nodes, 1.0), 0.0);
        assert_relative_eq!(omega(&nodes, 3.0), 6.0);
        assert_relative_eq!(omega(&nodes, 0.5), 0.375);
    }

    #[test]
    fn factorial_values() {
        assert_eq!(factorial(0), 1.0);
        assert_eq!(factorial(5), 120.0);
    }

    #[test]
    fn bound_covers_the_actual_error_of_exp() {
        let exp = Analytic::new(f64::exp, |_order, x| Some(x.exp()));
        let grid = Grid::from_fn(vec![0.0, 0.25, 0.6, 1.0], f64::exp).expect("valid grid");
        let bound = TruncationBound::new(&exp, &grid).expect("derivative available");
        let lagrange = Lagrange::new(&grid).expect("enough nodes");

        // The fourth derivative of exp peaks at the rightmost node.
        assert_relative_eq!(bound.scale(), 1f64.exp() / 24.0);
        for x in [0.1, 0.5, 0.9] {
            let actual = (lagrange.eval(x) - x.exp()).abs();
            assert!(actual <= bound.absolute(x));
            assert_relative_eq!(bound.relative(x, Reference::Function), bound.absolute(x) / x.exp());
        }
    }

    #[test]
    fn references_agree_when_interpolants_are_exact() {
        let exp = Analytic::new(f64::exp, |_order, x| Some(x.exp()));
        let grid = Grid::from_fn(vec![0.0, 0.25, 0.6, 1.0], f64::exp).expect("valid grid");
        let bound = TruncationBound::new(&exp, &grid).expect("derivative available");

        let lagrange = bound.relative(0.3, Reference::Lagrange);
        let newton = bound.relative(0.3, Reference::Newton);
        assert_relative_eq!(lagrange, newton, max_relative = 1e-9);
        assert_relative_eq!(lagrange, bound.relative(0.3, Reference::Function), max_relative = 1e-3);
    }

    #[test]
    fn central_difference_supplies_low_orders() {
        let cube = CentralDifference::new(|x: f64| x.powi(3));
        let grid = tabulate(|x| x.powi(3), 0.0, 1.0, 2).expect("valid grid");
        let bound = TruncationBound::new(&cube, &grid).expect("derivative available");

        // Third derivative of x³ is 6, over 3!.
        assert_relative_eq!(bound.scale(), 1.0, max_relative = 1e-3);
    }

    #[test]
    fn missing_derivative_is_an_error() {
        let f = Analytic::new(f64::sin, |_order, _x| None);
        let grid = tabulate(f64::sin, 0.0, 1.0, 4).expect("valid grid");

        assert_eq!(
            TruncationBound::new(&f, &grid).err(),
            Some(InterpError::Derivative(EvalError::DerivativeUnavailable { order: 5 }))
        );
    }
}
