//! Solvers for systems of two nonlinear equations `F(x, y) = 0`.
//!
//! A system is supplied through [`EquationSystem`]. Closures with a known
//! Jacobian are adapted with [`FnSystem`]; when only the residuals are known,
//! [`ForwardDifference`] approximates the Jacobian.

pub mod newton;

use numlab_core::{Matrix2, Vector2};

/// A system of two equations in two unknowns.
pub trait EquationSystem {
    /// Evaluates the residual vector `F(v)`.
    fn residuals(&self, v: Vector2) -> Vector2;

    /// Evaluates the Jacobian `∂F/∂v` at `v`.
    fn jacobian(&self, v: Vector2) -> Matrix2;
}

impl<S: EquationSystem + ?Sized> EquationSystem for &S {
    fn residuals(&self, v: Vector2) -> Vector2 {
        (**self).residuals(v)
    }

    fn jacobian(&self, v: Vector2) -> Matrix2 {
        (**self).jacobian(v)
    }
}

/// An [`EquationSystem`] built from a residual closure and a Jacobian
/// closure.
#[derive(Debug, Clone, Copy)]
pub struct FnSystem<F, J> {
    residuals: F,
    jacobian: J,
}

impl<F, J> FnSystem<F, J>
where
    F: Fn(Vector2) -> Vector2,
    J: Fn(Vector2) -> Matrix2,
{
    pub fn new(residuals: F, jacobian: J) -> Self {
        Self {
            residuals,
            jacobian,
        }
    }
}

impl<F, J> EquationSystem for FnSystem<F, J>
where
    F: Fn(Vector2) -> Vector2,
    J: Fn(Vector2) -> Matrix2,
{
    fn residuals(&self, v: Vector2) -> Vector2 {
        (self.residuals)(v)
    }

    fn jacobian(&self, v: Vector2) -> Matrix2 {
        (self.jacobian)(v)
    }
}

/// An [`EquationSystem`] whose Jacobian is approximated by forward
/// differences of the residuals.
///
/// Column `j` uses the step `h_j = √ε · max(|v_j|, 1)`.
#[derive(Debug, Clone, Copy)]
pub struct ForwardDifference<F> {
    residuals: F,
}

impl<F: Fn(Vector2) -> Vector2> ForwardDifference<F> {
    pub fn new(residuals: F) -> Self {
        Self { residuals }
    }
}

impl<F: Fn(Vector2) -> Vector2> EquationSystem for ForwardDifference<F> {
    fn residuals(&self, v: Vector2) -> Vector2 {
        (self.residuals)(v)
    }

    fn jacobian(&self, v: Vector2) -> Matrix2 {
        let sqrt_eps = f64::EPSILON.sqrt();
        let f0 = (self.residuals)(v);

        let hx = sqrt_eps * v.x.abs().max(1.0);
        let dx = ((self.residuals)(Vector2::new(v.x + hx, v.y)) - f0) * hx.recip();

        let hy = sqrt_eps * v.y.abs().max(1.0);
        let dy = ((self.residuals)(Vector2::new(v.x, v.y + hy)) - f0) * hy.recip();

        Matrix2::new([[dx.x, dy.x], [dx.y, dy.y]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn forward_difference_matches_analytic_jacobian() {
        let residuals = |v: Vector2| Vector2::new(v.x * v.x, v.x * v.y);
        let approx = ForwardDifference::new(residuals).jacobian(Vector2::new(3.0, 4.0));

        assert_relative_eq!(approx[(0, 0)], 6.0, epsilon = 1e-6);
        assert_relative_eq!(approx[(0, 1)], 0.0, epsilon = 1e-6);
        assert_relative_eq!(approx[(1, 0)], 4.0, epsilon = 1e-6);
        assert_relative_eq!(approx[(1, 1)], 3.0, epsilon = 1e-6);
    }

    #[test]
    fn fn_system_forwards_both_closures() {
        let system = FnSystem::new(
            |v: Vector2| v * 2.0,
            |_| Matrix2::identity(),
        );

        assert_eq!(system.residuals(Vector2::new(1.0, 2.0)), Vector2::new(2.0, 4.0));
        assert_eq!(system.jacobian(Vector2::default()), Matrix2::identity());
    }
}
