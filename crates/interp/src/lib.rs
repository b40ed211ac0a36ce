//! Interpolation of tabulated functions.
//!
//! Every interpolant is built from a [`Grid`] and borrows it, so coefficients
//! can never be applied to a grid other than the one that produced them.
//!
//! - [`Lagrange`]: global polynomial in product form
//! - [`Newton`]: divided differences with Horner evaluation
//! - [`LinearSpline`]: piecewise-linear blend between neighboring nodes
//! - [`CubicSpline`]: natural cubic spline solved with the Thomas algorithm
//! - [`ParabolicSpline`]: piecewise quadratic from a backward slope recurrence
//!
//! [`truncation`] bounds the error of polynomial interpolation, and
//! [`narrowing`] shrinks an interval until that bound meets a tolerance.
//!
//! [`Grid`]: numlab_core::Grid

mod cubic;
mod error;
mod interval;
mod lagrange;
mod linear;
mod newton;
mod parabolic;

pub mod narrowing;
pub mod truncation;


pub use cubic::CubicSpline;
pub use error::InterpError;
pub use lagrange::Lagrange;
pub use linear::LinearSpline;
pub use newton::Newton;
pub use parabolic::ParabolicSpline;

/// A function reconstructed from tabulated values.
pub trait Interpolant {
    /// Evaluates the interpolant at `x`.
    fn eval(&self, x: f64) -> f64;
}

impl<I: Interpolant + ?Sized> Interpolant for &I {
    fn eval(&self, x: f64) -> f64 {
        (**self).eval(x)
    }
}
