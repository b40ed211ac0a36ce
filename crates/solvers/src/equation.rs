//! Solvers for scalar equations: finding `x` such that `f(x) = 0`.
//!
//! # Solvers
//!
//! - [`bisection`]: guaranteed convergence on a bracketed interval
//! - [`newton`]: Newton's method with a forward-difference slope whose step
//!   shrinks every iteration

pub mod bisection;
pub mod newton;
