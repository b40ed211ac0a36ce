//! Numerical solvers for numlab.
//!
//! - [`equation`]: scalar root finding: bisection and secant-slope Newton
//! - [`system`]: Newton and modified Newton for 2×2 nonlinear systems
//! - [`quadrature`]: trapezoid and Simpson rules with Richardson error
//!   estimates, plus exact Newton–Leibniz evaluation
//! - [`ode`]: explicit Euler and classic Runge–Kutta integration with a
//!   step-doubling error estimate
//!
//! Iterative solvers report an [`Outcome`] and accept an [`Observer`] that
//! receives one event per iteration and may stop the run early.
//!
//! [`Outcome`]: numlab_core::Outcome
//! [`Observer`]: numlab_core::Observer

pub mod equation;
pub mod ode;
pub mod quadrature;
pub mod system;
