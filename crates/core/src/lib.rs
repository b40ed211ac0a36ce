//! Core traits and types for numlab.
//!
//! This crate defines the shared abstractions that solvers, interpolators,
//! observers, and lab runs build on:
//!
//! - [`Grid`]: a tabulated function: strictly increasing nodes and their values
//! - [`Evaluator`]: a scalar function that can also report its derivatives
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`Outcome`] / [`Solution`]: the tagged result of every iterative method
//! - [`Matrix2`] / [`Vector2`]: the 2×2 linear algebra used by Newton systems
//! - [`Plotter`] / [`Renderer`]: sinks that receive figures and tabular output

mod evaluator;
mod grid;
mod matrix;
mod observer;
mod outcome;
pub mod output;

pub use evaluator::{Analytic, CentralDifference, EvalError, Evaluator};
pub use grid::{Grid, GridError, MAX_NODES, Sampling, tabulate, tabulate_closed, tabulate_moved, tabulate_with};
pub use matrix::{Matrix2, SingularMatrix, Vector2};
pub use observer::Observer;
pub use outcome::{Outcome, Solution};
pub use output::{Plotter, Renderer};
