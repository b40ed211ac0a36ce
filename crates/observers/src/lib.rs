//! Reusable observers and output sinks for numlab.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the numlab solvers, plus concrete [`Renderer`] and [`Plotter`]
//! sinks for lab runs.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasResidual`], [`CanStopEarly`])
//! - [`History`]: records `(iteration, residual)` pairs from any solver
//! - [`TextRenderer`]: writes values and aligned tables to any `io::Write`
//! - [`FigureRecorder`]: keeps every figure it receives
//!
//! # Features
//!
//! - `plot`: Enables [`PlotObserver`] and [`EguiPlotter`] for viewing
//!   solver traces and lab figures via egui. Adds `eframe` and `egui_plot`.
//! - `tracing`: Enables [`TraceObserver`], which logs each solver event
//!   through the `tracing` crate.
//!
//! [`Observer`]: numlab_core::Observer
//! [`Renderer`]: numlab_core::Renderer
//! [`Plotter`]: numlab_core::Plotter
//! [`HasIteration`]: traits::HasIteration
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

mod history;
mod recorder;
mod text;
pub mod traits;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "tracing")]
mod trace;

pub use history::History;
pub use recorder::FigureRecorder;
pub use text::TextRenderer;

#[cfg(feature = "plot")]
pub use plot::{EguiPlotter, PlotError, PlotObserver, Plottable};

#[cfg(feature = "tracing")]
pub use trace::TraceObserver;
