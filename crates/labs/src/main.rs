//! Runs every numlab lab with its default constants and writes the results
//! to standard output.
//!
//! With the `plot` feature each figure opens in its own window; otherwise
//! figures are discarded.

use std::{io, process::ExitCode};

use numlab_labs::{Labs, run_all};
use numlab_observers::TextRenderer;

fn main() -> ExitCode {
    let renderer = TextRenderer::new(io::stdout().lock());

    #[cfg(feature = "plot")]
    let plotter = numlab_observers::EguiPlotter::new();
    #[cfg(not(feature = "plot"))]
    let plotter = ();

    match run_all(&Labs::default(), renderer, plotter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("numlab: {error}");
            ExitCode::FAILURE
        }
    }
}
