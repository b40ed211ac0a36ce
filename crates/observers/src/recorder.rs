use std::convert::Infallible;

use numlab_core::{Plotter, output::Figure};

/// A [`Plotter`] that keeps every figure it receives.
///
/// Useful for tests and for callers that want to render figures after a run
/// has finished.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FigureRecorder {
    figures: Vec<Figure>,
}

impl FigureRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    /// Returns the first figure with the given title.
    #[must_use]
    pub fn find(&self, title: &str) -> Option<&Figure> {
        self.figures.iter().find(|f| f.title == title)
    }

    /// Consumes the recorder and returns the figures in arrival order.
    #[must_use]
    pub fn into_figures(self) -> Vec<Figure> {
        self.figures
    }
}

impl Plotter for FigureRecorder {
    type Error = Infallible;

    fn plot(&mut self, figure: &Figure) -> Result<(), Infallible> {
        self.figures.push(figure.clone());
        Ok(())
    }
}
