use std::fmt::Display;

use numlab_core::{
    Outcome, Plotter, Renderer,
    output::{Figure, Table},
};

use crate::Error;

/// The renderer and plotter injected into a lab run.
pub(crate) struct Sinks<R, P> {
    renderer: R,
    plotter: P,
}

impl<R: Renderer, P: Plotter> Sinks<R, P> {
    pub(crate) fn new(renderer: R, plotter: P) -> Self {
        Self { renderer, plotter }
    }

    pub(crate) fn value(&mut self, label: &str, value: impl Display) -> Result<(), Error> {
        self.renderer
            .value(label, &value)
            .map_err(|e| Error::Render(Box::new(e)))
    }

    pub(crate) fn table(&mut self, table: &Table) -> Result<(), Error> {
        self.renderer
            .table(table)
            .map_err(|e| Error::Render(Box::new(e)))
    }

    pub(crate) fn plot(&mut self, figure: &Figure) -> Result<(), Error> {
        self.plotter
            .plot(figure)
            .map_err(|e| Error::Plot(Box::new(e)))
    }

    /// Writes the status, estimate, iteration count and residual of a run.
    ///
    /// A diverged run only reports its status.
    pub(crate) fn outcome<X, Res>(
        &mut self,
        method: &str,
        outcome: &Outcome<X, Res>,
        format_x: impl Fn(&X) -> String,
        format_residual: impl Fn(&Res) -> String,
    ) -> Result<(), Error> {
        self.value(&format!("{method} status"), outcome.label())?;
        if let Some(solution) = outcome.solution() {
            self.value(&format!("{method} solution"), format_x(&solution.x))?;
            self.value(&format!("{method} iterations"), solution.iters)?;
            self.value(&format!("{method} error"), format_residual(&solution.residual))?;
        }
        Ok(())
    }
}
