use numlab_core::{
    Observer,
    output::{Series, Style},
};

use crate::traits::{HasIteration, HasResidual};

/// Records the `(iteration, residual)` pair of every event it sees.
///
/// Never returns an action, so it can wrap any solver whose events implement
/// [`HasIteration`] and [`HasResidual`]. Pass `&mut History` to keep the
/// record after the solver returns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    points: Vec<[f64; 2]>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded `[iteration, residual]` pairs in arrival order.
    #[must_use]
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Builds a point series of `|residual|` against iteration.
    #[must_use]
    pub fn to_series(&self, name: &str) -> Series {
        let points = self.points.iter().map(|&[i, r]| [i, r.abs()]).collect();
        Series::new(name, points).style(Style::Points)
    }
}

impl<E, A> Observer<E, A> for History
where
    E: HasIteration + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        #[allow(clippy::cast_precision_loss)]
        self.points.push([event.iteration() as f64, event.residual()]);
        None
    }
}

impl<E, A> Observer<E, A> for &mut History
where
    E: HasIteration + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
