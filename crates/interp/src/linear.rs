use numlab_core::Grid;

use crate::{Interpolant, InterpError, error::require_nodes, interval::find_interval};

/// Piecewise-linear interpolation between neighboring nodes.
///
/// Outside the nodes the first or last segment is extended.
#[derive(Debug, Clone, Copy)]
pub struct LinearSpline<'g> {
    grid: &'g Grid,
}

impl<'g> LinearSpline<'g> {
    /// Builds the spline over `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`InterpError::TooFewNodes`] if the grid has fewer than two
    /// nodes.
    pub fn new(grid: &'g Grid) -> Result<Self, InterpError> {
        require_nodes(2, grid.len())?;
        Ok(Self { grid })
    }
}

impl Interpolant for LinearSpline<'_> {
    fn eval(&self, x: f64) -> f64 {
        let (xs, ys) = (self.grid.x(), self.grid.y());
        let i = find_interval(xs, x);
        let t = (x - xs[i]) / (xs[i + 1] - xs[i]);
        ys[i] + t * (ys[i + 1] - ys[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn blends_neighbors_only() {
        let grid = Grid::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 0.0, 1.0]).expect("valid grid");
        let spline = LinearSpline::new(&grid).expect("enough nodes");

        assert_relative_eq!(spline.eval(0.5), 0.5);
        assert_relative_eq!(spline.eval(1.25), 0.75);
        assert_relative_eq!(spline.eval(3.0), 1.0);
        // Extrapolates along the last segment.
        assert_relative_eq!(spline.eval(4.0), 2.0);
    }
}
