use thiserror::Error;

/// Largest number of nodes any tabulation or fixed-step run may produce.
pub const MAX_NODES: usize = 10_000_000;

/// Errors that can occur when building a [`Grid`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GridError {
    #[error("nodes and values differ in length: {nodes} nodes, {values} values")]
    LengthMismatch { nodes: usize, values: usize },

    #[error("node x[{index}] is not finite: {value}")]
    NonFiniteNode { index: usize, value: f64 },

    #[error("nodes must be strictly increasing (x[{index}] = {value})")]
    NotIncreasing { index: usize, value: f64 },

    #[error("partition count must be at least 1")]
    ZeroPartitions,

    #[error("{partitions} partitions exceed the limit of {max} nodes", max = MAX_NODES)]
    TooManyPartitions { partitions: usize },

    #[error("interval bound is not finite: {value}")]
    NonFiniteBound { value: f64 },

    #[error("interval has zero width at {value}")]
    ZeroWidth { value: f64 },
}

/// A tabulated function: ordered nodes paired with their values.
///
/// Nodes are strictly increasing and index-aligned with values. A grid is
/// built once and only read afterwards; there is no way to mutate it in place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Grid {
    /// Creates a grid from nodes and values.
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths differ, a node is not finite, or the
    /// nodes are not strictly increasing.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, GridError> {
        if x.len() != y.len() {
            return Err(GridError::LengthMismatch {
                nodes: x.len(),
                values: y.len(),
            });
        }

        if let Some(index) = x.iter().position(|v| !v.is_finite()) {
            return Err(GridError::NonFiniteNode {
                index,
                value: x[index],
            });
        }

        if let Some(index) = x.windows(2).position(|pair| pair[1] <= pair[0]) {
            return Err(GridError::NotIncreasing {
                index: index + 1,
                value: x[index + 1],
            });
        }

        Ok(Self { x, y })
    }

    /// Evaluates `f` at each node.
    ///
    /// # Errors
    ///
    /// Returns an error if the nodes are not strictly increasing.
    pub fn from_fn(x: Vec<f64>, f: impl Fn(f64) -> f64) -> Result<Self, GridError> {
        let y = x.iter().map(|&xi| f(xi)).collect();
        Self::new(x, y)
    }

    /// Returns the nodes.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Returns the values.
    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns true if the grid has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Returns the `(x, y)` pair at `index`, if present.
    #[must_use]
    pub fn node(&self, index: usize) -> Option<(f64, f64)> {
        Some((*self.x.get(index)?, *self.y.get(index)?))
    }

    /// Returns the leftmost and rightmost nodes.
    #[must_use]
    pub fn bounds(&self) -> Option<[f64; 2]> {
        Some([*self.x.first()?, *self.x.last()?])
    }

    /// Iterates over `(x, y)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Returns the grid as `[x, y]` points, ready for a plot series.
    #[must_use]
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.iter().map(|(x, y)| [x, y]).collect()
    }

    /// Keeps only the first `count` nodes.
    #[must_use]
    pub fn truncated(&self, count: usize) -> Self {
        let count = count.min(self.len());
        Self {
            x: self.x[..count].to_vec(),
            y: self.y[..count].to_vec(),
        }
    }
}

/// How [`tabulate_with`] places nodes and decides when to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sampling {
    /// Nodes at `from + i·step`, kept while `x <= to`.
    ///
    /// Rounding can drop the final node when `step` is not exactly
    /// representable.
    Inclusive,

    /// Nodes at `from + i·step`, kept while `x <= to + step/2`.
    ///
    /// Always includes a node at (or within rounding of) `to`.
    HalfStepTolerance,

    /// Cell midpoints `from + step/2 + i·step`, kept while `x <= to`.
    ///
    /// Never samples the interval ends, which keeps evaluations away from
    /// boundary singularities.
    Midpoint,
}

/// Tabulates `f` on `[from, to]` with `partitions` equal cells, stopping at
/// `x <= to`.
///
/// # Errors
///
/// Returns an error if `partitions` is zero or the interval is invalid.
pub fn tabulate(
    f: impl Fn(f64) -> f64,
    from: f64,
    to: f64,
    partitions: usize,
) -> Result<Grid, GridError> {
    tabulate_with(f, from, to, partitions, Sampling::Inclusive)
}

/// Tabulates `f` on `[from, to]`, stopping at `x <= to + step/2`.
///
/// # Errors
///
/// Returns an error if `partitions` is zero or the interval is invalid.
pub fn tabulate_closed(
    f: impl Fn(f64) -> f64,
    from: f64,
    to: f64,
    partitions: usize,
) -> Result<Grid, GridError> {
    tabulate_with(f, from, to, partitions, Sampling::HalfStepTolerance)
}

/// Tabulates `f` at the midpoints of `partitions` equal cells of `[from, to]`.
///
/// # Errors
///
/// Returns an error if `partitions` is zero or the interval is invalid.
pub fn tabulate_moved(
    f: impl Fn(f64) -> f64,
    from: f64,
    to: f64,
    partitions: usize,
) -> Result<Grid, GridError> {
    tabulate_with(f, from, to, partitions, Sampling::Midpoint)
}

/// Tabulates `f` on `[from, to]` using the given [`Sampling`].
///
/// The interval is normalized so the grid always advances left to right.
///
/// # Errors
///
/// Returns an error if `partitions` is zero or would exceed [`MAX_NODES`],
/// a bound is non-finite, or the interval has zero width.
pub fn tabulate_with(
    f: impl Fn(f64) -> f64,
    from: f64,
    to: f64,
    partitions: usize,
    sampling: Sampling,
) -> Result<Grid, GridError> {
    if partitions == 0 {
        return Err(GridError::ZeroPartitions);
    }
    if partitions >= MAX_NODES {
        return Err(GridError::TooManyPartitions { partitions });
    }
    for value in [from, to] {
        if !value.is_finite() {
            return Err(GridError::NonFiniteBound { value });
        }
    }
    #[allow(clippy::float_cmp)]
    if from == to {
        return Err(GridError::ZeroWidth { value: from });
    }

    let (from, to) = if to < from { (to, from) } else { (from, to) };

    #[allow(clippy::cast_precision_loss)]
    let step = (to - from) / partitions as f64;

    let (start, limit) = match sampling {
        Sampling::Inclusive => (from, to),
        Sampling::HalfStepTolerance => (from, to + 0.5 * step),
        Sampling::Midpoint => (from + 0.5 * step, to),
    };

    let mut x = Vec::with_capacity(partitions + 1);
    #[allow(clippy::cast_precision_loss)]
    for xi in (0..).map(|i| start + i as f64 * step) {
        if xi > limit {
            break;
        }
        x.push(xi);
    }

    Grid::from_fn(x, f)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn tabulates_square_on_unit_steps() {
        let grid = tabulate(|x| x * x, 0.0, 4.0, 4).expect("valid interval");

        assert_eq!(grid.x(), [0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(grid.y(), [0.0, 1.0, 4.0, 9.0, 16.0]);
    }

    #[test]
    fn reversed_interval_advances_left_to_right() {
        let grid = tabulate(|x| x, 4.0, 0.0, 4).expect("valid interval");
        assert_eq!(grid.x(), [0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn closed_sampling_keeps_last_node() {
        let grid = tabulate_closed(|x| x, 0.0, 1.0, 10).expect("valid interval");

        assert_eq!(grid.len(), 11);
        assert_relative_eq!(grid.x()[10], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn moved_sampling_uses_cell_midpoints() {
        let grid = tabulate_moved(|x| 2.0 * x, 0.0, 3.5, 4).expect("valid interval");

        assert_eq!(grid.len(), 4);
        for (i, (x, y)) in grid.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let expected = 0.4375 + 0.875 * i as f64;
            assert_relative_eq!(x, expected);
            assert_relative_eq!(y, 2.0 * expected);
        }
    }

    #[test]
    fn rejects_zero_partitions() {
        let result = tabulate(|x| x, 0.0, 1.0, 0);
        assert!(matches!(result, Err(GridError::ZeroPartitions)));
    }

    #[test]
    fn rejects_degenerate_intervals() {
        assert!(matches!(
            tabulate(|x| x, 1.0, 1.0, 4),
            Err(GridError::ZeroWidth { .. })
        ));
        assert!(matches!(
            tabulate(|x| x, f64::NAN, 1.0, 4),
            Err(GridError::NonFiniteBound { .. })
        ));
    }

    #[test]
    fn new_validates_shape_and_order() {
        assert!(matches!(
            Grid::new(vec![0.0, 1.0], vec![0.0]),
            Err(GridError::LengthMismatch { nodes: 2, values: 1 })
        ));
        assert!(matches!(
            Grid::new(vec![0.0, 2.0, 1.0], vec![0.0; 3]),
            Err(GridError::NotIncreasing { index: 2, .. })
        ));
    }

    #[test]
    fn new_rejects_non_finite_nodes() {
        assert!(matches!(
            Grid::new(vec![0.0, f64::NAN, 2.0], vec![0.0; 3]),
            Err(GridError::NonFiniteNode { index: 1, .. })
        ));
        assert!(matches!(
            Grid::new(vec![0.0, 1.0, f64::INFINITY], vec![0.0; 3]),
            Err(GridError::NonFiniteNode { index: 2, .. })
        ));
    }

    #[test]
    fn rejects_partition_counts_past_the_node_limit() {
        assert!(matches!(
            tabulate(|x| x, 0.0, 1.0, usize::MAX),
            Err(GridError::TooManyPartitions { .. })
        ));
        assert!(matches!(
            tabulate_moved(|x| x, 0.0, 1.0, MAX_NODES),
            Err(GridError::TooManyPartitions { .. })
        ));
    }

    #[test]
    fn truncated_keeps_leading_nodes() {
        let grid = tabulate(|x| x, 0.0, 4.0, 4).expect("valid interval");
        let head = grid.truncated(3);

        assert_eq!(head.x(), [0.0, 1.0, 2.0]);
        assert_eq!(grid.truncated(10), grid);
    }
}
