/// Iteration event emitted by the secant-slope Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter, starting at 1.
    pub iter: usize,
    /// The new iterate.
    pub x: f64,
    /// Distance from the previous iterate.
    pub step: f64,
    /// Residual at the new iterate.
    pub residual: f64,
    /// Difference step for the next iteration.
    pub h: f64,
}
