/// Iteration event emitted by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter, starting at 1.
    pub iter: usize,
    /// Bracket being halved this iteration.
    pub bracket: [f64; 2],
    /// Midpoint of the bracket.
    pub x: f64,
    /// Residual at the midpoint.
    pub residual: f64,
}
