use numlab_core::Vector2;

/// Iteration event emitted by the system Newton solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter, starting at 1.
    pub iter: usize,
    /// The new iterate.
    pub x: Vector2,
    /// Componentwise `|v' − v|`.
    pub delta: Vector2,
    /// Residuals at the new iterate.
    pub residual: Vector2,
}
