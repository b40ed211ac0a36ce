use numlab_core::Grid;

/// Indicates how the integrator terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached the end of the interval.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an ODE integration.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the integrator terminated.
    pub status: Status,

    /// The tabulated solution, starting with the initial value.
    pub grid: Grid,

    /// Number of integration steps completed.
    pub steps: usize,
}
