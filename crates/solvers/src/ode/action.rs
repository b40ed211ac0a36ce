/// Control actions supported by the ODE integrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the integrator early and return the nodes computed so far.
    StopEarly,
}
