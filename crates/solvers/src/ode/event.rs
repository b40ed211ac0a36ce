/// Event emitted by the ODE integrators for each node.
///
/// Step 0 is the initial value; steps `1..=N` follow each integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    pub step: usize,
    pub x: f64,
    pub y: f64,
}
