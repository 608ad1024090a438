//! Per-iteration traces of a recurrence run

use msqrt_core::Register;

/// The state of a recurrence at the end of one iteration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub iteration: usize,
    /// the multiplier digit consumed
    pub multiplier_digit: u32,
    /// the precomputed root digit consumed
    pub root_digit: u32,
    /// the digit chosen by table selection, only in practical runs
    pub selected_digit: Option<i32>,
    /// the residual driven by the precomputed digits
    pub residual: Register,
    pub root: Register,
    /// the residual driven by the selected digits
    pub practical_residual: Option<Register>,
    pub practical_root: Option<Register>,
}

/// Receives the steps of a run. Engines only build a [Step] if
/// `wants_steps` returns `true`, since that clones every register involved.
pub trait StepObserver {
    fn wants_steps(&self) -> bool {
        true
    }

    fn observe(&mut self, step: Step);
}

/// Ignores all steps
impl StepObserver for () {
    fn wants_steps(&self) -> bool {
        false
    }

    fn observe(&mut self, _step: Step) {}
}

/// Records all steps
impl StepObserver for Vec<Step> {
    fn observe(&mut self, step: Step) {
        self.push(step)
    }
}
