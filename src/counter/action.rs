//! Actions for the counter demo.

use crate::store::Action;

/// State transitions the counter UI can request.
#[derive(Debug, Clone)]
pub enum CounterAction {
    /// Add a signed delta to the counter.
    UpdateCounter { delta: i64 },
    /// Replace the step size.
    ChangeStepSize { step: i64 },
}

impl Action for CounterAction {
    fn name(&self) -> &'static str {
        match self {
            CounterAction::UpdateCounter { .. } => "update_counter",
            CounterAction::ChangeStepSize { .. } => "change_step_size",
        }
    }
}
