//! State for the counter demo.

use crate::store::State;

/// Counter state: the running value and the step applied per change.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterState {
    pub counter: i64,
    pub step_size: i64,
}

impl Default for CounterState {
    fn default() -> Self {
        Self {
            counter: 1,
            step_size: 1,
        }
    }
}

impl State for CounterState {}

/// Projection of the counter value.
pub fn counter_value(state: &CounterState) -> i64 {
    state.counter
}

/// Projection of the step size.
pub fn step_size(state: &CounterState) -> i64 {
    state.step_size
}
