//! Reducer for the counter demo.

use crate::store::Reducer;

use super::action::CounterAction;
use super::state::CounterState;

/// Pure transition function for counter state.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;

    fn reduce(state: CounterState, action: CounterAction) -> CounterState {
        match action {
            CounterAction::UpdateCounter { delta } => CounterState {
                counter: state.counter + delta,
                ..state
            },
            CounterAction::ChangeStepSize { step } => CounterState {
                step_size: step,
                ..state
            },
        }
    }
}
