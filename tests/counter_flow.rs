use fluxcell::counter::{parse_step, CounterAction, CounterReducer, CounterState};
use fluxcell::store::Store;

fn store() -> Store<CounterReducer> {
    Store::new(CounterState::default())
}

/// The walkthrough the demo UI performs: change the step, then move
/// the counter forward and back by it.
#[test]
fn end_to_end_counter_walkthrough() {
    let store = store();
    assert_eq!(
        store.state(),
        CounterState {
            counter: 1,
            step_size: 1
        }
    );

    store.dispatch(CounterAction::ChangeStepSize { step: 3 });
    assert_eq!(
        store.state(),
        CounterState {
            counter: 1,
            step_size: 3
        }
    );

    store.dispatch(CounterAction::UpdateCounter { delta: 3 });
    assert_eq!(
        store.state(),
        CounterState {
            counter: 4,
            step_size: 3
        }
    );

    store.dispatch(CounterAction::UpdateCounter { delta: -3 });
    assert_eq!(
        store.state(),
        CounterState {
            counter: 1,
            step_size: 3
        }
    );
}

/// Updating by `p` then `-p` restores the original counter.
#[test]
fn opposite_updates_cancel() {
    for p in [1, 2, 5, 17, 1000] {
        let store = store();
        store.dispatch(CounterAction::UpdateCounter { delta: p });
        store.dispatch(CounterAction::UpdateCounter { delta: -p });
        assert_eq!(store.state().counter, 1, "delta {p} did not cancel");
    }
}

/// Raw step input truncates toward zero before it reaches the store.
#[test]
fn textual_step_input_truncates_before_dispatch() {
    let store = store();
    let step = parse_step("2.9").expect("numeric step");
    store.dispatch(CounterAction::ChangeStepSize { step });

    assert_eq!(store.state().step_size, 2);
}
