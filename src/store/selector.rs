//! Derived-value bindings over a store.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use super::reducer::Reducer;
use super::store::{Store, Subscription};

/// A derived value bound to a store.
///
/// Holds the last selected value and recomputes it on every dispatch.
/// When the comparator reports the recomputed value as different, the
/// held value is replaced and the binding goes dirty; when equal, the
/// dispatch is a no-op for this binding. Consumers are insulated from
/// state changes that do not affect their slice.
///
/// Each binding owns exactly one listener registration, released when
/// the binding drops. Swapping the selector or comparator means
/// creating a new binding; dropping the old one disposes its listener,
/// so there is never more than one live listener per binding.
pub struct Selected<V> {
    value: Arc<Mutex<V>>,
    dirty: Arc<AtomicBool>,
    _subscription: Subscription,
}

impl<V: Clone> Selected<V> {
    /// The current derived value.
    pub fn get(&self) -> V {
        self.value.lock().clone()
    }

    /// True once per change: returns whether the value changed since
    /// the last call, and resets the flag. This is the re-render signal
    /// for the consuming unit.
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }
}

impl<R: Reducer + 'static> Store<R> {
    /// Bind a derived value with the default comparator (`PartialEq`).
    pub fn select<S, V>(&self, selector: S) -> Selected<V>
    where
        S: Fn(&R::State) -> V + Send + Sync + 'static,
        V: Clone + PartialEq + Send + 'static,
    {
        self.select_with(selector, |current, next| current == next)
    }

    /// Bind a derived value with an explicit comparator.
    ///
    /// The comparator suppresses redundant updates: the binding only
    /// goes dirty when it reports the recomputed value as different
    /// from the held one.
    pub fn select_with<S, C, V>(&self, selector: S, compare: C) -> Selected<V>
    where
        S: Fn(&R::State) -> V + Send + Sync + 'static,
        C: Fn(&V, &V) -> bool + Send + Sync + 'static,
        V: Clone + Send + 'static,
    {
        let value = Arc::new(Mutex::new(selector(&self.state())));
        let dirty = Arc::new(AtomicBool::new(false));

        // Weak: the listener must not keep the store alive through its
        // own listener list.
        let weak = Arc::downgrade(&self.inner);
        let subscription = self.subscribe({
            let value = Arc::clone(&value);
            let dirty = Arc::clone(&dirty);
            move || {
                let Some(inner) = weak.upgrade() else { return };
                let next = selector(&inner.snapshot());
                let mut current = value.lock();
                if !compare(&current, &next) {
                    *current = next;
                    dirty.store(true, Ordering::Release);
                }
            }
        });

        Selected {
            value,
            dirty,
            _subscription: subscription,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::action::Action;
    use super::super::state::State;
    use super::*;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct PairState {
        left: i32,
        right: i32,
    }

    impl State for PairState {}

    #[derive(Debug, Clone)]
    enum PairAction {
        SetLeft(i32),
        SetRight(i32),
    }

    impl Action for PairAction {
        fn name(&self) -> &'static str {
            match self {
                PairAction::SetLeft(_) => "set_left",
                PairAction::SetRight(_) => "set_right",
            }
        }
    }

    struct PairReducer;

    impl Reducer for PairReducer {
        type State = PairState;
        type Action = PairAction;

        fn reduce(state: PairState, action: PairAction) -> PairState {
            match action {
                PairAction::SetLeft(left) => PairState { left, ..state },
                PairAction::SetRight(right) => PairState { right, ..state },
            }
        }
    }

    #[test]
    fn holds_initial_value_on_creation() {
        let store = Store::<PairReducer>::new(PairState { left: 4, right: 9 });
        let left = store.select(|state: &PairState| state.left);
        assert_eq!(left.get(), 4);
        assert!(!left.take_dirty());
    }

    #[test]
    fn goes_dirty_only_when_its_slice_changes() {
        let store = Store::<PairReducer>::new(PairState::default());
        let left = store.select(|state: &PairState| state.left);
        let right = store.select(|state: &PairState| state.right);

        store.dispatch(PairAction::SetLeft(1));
        assert!(left.take_dirty());
        assert!(!right.take_dirty());
        assert_eq!(left.get(), 1);

        store.dispatch(PairAction::SetRight(2));
        assert!(!left.take_dirty());
        assert!(right.take_dirty());
        assert_eq!(right.get(), 2);
    }

    #[test]
    fn take_dirty_resets_until_next_change() {
        let store = Store::<PairReducer>::new(PairState::default());
        let left = store.select(|state: &PairState| state.left);

        store.dispatch(PairAction::SetLeft(1));
        assert!(left.take_dirty());
        assert!(!left.take_dirty());

        // Same value again: comparator suppresses the update.
        store.dispatch(PairAction::SetLeft(1));
        assert!(!left.take_dirty());
    }

    #[test]
    fn custom_comparator_suppresses_updates() {
        let store = Store::<PairReducer>::new(PairState::default());
        // Treat values with the same sign as equal.
        let sign = store.select_with(
            |state: &PairState| state.left,
            |current, next| current.signum() == next.signum(),
        );

        store.dispatch(PairAction::SetLeft(3));
        assert!(sign.take_dirty());
        assert_eq!(sign.get(), 3);

        store.dispatch(PairAction::SetLeft(7));
        assert!(!sign.take_dirty());
        // Suppressed update keeps the previously held value.
        assert_eq!(sign.get(), 3);

        store.dispatch(PairAction::SetLeft(-1));
        assert!(sign.take_dirty());
        assert_eq!(sign.get(), -1);
    }

    #[test]
    fn dropped_binding_stops_tracking() {
        let store = Store::<PairReducer>::new(PairState::default());
        let left = store.select(|state: &PairState| state.left);
        drop(left);

        // No listener left behind: dispatching still works and new
        // bindings observe the fresh state.
        store.dispatch(PairAction::SetLeft(5));
        let left = store.select(|state: &PairState| state.left);
        assert_eq!(left.get(), 5);
    }
}
