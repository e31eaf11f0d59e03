//! Scope binding: hands one store instance to a component tree.

use super::reducer::Reducer;
use super::selector::Selected;
use super::store::Store;

/// Makes a single store available to a component tree without
/// threading the store through every call site.
///
/// Components are constructed with a reference to the context and pull
/// the handles they need (`Selected` bindings, a `Dispatcher`) from it.
/// Always an explicit instance, never global state, so independent
/// stores stay testable in isolation. No logic beyond forwarding.
pub struct StoreContext<R: Reducer> {
    store: Store<R>,
}

impl<R: Reducer + 'static> StoreContext<R> {
    pub fn new(store: Store<R>) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &Store<R> {
        &self.store
    }

    /// A dispatch handle bound to this context's store.
    pub fn dispatcher(&self) -> Dispatcher<R> {
        Dispatcher {
            store: self.store.clone(),
        }
    }

    /// Bind a derived value with the default comparator.
    pub fn select<S, V>(&self, selector: S) -> Selected<V>
    where
        S: Fn(&R::State) -> V + Send + Sync + 'static,
        V: Clone + PartialEq + Send + 'static,
    {
        self.store.select(selector)
    }

    /// Bind a derived value with an explicit comparator.
    pub fn select_with<S, C, V>(&self, selector: S, compare: C) -> Selected<V>
    where
        S: Fn(&R::State) -> V + Send + Sync + 'static,
        C: Fn(&V, &V) -> bool + Send + Sync + 'static,
        V: Clone + Send + 'static,
    {
        self.store.select_with(selector, compare)
    }
}

impl<R: Reducer> Clone for StoreContext<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

/// Dispatch-only handle to a store. Stateless, no subscription.
pub struct Dispatcher<R: Reducer> {
    store: Store<R>,
}

impl<R: Reducer> Dispatcher<R> {
    pub fn dispatch(&self, action: R::Action) {
        self.store.dispatch(action);
    }
}

impl<R: Reducer> Clone for Dispatcher<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}
