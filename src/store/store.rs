//! The state container.

use std::collections::VecDeque;
use std::mem;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::{error, trace};

use super::action::Action;
use super::reducer::Reducer;

/// A registered listener callback. Invoked with no arguments after
/// every completed state transition.
type Listener = Arc<dyn Fn() + Send + Sync>;

struct ListenerEntry {
    id: u64,
    callback: Listener,
}

type ListenerSet = Mutex<Vec<ListenerEntry>>;

pub(super) struct StoreInner<R: Reducer> {
    state: Mutex<R::State>,
    /// Pending actions. Dispatches issued from inside a listener land
    /// here and are drained after the current notification pass.
    queue: Mutex<VecDeque<R::Action>>,
    /// True while a drain loop is running on this store.
    draining: AtomicBool,
    listeners: Arc<ListenerSet>,
    next_listener_id: AtomicU64,
}

impl<R: Reducer> StoreInner<R> {
    pub(super) fn snapshot(&self) -> R::State {
        self.state.lock().clone()
    }
}

/// The single owner of application state.
///
/// Cheaply cloneable handle; clones share the same state cell and
/// listener list. The store is thread-safe: state and listeners sit
/// behind locks, and at most one drain loop runs at a time, so reducer
/// applications are serialized per store.
pub struct Store<R: Reducer> {
    pub(super) inner: Arc<StoreInner<R>>,
}

impl<R: Reducer> Store<R> {
    /// Create a store with the given initial state.
    pub fn new(initial: R::State) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: Mutex::new(initial),
                queue: Mutex::new(VecDeque::new()),
                draining: AtomicBool::new(false),
                listeners: Arc::new(Mutex::new(Vec::new())),
                next_listener_id: AtomicU64::new(0),
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.inner.snapshot()
    }

    /// Dispatch an action: run the reducer, replace the state, notify
    /// every listener in registration order.
    ///
    /// A dispatch issued while another is in flight on this store (from
    /// inside a listener, or from another thread) is queued and
    /// processed FIFO by the active drain loop after the current
    /// notification pass completes.
    pub fn dispatch(&self, action: R::Action) {
        self.inner.queue.lock().push_back(action);
        self.drain();
    }

    /// Register a listener, invoked after every dispatch.
    ///
    /// Listeners run in registration order. The listener stays
    /// registered until the returned guard is dropped. A listener
    /// registered during a notification pass is first invoked on the
    /// next dispatch.
    #[must_use = "the listener is removed when the Subscription is dropped"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.inner.next_listener_id.fetch_add(1, Ordering::Relaxed);
        self.inner.listeners.lock().push(ListenerEntry {
            id,
            callback: Arc::new(listener),
        });
        Subscription {
            id,
            listeners: Arc::downgrade(&self.inner.listeners),
        }
    }

    fn drain(&self) {
        while !self.inner.queue.lock().is_empty() {
            if self.inner.draining.swap(true, Ordering::Acquire) {
                // Another drain loop is active; it picks up our action.
                return;
            }
            while let Some(action) = self.pop_action() {
                let name = action.name();
                {
                    let mut state = self.inner.state.lock();
                    let prev = mem::take(&mut *state);
                    *state = R::reduce(prev, action);
                }
                trace!(action = name, "dispatched");
                self.notify();
            }
            self.inner.draining.store(false, Ordering::Release);
            // Loop again: an action enqueued between the inner loop
            // exiting and the flag clearing must not be stranded.
        }
    }

    fn pop_action(&self) -> Option<R::Action> {
        self.inner.queue.lock().pop_front()
    }

    /// Notify listeners over a snapshot of the list, with no store lock
    /// held, so a listener may read state, subscribe, or dispatch.
    /// Each invocation is isolated: a panicking listener is logged and
    /// the rest of the pass still runs.
    fn notify(&self) {
        let snapshot: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .iter()
            .map(|entry| Arc::clone(&entry.callback))
            .collect();
        for listener in snapshot {
            if catch_unwind(AssertUnwindSafe(|| (*listener)())).is_err() {
                error!("listener panicked during notification");
            }
        }
    }
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Scoped listener registration.
///
/// Dropping the guard removes the listener from the store, so a
/// consumer that goes away cannot keep accumulating invocations.
pub struct Subscription {
    id: u64,
    listeners: Weak<ListenerSet>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.lock().retain(|entry| entry.id != self.id);
        }
    }
}
