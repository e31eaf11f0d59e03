//! Base trait for actions (dispatched state transitions).

use std::fmt::Debug;

/// Marker trait for action objects.
///
/// Actions represent:
/// - User input (key presses)
/// - System events (timers, config reloads)
///
/// Actions are processed by reducers to produce new states. They are
/// transient: constructed, dispatched, then consumed by the reducer.
pub trait Action: Debug + Send + 'static {
    /// Stable name of the action kind, used in dispatch trace logs.
    fn name(&self) -> &'static str;
}
