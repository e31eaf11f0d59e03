//! Base trait for state in the unidirectional data flow.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to derive any view of them)
/// - Comparable (PartialEq for detecting changes)
///
/// The `Default` bound lets the store move the current state out of its
/// cell while the reducer runs.
pub trait State: Clone + PartialEq + Default + Send + 'static {}
