//! Minimal unidirectional state container with selector subscriptions.
//!
//! The `store` module is the core: a [`store::Store`] applies pure
//! reducers to a single state cell and notifies subscribers after every
//! dispatch; [`store::Selected`] bindings derive values from the state
//! and deduplicate updates via an equality comparator. The remaining
//! modules are the counter demo TUI built on top of it.

pub mod config;
pub mod counter;
pub mod logging;
pub mod store;
pub mod ui;
