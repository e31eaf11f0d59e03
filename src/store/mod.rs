//! Unidirectional state-container primitives.
//!
//! This module provides the store, the reducer contract, and the
//! selector bindings that connect state to consumers.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Selected
//!    ↑                                │
//!    └────────── Dispatcher ──────────┘
//! ```
//!
//! - **State**: immutable snapshot, replaced wholesale on every dispatch
//! - **Action**: closed enum describing an intended transition
//! - **Reducer**: pure function that transforms state based on actions
//! - **Selected**: derived-value binding that flags consumers when its
//!   slice of state changes

mod action;
mod context;
mod reducer;
mod selector;
mod state;
mod store;

pub use action::Action;
pub use context::{Dispatcher, StoreContext};
pub use reducer::Reducer;
pub use selector::Selected;
pub use state::State;
pub use store::{Store, Subscription};
