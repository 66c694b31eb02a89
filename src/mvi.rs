//! Model-View-Intent primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! The counter store is the only state container in this crate and it is
//! built on these traits: every state transition goes through a reducer.

/// Snapshot of state that a view renders from.
///
/// Cloned to hand out snapshots, compared to detect changes, defaulted to
/// build the initial state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// An event that may change state: a user action or a completed remote call.
pub trait Intent: Send + 'static {}

/// Pure `(State, Intent) -> State` transition.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
