//! # All-Is-List Core
//!
//! Core traits and types for keeping a list of remotely created entities in
//! reducer-managed state.
//!
//! ## Core Concepts
//!
//! - **Entity**: A record carrying an identifier ([`Entity`])
//! - **State**: A snapshot holding an ordered `items` list and an `is_creating` flag ([`CreateState`])
//! - **Action**: Tagged events routed to reducers ([`ListAction`])
//! - **Reducer**: Pure function `(&State, Action) → Result<State, Error>`
//! - **Event sink**: Where actions are delivered ([`EventSink`])
//!
//! ## Example
//!
//! ```
//! use all_is_list_core::{create_end_reducer, create_start_reducer, ListState};
//! use serde_json::json;
//!
//! let state: ListState<serde_json::Value> = ListState::new();
//!
//! let state = create_start_reducer(&state);
//! assert!(state.is_creating);
//!
//! let state = create_end_reducer(&state, json!({ "id": 1, "name": "a" }))?;
//! assert!(!state.is_creating);
//! assert_eq!(state.items, vec![json!({ "id": 1, "name": "a" })]);
//! # Ok::<(), all_is_list_core::ListError>(())
//! ```

pub mod action;
pub mod composition;
pub mod create;
pub mod entity;
pub mod error;
pub mod sink;
pub mod state;

/// Reducer module - The core trait for state transitions
///
/// Reducers are pure functions: `(&State, Action) → Result<State, Error>`.
/// They never mutate the snapshot they are handed; a successful reduction
/// yields the next snapshot, a failed one leaves the caller's state as it was.
pub mod reducer {
    /// The Reducer trait - core abstraction for state transitions
    ///
    /// # Type Parameters
    ///
    /// - `State`: The snapshot type this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Error`: Why an action could not be applied
    ///
    /// # Example
    ///
    /// ```
    /// use all_is_list_core::reducer::Reducer;
    ///
    /// struct CounterReducer;
    ///
    /// impl Reducer for CounterReducer {
    ///     type State = i64;
    ///     type Action = i64;
    ///     type Error = std::convert::Infallible;
    ///
    ///     fn reduce(&self, state: &i64, delta: i64) -> Result<i64, Self::Error> {
    ///         Ok(state + delta)
    ///     }
    /// }
    ///
    /// assert_eq!(CounterReducer.reduce(&1, 2), Ok(3));
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The error returned when an action cannot be applied
        type Error;

        /// Reduce an action into the next state snapshot
        ///
        /// # Errors
        ///
        /// Returns `Self::Error` when the action cannot be applied to `state`.
        fn reduce(&self, state: &Self::State, action: Self::Action) -> Result<Self::State, Self::Error>;
    }
}

// Re-export commonly used types
pub use action::ListAction;
pub use create::{CreateReducer, create_end_reducer, create_start_reducer};
pub use entity::Entity;
pub use error::ListError;
pub use reducer::Reducer;
pub use sink::EventSink;
pub use state::{CreateState, ListState};
