//! Reducer composition utilities
//!
//! - **`scope_reducer`**: Focus a reducer on a slice of a larger state
//! - **`combine_reducers`**: Run several reducers over the same state/action
//!
//! A list slice is rarely the whole application state. Scoping lets the
//! [`CreateReducer`](crate::CreateReducer) run against one field of a bigger
//! snapshot, and combining lets several scoped lists share a store.
//!
//! # Examples
//!
//! ```
//! use all_is_list_core::composition::{combine_reducers, scope_reducer};
//! use all_is_list_core::{CreateReducer, ListAction, ListError, ListState, Reducer};
//! use serde_json::{Value, json};
//!
//! #[derive(Clone, Debug, Default)]
//! struct AppState {
//!     notes: ListState<Value>,
//!     tags: ListState<Value>,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum AppAction {
//!     Notes(ListAction<Value>),
//!     Tags(ListAction<Value>),
//! }
//!
//! let app = combine_reducers::<AppState, AppAction, ListError>(vec![
//!     Box::new(scope_reducer(
//!         CreateReducer::new(),
//!         |app: &AppState| &app.notes,
//!         |app: &mut AppState, notes| app.notes = notes,
//!         |action: AppAction| match action {
//!             AppAction::Notes(action) => Some(action),
//!             AppAction::Tags(_) => None,
//!         },
//!     )),
//!     Box::new(scope_reducer(
//!         CreateReducer::new(),
//!         |app: &AppState| &app.tags,
//!         |app: &mut AppState, tags| app.tags = tags,
//!         |action: AppAction| match action {
//!             AppAction::Tags(action) => Some(action),
//!             AppAction::Notes(_) => None,
//!         },
//!     )),
//! ]);
//!
//! let state = app.reduce(&AppState::default(), AppAction::Notes(ListAction::CreateStart))?;
//! assert!(state.notes.is_creating);
//! assert!(!state.tags.is_creating);
//!
//! let state = app.reduce(&state, AppAction::Tags(ListAction::CreateEnd { item: json!({ "id": "t1" }) }))?;
//! assert_eq!(state.tags.len(), 1);
//! assert!(state.notes.is_empty());
//! # Ok::<(), all_is_list_core::ListError>(())
//! ```

use crate::reducer::Reducer;
use std::marker::PhantomData;

/// Boxed reducer accepted by [`combine_reducers`]
pub type BoxedReducer<S, A, Err> = Box<dyn Reducer<State = S, Action = A, Error = Err> + Send + Sync>;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer receives the snapshot produced by the previous one; the first
/// error aborts the chain and is returned as is.
#[must_use]
pub fn combine_reducers<S, A, Err>(reducers: Vec<BoxedReducer<S, A, Err>>) -> CombinedReducer<S, A, Err>
where
    S: Clone,
    A: Clone,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, Err> {
    reducers: Vec<BoxedReducer<S, A, Err>>,
}

impl<S, A, Err> Reducer for CombinedReducer<S, A, Err>
where
    S: Clone,
    A: Clone,
{
    type State = S;
    type Action = A;
    type Error = Err;

    fn reduce(&self, state: &S, action: A) -> Result<S, Err> {
        let mut next = state.clone();

        for reducer in &self.reducers {
            next = reducer.reduce(&next, action.clone())?;
        }

        Ok(next)
    }
}

/// Scopes a reducer to operate on a subset of a larger state.
///
/// - `get_state` borrows the child slice out of the parent
/// - `set_state` writes a new child slice into a copy of the parent
/// - `to_local_action` maps parent actions to child actions; `None` means the
///   action is not for this child and the parent is returned unchanged
pub fn scope_reducer<S, SubS, A, SubA, R>(
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
    to_local_action: fn(A) -> Option<SubA>,
) -> ScopedReducer<S, SubS, A, SubA, R>
where
    S: Clone,
    R: Reducer<State = SubS, Action = SubA>,
{
    ScopedReducer {
        reducer,
        get_state,
        set_state,
        to_local_action,
        _phantom: PhantomData,
    }
}

/// A scoped reducer that operates on a subset of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, SubA, R> {
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
    to_local_action: fn(A) -> Option<SubA>,
    _phantom: PhantomData<fn(SubA)>,
}

impl<S, SubS, A, SubA, R> Reducer for ScopedReducer<S, SubS, A, SubA, R>
where
    S: Clone,
    R: Reducer<State = SubS, Action = SubA>,
{
    type State = S;
    type Action = A;
    type Error = R::Error;

    fn reduce(&self, state: &S, action: A) -> Result<S, R::Error> {
        let Some(local) = (self.to_local_action)(action) else {
            return Ok(state.clone());
        };

        let sub_state = self.reducer.reduce((self.get_state)(state), local)?;

        let mut next = state.clone();
        (self.set_state)(&mut next, sub_state);
        Ok(next)
    }
}
