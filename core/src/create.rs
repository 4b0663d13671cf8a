//! Reducers for the "create" flow.
//!
//! [`create_start_reducer`] marks a snapshot as waiting on a create call and
//! [`create_end_reducer`] merges the created item into the list.
//! [`CreateReducer`] routes [`ListAction`]s to the two.

use crate::action::ListAction;
use crate::entity::Entity;
use crate::error::ListError;
use crate::reducer::Reducer;
use crate::state::CreateState;
use std::marker::PhantomData;

/// Marks `state` as creating
///
/// Returns a copy of `state` with the creating flag set; the list and any
/// other fields are unchanged.
#[must_use]
pub fn create_start_reducer<S: CreateState>(state: &S) -> S {
    let mut next = state.clone();
    next.set_creating(true);
    next
}

/// Adds a newly created `item` to the list
///
/// Every entry sharing `item`'s identifier is replaced in place; if none does,
/// `item` is appended. The creating flag is cleared either way.
///
/// # Errors
///
/// Returns [`ListError::MissingId`] if `item` has no identifier.
pub fn create_end_reducer<S: CreateState>(state: &S, item: S::Item) -> Result<S, ListError> {
    if item.id().is_none() {
        return Err(ListError::MissingId {
            action: ListAction::<S::Item>::CREATE_END,
        });
    }

    let exists = state.items().iter().any(|existing| existing.same_id(&item));
    let mut next = state.clone();

    if exists {
        tracing::debug!(
            item = ?item,
            items = ?state.items(),
            "create_end_reducer: element ID already exists, replacing"
        );

        for existing in next.items_mut() {
            if existing.same_id(&item) {
                *existing = item.clone();
            }
        }
    } else {
        next.items_mut().push(item);
    }

    next.set_creating(false);
    Ok(next)
}

/// Routes [`ListAction`]s to the create reducers
///
/// # Example
///
/// ```
/// use all_is_list_core::{CreateReducer, ListAction, ListState, Reducer};
/// use serde_json::json;
///
/// let reducer = CreateReducer::new();
/// let state = ListState::new();
///
/// let state = reducer.reduce(&state, ListAction::CreateStart)?;
/// let state = reducer.reduce(&state, ListAction::CreateEnd { item: json!({ "id": 1 }) })?;
///
/// assert_eq!(state, ListState::with_items(vec![json!({ "id": 1 })]));
/// # Ok::<(), all_is_list_core::ListError>(())
/// ```
pub struct CreateReducer<S> {
    _state: PhantomData<fn(&S) -> S>,
}

impl<S> CreateReducer<S> {
    /// Creates a new `CreateReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _state: PhantomData,
        }
    }
}

impl<S> Default for CreateReducer<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for CreateReducer<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for CreateReducer<S> {}

impl<S> std::fmt::Debug for CreateReducer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CreateReducer")
    }
}

impl<S: CreateState> Reducer for CreateReducer<S> {
    type State = S;
    type Action = ListAction<S::Item>;
    type Error = ListError;

    fn reduce(&self, state: &S, action: Self::Action) -> Result<S, ListError> {
        match action {
            ListAction::CreateStart => Ok(create_start_reducer(state)),
            ListAction::CreateEnd { item } => create_end_reducer(state, item),
        }
    }
}
