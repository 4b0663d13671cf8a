//! The Store - owns the current state snapshot and routes actions to a reducer.

use crate::metrics::{STORE_ACTIONS_APPLIED, STORE_ACTIONS_REJECTED};
use crate::{StoreConfig, StoreError};
use all_is_list_core::{EventSink, Reducer};
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::broadcast;

/// Runtime coordinator for a reducer
///
/// The Store manages:
/// 1. The current state snapshot
/// 2. The reducer that computes the next snapshot for each action
/// 3. A broadcast of every applied action, in application order
///
/// `send` is synchronous so the store can be handed to dispatchers as an
/// [`EventSink`]. The write lock is held while the reducer runs, so
/// concurrent sends are applied one after another against the latest
/// snapshot. Clones share the same state.
///
/// # Example
///
/// ```
/// use all_is_list_core::{CreateReducer, ListAction, ListState};
/// use all_is_list_runtime::Store;
/// use serde_json::json;
///
/// let store = Store::new(ListState::new(), CreateReducer::new());
///
/// store.send(ListAction::CreateStart)?;
/// assert!(store.state(|s| s.is_creating));
///
/// store.send(ListAction::CreateEnd { item: json!({ "id": 1 }) })?;
/// assert_eq!(store.state(|s| s.items.clone()), vec![json!({ "id": 1 })]);
/// # Ok::<(), all_is_list_runtime::StoreError>(())
/// ```
pub struct Store<R: Reducer> {
    state: Arc<RwLock<R::State>>,
    reducer: Arc<R>,
    action_broadcast: broadcast::Sender<R::Action>,
}

impl<R> Store<R>
where
    R: Reducer,
    R::Action: Clone,
    R::Error: std::error::Error + Send + Sync + 'static,
{
    /// Create a new store with initial state and reducer, using the default config
    #[must_use]
    pub fn new(initial_state: R::State, reducer: R) -> Self {
        Self::with_config(initial_state, reducer, StoreConfig::default())
    }

    /// Create a new store with an explicit configuration
    #[must_use]
    pub fn with_config(initial_state: R::State, reducer: R, config: StoreConfig) -> Self {
        let (action_broadcast, _) = broadcast::channel(config.broadcast_capacity.max(1));

        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer: Arc::new(reducer),
            action_broadcast,
        }
    }

    /// Apply an action
    ///
    /// On success the reducer's snapshot replaces the current state and the
    /// action is broadcast to subscribers.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Rejected`] if the reducer refuses the action. The
    /// current state is kept and nothing is broadcast.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub fn send(&self, action: R::Action) -> Result<(), StoreError> {
        // A snapshot is only swapped in after the reducer succeeded, so a
        // poisoned lock still guards a consistent state.
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        match self.reducer.reduce(&*state, action.clone()) {
            Ok(next) => {
                *state = next;
                metrics::counter!(STORE_ACTIONS_APPLIED).increment(1);

                // Broadcast while still holding the lock so subscribers see
                // actions in the order they were applied.
                let _ = self.action_broadcast.send(action);
                Ok(())
            },
            Err(error) => {
                metrics::counter!(STORE_ACTIONS_REJECTED).increment(1);
                tracing::warn!(error = %error, "Reducer rejected action, state unchanged");
                Err(StoreError::Rejected {
                    source: Box::new(error),
                })
            },
        }
    }

    /// Read the current state
    ///
    /// # Arguments
    ///
    /// - `f`: Closure that receives a reference to state and returns a value
    pub fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&R::State) -> T,
    {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&*state)
    }

    /// Clone the current state snapshot
    #[must_use]
    pub fn snapshot(&self) -> R::State
    where
        R::State: Clone,
    {
        self.state(Clone::clone)
    }

    /// Subscribe to applied actions
    ///
    /// Only actions sent after subscribing are received.
    #[must_use]
    pub fn subscribe_actions(&self) -> broadcast::Receiver<R::Action> {
        self.action_broadcast.subscribe()
    }
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: Arc::clone(&self.reducer),
            action_broadcast: self.action_broadcast.clone(),
        }
    }
}

impl<R: Reducer> std::fmt::Debug for Store<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("subscribers", &self.action_broadcast.receiver_count())
            .finish_non_exhaustive()
    }
}

/// The store is the event sink dispatchers report to.
///
/// Rejected actions are logged by [`Store::send`] and otherwise dropped; a
/// sink has no caller to return them to.
impl<R> EventSink<R::Action> for Store<R>
where
    R: Reducer + Send + Sync,
    R::State: Send + Sync,
    R::Action: Clone + Send,
    R::Error: std::error::Error + Send + Sync + 'static,
{
    fn dispatch(&self, action: R::Action) {
        let _ = self.send(action);
    }
}
