//! # All-Is-List Runtime
//!
//! Runtime pieces for the create flow.
//!
//! ## Core Components
//!
//! - **`CreateAction`**: Wraps an async API call with start/end events
//! - **Store**: Holds the current state snapshot and applies a reducer per action
//!
//! ## Example
//!
//! ```ignore
//! use all_is_list_core::{CreateReducer, ListState};
//! use all_is_list_runtime::{CreateActionConfig, Store, create_action};
//!
//! let store = Store::new(ListState::new(), CreateReducer::new());
//!
//! let create_note = create_action(CreateActionConfig::for_list(
//!     store.clone(),
//!     |title: String| api.create_note(title),
//! ));
//!
//! let note = create_note.call("Buy milk".to_string()).await?;
//! let count = store.state(|s| s.items.len());
//! ```

/// Create-call dispatcher
pub mod dispatcher;

/// Metric names and descriptions
pub mod metrics;

/// In-process store
pub mod store;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// The reducer refused the action
        ///
        /// The state is left as it was before the action and the action is
        /// not broadcast to subscribers.
        #[error("Reducer rejected action: {source}")]
        Rejected {
            /// Error returned by the reducer
            #[source]
            source: Box<dyn std::error::Error + Send + Sync>,
        },
    }
}

pub use dispatcher::{CreateAction, CreateActionConfig, create_action};
pub use error::StoreError;
pub use store::Store;

/// Default capacity of the applied-action broadcast channel
pub const DEFAULT_BROADCAST_CAPACITY: usize = 16;

/// Store configuration
///
/// # Example
///
/// ```
/// use all_is_list_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_broadcast_capacity(256);
/// assert_eq!(config.broadcast_capacity, 256);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Capacity of the applied-action broadcast channel
    ///
    /// Subscribers that fall further behind than this miss actions and see a
    /// `Lagged` error on their next receive.
    pub broadcast_capacity: usize,
}

impl StoreConfig {
    /// Create a configuration
    #[must_use]
    pub const fn new(broadcast_capacity: usize) -> Self {
        Self { broadcast_capacity }
    }

    /// Set the broadcast channel capacity
    ///
    /// Zero is bumped to one, the smallest capacity a channel accepts.
    #[must_use]
    pub const fn with_broadcast_capacity(mut self, capacity: usize) -> Self {
        self.broadcast_capacity = if capacity == 0 { 1 } else { capacity };
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BROADCAST_CAPACITY)
    }
}
