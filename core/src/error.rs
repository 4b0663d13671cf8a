//! Error types for list reducers.

use thiserror::Error;

/// Errors raised when an action cannot be applied to list state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// The incoming item has no identifier
    ///
    /// Without an identifier the reducer cannot tell whether the item replaces
    /// an existing entry or should be appended, so the action is rejected and
    /// the state is left untouched.
    #[error("{action}: item has no `id`")]
    MissingId {
        /// Tag of the action that carried the item
        action: &'static str,
    },
}
