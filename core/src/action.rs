//! Actions routed to list reducers.

use serde::{Deserialize, Serialize};

/// Events emitted around a create call.
///
/// Serialized with an adjacent `type` / `payload` tag:
///
/// ```
/// use all_is_list_core::ListAction;
/// use serde_json::json;
///
/// let start: ListAction<serde_json::Value> = ListAction::CreateStart;
/// assert_eq!(serde_json::to_value(&start)?, json!({ "type": "CREATE_START" }));
///
/// let end = ListAction::CreateEnd { item: json!({ "id": 1 }) };
/// assert_eq!(
///     serde_json::to_value(&end)?,
///     json!({ "type": "CREATE_END", "payload": { "item": { "id": 1 } } }),
/// );
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ListAction<T> {
    /// A create call was issued
    #[serde(rename = "CREATE_START")]
    CreateStart,

    /// A create call returned a new item
    #[serde(rename = "CREATE_END")]
    CreateEnd {
        /// The item returned by the API
        item: T,
    },
}

impl<T> ListAction<T> {
    /// Tag of the "create started" action
    pub const CREATE_START: &'static str = "CREATE_START";

    /// Tag of the "create finished" action
    pub const CREATE_END: &'static str = "CREATE_END";

    /// Builds a [`ListAction::CreateStart`]
    #[must_use]
    pub const fn create_start() -> Self {
        Self::CreateStart
    }

    /// Builds a [`ListAction::CreateEnd`] carrying `item`
    #[must_use]
    pub const fn create_end(item: T) -> Self {
        Self::CreateEnd { item }
    }

    /// The tag this action serializes under
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateStart => Self::CREATE_START,
            Self::CreateEnd { .. } => Self::CREATE_END,
        }
    }
}
