//! State shapes the create reducers operate on.

use crate::entity::Entity;
use serde::{Deserialize, Serialize};

/// A state snapshot with an ordered list of entities and a "creating" flag.
///
/// Implement this for an application's own state type to run the create
/// reducers against it directly; any other fields are carried through
/// untouched. [`ListState`] is the ready-made implementation.
pub trait CreateState: Clone {
    /// The entity type held in the list
    type Item: Entity;

    /// Items in insertion order
    fn items(&self) -> &[Self::Item];

    /// Mutable access to the item list
    ///
    /// Only ever called on a freshly cloned snapshot.
    fn items_mut(&mut self) -> &mut Vec<Self::Item>;

    /// Whether a create call is in flight
    fn is_creating(&self) -> bool;

    /// Set the "creating" flag
    fn set_creating(&mut self, creating: bool);
}

/// Default list state: `{ items, isCreating }`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListState<T> {
    /// Items in insertion order
    pub items: Vec<T>,
    /// Whether a create call is in flight
    pub is_creating: bool,
}

impl<T> ListState<T> {
    /// Creates an empty, idle list state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            is_creating: false,
        }
    }

    /// Creates an idle list state holding `items`
    #[must_use]
    pub const fn with_items(items: Vec<T>) -> Self {
        Self {
            items,
            is_creating: false,
        }
    }

    /// Returns the number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when there are no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Entity> ListState<T> {
    /// Returns the first item with the given identifier
    #[must_use]
    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == Some(id))
    }

    /// Returns true if an item with the given identifier exists
    #[must_use]
    pub fn contains(&self, id: &T::Id) -> bool {
        self.get(id).is_some()
    }
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> CreateState for ListState<T> {
    type Item = T;

    fn items(&self) -> &[T] {
        &self.items
    }

    fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    fn is_creating(&self) -> bool {
        self.is_creating
    }

    fn set_creating(&mut self, creating: bool) {
        self.is_creating = creating;
    }
}
