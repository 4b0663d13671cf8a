//! Entities stored in list state.
//!
//! An entity is any record that carries an identifier. Identity is decided by
//! [`Entity::same_id`], which defaults to equality on [`Entity::Id`]; nothing
//! else about the record is inspected.

use std::fmt::Debug;

/// A record that can live in the `items` list of a [`CreateState`](crate::CreateState).
///
/// Typed records always have an identifier and return `Some` from [`Entity::id`].
/// Dynamic records (such as [`serde_json::Value`]) may not, in which case the
/// create reducer rejects them with [`ListError::MissingId`](crate::ListError::MissingId).
///
/// # Example
///
/// ```
/// use all_is_list_core::Entity;
///
/// #[derive(Clone, Debug)]
/// struct Note {
///     id: u64,
///     title: String,
/// }
///
/// impl Entity for Note {
///     type Id = u64;
///
///     fn id(&self) -> Option<&u64> {
///         Some(&self.id)
///     }
/// }
///
/// let note = Note { id: 7, title: "hello".to_string() };
/// assert_eq!(note.id(), Some(&7));
/// ```
pub trait Entity: Clone + Debug {
    /// Identifier type, compared by equality
    type Id: PartialEq + Debug;

    /// The identifier of this record, if it has one
    fn id(&self) -> Option<&Self::Id>;

    /// Whether this record and `other` share an identifier
    ///
    /// Records without an identifier never match anything.
    fn same_id(&self, other: &Self) -> bool {
        matches!((self.id(), other.id()), (Some(a), Some(b)) if a == b)
    }
}

/// JSON objects are entities keyed by their `"id"` field.
///
/// A missing `"id"`, a `null` one, or a value that is not an object has no
/// identifier. Numeric ids compare by value, so `1` and `1.0` are the same id.
impl Entity for serde_json::Value {
    type Id = Self;

    fn id(&self) -> Option<&Self> {
        self.get("id").filter(|id| !id.is_null())
    }

    fn same_id(&self, other: &Self) -> bool {
        match (self.id(), other.id()) {
            (Some(Self::Number(a)), Some(Self::Number(b))) => same_number(a, b),
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

// Integers compare exactly; once either side is a float both are compared as f64.
#[allow(clippy::float_cmp)]
fn same_number(a: &serde_json::Number, b: &serde_json::Number) -> bool {
    if a.is_f64() || b.is_f64() {
        a.as_f64() == b.as_f64()
    } else {
        a == b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_id_is_read_from_id_field() {
        let item = json!({ "id": 1, "name": "a" });
        assert_eq!(item.id(), Some(&json!(1)));
    }

    #[test]
    fn json_without_id_has_none() {
        assert_eq!(json!({ "name": "a" }).id(), None);
        assert_eq!(json!({ "id": null }).id(), None);
        assert_eq!(json!([1, 2, 3]).id(), None);
        assert_eq!(json!("id").id(), None);
    }

    #[test]
    fn same_id_compares_identifiers_only() {
        let a = json!({ "id": "x", "name": "a" });
        let b = json!({ "id": "x", "name": "b" });
        let c = json!({ "id": "y", "name": "a" });

        assert!(a.same_id(&b));
        assert!(!a.same_id(&c));
    }

    #[test]
    fn numeric_ids_compare_by_value() {
        let int = json!({ "id": 1, "name": "a" });
        let float: serde_json::Value = serde_json::from_str(r#"{ "id": 1.0, "name": "b" }"#).unwrap();

        assert!(int.same_id(&float));
        assert!(float.same_id(&int));
        assert!(!int.same_id(&json!({ "id": 1.5 })));
        assert!(!int.same_id(&json!({ "id": "1" })));
        assert!(!json!({ "id": u64::MAX }).same_id(&json!({ "id": u64::MAX - 1 })));
    }

    #[test]
    fn records_without_id_never_match() {
        let a = json!({ "name": "a" });
        assert!(!a.same_id(&a.clone()));
    }
}
