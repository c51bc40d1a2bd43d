//! Entity traits defining the core abstraction for all dashboard records

use crate::core::field::FieldValue;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Identifier of a record as served by the backend
///
/// The backend hands out integer ids for most collections and string ids
/// for some (orders use codes such as `ORD-1042`). Both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{}", n),
            EntityId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        EntityId::Number(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId::Text(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        EntityId::Text(value)
    }
}

/// Base trait for all records managed by a store module.
///
/// All entities have:
/// - a REST collection (`resource_name`), e.g. `deliveryPartners`
/// - a stable identifier used to correlate update/delete results
/// - a draft type sent when creating a record
pub trait Entity: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Payload accepted by `POST /{resource_name}`
    type Draft: Serialize + Validate + fmt::Debug + Send + Sync;

    /// The collection segment used in URLs (e.g., "users", "deliveryPartners")
    fn resource_name() -> &'static str;

    /// Human-readable singular name (e.g., "customer", "delivery partner")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> EntityId;

    /// Collection path, e.g. `/users`
    fn collection_path() -> String {
        format!("/{}", Self::resource_name())
    }

    /// Item path, e.g. `/users/3`; the id segment is percent-encoded
    fn item_path(id: &EntityId) -> String {
        format!(
            "/{}/{}",
            Self::resource_name(),
            urlencoding::encode(&id.to_string())
        )
    }
}

/// Trait for entities that can be searched and filtered in a derived view.
///
/// Data entities extend the base Entity with:
/// - indexed_fields: fields matched by the free-text search
/// - filter_fields: fields that accept exact-match filters
/// - field_value: dynamic field access by wire name
pub trait Data: Entity {
    /// Fields matched (case-insensitively) by the search term
    fn indexed_fields() -> &'static [&'static str];

    /// Fields accepted as filter keys
    fn filter_fields() -> &'static [&'static str];

    /// Get the value of a specific field by its wire name
    fn field_value(&self, field: &str) -> Option<FieldValue>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_from_json() {
        let n: EntityId = serde_json::from_str("3").unwrap();
        let s: EntityId = serde_json::from_str("\"ORD-1042\"").unwrap();

        assert_eq!(n, EntityId::from(3));
        assert_eq!(s, EntityId::from("ORD-1042"));
    }

    #[test]
    fn test_entity_id_display() {
        assert_eq!(EntityId::from(42).to_string(), "42");
        assert_eq!(EntityId::from("abc").to_string(), "abc");
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct Ticket {
        id: EntityId,
    }

    impl Entity for Ticket {
        type Draft = TicketDraft;

        fn resource_name() -> &'static str {
            "supportTickets"
        }

        fn resource_name_singular() -> &'static str {
            "ticket"
        }

        fn id(&self) -> EntityId {
            self.id.clone()
        }
    }

    #[derive(Debug, Serialize, Validate)]
    struct TicketDraft {
        #[validate(length(min = 1))]
        issue: String,
    }

    #[test]
    fn test_item_path_encodes_id() {
        assert_eq!(Ticket::item_path(&EntityId::from(7)), "/supportTickets/7");
        assert_eq!(
            Ticket::item_path(&EntityId::from("TICKET-1001")),
            "/supportTickets/TICKET-1001"
        );
        assert_eq!(
            Ticket::item_path(&EntityId::from("a/b c?d")),
            "/supportTickets/a%2Fb%20c%3Fd"
        );
    }

    #[test]
    fn test_number_and_text_ids_differ() {
        assert_ne!(EntityId::from(3), EntityId::from("3"));
    }
}
