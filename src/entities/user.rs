//! Customers (`/users`)

use crate::core::{EntityId, Status};
use crate::impl_record;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A platform customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub region: String,
    pub status: Status,
    #[serde(default)]
    pub orders: u32,
    #[serde(default)]
    pub last_order: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Payload of `POST /users`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub region: String,
    pub status: Status,
    pub orders: u32,
    pub last_order: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            region: String::new(),
            status: Status::Active,
            orders: 0,
            last_order: "N/A".to_string(),
            kind: "customer".to_string(),
        }
    }
}

impl UserDraft {
    /// A new active customer with no orders yet
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            region: region.into(),
            ..Self::default()
        }
    }
}

impl_record!(
    User, "users", "customer",
    draft: UserDraft,
    search: ["name", "email", "region"],
    filters: ["status", "region"],
    fields: {
        "id" => id,
        "name" => name,
        "email" => email,
        "region" => region,
        "status" => status,
        "orders" => orders,
        "lastOrder" => last_order,
        "type" => kind,
    }
);
