//! Orders (`/orders`)

use crate::core::{EntityId, Status};
use crate::entities::text_or_number;
use crate::impl_record;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A customer order; ids are codes such as `ORD-1042`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: EntityId,
    pub customer: String,
    pub vendor: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub date: String,
    /// Display amount as served, e.g. `$45.99`
    #[serde(default, deserialize_with = "text_or_number")]
    pub total: String,
    pub status: Status,
}

/// Payload of `POST /orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    #[validate(length(min = 1))]
    pub customer: String,
    #[validate(length(min = 1))]
    pub vendor: String,
    pub category: String,
    pub date: String,
    pub total: String,
    pub status: Status,
}

impl_record!(
    Order, "orders", "order",
    draft: OrderDraft,
    search: ["id", "customer", "category", "vendor"],
    filters: ["status", "category"],
    fields: {
        "id" => id,
        "customer" => customer,
        "vendor" => vendor,
        "category" => category,
        "date" => date,
        "total" => total,
        "status" => status,
    }
);
