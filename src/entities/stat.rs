//! Headline statistics (`/stats`)

use crate::core::{EntityId, Icon};
use crate::entities::text_or_number;
use crate::impl_record;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct StatCard {
    pub id: EntityId,
    pub title: String,
    /// Display value as served, e.g. `12,345` or `$48,200`
    #[serde(deserialize_with = "text_or_number")]
    pub value: String,
    /// Period-over-period change, e.g. `+12%`
    #[serde(default)]
    pub change: String,
    pub icon: Icon,
}

impl_record!(
    StatCard, "stats", "stat",
    draft: StatCard,
    search: ["title"],
    filters: [],
    fields: {
        "id" => id,
        "title" => title,
        "value" => value,
        "change" => change,
    }
);
