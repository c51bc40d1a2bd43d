//! Quick actions (`/quickActions`)

use crate::core::{EntityId, Icon};
use crate::impl_record;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A shortcut tile on the overview page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct QuickAction {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub icon: Icon,
}

impl_record!(
    QuickAction, "quickActions", "quick action",
    draft: QuickAction,
    search: ["title", "description"],
    filters: [],
    fields: {
        "id" => id,
        "title" => title,
        "description" => description,
    }
);
