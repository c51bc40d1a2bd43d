//! Platform alerts (`/alerts`)

use crate::core::{AlertLevel, EntityId};
use crate::impl_record;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Alert {
    pub id: EntityId,
    #[serde(rename = "type")]
    pub level: AlertLevel,
    pub message: String,
    /// Relative time as served, e.g. `10 minutes ago`
    #[serde(default)]
    pub time: String,
}

impl_record!(
    Alert, "alerts", "alert",
    draft: Alert,
    search: ["message"],
    filters: ["type"],
    fields: {
        "id" => id,
        "type" => level,
        "message" => message,
        "time" => time,
    }
);
