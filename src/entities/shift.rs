//! Delivery shifts (`/deliveryShifts`) and the weekly schedule (`/weeklySchedule`)

use crate::core::{EntityId, Status};
use crate::entities::text_or_number;
use crate::impl_record;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: EntityId,
    pub driver: String,
    pub zone: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    pub status: Status,
}

impl_record!(
    Shift, "deliveryShifts", "shift",
    draft: Shift,
    search: ["id", "driver", "zone", "date", "time", "status"],
    filters: ["status", "zone"],
    fields: {
        "id" => id,
        "driver" => driver,
        "zone" => zone,
        "date" => date,
        "time" => time,
        "status" => status,
    }
);

/// One day of the weekly schedule overview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDay {
    pub day: String,
    /// Summary such as `12 shifts`
    #[serde(default, deserialize_with = "text_or_number")]
    pub shifts: String,
    #[serde(default)]
    pub color: String,
}
