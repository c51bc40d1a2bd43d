//! Delivery zones (`/deliveryZones`)

use crate::core::EntityId;
use crate::impl_record;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryZone {
    pub id: EntityId,
    pub name: String,
    /// CSS colour of the zone marker, e.g. `#4F46E5`
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub orders: u32,
    #[serde(default)]
    pub drivers: u32,
    #[serde(default)]
    pub routes: u32,
}

impl_record!(
    DeliveryZone, "deliveryZones", "zone",
    draft: DeliveryZone,
    search: ["name"],
    filters: [],
    fields: {
        "id" => id,
        "name" => name,
        "color" => color,
        "orders" => orders,
        "drivers" => drivers,
        "routes" => routes,
    }
);
