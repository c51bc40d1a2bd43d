//! Delivery partner payouts (`/deliveryPayouts`)

use crate::core::{EntityId, Status};
use crate::entities::number_or_default;
use crate::impl_record;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Payout {
    pub id: EntityId,
    pub driver: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub deliveries: u32,
    #[serde(default, deserialize_with = "number_or_default")]
    pub amount: f64,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub payment_date: Option<String>,
    pub status: Status,
}

impl Payout {
    /// Amount formatted with two decimals, e.g. `$120.50`
    pub fn amount_label(&self) -> String {
        format!("${:.2}", self.amount)
    }
}

impl_record!(
    Payout, "deliveryPayouts", "payout",
    draft: Payout,
    search: ["id", "driver", "period", "deliveries", "amount", "method", "paymentDate", "status"],
    filters: ["status"],
    fields: {
        "id" => id,
        "driver" => driver,
        "period" => period,
        "deliveries" => deliveries,
        "amount" => amount,
        "method" => method,
        "paymentDate" => payment_date,
        "status" => status,
    }
);
