//! Delivery partners (`/deliveryPartners`)

use crate::core::{EntityId, Status};
use crate::entities::number_or_default;
use crate::impl_record;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A courier delivering orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryPartner {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub region: String,
    pub status: Status,
    #[serde(default)]
    pub deliveries: u32,
    #[serde(default, deserialize_with = "number_or_default")]
    pub rating: f64,
    #[serde(default)]
    pub vehicle: String,
    #[serde(default, deserialize_with = "number_or_default")]
    pub completion: f64,
}

impl DeliveryPartner {
    /// Rating as displayed: one decimal, or `N/A` for unrated partners
    pub fn rating_label(&self) -> String {
        if self.rating > 0.0 {
            format!("{:.1}", self.rating)
        } else {
            "N/A".to_string()
        }
    }
}

/// Payload of `POST /deliveryPartners`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryPartnerDraft {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub region: String,
    pub status: Status,
    pub vehicle: String,
    pub deliveries: u32,
    pub rating: f64,
    pub completion: f64,
}

impl Default for DeliveryPartnerDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            region: String::new(),
            status: Status::Active,
            vehicle: "Car".to_string(),
            deliveries: 0,
            rating: 0.0,
            completion: 0.0,
        }
    }
}

impl DeliveryPartnerDraft {
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
    DeliveryPartner, "deliveryPartners", "partner",
    draft: DeliveryPartnerDraft,
    search: ["name", "email", "vehicle", "region"],
    filters: ["status", "vehicle"],
    fields: {
        "id" => id,
        "name" => name,
        "email" => email,
        "region" => region,
        "status" => status,
        "deliveries" => deliveries,
        "rating" => rating,
        "vehicle" => vehicle,
        "completion" => completion,
    }
);
