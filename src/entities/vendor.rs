//! Vendors (`/vendors`)

use crate::core::{EntityId, Status};
use crate::entities::number_or_default;
use crate::impl_record;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Compliance checklist shown on the vendor detail panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VendorCompliance {
    pub hygiene_certification: bool,
    pub delivery_readiness: bool,
    pub tax_documents: bool,
    pub quality_check: bool,
}

impl VendorCompliance {
    /// Number of satisfied checks out of four
    pub fn passed(&self) -> usize {
        [
            self.hygiene_certification,
            self.delivery_readiness,
            self.tax_documents,
            self.quality_check,
        ]
        .iter()
        .filter(|ok| **ok)
        .count()
    }

    pub fn is_compliant(&self) -> bool {
        self.passed() == 4
    }
}

/// A merchant selling through the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub region: String,
    pub status: Status,
    #[serde(default)]
    pub orders: u32,
    #[serde(default)]
    pub products: u32,
    #[serde(default, deserialize_with = "number_or_default")]
    pub rating: f64,
    #[serde(default)]
    pub since: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub compliance: VendorCompliance,
}

/// Payload of `POST /vendors`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VendorDraft {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub region: String,
    pub status: Status,
    pub products: u32,
    pub orders: u32,
    pub category: String,
}

impl Default for VendorDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            region: String::new(),
            status: Status::Active,
            products: 0,
            orders: 0,
            category: "Groceries".to_string(),
        }
    }
}

impl VendorDraft {
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
    Vendor, "vendors", "vendor",
    draft: VendorDraft,
    search: ["name", "category"],
    filters: ["status"],
    fields: {
        "id" => id,
        "name" => name,
        "category" => category,
        "email" => email,
        "phone" => phone,
        "address" => address,
        "region" => region,
        "status" => status,
        "orders" => orders,
        "products" => products,
        "rating" => rating,
        "since" => since,
    }
);
