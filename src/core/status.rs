//! Closed vocabularies for record statuses, priorities, alert levels and icons
//!
//! Each enum maps exhaustively to a display [`Tone`], so adding a variant
//! without deciding how it renders fails to compile.

use crate::core::field::{FieldValue, IntoFieldValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual tone of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Info,
    Accent,
    Neutral,
}

/// Lifecycle status shared by users, vendors, partners, orders, payouts,
/// shifts and support tickets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Active,
    Inactive,
    Pending,
    Delivered,
    InTransit,
    Processing,
    Cancelled,
    Paid,
    Scheduled,
    Completed,
    Open,
    Resolved,
}

impl Status {
    /// Wire form, as used in filters
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
            Status::Pending => "pending",
            Status::Delivered => "delivered",
            Status::InTransit => "in-transit",
            Status::Processing => "processing",
            Status::Cancelled => "cancelled",
            Status::Paid => "paid",
            Status::Scheduled => "scheduled",
            Status::Completed => "completed",
            Status::Open => "open",
            Status::Resolved => "resolved",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Status::Active | Status::Delivered | Status::Paid | Status::Resolved => Tone::Success,
            Status::Pending | Status::Processing => Tone::Warning,
            Status::Cancelled | Status::Open => Tone::Danger,
            Status::InTransit | Status::Scheduled => Tone::Info,
            Status::Completed => Tone::Accent,
            Status::Inactive => Tone::Neutral,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IntoFieldValue for Status {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::String(self.as_str().to_string())
    }
}

/// Support ticket priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Priority::High => Tone::Danger,
            Priority::Medium => Tone::Warning,
            Priority::Low => Tone::Success,
        }
    }
}

impl IntoFieldValue for Priority {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::String(self.as_str().to_string())
    }
}

/// Severity of a dashboard alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Error,
    Warning,
    Info,
}

impl AlertLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertLevel::Error => "error",
            AlertLevel::Warning => "warning",
            AlertLevel::Info => "info",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            AlertLevel::Error => Tone::Danger,
            AlertLevel::Warning => Tone::Warning,
            AlertLevel::Info => Tone::Info,
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            AlertLevel::Error => Icon::AlertTriangle,
            AlertLevel::Warning => Icon::AlertCircle,
            AlertLevel::Info => Icon::Info,
        }
    }
}

impl IntoFieldValue for AlertLevel {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::String(self.as_str().to_string())
    }
}

/// Icons referenced by stat cards, quick actions and alerts
///
/// Names are the icon component names served by the backend
/// (`ShoppingCart`, `UserX`, ...). A name outside the known set is kept
/// as [`Icon::Other`] and rendered with a neutral tone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Icon {
    Users,
    Store,
    Truck,
    ShoppingCart,
    DollarSign,
    TrendingUp,
    Scale,
    UserX,
    Megaphone,
    Shield,
    AlertTriangle,
    AlertCircle,
    Info,
    Other(String),
}

impl Icon {
    /// Tone of the icon's background chip
    pub fn tone(&self) -> Tone {
        match self {
            Icon::Scale => Tone::Warning,
            Icon::UserX | Icon::AlertTriangle => Tone::Danger,
            Icon::Megaphone | Icon::Info | Icon::Users => Tone::Info,
            Icon::Shield | Icon::DollarSign | Icon::TrendingUp => Tone::Success,
            Icon::Store | Icon::ShoppingCart => Tone::Accent,
            Icon::Truck => Tone::Neutral,
            Icon::AlertCircle => Tone::Warning,
            Icon::Other(_) => Tone::Neutral,
        }
    }

    /// Component name as served by the backend
    pub fn name(&self) -> &str {
        match self {
            Icon::Users => "Users",
            Icon::Store => "Store",
            Icon::Truck => "Truck",
            Icon::ShoppingCart => "ShoppingCart",
            Icon::DollarSign => "DollarSign",
            Icon::TrendingUp => "TrendingUp",
            Icon::Scale => "Scale",
            Icon::UserX => "UserX",
            Icon::Megaphone => "Megaphone",
            Icon::Shield => "Shield",
            Icon::AlertTriangle => "AlertTriangle",
            Icon::AlertCircle => "AlertCircle",
            Icon::Info => "Info",
            Icon::Other(name) => name,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "Users" => Icon::Users,
            "Store" => Icon::Store,
            "Truck" => Icon::Truck,
            "ShoppingCart" => Icon::ShoppingCart,
            "DollarSign" => Icon::DollarSign,
            "TrendingUp" => Icon::TrendingUp,
            "Scale" => Icon::Scale,
            "UserX" => Icon::UserX,
            "Megaphone" => Icon::Megaphone,
            "Shield" => Icon::Shield,
            "AlertTriangle" => Icon::AlertTriangle,
            "AlertCircle" => Icon::AlertCircle,
            "Info" => Icon::Info,
            other => Icon::Other(other.to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Icon::Other(_))
    }
}

impl Serialize for Icon {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Icon {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Icon::from_name(&name))
    }
}
