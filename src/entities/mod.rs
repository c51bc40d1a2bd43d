//! Record schemas of the dashboard's REST collections
//!
//! Each collection record implements `Entity` and `Data` through
//! [`impl_record!`](crate::impl_record). Single documents (chart data, the
//! weekly schedule, support summary and issue types) are plain serde types.

pub mod macros;

pub mod alert;
pub mod chart;
pub mod delivery_partner;
pub mod order;
pub mod payout;
pub mod quick_action;
pub mod shift;
pub mod stat;
pub mod support;
pub mod user;
pub mod vendor;
pub mod zone;

pub use alert::Alert;
pub use chart::{ChartData, ChartSeries};
pub use delivery_partner::{DeliveryPartner, DeliveryPartnerDraft};
pub use order::{Order, OrderDraft};
pub use payout::Payout;
pub use quick_action::QuickAction;
pub use shift::{ScheduleDay, Shift};
pub use stat::StatCard;
pub use support::{IssueType, SupportSummary, SupportTicket};
pub use user::{User, UserDraft};
pub use vendor::{Vendor, VendorCompliance, VendorDraft};
pub use zone::DeliveryZone;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Display values the backend serves either as text (`"$45.99"`) or as a
/// bare number (`1245`); both decode to text. Null decodes as empty.
pub(crate) fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!(
            "expected text or number, found {}",
            other
        ))),
    }
}

/// Numeric values the backend may serve as a number, a numeric string
/// (`"99.90"`) or null; null and blank strings decode as zero.
pub(crate) fn number_or_default<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| D::Error::custom(format!("{} is out of range", n))),
        Value::String(s) if s.trim().is_empty() => Ok(0.0),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("'{}' is not a number", s))),
        Value::Null => Ok(0.0),
        other => Err(D::Error::custom(format!("expected a number, found {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Reading {
        #[serde(default, deserialize_with = "number_or_default")]
        value: f64,
    }

    fn read(value: Value) -> Result<f64, serde_json::Error> {
        serde_json::from_value::<Reading>(value).map(|r| r.value)
    }

    #[test]
    fn test_number_or_default_shapes() {
        assert_eq!(read(json!({"value": 120.5})).unwrap(), 120.5);
        assert_eq!(read(json!({"value": 3})).unwrap(), 3.0);
        assert_eq!(read(json!({"value": "99.90"})).unwrap(), 99.9);
        assert_eq!(read(json!({"value": null})).unwrap(), 0.0);
        assert_eq!(read(json!({"value": ""})).unwrap(), 0.0);
        assert_eq!(read(json!({})).unwrap(), 0.0);
    }

    #[test]
    fn test_number_or_default_rejects_garbage() {
        assert!(read(json!({"value": "n/a"})).is_err());
        assert!(read(json!({"value": true})).is_err());
    }
}
