//! Shared test harness for collection backends
//!
//! Provides customer fixtures and the `data_service_tests!` macro validating
//! any `DataService<User>` implementation.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod data_service_tests;

use courier::prelude::*;
use serde_json::json;

/// A customer as the backend would serve it
pub fn customer(id: i64, name: &str, region: &str, status: &str) -> User {
    serde_json::from_value(json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        "region": region,
        "status": status,
        "orders": 3,
        "lastOrder": "2023-06-01",
        "type": "customer"
    }))
    .expect("customer fixture must decode")
}

/// Three customers across two regions
pub fn sample_customers() -> Vec<User> {
    vec![
        customer(1, "John Smith", "New York", "active"),
        customer(2, "Emily Johnson", "Los Angeles", "inactive"),
        customer(3, "Michael Brown", "New York", "pending"),
    ]
}

pub fn assert_names(users: &[User], expected: &[&str]) {
    let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, expected);
}
