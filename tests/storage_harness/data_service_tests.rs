//! Macro-generated test suite for `DataService<User>` contract validation.
//!
//! The `data_service_tests!` macro generates a test module that checks a
//! backend against the contract the store modules rely on: listing with and
//! without query parameters, id assignment on create, replacement on update,
//! merge semantics on patch and deletion.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use courier::storage::InMemoryDataService;
//!
//! data_service_tests!(InMemoryDataService::<User>::with_records(sample_customers()));
//! ```

/// Generate a `DataService<User>` conformance test suite.
///
/// `$factory` must evaluate to a service seeded with [`sample_customers`].
/// It is re-evaluated for each test.
///
/// [`sample_customers`]: super::sample_customers
#[macro_export]
macro_rules! data_service_tests {
    ($factory:expr) => {
        mod data_service_contract_tests {
            use super::*;
            use courier::prelude::*;

            // ==================================================================
            // List
            // ==================================================================

            #[tokio::test]
            async fn test_list_all() {
                let service = $factory;
                let users = service.list(&QueryParams::new()).await.unwrap();
                assert_names(&users, &["John Smith", "Emily Johnson", "Michael Brown"]);
            }

            #[tokio::test]
            async fn test_list_with_params() {
                let service = $factory;
                let params = QueryParams::new().with("region", "New York");

                let users = service.list(&params).await.unwrap();
                assert_names(&users, &["John Smith", "Michael Brown"]);
            }

            #[tokio::test]
            async fn test_list_no_match() {
                let service = $factory;
                let params = QueryParams::new().with("status", "cancelled");

                let users = service.list(&params).await.unwrap();
                assert!(users.is_empty());
            }

            // ==================================================================
            // Create
            // ==================================================================

            #[tokio::test]
            async fn test_create_assigns_id() {
                let service = $factory;
                let draft = UserDraft::new("Sarah Davis", "sarah@example.com", "Chicago");

                let created = service.create(&draft).await.unwrap();
                assert_eq!(created.id, EntityId::from(4));
                assert_eq!(created.name, "Sarah Davis");
                assert_eq!(created.status, Status::Active);
                assert_eq!(created.last_order, "N/A");

                let users = service.list(&QueryParams::new()).await.unwrap();
                assert_eq!(users.len(), 4);
                assert_eq!(users.last().map(|u| u.id.clone()), Some(created.id));
            }

            #[tokio::test]
            async fn test_consecutive_creates_get_distinct_ids() {
                let service = $factory;
                let a = service
                    .create(&UserDraft::new("A", "a@example.com", "X"))
                    .await
                    .unwrap();
                let b = service
                    .create(&UserDraft::new("B", "b@example.com", "X"))
                    .await
                    .unwrap();
                assert_ne!(a.id, b.id);
            }

            // ==================================================================
            // Update
            // ==================================================================

            #[tokio::test]
            async fn test_update_replaces_record() {
                let service = $factory;
                let mut record = customer(2, "Emily Johnson", "Boston", "pending");
                record.orders = 9;

                let updated = service.update(&EntityId::from(2), &record).await.unwrap();
                assert_eq!(updated, record);

                let users = service.list(&QueryParams::new()).await.unwrap();
                assert_eq!(users[1], record);
                assert_eq!(users.len(), 3);
            }

            #[tokio::test]
            async fn test_update_keeps_path_id() {
                let service = $factory;
                let record = customer(99, "John Smith", "Boston", "active");

                let updated = service.update(&EntityId::from(1), &record).await.unwrap();
                assert_eq!(updated.id, EntityId::from(1));
                assert_eq!(updated.region, "Boston");
            }

            #[tokio::test]
            async fn test_update_nonexistent() {
                let service = $factory;
                let record = customer(42, "Nobody", "Nowhere", "active");

                let err = service
                    .update(&EntityId::from(42), &record)
                    .await
                    .unwrap_err();
                assert_eq!(err.status(), Some(404));
                assert_eq!(err.path, "/users/42");
            }

            // ==================================================================
            // Patch
            // ==================================================================

            #[tokio::test]
            async fn test_patch_merges_fields() {
                let service = $factory;
                let patch = RecordPatch::new().set("status", "pending");

                let patched = service.patch(&EntityId::from(2), &patch).await.unwrap();
                assert_eq!(patched.status, Status::Pending);
                assert_eq!(patched.name, "Emily Johnson");
                assert_eq!(patched.region, "Los Angeles");
            }

            #[tokio::test]
            async fn test_patch_ignores_id() {
                let service = $factory;
                let patch = RecordPatch::new().set("id", 99).set("region", "Boston");

                let patched = service.patch(&EntityId::from(1), &patch).await.unwrap();
                assert_eq!(patched.id, EntityId::from(1));
                assert_eq!(patched.region, "Boston");
            }

            #[tokio::test]
            async fn test_patch_nonexistent() {
                let service = $factory;
                let patch = RecordPatch::new().set("status", "active");

                let err = service.patch(&EntityId::from(42), &patch).await.unwrap_err();
                assert_eq!(err.status(), Some(404));
                assert_eq!(err.path, "/users/42");
            }

            // ==================================================================
            // Delete
            // ==================================================================

            #[tokio::test]
            async fn test_delete_existing() {
                let service = $factory;
                service.delete(&EntityId::from(1)).await.unwrap();

                let users = service.list(&QueryParams::new()).await.unwrap();
                assert_names(&users, &["Emily Johnson", "Michael Brown"]);
            }

            #[tokio::test]
            async fn test_delete_nonexistent_is_accepted() {
                let service = $factory;
                service.delete(&EntityId::from(42)).await.unwrap();

                let users = service.list(&QueryParams::new()).await.unwrap();
                assert_eq!(users.len(), 3);
            }
        }
    };
}
