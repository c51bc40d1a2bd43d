//! Store modules driven through the REST backend

use courier::prelude::*;
use serde_json::json;
use std::sync::Arc;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&ClientConfig {
        base_url: server.uri(),
        timeout_ms: 2_000,
    })
    .unwrap()
}

fn partner_store(server: &MockServer) -> EntityStore<DeliveryPartner> {
    EntityStore::new(Arc::new(RestDataService::<DeliveryPartner>::new(
        client_for(server),
    )))
}

fn partners_json() -> serde_json::Value {
    json!([
        {"id": 1, "name": "Michael Chen", "email": "michael@example.com", "region": "Downtown", "status": "active", "deliveries": 1243, "rating": 4.8, "vehicle": "Car", "completion": 98},
        {"id": 2, "name": "Sarah Wilson", "email": "sarah@example.com", "region": "Uptown", "status": "inactive", "deliveries": 856, "rating": 4.6, "vehicle": "Bike", "completion": 95}
    ])
}

#[tokio::test]
async fn test_crud_flow() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/deliveryPartners"))
        .respond_with(ResponseTemplate::new(200).set_body_json(partners_json()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/deliveryPartners"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!(
            {"id": 3, "name": "David Kim", "email": "david@example.com", "region": "Midtown", "status": "active", "vehicle": "Car"}
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/deliveryPartners/2"))
        .and(body_json(json!({
            "id": 2, "name": "Sarah Wilson", "email": "sarah@example.com", "region": "Uptown",
            "status": "active", "deliveries": 856, "rating": 4.6, "vehicle": "Bike", "completion": 95.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            {"id": 2, "name": "Sarah Wilson", "email": "sarah@example.com", "region": "Uptown", "status": "active", "deliveries": 856, "rating": 4.6, "vehicle": "Bike", "completion": 95}
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/deliveryPartners/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let store = partner_store(&server);
    let mut changes = store.subscribe();

    store.fetch_all(&QueryParams::new()).await.unwrap();
    assert_eq!(store.items().len(), 2);
    assert_eq!(store.snapshot().pagination.total, 2);
    assert!(changes.has_changed().unwrap());
    changes.borrow_and_update();

    let draft = DeliveryPartnerDraft {
        name: "David Kim".to_string(),
        email: "david@example.com".to_string(),
        region: "Midtown".to_string(),
        ..DeliveryPartnerDraft::default()
    };
    let created = store.create(&draft).await.unwrap();
    assert_eq!(created.id, EntityId::from(3));
    assert_eq!(store.items().last().map(|p| p.name.clone()), Some("David Kim".to_string()));
    assert!(changes.has_changed().unwrap());

    let patch = RecordPatch::new().set("status", "active");
    store.update(&EntityId::from(2), &patch).await.unwrap();
    let sarah = store.find(&EntityId::from(2)).unwrap();
    assert_eq!(sarah.status, Status::Active);
    assert_eq!(sarah.deliveries, 856);

    store.delete(&EntityId::from(1)).await.unwrap();
    let ids: Vec<EntityId> = store.items().iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids, vec![EntityId::from(2), EntityId::from(3)]);

    assert!(!store.loading());
    assert!(store.error().is_none());
    assert_eq!(store.phase(), LoadState::Succeeded);
}

#[tokio::test]
async fn test_update_of_unloaded_record_sends_patch() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/deliveryPartners/5"))
        .and(body_json(json!({"status": "inactive"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            {"id": 5, "name": "Lena Park", "email": "lena@example.com", "region": "Midtown", "status": "inactive"}
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let store = partner_store(&server);
    let patched = assert_ok!(
        store
            .update(&EntityId::from(5), &RecordPatch::new().set("status", "inactive"))
            .await
    );

    assert_eq!(patched.name, "Lena Park");
    assert_eq!(patched.status, Status::Inactive);
    assert!(store.items().is_empty());
}

#[tokio::test]
async fn test_fetch_with_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/deliveryPartners"))
        .and(query_param("vehicle", "Bike"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([partners_json()[1].clone()])))
        .expect(1)
        .mount(&server)
        .await;

    let store = partner_store(&server);
    let partners = assert_ok!(
        store
            .fetch_all(&QueryParams::new().with("vehicle", "Bike"))
            .await
    );

    assert_eq!(partners.len(), 1);
    assert_eq!(store.items(), partners);
}

#[tokio::test]
async fn test_invalid_draft_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let store = partner_store(&server);
    let draft = DeliveryPartnerDraft {
        name: String::new(),
        email: "not-an-email".to_string(),
        region: "Midtown".to_string(),
        ..DeliveryPartnerDraft::default()
    };

    let err = assert_err!(store.create(&draft).await);
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
    assert!(store.items().is_empty());
    assert!(store.error().is_none());
}

#[tokio::test]
async fn test_failed_fetch_keeps_items_and_records_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/deliveryPartners"))
        .respond_with(ResponseTemplate::new(200).set_body_json(partners_json()))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/deliveryPartners"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let store = partner_store(&server);
    store.fetch_all(&QueryParams::new()).await.unwrap();
    let err = store.fetch_all(&QueryParams::new()).await.unwrap_err();

    assert_eq!(err.as_api().and_then(ApiError::status), Some(503));
    assert_eq!(store.items().len(), 2);
    assert_eq!(
        store.error().as_deref(),
        Some("Failed to fetch data from /deliveryPartners: server responded with status 503")
    );
    assert_eq!(store.phase(), LoadState::Failed);

    // Stale data stays visible under the error
    assert!(matches!(store.view(), ListView::Error { .. }));
    store.clear_error();
    assert!(matches!(store.view(), ListView::Populated(items) if items.len() == 2));
}

#[tokio::test]
async fn test_failed_delete_keeps_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/deliveryPartners"))
        .respond_with(ResponseTemplate::new(200).set_body_json(partners_json()))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/deliveryPartners/1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let store = partner_store(&server);
    store.fetch_all(&QueryParams::new()).await.unwrap();

    assert_err!(store.request_delete(EntityId::from(1)).confirm().await);
    assert_eq!(store.items().len(), 2);
    assert_eq!(
        store.error().as_deref(),
        Some("Failed to delete data at /deliveryPartners/1: server responded with status 500")
    );
}

#[tokio::test]
async fn test_search_and_filters_over_fetched_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/deliveryPartners"))
        .respond_with(ResponseTemplate::new(200).set_body_json(partners_json()))
        .mount(&server)
        .await;

    let store = partner_store(&server);
    store.fetch_all(&QueryParams::new()).await.unwrap();

    store.set_search_term("SARAH");
    let names: Vec<String> = store.filtered_items().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Sarah Wilson"]);

    store.set_search_term("");
    store.set_filters(Filters::from_pairs([("vehicle", "Car")]));
    let names: Vec<String> = store.filtered_items().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Michael Chen"]);

    store.set_filters(Filters::from_pairs([("status", "inactive")]));
    assert_eq!(store.view(), ListView::Empty { narrowed: true });
    assert_eq!(
        ListView::<DeliveryPartner>::empty_message(true),
        "No partners match the current search or filters"
    );

    store.clear_filters();
    assert_eq!(store.filtered_items().len(), 2);
    assert_eq!(store.items().len(), 2);
}

#[tokio::test]
async fn test_document_store_over_rest() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weeklySchedule"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"day": "Monday", "shifts": 12, "color": "#4F46E5"},
            {"day": "Tuesday", "shifts": "10 shifts", "color": "#10B981"}
        ])))
        .mount(&server)
        .await;

    let store: ResourceStore<Vec<ScheduleDay>> = ResourceStore::new(
        "weeklySchedule",
        Arc::new(RestResource::new(client_for(&server), Endpoint::WeeklySchedule)),
    );
    assert_eq!(DocumentView::resolve(&store.snapshot()), DocumentView::Ready(Vec::new()));

    store.fetch().await.unwrap();
    let days = store.value();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].shifts, "12");
    assert_eq!(days[1].shifts, "10 shifts");
    assert_eq!(store.phase(), LoadState::Succeeded);
}
