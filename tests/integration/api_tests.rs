//! API integration tests
//!
//! Each test serves a fresh router on an ephemeral port and talks to it over HTTP.

use lending_server::{
    api,
    config::{AppConfig, StoreConfig},
    models::Domain,
    AppState,
};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

/// Spawn a server and return its API base URL
async fn spawn_server(domain: Domain, seed: bool) -> String {
    let config = AppConfig {
        store: StoreConfig { domain, seed },
        ..Default::default()
    };
    let app = api::create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    format!("http://{}/api/v1", addr)
}

async fn create_item(client: &Client, base: &str, body: Value) -> Value {
    let response = client
        .post(format!("{}/items", base))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_server(Domain::Library, true).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", base))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");

    let body: Value = client
        .get(format!("{}/ready", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body["items"], 5);
    assert_eq!(body["owners"], 5);
}

#[tokio::test]
async fn test_create_get_delete_scenario() {
    let base = spawn_server(Domain::Library, false).await;
    let client = Client::new();

    let first = create_item(
        &client,
        &base,
        json!({ "name": "Widget", "category": "Tool", "quantity": 3 }),
    )
    .await;
    assert_eq!(first["id"], 1);
    assert_eq!(first["available"], true);

    let second = create_item(
        &client,
        &base,
        json!({ "name": "Gadget", "category": "Tool", "quantity": 1 }),
    )
    .await;
    assert_eq!(second["id"], 2);

    let fetched: Value = client
        .get(format!("{}/items/1", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(fetched, first);

    let response = client
        .delete(format!("{}/items/1", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book deleted successfully");

    let response = client
        .get(format!("{}/items/1", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].is_string());

    let listed: Value = client
        .get(format!("{}/items", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(listed, json!([second]));

    // Ids keep growing after a delete
    let third = create_item(
        &client,
        &base,
        json!({ "name": "Gizmo", "category": "Tool", "quantity": 0 }),
    )
    .await;
    assert_eq!(third["id"], 3);
}

#[tokio::test]
async fn test_non_numeric_id_is_invalid_argument() {
    let base = spawn_server(Domain::Library, true).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/items/abc", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "InvalidArgument");

    let response = client
        .put(format!("{}/owners/1/items/xyz", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_item_validation() {
    let base = spawn_server(Domain::Library, false).await;
    let client = Client::new();

    for body in [
        json!({ "name": "Widget", "category": "Tool" }),
        json!({ "name": "Widget", "category": "Tool", "quantity": -1 }),
        json!({ "name": "Widget", "category": "Tool", "quantity": "3" }),
        json!({ "name": "", "category": "Tool", "quantity": 3 }),
        json!({ "name": "Widget", "category": "Tool", "quantity": 3, "color": "red" }),
    ] {
        let response = client
            .post(format!("{}/items", base))
            .json(&body)
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {}", body);
        let error: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(error["error"], "BadValue");
        assert!(error["message"].is_string());
    }

    let listed: Value = client
        .get(format!("{}/items", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_filter_by_domain_alias() {
    let base = spawn_server(Domain::Library, true).await;
    let client = Client::new();

    let books: Value = client
        .get(format!("{}/books?author=Ray%20Bradbury", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(books.as_array().map(Vec::len), Some(1));
    assert_eq!(books[0]["name"], "Fahrenheit 451");

    let none: Value = client
        .get(format!("{}/items?category=Nobody", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(none, json!([]));

    let response = client
        .get(format!("{}/items?available=maybe", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_item() {
    let base = spawn_server(Domain::Library, true).await;
    let client = Client::new();

    let response = client
        .put(format!("{}/books/2", base))
        .json(&json!({ "title": "Island", "author": "Aldous Huxley", "availableCopies": 1 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(updated["id"], 2);
    assert_eq!(updated["name"], "Island");
    assert_eq!(updated["quantity"], 1);

    let response = client
        .put(format!("{}/books/99", base))
        .json(&json!({ "title": "Island", "author": "Aldous Huxley", "availableCopies": 1 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .put(format!("{}/books/2", base))
        .json(&json!({ "title": "Island" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_bad_id_is_reported_before_body() {
    let base = spawn_server(Domain::Library, true).await;
    let client = Client::new();

    let response = client
        .put(format!("{}/items/abc", base))
        .json(&json!({ "color": "red" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "InvalidArgument");

    // No body and no content type at all
    let response = client
        .put(format!("{}/items/abc", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "InvalidArgument");

    let response = client
        .delete(format!("{}/items/abc", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "InvalidArgument");
}

#[tokio::test]
async fn test_update_unknown_item_wins_over_bad_body() {
    let base = spawn_server(Domain::Library, true).await;
    let client = Client::new();

    let response = client
        .put(format!("{}/items/99", base))
        .json(&json!({ "quantity": "x" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "NoSuchData");

    let response = client
        .put(format!("{}/items/99", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Existing item with the same body is a validation error
    let response = client
        .put(format!("{}/items/1", base))
        .json(&json!({ "quantity": "x" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_repeated_filter_aliases_last_wins() {
    let base = spawn_server(Domain::Library, true).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/books?author=Nobody&category=Ray%20Bradbury", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let books: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(books.as_array().map(Vec::len), Some(1));
    assert_eq!(books[0]["name"], "Fahrenheit 451");
}

#[tokio::test]
async fn test_owner_association_scenario() {
    let base = spawn_server(Domain::Library, false).await;
    let client = Client::new();

    create_item(
        &client,
        &base,
        json!({ "name": "Widget", "category": "Tool", "quantity": 3 }),
    )
    .await;
    let gadget = create_item(
        &client,
        &base,
        json!({ "name": "Gadget", "category": "Tool", "quantity": 1 }),
    )
    .await;

    let response = client
        .post(format!("{}/owners", base))
        .json(&json!({ "name": "Alice", "email": "a@x.com" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let owner: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(owner["heldItemIds"], json!([]));
    let owner_id = owner["id"].as_i64().expect("No owner ID");

    let response = client
        .put(format!("{}/owners/{}/items/2", base, owner_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let owner: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(owner["heldItemIds"], json!([2]));

    let held: Value = client
        .get(format!("{}/owners/{}/items", base, owner_id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(held, json!([gadget]));

    let response = client
        .put(format!("{}/owners/{}/items/42", base, owner_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .get(format!("{}/owners/42/items", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_owner_rejects_missing_and_unknown_fields() {
    let base = spawn_server(Domain::PetAdoption, false).await;
    let client = Client::new();

    for body in [
        json!({ "name": "Alice" }),
        json!({ "name": "Alice", "email": "a@x.com", "adoptedPets": [1] }),
    ] {
        let response = client
            .post(format!("{}/adopters", base))
            .json(&body)
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {}", body);
    }
}

#[tokio::test]
async fn test_delete_reconciles_owner_references() {
    let base = spawn_server(Domain::PetAdoption, true).await;
    let client = Client::new();

    // Seed: Jane Doe (1) holds Mittens (2)
    let response = client
        .delete(format!("{}/pets/2", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let jane: Value = client
        .get(format!("{}/adopters/1", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(jane["heldItemIds"], json!([]));

    let pets: Value = client
        .get(format!("{}/adopters/1/pets", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(pets, json!([]));

    let response = client
        .delete(format!("{}/pets/2", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_adopt_and_list_adopters() {
    let base = spawn_server(Domain::PetAdoption, true).await;
    let client = Client::new();

    let response = client
        .put(format!("{}/pets/1/adopt", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let buddy: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(buddy["available"], false);

    let owner: Value = client
        .put(format!("{}/adopters/2/pets/1", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(owner["heldItemIds"], json!([5, 1]));

    let adopters: Value = client
        .get(format!("{}/adopters", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(adopters.as_array().map(Vec::len), Some(2));
    assert_eq!(adopters[1]["items"][1]["name"], "Buddy");

    let available: Value = client
        .get(format!("{}/pets?available=true&species=Cat", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(available, json!([]));
}

#[tokio::test]
async fn test_adopt_route_associates_pet() {
    let base = spawn_server(Domain::PetAdoption, true).await;
    let client = Client::new();

    let response = client
        .put(format!("{}/adopters/1/adopt/3", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let jane: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(jane["heldItemIds"], json!([2, 3]));

    let response = client
        .put(format!("{}/adopters/1/adopt/42", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .put(format!("{}/owners/1/claim/abc", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let base = spawn_server(Domain::Library, true).await;
    let root = base.trim_end_matches("/api/v1");
    let client = Client::new();

    let response = client
        .get(format!("{}/api-docs/openapi.json", root))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let doc: Value = response.json().await.expect("Failed to parse response");
    assert!(doc["paths"]["/items"].is_object());
}
