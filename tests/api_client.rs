//! Integration tests for the quotes API client.
//!
//! Each test boots a mock quotes service on an ephemeral port and drives
//! `ApiClient` against it, asserting on what actually reached the wire.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use quotedeck::api::{ApiClient, ApiError};

/// Requests seen by the mock service, recorded as "path?query" strings.
type RequestLog = Arc<Mutex<Vec<String>>>;

#[derive(Clone, Default)]
struct MockApi {
    log: RequestLog,
    fail_categories: bool,
    garbled_random: bool,
}

async fn quotes_handler(
    State(api): State<MockApi>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    let entry = match params.get("category") {
        Some(category) => format!("/quotes?category={category}"),
        None => "/quotes".to_string(),
    };
    api.log.lock().unwrap().push(entry);

    let all = json!([
        {
            "id": 1,
            "text": "It always seems impossible until it's done.",
            "author": "Nelson Mandela",
            "category": "perseverance"
        },
        {
            "id": 2,
            "text": "Turn your wounds into wisdom.",
            "author": "Oprah Winfrey",
            "category": "wisdom"
        },
        {
            "id": 3,
            "text": "The mind is everything. What you think you become.",
            "author": "Buddha",
            "category": "wisdom"
        },
    ]);

    match params.get("category") {
        Some(category) => {
            let filtered: Vec<_> = all
                .as_array()
                .unwrap()
                .iter()
                .filter(|quote| quote["category"] == category.as_str())
                .cloned()
                .collect();
            Json(serde_json::Value::Array(filtered))
        }
        None => Json(all),
    }
}

async fn categories_handler(State(api): State<MockApi>) -> impl IntoResponse {
    api.log.lock().unwrap().push("/categories".to_string());

    if api.fail_categories {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "boom"}))).into_response();
    }

    Json(json!(["perseverance", "wisdom"])).into_response()
}

async fn random_handler(State(api): State<MockApi>) -> impl IntoResponse {
    api.log.lock().unwrap().push("/quotes/random".to_string());

    if api.garbled_random {
        return "definitely not json".into_response();
    }

    Json(json!({
        "id": 2,
        "text": "Turn your wounds into wisdom.",
        "author": "Oprah Winfrey",
        "category": "wisdom"
    }))
    .into_response()
}

async fn spawn_mock(api: MockApi) -> SocketAddr {
    let router = Router::new()
        .route("/quotes", get(quotes_handler))
        .route("/quotes/random", get(random_handler))
        .route("/categories", get(categories_handler))
        .with_state(api);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> ApiClient {
    ApiClient::new(format!("http://{addr}"))
}

#[tokio::test]
async fn initial_load_returns_all_three_collections() {
    let api = MockApi::default();
    let addr = spawn_mock(api.clone()).await;
    let client = client_for(addr);

    let (quotes, categories, featured) = client.initial_load().await.unwrap();

    assert_eq!(quotes.len(), 3);
    assert_eq!(categories, vec!["perseverance", "wisdom"]);
    assert_eq!(featured.text, "Turn your wounds into wisdom.");
    assert_eq!(featured.author, "Oprah Winfrey");

    let log = api.log.lock().unwrap();
    assert_eq!(log.len(), 3);
    assert!(log.contains(&"/quotes".to_string()));
    assert!(log.contains(&"/categories".to_string()));
    assert!(log.contains(&"/quotes/random".to_string()));
}

#[tokio::test]
async fn initial_load_fails_as_a_whole_when_one_endpoint_fails() {
    let api = MockApi {
        fail_categories: true,
        ..Default::default()
    };
    let addr = spawn_mock(api).await;
    let client = client_for(addr);

    let err = client.initial_load().await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status, .. } if status.as_u16() == 500));
}

#[tokio::test]
async fn category_filter_issues_a_single_filtered_request() {
    let api = MockApi::default();
    let addr = spawn_mock(api.clone()).await;
    let client = client_for(addr);

    let quotes = client.quotes(Some("wisdom")).await.unwrap();

    assert_eq!(quotes.len(), 2);
    assert!(quotes.iter().all(|quote| quote.category == "wisdom"));

    let log = api.log.lock().unwrap();
    assert_eq!(*log, vec!["/quotes?category=wisdom".to_string()]);
}

#[tokio::test]
async fn unfiltered_fetch_restores_the_full_list() {
    let api = MockApi::default();
    let addr = spawn_mock(api.clone()).await;
    let client = client_for(addr);

    let filtered = client.quotes(Some("perseverance")).await.unwrap();
    assert_eq!(filtered.len(), 1);

    let all = client.quotes(None).await.unwrap();
    assert_eq!(all.len(), 3);

    let log = api.log.lock().unwrap();
    assert_eq!(
        *log,
        vec![
            "/quotes?category=perseverance".to_string(),
            "/quotes".to_string(),
        ]
    );
}

#[tokio::test]
async fn unknown_category_returns_an_empty_list() {
    let api = MockApi::default();
    let addr = spawn_mock(api).await;
    let client = client_for(addr);

    let quotes = client.quotes(Some("gratitude")).await.unwrap();
    assert!(quotes.is_empty());
}

#[tokio::test]
async fn random_quote_does_not_touch_other_endpoints() {
    let api = MockApi::default();
    let addr = spawn_mock(api.clone()).await;
    let client = client_for(addr);

    let quote = client.random_quote().await.unwrap();
    assert_eq!(quote.id, 2);

    let log = api.log.lock().unwrap();
    assert_eq!(*log, vec!["/quotes/random".to_string()]);
}

#[tokio::test]
async fn garbled_body_is_a_decode_error() {
    let api = MockApi {
        garbled_random: true,
        ..Default::default()
    };
    let addr = spawn_mock(api).await;
    let client = client_for(addr);

    let err = client.random_quote().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
}
