//! Integration tests for the relay surface: upstream status and body pass
//! through verbatim, credentials and query strings are forwarded, and
//! transport failures map to a generic 500.

mod common;

use axum::body::Body;
use axum::extract::RawQuery;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, Request, StatusCode, Uri};
use axum::routing::{any, delete, get, post};
use axum::{Json, Router};
use common::{body_is_empty, body_json, build_test_app, post_json, send, spawn_stub, test_config};
use serde_json::{json, Value};

#[tokio::test]
async fn relay_returns_upstream_body_and_status_verbatim() {
    let stub = Router::new().route(
        "/reservations",
        get(|| async { Json(json!([{ "id": 1, "status": "booked" }])) }),
    );
    let mut config = test_config();
    config.upstream_api_url = spawn_stub(stub).await;
    let app = build_test_app(config);

    let response = common::get(app, "/api/reservations").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([{ "id": 1, "status": "booked" }])
    );
}

#[tokio::test]
async fn relay_preserves_upstream_error_responses() {
    let stub = Router::new().route(
        "/reservations",
        post(|| async {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "message": "vehicle not available" })),
            )
        }),
    );
    let mut config = test_config();
    config.upstream_api_url = spawn_stub(stub).await;
    let app = build_test_app(config);

    let response = post_json(app, "/api/reservations", json!({ "vehicleId": 4 })).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body_json(response).await["message"],
        "vehicle not available"
    );
}

#[tokio::test]
async fn relay_forwards_bearer_tenant_and_query() {
    let stub = Router::new().route(
        "/customers",
        get(|headers: HeaderMap, RawQuery(query): RawQuery| async move {
            Json(json!({
                "authorization": headers.get("authorization").and_then(|v| v.to_str().ok()),
                "companyId": headers.get("x-company-id").and_then(|v| v.to_str().ok()),
                "query": query,
            }))
        }),
    );
    let mut config = test_config();
    config.upstream_api_url = spawn_stub(stub).await;
    let app = build_test_app(config);

    let request = Request::builder()
        .uri("/api/customers?search=smith&page=2")
        .header("Authorization", "Bearer tok-abc")
        .header("x-company-id", "co-7")
        .body(Body::empty())
        .unwrap();
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let echoed = body_json(response).await;
    assert_eq!(echoed["authorization"], "Bearer tok-abc");
    assert_eq!(echoed["companyId"], "co-7");
    assert_eq!(echoed["query"], "search=smith&page=2");
}

#[tokio::test]
async fn relay_preserves_empty_bodies() {
    let stub = Router::new().route(
        "/reservations/{id}",
        delete(|| async { StatusCode::NO_CONTENT }),
    );
    let mut config = test_config();
    config.upstream_api_url = spawn_stub(stub).await;
    let app = build_test_app(config);

    let response = common::delete(app, "/api/reservations/42").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_is_empty(response).await);
}

#[tokio::test]
async fn non_json_upstream_bodies_are_wrapped() {
    let stub = Router::new().route(
        "/payments",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
    );
    let mut config = test_config();
    config.upstream_api_url = spawn_stub(stub).await;
    let app = build_test_app(config);

    let response = common::get(app, "/api/payments").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "upstream exploded" })
    );
}

#[tokio::test]
async fn admin_passthrough_forwards_method_path_query_and_body() {
    let stub = Router::new().route(
        "/admin/{*rest}",
        any(
            |method: Method, uri: Uri, body: Option<Json<Value>>| async move {
                Json(json!({
                    "method": method.as_str(),
                    "path": uri.path(),
                    "query": uri.query(),
                    "body": body.map(|Json(v)| v),
                }))
            },
        ),
    );
    let mut config = test_config();
    config.upstream_api_url = spawn_stub(stub).await;
    let app = build_test_app(config);

    let request = Request::builder()
        .method(Method::PUT)
        .uri("/api/admin/locations/5?dryRun=true")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "name": "Airport" }).to_string()))
        .unwrap();
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let echoed = body_json(response).await;
    assert_eq!(echoed["method"], "PUT");
    assert_eq!(echoed["path"], "/admin/locations/5");
    assert_eq!(echoed["query"], "dryRun=true");
    assert_eq!(echoed["body"]["name"], "Airport");
}

#[tokio::test]
async fn admin_passthrough_without_body() {
    let stub = Router::new().route(
        "/admin/{*rest}",
        any(|body: Option<Json<Value>>| async move {
            Json(json!({ "hadBody": body.is_some() }))
        }),
    );
    let mut config = test_config();
    config.upstream_api_url = spawn_stub(stub).await;
    let app = build_test_app(config);

    let response = common::get(app, "/api/admin/reports/usage").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["hadBody"], false);
}

#[tokio::test]
async fn transition_posts_forward_without_a_body() {
    let stub = Router::new().route(
        "/reservations/{id}/return",
        post(|body: Option<Json<Value>>| async move {
            Json(json!({ "hadBody": body.is_some(), "status": "returned" }))
        }),
    );
    let mut config = test_config();
    config.upstream_api_url = spawn_stub(stub).await;
    let app = build_test_app(config);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/reservations/12/return")
        .body(Body::empty())
        .unwrap();
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let echoed = body_json(response).await;
    assert_eq!(echoed["hadBody"], false);
    assert_eq!(echoed["status"], "returned");
}

#[tokio::test]
async fn unreachable_upstream_maps_to_generic_500() {
    // test_config points the upstream at a closed port.
    let app = build_test_app(test_config());

    let response = common::get(app, "/api/vehicles").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UPSTREAM_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn vehicle_reads_normalize_pascal_case_keys() {
    let stub = Router::new().route(
        "/vehicles/{id}",
        get(|| async {
            Json(json!({
                "Id": 7,
                "Make": "Kia",
                "Model": "Sportage",
                "CurrentLocation": { "City": "Lisbon" },
            }))
        }),
    );
    let mut config = test_config();
    config.upstream_api_url = spawn_stub(stub).await;
    let app = build_test_app(config);

    let response = common::get(app, "/api/vehicles/7").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "id": 7,
            "make": "Kia",
            "model": "Sportage",
            "currentLocation": { "city": "Lisbon" },
        })
    );
}

#[tokio::test]
async fn vehicle_error_bodies_relay_untouched() {
    let stub = Router::new().route(
        "/vehicles/{id}",
        get(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "Message": "Vehicle not found" })),
            )
        }),
    );
    let mut config = test_config();
    config.upstream_api_url = spawn_stub(stub).await;
    let app = build_test_app(config);

    let response = common::get(app, "/api/vehicles/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    // Error payloads are not key-normalized.
    assert_eq!(body_json(response).await["Message"], "Vehicle not found");
}

#[tokio::test]
async fn nested_collection_routes_hit_the_matching_upstream_path() {
    let stub = Router::new().route(
        "/customers/{id}/reservations",
        get(|| async { Json(json!([{ "id": 9 }])) }),
    );
    let mut config = test_config();
    config.upstream_api_url = spawn_stub(stub).await;
    let app = build_test_app(config);

    let response = common::get(app, "/api/customers/3/reservations").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([{ "id": 9 }]));
}
