use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tavern_backend_rs::{
    app,
    modules::menu::repository::MenuStore,
    types::{AppContext, AppEnvironment, Context},
};
use tower::ServiceExt;
use uuid::Uuid;

fn test_router() -> Router {
    let ctx = Arc::new(Context {
        app: AppContext {
            host: String::from("127.0.0.1"),
            environment: AppEnvironment::Test,
            port: 0,
            debug: false,
        },
        menus: MenuStore::seeded(),
    });

    app::router(ctx)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn get_menu_returns_seed_items_sorted_by_name() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/api/menus/ale?sort=name&order=asc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let names = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Dwarven Spring", "Harvest Mist", "Monk's Staff"]);
}

#[tokio::test]
async fn get_menu_defaults_to_price_ascending() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/api/menus/ale")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let prices = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["price"].as_f64().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(prices, vec![0.8, 1.0, 1.2]);
}

#[tokio::test]
async fn get_menu_sorts_by_price_descending() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/api/menus/wine?sort=price&order=desc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let names = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Alexston Farmstead", "Red Valley", "Stargazer"]);
}

#[tokio::test]
async fn get_menu_rejects_unknown_type() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/api/menus/dessert")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["type"], "validation_error");
    assert_eq!(body["error"], "Validation error");

    let details = body["details"].as_array().unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0]["path"], "menu_type");
}

#[tokio::test]
async fn get_menu_rejects_unknown_sort_field() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/api/menus/ale?sort=calories")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["type"], "validation_error");
}

#[tokio::test]
async fn add_item_appends_to_the_menu() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/menus/food/items")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "name": "Westfall Stew",
                        "description": "A rich stew of okra, wolf meat and murloc eye",
                        "price": 1.1,
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let menu = body["data"].as_array().unwrap();
    assert_eq!(menu.len(), 4);

    let added = menu.last().unwrap();
    assert_eq!(added["name"], "Westfall Stew");
    assert_eq!(added["price"], 1.1);

    let id = Uuid::parse_str(added["id"].as_str().unwrap()).unwrap();
    assert_eq!(id.get_version_num(), 4);
}

#[tokio::test]
async fn add_item_rejects_invalid_body() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/menus/food/items")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "name": "x",
                        "description": "too short",
                        "price": -1.0,
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["type"], "validation_error");

    let paths = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|issue| issue["path"].as_str().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(paths, vec!["description", "name", "price"]);
}

#[tokio::test]
async fn add_item_rejects_unknown_type() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/menus/dessert/items")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "name": "Conjured Mana Cake",
                        "description": "Tastes of nothing and vanishes overnight",
                        "price": 0.0,
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["type"], "validation_error");
}

#[tokio::test]
async fn remove_item_deletes_an_existing_item() {
    let router = test_router();

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/menus/ale")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(response).await;
    let id = body["data"][0]["id"].as_str().unwrap().to_string();

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/menus/ale/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/menus/ale")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn remove_item_reports_unknown_id() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/menus/ale/00000000-0000-4000-8000-000000000000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["type"], "missing_resource");
    assert_eq!(
        body["error"],
        "Menu item with id 00000000-0000-4000-8000-000000000000 not found"
    );
}

#[tokio::test]
async fn remove_item_rejects_malformed_id() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/menus/ale/not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["type"], "validation_error");

    let details = body["details"].as_array().unwrap();
    assert_eq!(details[0]["path"], "id");
}

#[tokio::test]
async fn unmatched_route_reports_missing_route() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/api/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["type"], "missing_route");
    assert_eq!(body["error"], "Route not found");
    assert_eq!(body["details"], Value::Null);
}
