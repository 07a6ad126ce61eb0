//! In-process tests for the HTTP layer, driving the router directly.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use minesweeper_server::{Board, Game, GameRegistry, router};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn test_create_game_over_http() {
    let app = router(Arc::new(GameRegistry::new()));

    let (status, body) = post(
        app,
        "/api/new",
        json!({ "width": 2, "height": 2, "mines_count": 1 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["width"], 2);
    assert_eq!(body["height"], 2);
    assert_eq!(body["mines_count"], 1);
    assert_eq!(body["completed"], false);
    assert_eq!(body["field"], json!([[" ", " "], [" ", " "]]));
    assert!(
        body["game_id"].as_str().unwrap().parse::<Uuid>().is_ok(),
        "game_id must be a UUID"
    );
}

#[tokio::test]
async fn test_create_game_rejects_oversized_field() {
    let app = router(Arc::new(GameRegistry::new()));

    let (status, body) = post(
        app,
        "/api/new",
        json!({ "width": 31, "height": 2, "mines_count": 1 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "field dimensions must not exceed 30×30");
}

#[tokio::test]
async fn test_create_game_rejects_excessive_mines() {
    let app = router(Arc::new(GameRegistry::new()));

    let (status, body) = post(
        app,
        "/api/new",
        json!({ "width": 3, "height": 3, "mines_count": 9 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "mine count must not exceed 8");
}

#[tokio::test]
async fn test_turn_on_unknown_game_returns_not_found() {
    let app = router(Arc::new(GameRegistry::new()));

    let (status, body) = post(
        app,
        "/api/turn",
        json!({ "game_id": Uuid::new_v4(), "row": 0, "col": 0 }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "game not found");
}

#[tokio::test]
async fn test_full_game_over_http() {
    let registry = Arc::new(GameRegistry::new());
    let app = router(registry);

    let (status, created) = post(
        app.clone(),
        "/api/new",
        json!({ "width": 1, "height": 1, "mines_count": 0 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let turn = json!({ "game_id": created["game_id"], "row": 0, "col": 0 });
    let (status, won) = post(app.clone(), "/api/turn", turn.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(won["completed"], true);
    assert_eq!(won["field"], json!([["0"]]));

    let (status, rejected) = post(app, "/api/turn", turn).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(rejected["error"], "game already completed");
}

#[tokio::test]
async fn test_losing_turn_over_http_shows_detonated_mine() {
    let registry = Arc::new(GameRegistry::new());
    let seeded = registry.insert_game(Game::new(Board::with_mines(2, 2, &[(0, 0)])));
    let app = router(registry);

    let (status, body) = post(
        app,
        "/api/turn",
        json!({ "game_id": seeded.game_id, "row": 0, "col": 0 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["completed"], true);
    assert_eq!(body["field"], json!([["X", "1"], ["1", "1"]]));
}
