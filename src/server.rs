//! HTTP API over the game registry.
//!
//! Two endpoints, both POST with JSON bodies: `/api/new` creates a game,
//! `/api/turn` reveals a cell. Domain errors surface as
//! `{ "error": "<message>" }` with a client-error status.

use crate::games::minesweeper::GameError;
use crate::session::{GameRegistry, GameView};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, instrument};
use uuid::Uuid;

/// Request for creating a new game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGameRequest {
    /// Field width in cells.
    pub width: u16,
    /// Field height in cells.
    pub height: u16,
    /// Number of mines to place.
    pub mines_count: u16,
}

/// Request for revealing one cell of an existing game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnRequest {
    /// Identifier returned by game creation.
    pub game_id: Uuid,
    /// Row of the target cell, counted from the top.
    pub row: u16,
    /// Column of the target cell, counted from the left.
    pub col: u16,
}

/// Error body returned for rejected requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable reason.
    pub error: String,
}

/// Domain error wrapper that knows its HTTP status.
#[derive(Debug)]
pub struct ApiError(GameError);

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            GameError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };
        let body = ErrorResponse {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Builds the application router over a shared registry.
///
/// CORS allows any origin, method, and header so browser frontends can
/// call the API from anywhere.
pub fn router(registry: Arc<GameRegistry>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/new", post(create_game))
        .route("/api/turn", post(make_turn))
        .layer(cors)
        .with_state(registry)
}

#[instrument(skip(registry, request), fields(width = request.width, height = request.height, mines_count = request.mines_count))]
async fn create_game(
    State(registry): State<Arc<GameRegistry>>,
    Json(request): Json<NewGameRequest>,
) -> Result<Json<GameView>, ApiError> {
    let view = registry.create_game(request.width, request.height, request.mines_count)?;
    log_response(&view);
    Ok(Json(view))
}

#[instrument(skip(registry, request), fields(game_id = %request.game_id, row = request.row, col = request.col))]
async fn make_turn(
    State(registry): State<Arc<GameRegistry>>,
    Json(request): Json<TurnRequest>,
) -> Result<Json<GameView>, ApiError> {
    let view = registry.make_turn(request.game_id, request.row, request.col)?;
    log_response(&view);
    Ok(Json(view))
}

fn log_response(view: &GameView) {
    if let Ok(body) = serde_json::to_string(view) {
        debug!(%body, "response payload");
    }
}
