pub mod health;
pub mod video_game;

use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the full route tree. Everything is mounted at root level.
///
/// ```text
/// /health              service and store health
/// /videogames          list, create
/// /videogames/{id}     get, update, delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest(handlers::video_game::RESOURCE_PATH, video_game::router())
}
