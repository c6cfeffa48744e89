//! Route definitions for video games.

use axum::routing::get;
use axum::Router;

use crate::handlers::video_game;
use crate::state::AppState;

/// Routes mounted at `/videogames`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(video_game::list).post(video_game::create))
        .route(
            "/{id}",
            get(video_game::get_by_id)
                .put(video_game::update)
                .delete(video_game::delete),
        )
}
