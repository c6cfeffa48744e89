//! Handlers for the `/videogames` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use gameshelf_core::error::CoreError;
use gameshelf_core::types::DbId;
use gameshelf_core::video_game::ENTITY_NAME;
use gameshelf_db::models::video_game::{CreateVideoGame, UpdateVideoGame};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Base path of the resource, used to build `Location` headers.
pub const RESOURCE_PATH: &str = "/videogames";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ENTITY_NAME,
        id,
    })
}

/// GET /videogames
///
/// List every video game ordered by title.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let games = state.games.list_all().await?;
    Ok(Json(games))
}

/// GET /videogames/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let game = state.games.get_by_id(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(game))
}

/// POST /videogames
///
/// Create a video game. Responds 201 with a `Location` header pointing at
/// the new record.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateVideoGame>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    input.validate()?;

    let game = state.games.create(input).await?;

    tracing::info!(video_game_id = game.id, title = %game.title, "Video game created");

    let location = format!("{RESOURCE_PATH}/{}", game.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(game)))
}

/// PUT /videogames/{id}
///
/// Replace every field of an existing video game.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<UpdateVideoGame>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    input.validate()?;

    let game = state
        .games
        .update(id, input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(video_game_id = id, title = %game.title, "Video game updated");

    Ok(Json(game))
}

/// DELETE /videogames/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !state.games.delete(id).await? {
        return Err(not_found(id));
    }

    tracing::info!(video_game_id = id, "Video game deleted");

    Ok(StatusCode::NO_CONTENT)
}
