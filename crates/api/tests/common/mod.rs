#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::{TimeZone, Utc};
use gameshelf_api::config::ServerConfig;
use gameshelf_api::router::build_app_router;
use gameshelf_api::services::VideoGameService;
use gameshelf_api::state::AppState;
use gameshelf_core::clock::ManualClock;
use gameshelf_core::types::{DbId, Timestamp};
use gameshelf_db::models::video_game::{NewVideoGame, VideoGame};
use gameshelf_db::repositories::{InMemoryVideoGameRepo, VideoGameRepository};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:4200".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        database_url: None,
        db_max_connections: 1,
    }
}

/// Fixed instant every test clock starts at.
pub fn t0() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Build the full application router over the given repository, using the
/// same middleware stack as production.
pub fn build_test_app(repo: Arc<dyn VideoGameRepository>) -> Router {
    let state = AppState {
        games: VideoGameService::new(repo),
    };
    build_app_router(state, &test_config())
}

/// An empty in-memory store on a manual clock. The store is returned too so
/// tests can inspect it directly after driving the router.
pub fn empty_store() -> (Arc<ManualClock>, Arc<InMemoryVideoGameRepo>) {
    let clock = Arc::new(ManualClock::new(t0()));
    let repo = Arc::new(InMemoryVideoGameRepo::new(clock.clone()));
    (clock, repo)
}

/// A seeded in-memory store on a manual clock.
pub fn seeded_store() -> Arc<InMemoryVideoGameRepo> {
    let clock = Arc::new(ManualClock::new(t0()));
    Arc::new(InMemoryVideoGameRepo::seeded(clock))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Test doubles
// ---------------------------------------------------------------------------

/// A repository whose every call fails as if the database were unreachable.
#[derive(Debug, Default)]
pub struct UnavailableRepo;

fn unavailable() -> sqlx::Error {
    sqlx::Error::Protocol("connection refused to db.internal:5432 (password=hunter2)".into())
}

#[async_trait]
impl VideoGameRepository for UnavailableRepo {
    async fn list_all(&self) -> Result<Vec<VideoGame>, sqlx::Error> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: DbId) -> Result<Option<VideoGame>, sqlx::Error> {
        Err(unavailable())
    }

    async fn create(&self, _input: &NewVideoGame) -> Result<VideoGame, sqlx::Error> {
        Err(unavailable())
    }

    async fn update(&self, _game: &VideoGame) -> Result<Option<VideoGame>, sqlx::Error> {
        Err(unavailable())
    }

    async fn delete(&self, _id: DbId) -> Result<bool, sqlx::Error> {
        Err(unavailable())
    }

    async fn exists(&self, _id: DbId) -> Result<bool, sqlx::Error> {
        Err(unavailable())
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Err(unavailable())
    }
}
