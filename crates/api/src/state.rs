use crate::services::VideoGameService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the service holds its repository behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Video game service over the configured repository backend.
    pub games: VideoGameService,
}
