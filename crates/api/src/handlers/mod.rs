//! Request handlers.
//!
//! Handlers validate input, delegate to the service layer, and map results
//! to status codes via [`crate::error::AppError`]. They hold no business logic.

pub mod video_game;
