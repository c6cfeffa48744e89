//! Service layer between HTTP handlers and repositories.
//!
//! Services own entity <-> DTO mapping and existence checks; handlers only
//! validate input and translate results into status codes.

pub mod video_game;

pub use video_game::VideoGameService;
