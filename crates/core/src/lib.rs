//! Domain types and rules shared by the storage and HTTP layers.

pub mod clock;
pub mod error;
pub mod types;
pub mod video_game;
