//! Data access for the `video_games` table.
//!
//! [`VideoGameRepository`] is the seam between the service layer and the
//! store. [`PgVideoGameRepo`] is the production backend; [`InMemoryVideoGameRepo`]
//! mirrors its semantics for local runs without Postgres and for tests.
//!
//! All methods fail with `sqlx::Error` for storage faults. Faults are never
//! swallowed and never retried here.

use async_trait::async_trait;
use gameshelf_core::types::DbId;

use crate::models::video_game::{NewVideoGame, VideoGame};

pub mod in_memory;
pub mod video_game_repo;

pub use in_memory::InMemoryVideoGameRepo;
pub use video_game_repo::PgVideoGameRepo;

#[async_trait]
pub trait VideoGameRepository: Send + Sync {
    /// All records ordered by title (byte-wise), ties broken by id.
    async fn list_all(&self) -> Result<Vec<VideoGame>, sqlx::Error>;

    /// Find a record by id. A missing id is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: DbId) -> Result<Option<VideoGame>, sqlx::Error>;

    /// Insert a record, stamping `created_at` from the repository clock.
    async fn create(&self, input: &NewVideoGame) -> Result<VideoGame, sqlx::Error>;

    /// Overwrite every mutable column of the row with `game.id` and stamp
    /// `updated_at`. `created_at` is never written.
    ///
    /// Returns `None` if no row with that id exists; nothing is inserted.
    async fn update(&self, game: &VideoGame) -> Result<Option<VideoGame>, sqlx::Error>;

    /// Hard-delete a record. Returns `false` if it did not exist.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Existence-only check.
    async fn exists(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Confirm the backing store is reachable.
    async fn health_check(&self) -> Result<(), sqlx::Error>;
}
