//! In-memory repository with the same semantics as [`super::PgVideoGameRepo`].
//!
//! Ids come from a monotonically increasing counter and are never reused,
//! matching a BIGSERIAL column. Ordering compares titles byte-wise, matching
//! `COLLATE "C"`.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use gameshelf_core::clock::Clock;
use gameshelf_core::types::{DbId, Timestamp};
use gameshelf_core::video_game::{round_price, round_rating};
use tokio::sync::RwLock;

use crate::models::video_game::{NewVideoGame, VideoGame};
use crate::repositories::VideoGameRepository;
use crate::seed;

#[derive(Debug)]
struct Table {
    rows: BTreeMap<DbId, VideoGame>,
    next_id: DbId,
}

impl Table {
    fn insert(&mut self, input: &NewVideoGame, created_at: Timestamp) -> VideoGame {
        let id = self.next_id;
        self.next_id += 1;

        let row = VideoGame {
            id,
            title: input.title.clone(),
            genre: input.genre.clone(),
            release_date: input.release_date,
            publisher: input.publisher.clone(),
            rating: input.rating.map(round_rating),
            price: input.price.map(round_price),
            description: input.description.clone(),
            created_at,
            updated_at: None,
        };
        self.rows.insert(id, row.clone());
        row
    }
}

impl Default for Table {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

#[derive(Debug)]
pub struct InMemoryVideoGameRepo {
    clock: Arc<dyn Clock>,
    table: RwLock<Table>,
}

impl InMemoryVideoGameRepo {
    /// An empty store.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            table: RwLock::new(Table::default()),
        }
    }

    /// A store pre-loaded with [`seed::default_catalogue`].
    pub fn seeded(clock: Arc<dyn Clock>) -> Self {
        let mut table = Table::default();
        for game in seed::default_catalogue() {
            table.insert(&game, seed::seed_created_at());
        }
        Self {
            clock,
            table: RwLock::new(table),
        }
    }
}

#[async_trait]
impl VideoGameRepository for InMemoryVideoGameRepo {
    async fn list_all(&self) -> Result<Vec<VideoGame>, sqlx::Error> {
        let table = self.table.read().await;
        let mut games: Vec<VideoGame> = table.rows.values().cloned().collect();
        games.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
        Ok(games)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<VideoGame>, sqlx::Error> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn create(&self, input: &NewVideoGame) -> Result<VideoGame, sqlx::Error> {
        let now = self.clock.now();
        Ok(self.table.write().await.insert(input, now))
    }

    async fn update(&self, game: &VideoGame) -> Result<Option<VideoGame>, sqlx::Error> {
        let now = self.clock.now();
        let mut table = self.table.write().await;
        let Some(stored) = table.rows.get_mut(&game.id) else {
            return Ok(None);
        };

        stored.title = game.title.clone();
        stored.genre = game.genre.clone();
        stored.release_date = game.release_date;
        stored.publisher = game.publisher.clone();
        stored.rating = game.rating.map(round_rating);
        stored.price = game.price.map(round_price);
        stored.description = game.description.clone();
        stored.updated_at = Some(now);

        Ok(Some(stored.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }

    async fn exists(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.table.read().await.rows.contains_key(&id))
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}
