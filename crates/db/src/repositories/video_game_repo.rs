//! Postgres repository for the `video_games` table.

use std::sync::Arc;

use async_trait::async_trait;
use gameshelf_core::clock::Clock;
use gameshelf_core::types::DbId;
use gameshelf_core::video_game::{round_price, round_rating};

use crate::models::video_game::{NewVideoGame, VideoGame};
use crate::repositories::VideoGameRepository;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, genre, release_date, publisher, rating, price, description, \
                       created_at, updated_at";

/// Provides CRUD operations for video games backed by Postgres.
#[derive(Debug, Clone)]
pub struct PgVideoGameRepo {
    pool: DbPool,
    clock: Arc<dyn Clock>,
}

impl PgVideoGameRepo {
    pub fn new(pool: DbPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

#[async_trait]
impl VideoGameRepository for PgVideoGameRepo {
    async fn list_all(&self) -> Result<Vec<VideoGame>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM video_games ORDER BY title COLLATE \"C\", id");
        sqlx::query_as::<_, VideoGame>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<VideoGame>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM video_games WHERE id = $1");
        sqlx::query_as::<_, VideoGame>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create(&self, input: &NewVideoGame) -> Result<VideoGame, sqlx::Error> {
        let query = format!(
            "INSERT INTO video_games \
                (title, genre, release_date, publisher, rating, price, description, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VideoGame>(&query)
            .bind(&input.title)
            .bind(&input.genre)
            .bind(input.release_date)
            .bind(&input.publisher)
            .bind(input.rating.map(round_rating))
            .bind(input.price.map(round_price))
            .bind(&input.description)
            .bind(self.clock.now())
            .fetch_one(&self.pool)
            .await
    }

    async fn update(&self, game: &VideoGame) -> Result<Option<VideoGame>, sqlx::Error> {
        let query = format!(
            "UPDATE video_games SET \
                title = $2, \
                genre = $3, \
                release_date = $4, \
                publisher = $5, \
                rating = $6, \
                price = $7, \
                description = $8, \
                updated_at = $9 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VideoGame>(&query)
            .bind(game.id)
            .bind(&game.title)
            .bind(&game.genre)
            .bind(game.release_date)
            .bind(&game.publisher)
            .bind(game.rating.map(round_rating))
            .bind(game.price.map(round_price))
            .bind(&game.description)
            .bind(self.clock.now())
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM video_games WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn exists(&self, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM video_games WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
