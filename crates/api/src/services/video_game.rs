//! Video game service: maps repository rows to public projections.

use std::sync::Arc;

use gameshelf_core::types::DbId;
use gameshelf_db::models::video_game::{
    CreateVideoGame, NewVideoGame, UpdateVideoGame, VideoGame, VideoGameDto,
};
use gameshelf_db::repositories::VideoGameRepository;

/// Cheaply cloneable handle over a shared repository.
#[derive(Clone)]
pub struct VideoGameService {
    repo: Arc<dyn VideoGameRepository>,
}

impl VideoGameService {
    pub fn new(repo: Arc<dyn VideoGameRepository>) -> Self {
        Self { repo }
    }

    /// Reachability of the backing store, for the health endpoint.
    pub async fn store_healthy(&self) -> bool {
        self.repo.health_check().await.is_ok()
    }

    pub async fn list_all(&self) -> Result<Vec<VideoGameDto>, sqlx::Error> {
        let games = self.repo.list_all().await?;
        Ok(games.into_iter().map(VideoGameDto::from).collect())
    }

    pub async fn get_by_id(&self, id: DbId) -> Result<Option<VideoGameDto>, sqlx::Error> {
        Ok(self.repo.find_by_id(id).await?.map(VideoGameDto::from))
    }

    pub async fn create(&self, input: CreateVideoGame) -> Result<VideoGameDto, sqlx::Error> {
        let game = self.repo.create(&NewVideoGame::from(input)).await?;
        Ok(game.into())
    }

    /// Replace every mutable field of an existing record.
    ///
    /// Returns `None` without touching the store when `id` does not exist.
    pub async fn update(
        &self,
        id: DbId,
        input: UpdateVideoGame,
    ) -> Result<Option<VideoGameDto>, sqlx::Error> {
        let Some(existing) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let replacement = VideoGame {
            title: input.title,
            genre: input.genre,
            release_date: input.release_date,
            publisher: input.publisher,
            rating: input.rating,
            price: input.price,
            description: input.description,
            ..existing
        };

        Ok(self.repo.update(&replacement).await?.map(VideoGameDto::from))
    }

    /// Returns `false` if no record with `id` existed.
    pub async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        self.repo.delete(id).await
    }
}
