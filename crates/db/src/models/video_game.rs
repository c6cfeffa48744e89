//! Video game entity model and DTOs.
//!
//! Three shapes cross the layers: the persisted [`VideoGame`] row (with
//! audit timestamps), caller input ([`CreateVideoGame`] / [`UpdateVideoGame`]
//! and the repository-facing [`NewVideoGame`]), and the public
//! [`VideoGameDto`] projection which never carries audit fields.

use chrono::NaiveDate;
use gameshelf_core::types::{DbId, Timestamp};
use gameshelf_core::video_game::{
    validate_optional_text, validate_price, validate_rating, validate_title,
    DESCRIPTION_MAX_LEN, GENRE_MAX_LEN, PUBLISHER_MAX_LEN,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationErrors};

/// A row from the `video_games` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct VideoGame {
    pub id: DbId,
    pub title: String,
    pub genre: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub publisher: Option<String>,
    pub rating: Option<Decimal>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// Fields of a record about to be inserted. The repository assigns the id
/// and `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVideoGame {
    pub title: String,
    pub genre: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub publisher: Option<String>,
    pub rating: Option<Decimal>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
}

/// DTO for creating a new video game.
///
/// `title` reads as empty when omitted or `null`, so a missing title is
/// reported as a field validation error rather than a body parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoGame {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    pub genre: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub publisher: Option<String>,
    pub rating: Option<Decimal>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
}

/// DTO for replacing an existing video game.
///
/// Full replacement: an omitted optional field clears the stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVideoGame {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    pub genre: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub publisher: Option<String>,
    pub rating: Option<Decimal>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Public projection returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGameDto {
    pub id: DbId,
    pub title: String,
    pub genre: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub publisher: Option<String>,
    pub rating: Option<Decimal>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
}

impl From<VideoGame> for VideoGameDto {
    fn from(game: VideoGame) -> Self {
        Self {
            id: game.id,
            title: game.title,
            genre: game.genre,
            release_date: game.release_date,
            publisher: game.publisher,
            rating: game.rating,
            price: game.price,
            description: game.description,
        }
    }
}

impl From<CreateVideoGame> for NewVideoGame {
    fn from(input: CreateVideoGame) -> Self {
        Self {
            title: input.title,
            genre: input.genre,
            release_date: input.release_date,
            publisher: input.publisher,
            rating: input.rating,
            price: input.price,
            description: input.description,
        }
    }
}

impl Validate for CreateVideoGame {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(
            &self.title,
            self.genre.as_deref(),
            self.publisher.as_deref(),
            self.rating,
            self.price,
            self.description.as_deref(),
        )
    }
}

impl Validate for UpdateVideoGame {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(
            &self.title,
            self.genre.as_deref(),
            self.publisher.as_deref(),
            self.rating,
            self.price,
            self.description.as_deref(),
        )
    }
}

/// Collect every violated field rather than stopping at the first.
fn validate_fields(
    title: &str,
    genre: Option<&str>,
    publisher: Option<&str>,
    rating: Option<Decimal>,
    price: Option<Decimal>,
    description: Option<&str>,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Err(e) = validate_title(title) {
        errors.add("title", e);
    }
    if let Err(e) = validate_optional_text("Genre", genre, GENRE_MAX_LEN) {
        errors.add("genre", e);
    }
    if let Err(e) = validate_optional_text("Publisher", publisher, PUBLISHER_MAX_LEN) {
        errors.add("publisher", e);
    }
    if let Some(Err(e)) = rating.map(validate_rating) {
        errors.add("rating", e);
    }
    if let Some(Err(e)) = price.map(validate_price) {
        errors.add("price", e);
    }
    if let Err(e) = validate_optional_text("Description", description, DESCRIPTION_MAX_LEN) {
        errors.add("description", e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    use super::*;

    fn sample_row() -> VideoGame {
        VideoGame {
            id: 7,
            title: "Celeste".to_string(),
            genre: Some("Platformer".to_string()),
            release_date: NaiveDate::from_ymd_opt(2018, 1, 25),
            publisher: Some("Maddy Makes Games".to_string()),
            rating: Some(dec!(9.1)),
            price: Some(dec!(19.99)),
            description: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Some(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()),
        }
    }

    #[test]
    fn projection_omits_audit_fields() {
        let dto = VideoGameDto::from(sample_row());
        let json = serde_json::to_value(&dto).unwrap();
        let obj = json.as_object().unwrap();

        assert!(!obj.contains_key("createdAt"));
        assert!(!obj.contains_key("updatedAt"));
        assert!(!obj.contains_key("created_at"));
        assert_eq!(obj["releaseDate"], "2018-01-25");
        assert_eq!(obj["price"], serde_json::json!(19.99));
        assert_eq!(obj["title"], "Celeste");
    }

    #[test]
    fn create_input_reads_camel_case_and_defaults_missing_title() {
        let input: CreateVideoGame = serde_json::from_value(serde_json::json!({
            "releaseDate": "2020-09-17",
            "rating": 9.3
        }))
        .unwrap();

        assert_eq!(input.title, "");
        assert_eq!(input.release_date, NaiveDate::from_ymd_opt(2020, 9, 17));
        assert_eq!(input.rating, Some(dec!(9.3)));
        assert!(input.genre.is_none());
    }

    #[test]
    fn null_title_reads_as_missing_and_fails_validation() {
        let create: CreateVideoGame =
            serde_json::from_value(serde_json::json!({"title": null, "rating": 5})).unwrap();
        let update: UpdateVideoGame =
            serde_json::from_value(serde_json::json!({"title": null})).unwrap();

        assert_eq!(create.title, "");
        assert_eq!(update.title, "");
        assert!(create.validate().unwrap_err().field_errors().contains_key("title"));
        assert!(update.validate().unwrap_err().field_errors().contains_key("title"));
    }

    #[test]
    fn validation_reports_every_violated_field() {
        let input = CreateVideoGame {
            title: String::new(),
            genre: Some("g".repeat(GENRE_MAX_LEN + 1)),
            rating: Some(dec!(11)),
            price: Some(dec!(-0.01)),
            ..Default::default()
        };

        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("genre"));
        assert!(fields.contains_key("rating"));
        assert!(fields.contains_key("price"));
        assert!(!fields.contains_key("publisher"));
        assert!(!fields.contains_key("description"));
    }

    #[test]
    fn valid_update_input_passes() {
        let input = UpdateVideoGame {
            title: "Hades".to_string(),
            rating: Some(dec!(10)),
            price: Some(dec!(9999.99)),
            ..Default::default()
        };
        assert!(input.validate().is_ok());
    }
}
