//! Default catalogue inserted on first start.
//!
//! Postgres receives these rows from the seed migration; the in-memory store
//! loads them from here. Both must list the same games in the same order.

use chrono::{DateTime, NaiveDate};
use gameshelf_core::types::Timestamp;
use rust_decimal::Decimal;

use crate::models::video_game::NewVideoGame;

/// `created_at` of every seeded row: 2024-01-01T00:00:00Z.
const SEED_CREATED_AT_SECS: i64 = 1_704_067_200;

pub fn seed_created_at() -> Timestamp {
    DateTime::from_timestamp(SEED_CREATED_AT_SECS, 0).unwrap_or_default()
}

fn game(
    title: &str,
    genre: &str,
    released: Option<NaiveDate>,
    publisher: &str,
    rating: Decimal,
    price: Decimal,
    description: &str,
) -> NewVideoGame {
    NewVideoGame {
        title: title.to_string(),
        genre: Some(genre.to_string()),
        release_date: released,
        publisher: Some(publisher.to_string()),
        rating: Some(rating),
        price: Some(price),
        description: Some(description.to_string()),
    }
}

pub fn default_catalogue() -> Vec<NewVideoGame> {
    vec![
        game(
            "The Legend of Zelda: Breath of the Wild",
            "Action-Adventure",
            NaiveDate::from_ymd_opt(2017, 3, 3),
            "Nintendo",
            Decimal::new(97, 1),
            Decimal::new(5999, 2),
            "Open-world adventure across the ruined kingdom of Hyrule.",
        ),
        game(
            "The Witcher 3: Wild Hunt",
            "RPG",
            NaiveDate::from_ymd_opt(2015, 5, 19),
            "CD Projekt",
            Decimal::new(93, 1),
            Decimal::new(3999, 2),
            "Monster hunter Geralt searches for his adopted daughter.",
        ),
        game(
            "Minecraft",
            "Sandbox",
            NaiveDate::from_ymd_opt(2011, 11, 18),
            "Mojang Studios",
            Decimal::new(90, 1),
            Decimal::new(2695, 2),
            "Gather resources and build anything in a blocky procedural world.",
        ),
        game(
            "Hades",
            "Roguelike",
            NaiveDate::from_ymd_opt(2020, 9, 17),
            "Supergiant Games",
            Decimal::new(93, 1),
            Decimal::new(2499, 2),
            "Battle out of the underworld as the son of Hades.",
        ),
        game(
            "Stardew Valley",
            "Simulation",
            NaiveDate::from_ymd_opt(2016, 2, 26),
            "ConcernedApe",
            Decimal::new(89, 1),
            Decimal::new(1499, 2),
            "Inherit a farm and build a life in Pelican Town.",
        ),
    ]
}
