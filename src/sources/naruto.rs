//! Naruto characters from Jikan (anime id 20 by default).
//!
//! Everyone is a `"Ninja"`; main characters belong to Konoha (both as
//! affiliation and village), everyone else is `"Various"` with no village.
//! Clan and rank are not available upstream.

use super::jikan::{JikanConfig, JikanEntry, JikanSource};
use crate::{
    config::CatalogConfig,
    types::{CharacterRecord, Series, SeriesDetails},
};

pub const RACE: &str = "Ninja";
pub const MAIN_VILLAGE: &str = "Konoha";
pub const OTHER_AFFILIATION: &str = "Various";
pub const UNKNOWN_GENDER: &str = "Unknown";

/// Builds the Naruto source from the catalog configuration.
pub fn source(config: &CatalogConfig) -> JikanSource {
    JikanSource::new(JikanConfig {
        id: "jikan-naruto",
        name: "Jikan (Naruto)",
        series: Series::Naruto,
        base_url: config.jikan_base_url.clone(),
        anime_id: config.naruto_anime_id,
        user_agent: config.user_agent.clone(),
        mapper: normalize,
    })
}

/// Maps a Jikan entry to a Naruto record.
pub fn normalize(entry: JikanEntry) -> CharacterRecord {
    let main = entry.is_main();
    let description = entry.describe(Series::Naruto);

    let mut record = CharacterRecord::new(
        &entry.mal_id,
        entry.name,
        description,
        SeriesDetails::Naruto {
            clan: None,
            rank: None,
            village: main.then(|| MAIN_VILLAGE.to_string()),
        },
    );
    record.image = entry.image;
    record.race = Some(RACE.to_string());
    record.gender = Some(UNKNOWN_GENDER.to_string());
    record.affiliation = Some(if main { MAIN_VILLAGE } else { OTHER_AFFILIATION }.to_string());
    record
}
