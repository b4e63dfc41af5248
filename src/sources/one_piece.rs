//! One Piece characters from Jikan (anime id 21 by default).
//!
//! Jikan only knows a character's role, so the role is stored as `race`
//! (defaulting to `"Pirate"`), main characters are assigned to the Straw Hat
//! Pirates, and everyone else is marked as `"Various"`. Gender is unknown
//! upstream and bounties are never populated.

use super::jikan::{JikanConfig, JikanEntry, JikanSource};
use crate::{
    config::CatalogConfig,
    types::{CharacterRecord, Series, SeriesDetails},
};

pub const MAIN_CREW: &str = "Straw Hat Pirates";
pub const DEFAULT_RACE: &str = "Pirate";
pub const OTHER_AFFILIATION: &str = "Various";
pub const UNKNOWN_GENDER: &str = "Unknown";

/// Builds the One Piece source from the catalog configuration.
pub fn source(config: &CatalogConfig) -> JikanSource {
    JikanSource::new(JikanConfig {
        id: "jikan-op",
        name: "Jikan (One Piece)",
        series: Series::OnePiece,
        base_url: config.jikan_base_url.clone(),
        anime_id: config.one_piece_anime_id,
        user_agent: config.user_agent.clone(),
        mapper: normalize,
    })
}

/// Maps a Jikan entry to a One Piece record.
pub fn normalize(entry: JikanEntry) -> CharacterRecord {
    let main = entry.is_main();
    let description = entry.describe(Series::OnePiece);

    let mut record = CharacterRecord::new(
        &entry.mal_id,
        entry.name,
        description,
        SeriesDetails::OnePiece {
            crew: main.then(|| MAIN_CREW.to_string()),
            bounty: None,
        },
    );
    record.image = entry.image;
    record.race = Some(entry.role.unwrap_or_else(|| DEFAULT_RACE.to_string()));
    record.gender = Some(UNKNOWN_GENDER.to_string());
    record.affiliation = Some(if main { MAIN_CREW } else { OTHER_AFFILIATION }.to_string());
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(role: Option<&str>) -> JikanEntry {
        JikanEntry {
            mal_id: "40".to_string(),
            name: "Luffy Monkey D.".to_string(),
            image: "https://cdn/luffy.jpg".to_string(),
            role: role.map(str::to_string),
        }
    }

    #[test]
    fn test_main_character() {
        let record = normalize(entry(Some("Main")));

        assert_eq!(record.id, "op-40");
        assert_eq!(record.series(), Series::OnePiece);
        assert_eq!(record.race.as_deref(), Some("Main"));
        assert_eq!(record.gender.as_deref(), Some(UNKNOWN_GENDER));
        assert_eq!(record.affiliation.as_deref(), Some(MAIN_CREW));
        assert_eq!(
            record.details,
            SeriesDetails::OnePiece { crew: Some(MAIN_CREW.to_string()), bounty: None }
        );
        assert!(record.description.contains("Role in the series: Main"));
    }

    #[test]
    fn test_supporting_and_roleless_characters() {
        let supporting = normalize(entry(Some("Supporting")));
        assert_eq!(supporting.affiliation.as_deref(), Some(OTHER_AFFILIATION));
        assert_eq!(
            supporting.details,
            SeriesDetails::OnePiece { crew: None, bounty: None }
        );

        let roleless = normalize(entry(None));
        assert_eq!(roleless.race.as_deref(), Some(DEFAULT_RACE));
        assert_eq!(roleless.affiliation.as_deref(), Some(OTHER_AFFILIATION));
    }
}
