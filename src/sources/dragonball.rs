use crate::{
    config::CatalogConfig,
    error::Result,
    net::{HttpClient, json},
    source::Source,
    types::{CharacterRecord, Series, SeriesDetails},
};
use async_trait::async_trait;
use rayon::prelude::*;
use serde_json::Value;

/// Description used when the Dragon Ball API has none for a character.
pub const DEFAULT_DESCRIPTION: &str = "Dragon Ball character";

/// Source for the Dragon Ball API (`dragonball-api.com`).
///
/// Fetches `GET {base}/characters?limit={limit}` once. The response is a
/// paginated envelope `{ items, meta, links }`; only `items` is read, and no
/// further pages are requested.
///
/// Items map almost one to one onto [`CharacterRecord`]: the id is prefixed
/// with `db-`, power levels go into [`SeriesDetails::DragonBall`], and a
/// missing description is replaced by [`DEFAULT_DESCRIPTION`].
///
/// # Examples
///
/// ```rust,no_run
/// use kyara::prelude::*;
/// use kyara::sources::DragonBallSource;
///
/// # async fn example() -> kyara::Result<()> {
/// let source = DragonBallSource::new(&CatalogConfig::default());
/// let characters = source.fetch_characters().await?;
///
/// assert!(characters.iter().all(|c| c.id.starts_with("db-")));
/// # Ok(())
/// # }
/// ```
pub struct DragonBallSource {
    client: HttpClient,
    api_base: String,
    limit: u32,
}

impl DragonBallSource {
    /// Create a new Dragon Ball source
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            client: HttpClient::new("dragonball")
                .with_header("User-Agent", &config.user_agent)
                .with_header("Accept", "application/json"),
            api_base: config.dragon_ball_base_url.trim_end_matches('/').to_string(),
            limit: config.dragon_ball_limit,
        }
    }

    fn characters_url(&self) -> String {
        format!("{}/characters?limit={}", self.api_base, self.limit)
    }
}

/// Maps one item of the `items` array to a record.
///
/// Never fails: missing text falls back to placeholders, a missing image to
/// the empty string.
pub fn normalize(item: &Value) -> CharacterRecord {
    let native_id = json::extract_scalar(item, "id").unwrap_or_default();
    let name = json::extract_str(item, "name").unwrap_or_else(|| "Unknown".to_string());
    let description =
        json::extract_str(item, "description").unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

    let mut record = CharacterRecord::new(
        native_id,
        name,
        description,
        SeriesDetails::DragonBall {
            ki: json::extract_str(item, "ki"),
            max_ki: json::extract_str(item, "maxKi"),
        },
    );
    record.image = json::extract_str(item, "image").unwrap_or_default();
    record.race = json::extract_str(item, "race");
    record.gender = json::extract_str(item, "gender");
    record.affiliation = json::extract_str(item, "affiliation");
    record
}

/// Normalizes a whole `{ items, meta, links }` envelope.
///
/// # Errors
///
/// * [`Error::Parse`](crate::Error::Parse) - If the envelope has no `items` array
pub fn normalize_envelope(payload: &Value) -> Result<Vec<CharacterRecord>> {
    let items = json::require_array(payload, "items")?;
    Ok(items.par_iter().map(normalize).collect())
}

#[async_trait]
impl Source for DragonBallSource {
    fn id(&self) -> &'static str {
        "dragonball"
    }

    fn name(&self) -> &'static str {
        "Dragon Ball API"
    }

    fn series(&self) -> Series {
        Series::DragonBall
    }

    fn base_url(&self) -> &str {
        &self.api_base
    }

    async fn fetch_characters(&self) -> Result<Vec<CharacterRecord>> {
        let payload: Value = self.client.get_json(&self.characters_url()).await?;
        normalize_envelope(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_item() {
        let record = normalize(&json!({
            "id": 1,
            "name": "Goku",
            "ki": "60.000.000",
            "maxKi": "90 Septillion",
            "race": "Saiyan",
            "gender": "Male",
            "description": "El protagonista de la serie.",
            "image": "https://dragonball-api.com/characters/goku_normal.webp",
            "affiliation": "Z Fighter",
            "deletedAt": null
        }));

        assert_eq!(record.id, "db-1");
        assert_eq!(record.series(), Series::DragonBall);
        assert_eq!(record.ki(), Some("60.000.000"));
        assert_eq!(record.max_ki(), Some("90 Septillion"));
        assert_eq!(record.race.as_deref(), Some("Saiyan"));
        assert_eq!(record.affiliation.as_deref(), Some("Z Fighter"));
    }

    #[test]
    fn test_sparse_item_gets_defaults() {
        let record = normalize(&json!({ "id": "7", "description": "" }));

        assert_eq!(record.id, "db-7");
        assert_eq!(record.name, "Unknown");
        assert_eq!(record.description, DEFAULT_DESCRIPTION);
        assert_eq!(record.image, "");
        assert!(record.race.is_none());
        assert!(record.ki().is_none());
    }

    #[test]
    fn test_envelope_requires_items() {
        assert!(normalize_envelope(&json!({ "meta": {}, "links": {} })).is_err());

        let records = normalize_envelope(&json!({
            "items": [{ "id": 1, "name": "Goku" }, { "id": 2, "name": "Vegeta" }],
            "meta": { "totalItems": 58 },
            "links": {}
        }))
        .unwrap();

        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Goku", "Vegeta"]);
    }

    #[test]
    fn test_url_uses_limit() {
        let config = CatalogConfig {
            dragon_ball_base_url: "http://localhost:3000/api/".to_string(),
            ..Default::default()
        };
        let source = DragonBallSource::new(&config);

        assert_eq!(source.characters_url(), "http://localhost:3000/api/characters?limit=100");
        assert_eq!(source.base_url(), "http://localhost:3000/api");
    }
}
