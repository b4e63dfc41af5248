use crate::{
    error::Result,
    net::{HttpClient, json},
    source::Source,
    types::{CharacterRecord, Series},
};
use async_trait::async_trait;
use rayon::prelude::*;
use serde_json::Value;

/// One entry of a Jikan `/anime/{id}/characters` response, with every field
/// already extracted leniently.
#[derive(Debug, Clone, PartialEq)]
pub struct JikanEntry {
    /// MyAnimeList character id, rendered as a string.
    pub mal_id: String,
    pub name: String,
    /// JPG image URL, else WEBP, else empty.
    pub image: String,
    /// Role in the series, e.g. `"Main"` or `"Supporting"`.
    pub role: Option<String>,
}

impl JikanEntry {
    /// Extracts an entry from one element of the `data` array.
    pub fn from_value(item: &Value) -> Self {
        let image = json::extract_str(item, "character.images.jpg.image_url")
            .or_else(|| json::extract_str(item, "character.images.webp.image_url"))
            .unwrap_or_default();

        Self {
            mal_id: json::extract_scalar(item, "character.mal_id").unwrap_or_default(),
            name: json::extract_str(item, "character.name").unwrap_or_else(|| "Unknown".to_string()),
            image,
            role: json::extract_str(item, "role"),
        }
    }

    /// Returns `true` for main characters.
    pub fn is_main(&self) -> bool {
        self.role.as_deref() == Some("Main")
    }

    /// The description shared by all Jikan-backed series.
    pub fn describe(&self, series: Series) -> String {
        format!(
            "{} is one of the characters of {}. Role in the series: {}.",
            self.name,
            series,
            self.role.as_deref().unwrap_or("Unknown")
        )
    }
}

/// Per-series mapping from a Jikan entry to a record.
pub type JikanMapper = fn(JikanEntry) -> CharacterRecord;

/// Configuration for a Jikan-backed series source.
#[derive(Debug, Clone)]
pub struct JikanConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub series: Series,
    pub base_url: String,
    pub anime_id: u32,
    pub user_agent: String,
    pub mapper: JikanMapper,
}

/// A source that reads one anime's character list from the Jikan API.
///
/// Jikan has no per-series endpoints, so One Piece and Naruto are both
/// instances of this type, differing only in the anime id and the
/// [`JikanMapper`] that shapes the entries.
pub struct JikanSource {
    config: JikanConfig,
    client: HttpClient,
}

impl JikanSource {
    pub fn new(mut config: JikanConfig) -> Self {
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        let client = HttpClient::new(config.id)
            .with_header("User-Agent", &config.user_agent)
            .with_header("Accept", "application/json");

        Self { config, client }
    }

    fn characters_url(&self) -> String {
        format!(
            "{}/anime/{}/characters",
            self.config.base_url, self.config.anime_id
        )
    }

    /// Normalizes a whole `{ data: [...] }` response.
    ///
    /// # Errors
    ///
    /// * [`Error::Parse`](crate::Error::Parse) - If the response has no `data` array
    pub fn normalize_response(&self, payload: &Value) -> Result<Vec<CharacterRecord>> {
        let items = json::require_array(payload, "data")?;
        let mapper = self.config.mapper;
        Ok(items
            .par_iter()
            .map(|item| mapper(JikanEntry::from_value(item)))
            .collect())
    }
}

#[async_trait]
impl Source for JikanSource {
    fn id(&self) -> &'static str {
        self.config.id
    }

    fn name(&self) -> &'static str {
        self.config.name
    }

    fn series(&self) -> Series {
        self.config.series
    }

    fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn fetch_characters(&self) -> Result<Vec<CharacterRecord>> {
        let payload: Value = self.client.get_json(&self.characters_url()).await?;
        self.normalize_response(&payload)
    }
}
