//! Fallback seed data for sources whose upstream is unreachable.
//!
//! When a source fails, the [`Catalog`](crate::Catalog) substitutes the seed
//! records of that source's series. The built-in seed ships fifteen well-known
//! One Piece characters and fifteen Naruto characters; Dragon Ball has no
//! seed, so a failing Dragon Ball API contributes nothing.
//!
//! Seeds are plain JSON arrays of [`CharacterRecord`]s, so a different seed can
//! be injected from a string or a file.
//!
//! # Examples
//!
//! ```rust
//! use kyara::{SeedData, Series};
//!
//! let seed = SeedData::builtin();
//! assert_eq!(seed.for_series(Series::OnePiece).len(), 15);
//! assert!(seed.for_series(Series::DragonBall).is_empty());
//!
//! let none = SeedData::empty();
//! assert!(none.is_empty());
//! ```

use std::collections::HashMap;
use std::path::Path;
use tracing::error;

use crate::{
    error::Result,
    types::{CharacterRecord, Series},
};

static BUILTIN_SEED: &str = include_str!("../data/fallback.json");

/// Fallback records grouped by series.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    records: HashMap<Series, Vec<CharacterRecord>>,
}

impl SeedData {
    /// A seed with no records; every failing source contributes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The seed bundled with the crate.
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_SEED).unwrap_or_else(|e| {
            error!(error = %e, "bundled fallback seed is invalid, using an empty seed");
            Self::empty()
        })
    }

    /// Parses a seed from a JSON array of records.
    ///
    /// # Errors
    ///
    /// * [`Error::Json`](crate::Error::Json) - If the JSON is not an array of records
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<CharacterRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    /// Reads a seed file.
    ///
    /// # Errors
    ///
    /// * [`Error::Io`](crate::Error::Io) - If the file can't be read
    /// * [`Error::Json`](crate::Error::Json) - If the contents are not valid
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json(&json)
    }

    /// Groups records by their series, keeping their relative order.
    pub fn from_records(records: impl IntoIterator<Item = CharacterRecord>) -> Self {
        let mut grouped: HashMap<Series, Vec<CharacterRecord>> = HashMap::new();
        for record in records {
            grouped.entry(record.series()).or_default().push(record);
        }
        Self { records: grouped }
    }

    /// Fresh copies of the fallback records for `series`.
    pub fn for_series(&self, series: Series) -> Vec<CharacterRecord> {
        self.records.get(&series).cloned().unwrap_or_default()
    }

    /// Total number of records across all series.
    pub fn len(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
