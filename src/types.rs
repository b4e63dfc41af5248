//! Core data types for characters, filters, and sorting.
//!
//! This module defines the fundamental data structures used throughout Kyara:
//!
//! - [`Series`] - The three supported anime series
//! - [`CharacterRecord`] - The unified character record every source produces
//! - [`SeriesDetails`] - Fields that only exist for one series
//! - [`FilterCriteria`] - Optional, conjunctive filter predicates
//! - [`SortSpec`] - The active sort field and direction
//!
//! # Examples
//!
//! ```rust
//! use kyara::types::*;
//!
//! let goku = CharacterRecord::new(
//!     1,
//!     "Goku",
//!     "The protagonist of the series.",
//!     SeriesDetails::DragonBall {
//!         ki: Some("60.000.000".to_string()),
//!         max_ki: Some("90 Septillion".to_string()),
//!     },
//! );
//!
//! assert_eq!(goku.id, "db-1");
//! assert_eq!(goku.series(), Series::DragonBall);
//! ```

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The anime series a character belongs to.
///
/// The order of the variants is the fixed priority order used when
/// concatenating and interleaving results: Dragon Ball, One Piece, Naruto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Series {
    #[serde(rename = "Dragon Ball")]
    DragonBall,
    #[serde(rename = "One Piece")]
    OnePiece,
    #[serde(rename = "Naruto")]
    Naruto,
}

impl Series {
    /// All series in priority order.
    pub const ALL: [Series; 3] = [Series::DragonBall, Series::OnePiece, Series::Naruto];

    /// Human-readable series name, e.g. `"One Piece"`.
    pub fn name(&self) -> &'static str {
        match self {
            Series::DragonBall => "Dragon Ball",
            Series::OnePiece => "One Piece",
            Series::Naruto => "Naruto",
        }
    }

    /// Prefix used to namespace record ids, including the trailing dash.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kyara::Series;
    ///
    /// assert_eq!(Series::OnePiece.id_prefix(), "op-");
    /// assert_eq!(Series::from_id("naruto-17"), Some(Series::Naruto));
    /// ```
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Series::DragonBall => "db-",
            Series::OnePiece => "op-",
            Series::Naruto => "naruto-",
        }
    }

    /// URL path segment for the series listing, e.g. `"dragon-ball"`.
    pub fn slug(&self) -> &'static str {
        match self {
            Series::DragonBall => "dragon-ball",
            Series::OnePiece => "one-piece",
            Series::Naruto => "naruto",
        }
    }

    /// Looks up a series by its path segment.
    pub fn from_slug(slug: &str) -> Option<Series> {
        Series::ALL.into_iter().find(|s| s.slug() == slug)
    }

    /// Recovers the series from a namespaced record id.
    pub fn from_id(id: &str) -> Option<Series> {
        Series::ALL
            .into_iter()
            .find(|s| id.starts_with(s.id_prefix()))
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Series {
    type Err = crate::Error;

    /// Accepts either the display name or the slug, case-insensitively.
    fn from_str(s: &str) -> crate::Result<Self> {
        let needle = s.trim();
        Series::ALL
            .into_iter()
            .find(|series| {
                series.name().eq_ignore_ascii_case(needle)
                    || series.slug().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| crate::Error::parse(format!("Unknown series: {}", s)))
    }
}

/// Fields that only make sense for a single series.
///
/// This is a closed tagged union: the variant determines the record's
/// [`Series`], so a One Piece record can never carry a power level and a
/// Dragon Ball record can never carry a village.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "series")]
pub enum SeriesDetails {
    /// Power levels as delivered by the Dragon Ball API, e.g. `"60.000.000"`
    /// or `"90 Septillion"`.
    #[serde(rename = "Dragon Ball")]
    DragonBall {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ki: Option<String>,
        #[serde(default, rename = "maxKi", skip_serializing_if = "Option::is_none")]
        max_ki: Option<String>,
    },

    #[serde(rename = "One Piece")]
    OnePiece {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        crew: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bounty: Option<String>,
    },

    #[serde(rename = "Naruto")]
    Naruto {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        clan: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rank: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        village: Option<String>,
    },
}

impl SeriesDetails {
    /// The series this variant belongs to.
    pub fn series(&self) -> Series {
        match self {
            SeriesDetails::DragonBall { .. } => Series::DragonBall,
            SeriesDetails::OnePiece { .. } => Series::OnePiece,
            SeriesDetails::Naruto { .. } => Series::Naruto,
        }
    }
}

/// A character from any series, in the unified shape.
///
/// Records are value objects: every aggregation builds them fresh and nothing
/// mutates them afterwards.
///
/// # Fields
///
/// * `id` - Namespaced identifier (`db-`, `op-` or `naruto-` plus the native id)
/// * `name` - Display name
/// * `description` - Description, synthesized when the upstream has none
/// * `image` - Image URL, empty when unknown
/// * `race` - Biological race for Dragon Ball, narrative role for One Piece
/// * `gender` - Gender, `"Unknown"` for the Jikan-backed series
/// * `affiliation` - Faction, crew or village the character belongs to
/// * `details` - Series-specific fields; also determines the series
///
/// The JSON form is flat, with a `series` tag:
///
/// ```rust
/// use kyara::types::CharacterRecord;
///
/// let record: CharacterRecord = serde_json::from_str(r#"{
///     "id": "naruto-1",
///     "name": "Naruto Uzumaki",
///     "series": "Naruto",
///     "description": "Seventh Hokage.",
///     "image": "",
///     "clan": "Uzumaki",
///     "village": "Konoha"
/// }"#).unwrap();
///
/// assert_eq!(record.series().name(), "Naruto");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: String,

    pub name: String,

    pub description: String,

    #[serde(default)]
    pub image: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,

    #[serde(flatten)]
    pub details: SeriesDetails,
}

impl CharacterRecord {
    /// Creates a record whose id is namespaced by the series of `details`.
    ///
    /// Optional fields start out empty; set them with struct update syntax or
    /// direct assignment.
    pub fn new(
        native_id: impl fmt::Display,
        name: impl Into<String>,
        description: impl Into<String>,
        details: SeriesDetails,
    ) -> Self {
        Self {
            id: format!("{}{}", details.series().id_prefix(), native_id),
            name: name.into(),
            description: description.into(),
            image: String::new(),
            race: None,
            gender: None,
            affiliation: None,
            details,
        }
    }

    /// The series this record belongs to.
    pub fn series(&self) -> Series {
        self.details.series()
    }

    /// Current power level, Dragon Ball only.
    pub fn ki(&self) -> Option<&str> {
        match &self.details {
            SeriesDetails::DragonBall { ki, .. } => ki.as_deref(),
            _ => None,
        }
    }

    /// Maximum power level, Dragon Ball only.
    pub fn max_ki(&self) -> Option<&str> {
        match &self.details {
            SeriesDetails::DragonBall { max_ki, .. } => max_ki.as_deref(),
            _ => None,
        }
    }
}

/// Filter predicates for a character listing.
///
/// Every field is independently optional; an absent or blank field places no
/// constraint on the listing. All present fields must match (logical AND).
///
/// # Builder Usage
///
/// ```rust
/// use kyara::types::{FilterCriteriaBuilder, Series};
///
/// let criteria = FilterCriteriaBuilder::default()
///     .name("luf")
///     .series(Series::OnePiece)
///     .build()
///     .unwrap();
///
/// assert_eq!(criteria.name.as_deref(), Some("luf"));
/// assert!(criteria.race.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder)]
#[builder(setter(into, strip_option), default)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the name.
    pub name: Option<String>,
    /// Exact series.
    pub series: Option<Series>,
    /// Exact race.
    pub race: Option<String>,
    /// Exact gender.
    pub gender: Option<String>,
    /// Case-insensitive substring of the affiliation.
    pub affiliation: Option<String>,
}

impl FilterCriteria {
    /// Returns `true` when no field constrains the listing.
    pub fn is_empty(&self) -> bool {
        let blank = |v: &Option<String>| v.as_deref().is_none_or(|s| s.trim().is_empty());
        blank(&self.name)
            && self.series.is_none()
            && blank(&self.race)
            && blank(&self.gender)
            && blank(&self.affiliation)
    }
}

/// Fields a listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Race,
    Gender,
    Affiliation,
    Ki,
    MaxKi,
}

impl SortField {
    /// Column label for display.
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Id => "Id",
            SortField::Name => "Name",
            SortField::Race => "Race",
            SortField::Gender => "Gender",
            SortField::Affiliation => "Affiliation",
            SortField::Ki => "Ki",
            SortField::MaxKi => "Max Ki",
        }
    }
}

/// Sort direction. `None` means the listing keeps its current order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    Descending,
    #[default]
    None,
}

impl SortDirection {
    /// Cycles ascending → descending → none → ascending, like a clickable
    /// column header.
    pub fn cycle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::None,
            SortDirection::None => SortDirection::Ascending,
        }
    }
}

/// The single active sort of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn ascending(field: SortField) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    pub fn descending(field: SortField) -> Self {
        Self::new(field, SortDirection::Descending)
    }

    /// Returns `true` when sorting would leave the listing untouched.
    pub fn is_identity(&self) -> bool {
        self.direction == SortDirection::None
    }
}
