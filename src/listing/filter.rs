//! Conjunctive record filtering.

use crate::types::{CharacterRecord, FilterCriteria};

/// The value of a criterion, or `None` when it is absent or blank.
fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.trim().to_lowercase())
}

/// Returns `true` when `record` satisfies every active criterion.
///
/// * `name` and `affiliation` match case-insensitive substrings.
/// * `series`, `race` and `gender` must be equal.
/// * A record without an affiliation never matches an affiliation filter.
pub fn matches(record: &CharacterRecord, criteria: &FilterCriteria) -> bool {
    let name = active(&criteria.name).is_none_or(|n| contains_ignore_case(&record.name, n));
    let series = criteria.series.is_none_or(|s| record.series() == s);
    let race = active(&criteria.race).is_none_or(|r| record.race.as_deref() == Some(r));
    let gender = active(&criteria.gender).is_none_or(|g| record.gender.as_deref() == Some(g));
    let affiliation = active(&criteria.affiliation).is_none_or(|wanted| {
        record
            .affiliation
            .as_deref()
            .is_some_and(|a| contains_ignore_case(a, wanted))
    });

    name && series && race && gender && affiliation
}

/// Keeps the records matching `criteria`, in their original order.
pub fn apply_filter(records: Vec<CharacterRecord>, criteria: &FilterCriteria) -> Vec<CharacterRecord> {
    if criteria.is_empty() {
        return records;
    }
    records.into_iter().filter(|r| matches(r, criteria)).collect()
}
