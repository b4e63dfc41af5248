//! Single-field, stable sorting.

use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

use crate::types::{CharacterRecord, SortDirection, SortField, SortSpec};

static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.,]").expect("valid separator pattern"));

/// Parses a Dragon Ball power level such as `"60.000.000"`.
///
/// Thousands separators (`.` and `,`) are removed and the rest is parsed as a
/// number. Anything that is not a plain number afterwards, including
/// magnitude words like `"90 Septillion"`, parses as `0.0`.
///
/// ```rust
/// use kyara::listing::parse_power_level;
///
/// assert_eq!(parse_power_level("60.000.000"), 60_000_000.0);
/// assert_eq!(parse_power_level("90 Septillion"), 0.0);
/// assert_eq!(parse_power_level(""), 0.0);
/// ```
pub fn parse_power_level(raw: &str) -> f64 {
    SEPARATORS
        .replace_all(raw.trim(), "")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn compare(a: &CharacterRecord, b: &CharacterRecord, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Name => a.name.cmp(&b.name),
        SortField::Race => text(&a.race).cmp(text(&b.race)),
        SortField::Gender => text(&a.gender).cmp(text(&b.gender)),
        SortField::Affiliation => text(&a.affiliation).cmp(text(&b.affiliation)),
        SortField::Ki => power(a.ki()).total_cmp(&power(b.ki())),
        SortField::MaxKi => power(a.max_ki()).total_cmp(&power(b.max_ki())),
    }
}

fn power(raw: Option<&str>) -> f64 {
    raw.map(parse_power_level).unwrap_or(0.0)
}

/// Sorts `records` by `spec`. Equal records keep their relative order in
/// both directions; [`SortDirection::None`] leaves the order untouched.
pub fn sort_records(mut records: Vec<CharacterRecord>, spec: &SortSpec) -> Vec<CharacterRecord> {
    match spec.direction {
        SortDirection::None => {}
        SortDirection::Ascending => records.sort_by(|a, b| compare(a, b, spec.field)),
        SortDirection::Descending => records.sort_by(|a, b| compare(b, a, spec.field)),
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SeriesDetails;

    fn fighter(id: u32, ki: &str) -> CharacterRecord {
        CharacterRecord::new(
            id,
            format!("Fighter {id}"),
            "",
            SeriesDetails::DragonBall { ki: Some(ki.to_string()), max_ki: None },
        )
    }

    fn kis(records: &[CharacterRecord]) -> Vec<&str> {
        records.iter().filter_map(|r| r.ki()).collect()
    }

    #[test]
    fn test_parse_power_level() {
        assert_eq!(parse_power_level("1.000"), 1000.0);
        assert_eq!(parse_power_level("3,000,000"), 3_000_000.0);
        assert_eq!(parse_power_level(" 42 "), 42.0);
        assert_eq!(parse_power_level("unknown"), 0.0);
        assert_eq!(parse_power_level("inf"), 0.0);
    }

    #[test]
    fn test_magnitude_words_sort_as_zero() {
        let records = vec![
            fighter(1, "90 Septillion"),
            fighter(2, "60.000.000"),
            fighter(3, "1.000"),
        ];

        let ascending = sort_records(records.clone(), &SortSpec::ascending(SortField::Ki));
        assert_eq!(kis(&ascending), vec!["90 Septillion", "1.000", "60.000.000"]);

        let descending = sort_records(records, &SortSpec::descending(SortField::Ki));
        assert_eq!(kis(&descending), vec!["60.000.000", "1.000", "90 Septillion"]);
    }

    #[test]
    fn test_ties_are_stable_in_both_directions() {
        let records = vec![fighter(1, "0"), fighter(2, "5"), fighter(3, "0"), fighter(4, "unknown")];

        let ids = |records: Vec<CharacterRecord>| -> Vec<String> {
            records.into_iter().map(|r| r.id).collect()
        };

        assert_eq!(
            ids(sort_records(records.clone(), &SortSpec::ascending(SortField::Ki))),
            vec!["db-1", "db-3", "db-4", "db-2"]
        );
        assert_eq!(
            ids(sort_records(records, &SortSpec::descending(SortField::Ki))),
            vec!["db-2", "db-1", "db-3", "db-4"]
        );
    }

    #[test]
    fn test_none_is_identity() {
        let records = vec![fighter(2, "1"), fighter(1, "2")];
        let spec = SortSpec::new(SortField::Name, SortDirection::None);

        assert_eq!(sort_records(records.clone(), &spec), records);
    }

    #[test]
    fn test_absent_strings_sort_first() {
        let mut a = fighter(1, "0");
        a.race = Some("Saiyan".to_string());
        let b = fighter(2, "0");

        let sorted = sort_records(vec![a, b], &SortSpec::ascending(SortField::Race));
        assert_eq!(sorted[0].id, "db-2");
    }
}
