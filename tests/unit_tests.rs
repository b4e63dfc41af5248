use kyara::listing::{PageState, page, parse_power_level};
use kyara::prelude::*;

mod common;
use common::{fighter, record, records};

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(records: &[CharacterRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_interleave_blocks_of_three() {
        let mut input = records(Series::DragonBall, 5);
        input.extend(records(Series::OnePiece, 2));
        input.extend(records(Series::Naruto, 8));

        let mixed = input.interleave(None);

        assert_eq!(
            ids(&mixed),
            vec![
                "db-0", "db-1", "db-2", "op-0", "op-1", "naruto-0", "naruto-1", "naruto-2",
                "db-3", "db-4", "naruto-3", "naruto-4", "naruto-5", "naruto-6", "naruto-7",
            ]
        );
    }

    #[test]
    fn test_interleave_ignores_input_series_order() {
        let mut input = records(Series::Naruto, 2);
        input.extend(records(Series::DragonBall, 1));

        assert_eq!(ids(&input.interleave(None)), vec!["db-0", "naruto-0", "naruto-1"]);
    }

    #[test]
    fn test_interleave_restricts_to_series() {
        let mut input = records(Series::DragonBall, 4);
        input.extend(records(Series::OnePiece, 3));

        let only = input.interleave(Some(Series::OnePiece));
        assert_eq!(ids(&only), vec!["op-0", "op-1", "op-2"]);
    }

    #[test]
    fn test_filter_conjunction() {
        let seed = SeedData::builtin();
        let mut all = seed.for_series(Series::OnePiece);
        all.extend(seed.for_series(Series::Naruto));

        let criteria = FilterCriteriaBuilder::default()
            .name("luf")
            .series(Series::OnePiece)
            .affiliation("straw")
            .build()
            .unwrap();

        let found = all.clone().apply_filter(&criteria);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Monkey D. Luffy");

        let none = all
            .apply_filter(&FilterCriteriaBuilder::default().name("luf").series(Series::Naruto).build().unwrap());
        assert!(none.is_empty());
    }

    #[test]
    fn test_filter_is_idempotent_and_stable() {
        let input = vec![
            fighter(1, "Goku", "60.000.000", "Saiyan"),
            fighter(2, "Krillin", "1.000", "Human"),
            fighter(3, "Vegeta", "54.000.000", "Saiyan"),
        ];
        let criteria = FilterCriteriaBuilder::default().race("Saiyan").build().unwrap();

        let once = input.apply_filter(&criteria);
        let twice = once.clone().apply_filter(&criteria);

        assert_eq!(ids(&once), vec!["db-1", "db-3"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let input = records(Series::Naruto, 4);
        assert_eq!(input.clone().apply_filter(&FilterCriteria::default()), input);
    }

    #[test]
    fn test_sort_by_ki() {
        let input = vec![
            fighter(1, "Goku", "90 Septillion", "Saiyan"),
            fighter(2, "Vegeta", "60.000.000", "Saiyan"),
            fighter(3, "Krillin", "1.000", "Human"),
        ];

        let sorted = input.sort_with(&SortSpec::ascending(SortField::Ki));
        let kis: Vec<_> = sorted.iter().filter_map(|r| r.ki()).collect();

        assert_eq!(kis, vec!["90 Septillion", "1.000", "60.000.000"]);
    }

    #[test]
    fn test_sort_by_name_descending() {
        let input = vec![
            fighter(1, "Goku", "0", "Saiyan"),
            fighter(2, "Vegeta", "0", "Saiyan"),
            fighter(3, "Krillin", "0", "Human"),
        ];

        let sorted = input.sort_with(&SortSpec::descending(SortField::Name));
        assert_eq!(ids(&sorted), vec!["db-2", "db-3", "db-1"]);
    }

    #[test]
    fn test_other_series_have_zero_ki() {
        let input = vec![
            record(Series::OnePiece, 1),
            fighter(2, "Goku", "5", "Saiyan"),
            record(Series::Naruto, 3),
        ];

        let sorted = input.sort_with(&SortSpec::descending(SortField::Ki));
        assert_eq!(ids(&sorted), vec!["db-2", "op-1", "naruto-3"]);
    }

    #[test]
    fn test_parse_power_level() {
        assert_eq!(parse_power_level("60.000.000"), 60_000_000.0);
        assert_eq!(parse_power_level("2.500.000.000"), 2_500_000_000.0);
        assert_eq!(parse_power_level("90 Septillion"), 0.0);
    }

    #[test]
    fn test_pagination() {
        let input = records(Series::DragonBall, 25);

        assert_eq!(page(&input, 0, 10).len(), 10);
        assert_eq!(page(&input, 2, 10).len(), 5);
        assert!(page(&input, 3, 10).is_empty());
        assert!(page(&input, 0, 0).is_empty());

        let third = input.clone().paginate(2, 10);
        assert_eq!(ids(&third), ids(&input[20..]));
        assert!(input.paginate(9, 10).is_empty());
    }

    #[test]
    fn test_page_state() {
        let mut state = PageState::with_page_size(10);
        state.set_total_items(25);

        assert_eq!(state.total_pages(), 3);
        assert!(state.next_page());
        assert_eq!(state.current_page_range(), (10, 20));

        state.set_total_items(5);
        assert_eq!(state.current_page, 0);
        assert_eq!(state.total_pages(), 1);
        assert!(!state.next_page());
    }

    #[test]
    fn test_affiliations_are_distinct_and_sorted() {
        let mut a = record(Series::OnePiece, 1);
        a.affiliation = Some("Straw Hat Pirates".to_string());
        let mut b = record(Series::Naruto, 2);
        b.affiliation = Some("Konoha".to_string());
        let mut c = record(Series::Naruto, 3);
        c.affiliation = Some("Konoha".to_string());
        let mut d = record(Series::Naruto, 4);
        d.affiliation = Some("  ".to_string());

        assert_eq!(
            vec![a, b, c, d, record(Series::DragonBall, 5)].affiliations(),
            vec!["Konoha", "Straw Hat Pirates"]
        );
    }

    #[test]
    fn test_series_parsing() {
        assert_eq!("one-piece".parse::<Series>().unwrap(), Series::OnePiece);
        assert_eq!("Dragon Ball".parse::<Series>().unwrap(), Series::DragonBall);
        assert_eq!("NARUTO".parse::<Series>().unwrap(), Series::Naruto);
        assert!("bleach".parse::<Series>().is_err());
    }

    #[test]
    fn test_record_json_round_trip_keeps_details() {
        let goku = fighter(1, "Goku", "60.000.000", "Saiyan");
        let json = serde_json::to_value(&goku).unwrap();

        assert_eq!(json["series"], "Dragon Ball");
        assert_eq!(json["ki"], "60.000.000");
        assert!(json.get("maxKi").is_none());

        let back: CharacterRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, goku);
    }

    #[test]
    fn test_sort_direction_cycle() {
        let direction = SortDirection::default();
        assert_eq!(direction, SortDirection::None);
        assert_eq!(direction.cycle(), SortDirection::Ascending);
        assert_eq!(direction.cycle().cycle(), SortDirection::Descending);
        assert_eq!(direction.cycle().cycle().cycle(), SortDirection::None);
    }
}
