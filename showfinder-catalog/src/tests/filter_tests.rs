use super::*;
use crate::title_type::TitleType;

fn make_record(id: &str, title_type: &str, title: &str, start: i32, runtime: i32, genres: &[&str]) -> ShowRecord {
    ShowRecord {
        show_id: id.to_string(),
        title_type: TitleType::parse(title_type),
        primary_title: title.to_string(),
        original_title: title.to_string(),
        is_adult: false,
        start_year: start,
        end_year: 0,
        runtime_minutes: runtime,
        genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}

fn fixture() -> Vec<ShowRecord> {
    vec![
        make_record("tt1", "movie", "Heat", 1995, 170, &["Action", "Crime", "Drama"]),
        make_record("tt2", "tvEpisode", "Pilot", 1995, 44, &["Drama"]),
        make_record("tt3", "tvSeries", "Friends", 1994, 22, &["Comedy", "Romance"]),
        make_record("tt4", "short", "Unknown Short", 0, 0, &["Short"]),
        make_record("tt5", "video", "Behind the Scenes", 1999, 30, &["Documentary"]),
        make_record("tt6", "tvMiniSeries", "Band of Brothers", 2001, 594, &["Drama", "History", "War"]),
        make_record("tt7", "tvSpecial", "Holiday Heat", 1998, 0, &["Comedy"]),
    ]
}

fn ids(records: &[&ShowRecord]) -> Vec<String> {
    records.iter().map(|r| r.show_id.clone()).collect()
}

#[test]
fn test_browsable_drops_other_types() {
    let records = fixture();
    assert_eq!(ids(&browsable(&records)), vec!["tt1", "tt3", "tt4", "tt6", "tt7"]);
}

#[test]
fn test_year_range_is_inclusive_and_gated() {
    let records = fixture();
    let result = filter_by_year_range(&records, 1994, 1998);
    // tt2 (tvEpisode, 1995) fails the gate even though the year matches.
    assert_eq!(ids(&result), vec!["tt1", "tt3", "tt7"]);
}

#[test]
fn test_year_range_unknown_year_needs_zero_lower_bound() {
    let records = fixture();
    assert!(!ids(&filter_by_year_range(&records, 1, 3000)).contains(&"tt4".to_string()));
    assert!(ids(&filter_by_year_range(&records, 0, 3000)).contains(&"tt4".to_string()));
    assert_eq!(ids(&filter_by_year_range(&records, -10, 0)), vec!["tt4"]);
}

#[test]
fn test_year_range_inverted_matches_nothing() {
    let records = fixture();
    assert!(filter_by_year_range(&records, 2000, 1990).is_empty());
}

#[test]
fn test_genre_case_insensitive() {
    let records = fixture();
    let result = filter_by_genre(&records, &["drama"]);
    assert_eq!(ids(&result), vec!["tt1", "tt6"]);
}

#[test]
fn test_genre_any_of_set() {
    let records = fixture();
    let result = filter_by_genre(&records, &["ROMANCE".to_string(), "war".to_string()]);
    assert_eq!(ids(&result), vec!["tt3", "tt6"]);
}

#[test]
fn test_genre_no_partial_match() {
    let records = fixture();
    assert!(filter_by_genre(&records, &["Dram"]).is_empty());
    assert!(filter_by_genre(&records, &["Documentary"]).is_empty());
}

#[test]
fn test_genre_empty_set_matches_nothing() {
    let records = fixture();
    let none: [&str; 0] = [];
    assert!(filter_by_genre(&records, &none).is_empty());
}

#[test]
fn test_title_substring() {
    let records = fixture();
    assert_eq!(ids(&filter_by_title(&records, "heat")), vec!["tt1", "tt7"]);
    assert_eq!(ids(&filter_by_title(&records, "OF BRO")), vec!["tt6"]);
    assert!(filter_by_title(&records, "Pilot").is_empty());
}

#[test]
fn test_title_matches_original_title() {
    let mut rec = make_record("tt8", "movie", "The Good, the Bad and the Ugly", 1966, 178, &["Western"]);
    rec.original_title = "Il buono, il brutto, il cattivo".to_string();
    let records = vec![rec];
    assert_eq!(ids(&filter_by_title(&records, "BRUTTO")), vec!["tt8"]);
}

#[test]
fn test_title_empty_matches_all_browsable() {
    let records = fixture();
    assert_eq!(filter_by_title(&records, ""), browsable(&records));
}

#[test]
fn test_duration_range() {
    let records = fixture();
    assert_eq!(ids(&filter_by_duration(&records, 20, 180)), vec!["tt1", "tt3"]);
}

#[test]
fn test_duration_zero_matches_unknown_runtime() {
    let records = fixture();
    assert_eq!(ids(&filter_by_duration(&records, 0, 0)), vec!["tt4", "tt7"]);
}

#[test]
fn test_type_bypasses_gate() {
    let records = fixture();
    assert_eq!(ids(&filter_by_type(&records, "tvEpisode")), vec!["tt2"]);
    assert_eq!(ids(&filter_by_type(&records, "movie")), vec!["tt1"]);
    assert!(filter_by_type(&records, "Movie").is_empty());
}

#[test]
fn test_exclude_adult() {
    let mut records = fixture();
    records[0].is_adult = true;
    records[1].is_adult = true;
    let result = exclude_adult(&records);
    assert_eq!(ids(&result), vec!["tt3", "tt4", "tt5", "tt6", "tt7"]);
}

#[test]
fn test_chaining() {
    let records = fixture();
    let dramas = filter_by_genre(&records, &["Drama"]);
    let recent = filter_by_year_range(dramas, 2000, 2010);
    assert_eq!(ids(&recent), vec!["tt6"]);
}

#[test]
fn test_filters_are_idempotent() {
    let records = fixture();
    let once = filter_by_genre(&records, &["comedy", "drama"]);
    let twice = filter_by_genre(once.clone(), &["comedy", "drama"]);
    assert_eq!(once, twice);

    let once = filter_by_duration(&records, 0, 200);
    let twice = filter_by_duration(once.clone(), 0, 200);
    assert_eq!(once, twice);
}

#[test]
fn test_empty_input() {
    let records: Vec<ShowRecord> = Vec::new();
    assert!(browsable(&records).is_empty());
    assert!(filter_by_year_range(&records, 0, 3000).is_empty());
    assert!(filter_by_genre(&records, &["Drama"]).is_empty());
    assert!(filter_by_title(&records, "").is_empty());
    assert!(filter_by_duration(&records, 0, 1000).is_empty());
    assert!(filter_by_type(&records, "movie").is_empty());
}
