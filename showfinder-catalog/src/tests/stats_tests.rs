use super::*;
use crate::loader::parse_catalog;

const SAMPLE: &str = "header
tt1\tmovie\tA\tA\t0\t1994\t\\N\t142\tDrama
tt2\ttvSeries\tB\tB\t0\t2008\t2013\t49\tCrime,drama,Drama
tt3\ttvEpisode\tC\tC\t0\t\\N\t\\N\t\\N\tCrime
tt4\tmovie\tD\tD\t1\t1972\t\\N\t\\N\t
";

#[test]
fn test_collect_counts() {
    let records = parse_catalog(SAMPLE);
    let stats = CatalogStats::collect(&records);

    assert_eq!(stats.total, 4);
    assert_eq!(stats.adult, 1);
    assert_eq!(
        stats.by_type,
        vec![
            Tally { name: "movie".to_string(), count: 2 },
            Tally { name: "tvEpisode".to_string(), count: 1 },
            Tally { name: "tvSeries".to_string(), count: 1 },
        ]
    );
}

#[test]
fn test_genres_grouped_case_insensitively() {
    let records = parse_catalog(SAMPLE);
    let stats = CatalogStats::collect(&records);

    // tt2 lists drama twice but counts once; the empty genre of tt4 is ignored.
    assert_eq!(
        stats.by_genre,
        vec![
            Tally { name: "Crime".to_string(), count: 2 },
            Tally { name: "Drama".to_string(), count: 2 },
        ]
    );
}

#[test]
fn test_year_and_runtime_ignore_unknowns() {
    let records = parse_catalog(SAMPLE);
    let stats = CatalogStats::collect(&records);

    assert_eq!(stats.earliest_year, Some(1972));
    assert_eq!(stats.latest_year, Some(2008));
    let avg = stats.average_runtime.unwrap();
    assert!((avg - 95.5).abs() < f64::EPSILON);
}

#[test]
fn test_empty_input() {
    let records: Vec<ShowRecord> = Vec::new();
    let stats = CatalogStats::collect(&records);
    assert_eq!(stats.total, 0);
    assert!(stats.by_type.is_empty());
    assert!(stats.by_genre.is_empty());
    assert_eq!(stats.earliest_year, None);
    assert_eq!(stats.average_runtime, None);
}
