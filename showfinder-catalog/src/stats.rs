//! Summary statistics over a set of records.

use std::collections::HashMap;

use serde::Serialize;

use crate::record::ShowRecord;

/// A name with the number of records it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub name: String,
    pub count: usize,
}

/// Counts and ranges for a record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub adult: usize,
    /// Raw title types, most common first
    pub by_type: Vec<Tally>,
    /// Genres grouped case-insensitively under their first-seen spelling,
    /// most common first. A record counts once per genre.
    pub by_genre: Vec<Tally>,
    /// Earliest known start year (unknown years excluded)
    pub earliest_year: Option<i32>,
    pub latest_year: Option<i32>,
    /// Mean of known runtimes, in minutes
    pub average_runtime: Option<f64>,
}

impl CatalogStats {
    pub fn collect<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ShowRecord>,
    {
        let mut total = 0;
        let mut adult = 0;
        let mut types: HashMap<&str, usize> = HashMap::new();
        // folded name -> (display name, count)
        let mut genres: HashMap<String, (&str, usize)> = HashMap::new();
        let mut earliest: Option<i32> = None;
        let mut latest: Option<i32> = None;
        let mut runtime_sum: i64 = 0;
        let mut runtime_count: usize = 0;

        for rec in records {
            total += 1;
            if rec.is_adult {
                adult += 1;
            }
            *types.entry(rec.title_type.as_str()).or_default() += 1;

            let mut seen: Vec<String> = Vec::with_capacity(rec.genres.len());
            for genre in rec.genres.iter().filter(|g| !g.is_empty()) {
                let folded = genre.to_lowercase();
                if seen.contains(&folded) {
                    continue;
                }
                genres.entry(folded.clone()).or_insert((genre.as_str(), 0)).1 += 1;
                seen.push(folded);
            }

            if rec.start_year != 0 {
                earliest = Some(earliest.map_or(rec.start_year, |y| y.min(rec.start_year)));
                latest = Some(latest.map_or(rec.start_year, |y| y.max(rec.start_year)));
            }
            if rec.runtime_minutes != 0 {
                runtime_sum += i64::from(rec.runtime_minutes);
                runtime_count += 1;
            }
        }

        let by_type = sorted_tallies(types.into_iter());
        let by_genre = sorted_tallies(genres.into_values());
        let average_runtime =
            (runtime_count > 0).then(|| runtime_sum as f64 / runtime_count as f64);

        Self {
            total,
            adult,
            by_type,
            by_genre,
            earliest_year: earliest,
            latest_year: latest,
            average_runtime,
        }
    }
}

fn sorted_tallies<'a>(counts: impl Iterator<Item = (&'a str, usize)>) -> Vec<Tally> {
    let mut tallies: Vec<Tally> = counts
        .map(|(name, count)| Tally {
            name: name.to_string(),
            count,
        })
        .collect();
    tallies.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    tallies
}

#[cfg(test)]
#[path = "tests/stats_tests.rs"]
mod tests;
