//! Composable multi-criteria queries.
//!
//! A [`ShowQuery`] holds any combination of filter criteria and runs them as
//! a chain of [`crate::filter`] calls, so `run` returns exactly what calling
//! the filters by hand in the same order would.

use serde::Serialize;

use crate::filter;
use crate::record::ShowRecord;

/// A set of optional filter criteria. Unset criteria are not applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShowQuery {
    /// Exact raw title type (bypasses the type-gate)
    pub title_type: Option<String>,
    /// Inclusive start-year range
    pub years: Option<(i32, i32)>,
    /// Any-of genre set; `Some(vec![])` matches nothing
    pub genres: Option<Vec<String>>,
    /// Title substring
    pub title: Option<String>,
    /// Inclusive runtime range in minutes
    pub runtime: Option<(i32, i32)>,
    pub exclude_adult: bool,
    /// Maximum number of results
    pub limit: Option<usize>,
}

impl ShowQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title_type(mut self, show_type: impl Into<String>) -> Self {
        self.title_type = Some(show_type.into());
        self
    }

    pub fn years(mut self, start_year: i32, end_year: i32) -> Self {
        self.years = Some((start_year, end_year));
        self
    }

    /// Add a genre to the any-of set.
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genres.get_or_insert_with(Vec::new).push(genre.into());
        self
    }

    /// Replace the any-of genre set.
    pub fn genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = Some(genres.into_iter().map(Into::into).collect());
        self
    }

    pub fn title(mut self, needle: impl Into<String>) -> Self {
        self.title = Some(needle.into());
        self
    }

    pub fn runtime(mut self, min_minutes: i32, max_minutes: i32) -> Self {
        self.runtime = Some((min_minutes, max_minutes));
        self
    }

    pub fn exclude_adult(mut self, exclude: bool) -> Self {
        self.exclude_adult = exclude;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// True if no criterion (other than a limit) is set.
    pub fn is_empty(&self) -> bool {
        self.title_type.is_none()
            && self.years.is_none()
            && self.genres.is_none()
            && self.title.is_none()
            && self.runtime.is_none()
            && !self.exclude_adult
    }

    /// Apply the criteria to `records`: type, year range, genres, title,
    /// runtime, adult exclusion, then the limit.
    ///
    /// A query without criteria returns its input unchanged; the type-gate
    /// only comes in through the year, genre, title and runtime filters.
    pub fn run<'a, I>(&self, records: I) -> Vec<&'a ShowRecord>
    where
        I: IntoIterator<Item = &'a ShowRecord>,
    {
        let mut results: Vec<&'a ShowRecord> = records.into_iter().collect();

        if let Some(show_type) = &self.title_type {
            results = filter::filter_by_type(results, show_type);
        }
        if let Some((start, end)) = self.years {
            results = filter::filter_by_year_range(results, start, end);
        }
        if let Some(genres) = &self.genres {
            results = filter::filter_by_genre(results, genres.as_slice());
        }
        if let Some(needle) = &self.title {
            results = filter::filter_by_title(results, needle);
        }
        if let Some((min, max)) = self.runtime {
            results = filter::filter_by_duration(results, min, max);
        }
        if self.exclude_adult {
            results = filter::exclude_adult(results);
        }
        if let Some(limit) = self.limit {
            results.truncate(limit);
        }

        results
    }
}

#[cfg(test)]
#[path = "tests/query_tests.rs"]
mod tests;
