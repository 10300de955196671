//! A single title parsed from the catalog.

use serde::Serialize;

use crate::title_type::TitleType;

/// One catalog entry.
///
/// Year and runtime fields use `0` for "unknown"; the loader never fails on
/// a malformed number, it stores the sentinel instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowRecord {
    /// External identifier (e.g. `"tt0111161"`), not checked for uniqueness
    pub show_id: String,
    pub title_type: TitleType,
    pub primary_title: String,
    pub original_title: String,
    pub is_adult: bool,
    pub start_year: i32,
    /// `0` for titles that never ended or have no end year
    pub end_year: i32,
    pub runtime_minutes: i32,
    /// Genres in source order, duplicates and case preserved
    pub genres: Vec<String>,
}

impl ShowRecord {
    /// Case-insensitive exact match against any of this record's genres.
    pub fn has_genre(&self, genre: &str) -> bool {
        let wanted = genre.to_lowercase();
        self.genres.iter().any(|g| g.to_lowercase() == wanted)
    }

    /// Case-insensitive substring match against either title.
    pub fn title_contains(&self, needle: &str) -> bool {
        self.title_contains_folded(&needle.to_lowercase())
    }

    pub(crate) fn title_contains_folded(&self, folded: &str) -> bool {
        self.primary_title.to_lowercase().contains(folded)
            || self.original_title.to_lowercase().contains(folded)
    }

    pub(crate) fn has_any_genre_folded(&self, folded: &[String]) -> bool {
        self.genres
            .iter()
            .any(|g| folded.contains(&g.to_lowercase()))
    }

    /// Years the title ran, for display: `"1999"`, `"1999–2004"`, `"1999–"`
    /// for an open-ended series, or `"?"` when the start year is unknown.
    pub fn year_span(&self) -> String {
        match (self.start_year, self.end_year) {
            (0, _) => "?".to_string(),
            (start, 0) if self.title_type == TitleType::TvSeries => format!("{start}–"),
            (start, 0) => start.to_string(),
            (start, end) if end == start => start.to_string(),
            (start, end) => format!("{start}–{end}"),
        }
    }
}
