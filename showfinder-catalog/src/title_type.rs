/// Title category tag from the `titleType` column.
///
/// The five browsable categories get their own variants; every other tag
/// (`tvEpisode`, `video`, `videoGame`, ...) is kept verbatim in `Other` so it
/// can still be queried by its raw name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TitleType {
    TvSeries,
    Movie,
    Short,
    TvMiniSeries,
    TvSpecial,
    Other(String),
}

/// Browsable variants in declaration order.
const BROWSABLE: &[TitleType] = &[
    TitleType::TvSeries,
    TitleType::Movie,
    TitleType::Short,
    TitleType::TvMiniSeries,
    TitleType::TvSpecial,
];

impl TitleType {
    /// Map a raw tag to its variant. Matching is exact and case-sensitive;
    /// unknown tags become `Other`.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "tvSeries" => Self::TvSeries,
            "movie" => Self::Movie,
            "short" => Self::Short,
            "tvMiniSeries" => Self::TvMiniSeries,
            "tvSpecial" => Self::TvSpecial,
            other => Self::Other(other.to_string()),
        }
    }

    /// The raw tag as it appears in the catalog file.
    pub fn as_str(&self) -> &str {
        match self {
            Self::TvSeries => "tvSeries",
            Self::Movie => "movie",
            Self::Short => "short",
            Self::TvMiniSeries => "tvMiniSeries",
            Self::TvSpecial => "tvSpecial",
            Self::Other(tag) => tag,
        }
    }

    /// Human-readable label.
    pub fn display_name(&self) -> &str {
        match self {
            Self::TvSeries => "TV Series",
            Self::Movie => "Movie",
            Self::Short => "Short",
            Self::TvMiniSeries => "TV Mini Series",
            Self::TvSpecial => "TV Special",
            Self::Other(tag) => tag,
        }
    }

    /// Whether records of this type pass the type-gate applied by the
    /// year, genre, title and duration filters.
    pub fn is_browsable(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// All browsable variants.
    pub fn browsable() -> &'static [TitleType] {
        BROWSABLE
    }
}

impl From<&str> for TitleType {
    fn from(tag: &str) -> Self {
        Self::parse(tag)
    }
}

impl std::str::FromStr for TitleType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl std::fmt::Display for TitleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for TitleType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "tests/title_type_tests.rs"]
mod tests;
