//! The in-memory title catalog.
//!
//! Built once from the full text of a catalog export and read-only from then
//! on. Filter methods here run the [`crate::filter`] functions over the whole
//! catalog; call those functions directly to filter a narrower list.

use std::io::Read;
use std::path::Path;

use crate::error::CatalogError;
use crate::filter;
use crate::loader::{self, LoadReport};
use crate::record::ShowRecord;

/// All titles parsed from one catalog export, in source order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<ShowRecord>,
    report: LoadReport,
}

impl Catalog {
    /// Parse catalog content. Never fails: malformed lines are skipped or
    /// degraded as described in [`crate::loader`].
    pub fn new(content: &str) -> Self {
        let (records, report) = loader::parse_catalog_with_report(content);
        Self { records, report }
    }

    /// Wrap already-parsed records.
    pub fn from_records(records: Vec<ShowRecord>) -> Self {
        let report = LoadReport {
            lines: records.len(),
            records: records.len(),
            skipped: 0,
        };
        Self { records, report }
    }

    /// Read the full text from `reader` and parse it.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, CatalogError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Ok(Self::new(&content))
    }

    /// Read and parse a catalog file.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CatalogError::read(path, e))?;
        log::debug!("Read {} bytes from {}", content.len(), path.display());
        Ok(Self::new(&content))
    }

    pub fn records(&self) -> &[ShowRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShowRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Line counts from the load that built this catalog.
    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// First record with the given id.
    pub fn get(&self, show_id: &str) -> Option<&ShowRecord> {
        self.records.iter().find(|rec| rec.show_id == show_id)
    }

    /// See [`filter::browsable`].
    pub fn browsable(&self) -> Vec<&ShowRecord> {
        filter::browsable(&self.records)
    }

    /// See [`filter::filter_by_year_range`].
    pub fn filter_by_year_range(&self, start_year: i32, end_year: i32) -> Vec<&ShowRecord> {
        filter::filter_by_year_range(&self.records, start_year, end_year)
    }

    /// See [`filter::filter_by_genre`].
    pub fn filter_by_genre<S: AsRef<str>>(&self, genres: &[S]) -> Vec<&ShowRecord> {
        filter::filter_by_genre(&self.records, genres)
    }

    /// See [`filter::filter_by_title`].
    pub fn filter_by_title(&self, title: &str) -> Vec<&ShowRecord> {
        filter::filter_by_title(&self.records, title)
    }

    /// See [`filter::filter_by_duration`].
    pub fn filter_by_duration(&self, min_minutes: i32, max_minutes: i32) -> Vec<&ShowRecord> {
        filter::filter_by_duration(&self.records, min_minutes, max_minutes)
    }

    /// See [`filter::filter_by_type`].
    pub fn filter_by_type(&self, show_type: &str) -> Vec<&ShowRecord> {
        filter::filter_by_type(&self.records, show_type)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ShowRecord;
    type IntoIter = std::slice::Iter<'a, ShowRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
