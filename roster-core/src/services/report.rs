//! Report service - the fetch → clean → transform → write pipeline

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::adapters::xml;
use crate::domain::result::Result;
use crate::domain::{CityAggregate, Item, UserReportRow};
use crate::ports::DataSource;
use crate::services::clean::{clean_items, clean_users};
use crate::services::transform::transform_users;

/// Everything the report contains, ready to serialize
#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    /// Users sorted by user_count descending, then name
    pub users: Vec<UserReportRow>,
    /// Users per city, ordered by city
    pub cities: CityAggregate,
    /// Items in fetch order
    pub items: Vec<Item>,
}

/// Outcome of a report run
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub source: String,
    pub output_path: PathBuf,
    pub users: usize,
    pub items: usize,
    pub cities: CityAggregate,
    pub bytes_written: u64,
}

/// Report service
///
/// Runs every stage over the full output of the previous one. Any stage
/// failing aborts the run before the report file is touched.
pub struct ReportService {
    source: Box<dyn DataSource>,
    indent: bool,
}

impl ReportService {
    pub fn new(source: Box<dyn DataSource>) -> Self {
        Self {
            source,
            indent: true,
        }
    }

    /// Pretty-print the XML (default) or write it on one line
    pub fn with_indent(mut self, indent: bool) -> Self {
        self.indent = indent;
        self
    }

    /// Name of the underlying data source
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Fetch, clean and transform without writing anything
    pub fn build(&self) -> Result<ReportData> {
        let raw_users = self.source.fetch_users()?;
        let raw_items = self.source.fetch_items()?;
        tracing::info!(
            source = self.source.name(),
            users = raw_users.len(),
            items = raw_items.len(),
            "fetched data"
        );

        let users = clean_users(raw_users)?;
        let items = clean_items(raw_items)?;
        tracing::debug!(users = users.len(), items = items.len(), "cleaned data");

        let transformed = transform_users(users)?;
        for (city, count) in transformed.cities.iter() {
            tracing::debug!(city, user_count = count, "city aggregate");
        }
        tracing::info!(
            users = transformed.rows.len(),
            cities = transformed.cities.len(),
            "transformed users"
        );

        Ok(ReportData {
            users: transformed.rows,
            cities: transformed.cities,
            items,
        })
    }

    /// Run the whole pipeline and write the XML report to `output`
    pub fn generate(&self, output: &Path) -> Result<ReportSummary> {
        let data = self.build()?;
        let bytes_written = xml::write_report(output, &data.users, &data.items, self.indent)?;
        tracing::info!(path = %output.display(), bytes = bytes_written, "report generated");

        Ok(ReportSummary {
            source: self.source.name().to_string(),
            output_path: output.to_path_buf(),
            users: data.users.len(),
            items: data.items.len(),
            cities: data.cities,
            bytes_written,
        })
    }
}
