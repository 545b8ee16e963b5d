//! Roster Core - user/item report pipeline
//!
//! This crate follows a hexagonal layout:
//!
//! - **domain**: raw records, cleaned rows, the city aggregate, errors
//! - **ports**: the `DataSource` trait
//! - **services**: clean, transform and the report pipeline
//! - **adapters**: HTTP and demo data sources, XML writer

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use adapters::demo::DemoDataSource;
use adapters::http::HttpDataSource;
use config::Config;
use ports::DataSource;
use services::ReportService;

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result};
pub use domain::{CityAggregate, Item, User, UserReportRow};
pub use services::{ReportData, ReportSummary};

/// Main context for roster operations
///
/// Holds the effective configuration and a report service wired to the
/// selected data source.
pub struct RosterContext {
    pub config: Config,
    pub report_service: ReportService,
}

impl RosterContext {
    /// Create a context from an already resolved configuration
    ///
    /// `demo` swaps the web API for the built-in dataset.
    pub fn from_config(config: Config, demo: bool) -> Result<Self> {
        let source: Box<dyn DataSource> = if demo {
            Box::new(DemoDataSource::new())
        } else {
            Box::new(HttpDataSource::from_config(&config)?)
        };

        let report_service = ReportService::new(source).with_indent(config.indent);

        Ok(Self {
            config,
            report_service,
        })
    }
}
