//! Service layer - pipeline stages and their orchestration
//!
//! `clean` and `transform` are pure stage functions; `ReportService` wires
//! them between a data source and the XML writer.

pub mod clean;
mod report;
pub mod transform;

pub use clean::{clean_items, clean_users};
pub use report::{ReportData, ReportService, ReportSummary};
pub use transform::{transform_users, TransformedUsers};
