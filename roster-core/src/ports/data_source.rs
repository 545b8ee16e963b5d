//! Data source port
//!
//! Defines the interface for fetching the user and item collections from
//! wherever they live (the web API, the built-in demo dataset, test fakes).

use crate::domain::result::Result;
use crate::domain::{RawItem, RawUser};

/// Data source trait
///
/// Implementations return the collections in the order the source lists
/// them. The report pipeline calls `fetch_users` before `fetch_items` and
/// never calls either twice in a run.
pub trait DataSource {
    /// Source name (e.g., "http", "demo")
    fn name(&self) -> &str;

    /// Fetch every user record
    fn fetch_users(&self) -> Result<Vec<RawUser>>;

    /// Fetch every item record
    fn fetch_items(&self) -> Result<Vec<RawItem>>;
}
