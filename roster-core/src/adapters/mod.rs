//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - reqwest blocking client for the DataSource port (web API)
//! - Demo dataset for offline runs
//! - quick-xml writer for the report file

pub mod demo;
pub mod http;
pub mod xml;

#[cfg(test)]
pub mod mock_server;
