//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The pipeline
//! depends only on these traits, not on concrete implementations.

mod data_source;

pub use data_source::DataSource;
