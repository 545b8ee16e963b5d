//! Core domain entities
//!
//! Raw records as fetched, cleaned rows, the city aggregate, and the error
//! type. Pure data structures - no I/O.

pub mod aggregate;
mod fields;
mod item;
pub mod result;
mod user;

pub use aggregate::{CityAggregate, CityCount};
pub use item::{Item, RawItem};
pub use user::{RawUser, User, UserReportRow};
