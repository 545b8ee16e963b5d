//! Cleaning: raw records into fully populated users and items
//!
//! Users get `"Unknown"` for a missing street or suite. Items get
//! `"No description"` for a missing description and a price coerced to a
//! non-negative `f64` (0.0 when absent). Anything else that is missing or
//! malformed fails the run.

use std::collections::HashSet;

use serde_json::Value as JsonValue;

use crate::domain::result::{Error, Result};
use crate::domain::{Item, RawItem, RawUser, User};

/// Placeholder for a missing street or suite
pub const UNKNOWN_ADDRESS: &str = "Unknown";

/// Placeholder for a missing item description
pub const NO_DESCRIPTION: &str = "No description";

/// Price used when the source sends none
pub const DEFAULT_PRICE: f64 = 0.0;

/// Clean every user, preserving order
pub fn clean_users(raw_users: Vec<RawUser>) -> Result<Vec<User>> {
    ensure_unique_ids("user", raw_users.iter().map(|u| u.id.as_str()))?;
    raw_users.into_iter().map(clean_user).collect()
}

/// Clean every item, preserving order
pub fn clean_items(raw_items: Vec<RawItem>) -> Result<Vec<Item>> {
    ensure_unique_ids("item", raw_items.iter().map(|i| i.id.as_str()))?;
    raw_items.into_iter().map(clean_item).collect()
}

fn clean_user(raw: RawUser) -> Result<User> {
    let id = raw.id;
    Ok(User {
        name: required("user", &id, "name", raw.name)?,
        username: required("user", &id, "username", raw.username)?,
        email: required("user", &id, "email", raw.email)?,
        street: present(raw.street).unwrap_or_else(|| UNKNOWN_ADDRESS.to_string()),
        suite: present(raw.suite).unwrap_or_else(|| UNKNOWN_ADDRESS.to_string()),
        city: required("user", &id, "city", raw.city)?,
        zipcode: required("user", &id, "zipcode", raw.zipcode)?,
        id,
    })
}

fn clean_item(raw: RawItem) -> Result<Item> {
    let price = coerce_price(&raw.id, raw.price.as_ref())?;
    Ok(Item {
        name: required("item", &raw.id, "name", raw.name)?,
        description: present(raw.description).unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        price,
        id: raw.id,
    })
}

/// Coerce a raw price to a non-negative float
///
/// Null and absent give [`DEFAULT_PRICE`]. Numbers and numeric strings are
/// converted; any other shape, a non-finite value, or a negative value is a
/// validation error.
pub fn coerce_price(item_id: &str, raw: Option<&JsonValue>) -> Result<f64> {
    let price = match raw {
        None | Some(JsonValue::Null) => return Ok(DEFAULT_PRICE),
        Some(JsonValue::Number(n)) => n.as_f64(),
        Some(JsonValue::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    let price = price.filter(|p| p.is_finite()).ok_or_else(|| {
        Error::validation(format!(
            "item {} has a non-numeric price: {}",
            item_id,
            raw.map(JsonValue::to_string).unwrap_or_default()
        ))
    })?;

    if price < 0.0 {
        return Err(Error::validation(format!(
            "item {} has a negative price: {}",
            item_id, price
        )));
    }

    // -0.0 prints as "-0.0"; normalise it
    Ok(price + 0.0)
}

/// Treat blank text the same as missing text
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn required(kind: &str, id: &str, field: &str, value: Option<String>) -> Result<String> {
    present(value).ok_or_else(|| {
        Error::validation(format!("{} {} is missing required field '{}'", kind, id, field))
    })
}

fn ensure_unique_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(Error::validation(format!("duplicate {} id: {}", kind, id)));
        }
    }
    Ok(())
}
