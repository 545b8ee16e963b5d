//! Demo data source
//!
//! A fixed dataset shaped like the web API's responses, including the gaps
//! the cleaner has to fill (missing suites, null descriptions, decimal
//! string prices). Lets a report be generated without a running API.

use serde_json::{json, Value as JsonValue};

use crate::domain::result::Result;
use crate::domain::{RawItem, RawUser};
use crate::ports::DataSource;

/// Built-in demo dataset
#[derive(Debug, Default)]
pub struct DemoDataSource;

impl DemoDataSource {
    pub fn new() -> Self {
        Self
    }
}

impl DataSource for DemoDataSource {
    fn name(&self) -> &str {
        "demo"
    }

    fn fetch_users(&self) -> Result<Vec<RawUser>> {
        Ok(generate_demo_users())
    }

    fn fetch_items(&self) -> Result<Vec<RawItem>> {
        Ok(generate_demo_items())
    }
}

#[allow(clippy::too_many_arguments)]
fn demo_user(
    id: u32,
    name: &str,
    username: &str,
    email: &str,
    street: Option<&str>,
    suite: Option<&str>,
    city: &str,
    zipcode: &str,
) -> RawUser {
    RawUser {
        id: id.to_string(),
        name: Some(name.to_string()),
        username: Some(username.to_string()),
        email: Some(email.to_string()),
        street: street.map(str::to_string),
        suite: suite.map(str::to_string),
        city: Some(city.to_string()),
        zipcode: Some(zipcode.to_string()),
    }
}

fn demo_item(id: u32, name: &str, description: Option<&str>, price: Option<JsonValue>) -> RawItem {
    RawItem {
        id: id.to_string(),
        name: Some(name.to_string()),
        description: description.map(str::to_string),
        price,
    }
}

/// Generate demo users: 8 users across 4 cities
pub fn generate_demo_users() -> Vec<RawUser> {
    vec![
        demo_user(1, "Leanne Graham", "Bret", "Sincere@april.biz",
            Some("Kulas Light"), Some("Apt. 556"), "Gwenborough", "92998-3874"),
        demo_user(2, "Ervin Howell", "Antonette", "Shanna@melissa.tv",
            Some("Victor Plains"), Some("Suite 879"), "Wisokyburgh", "90566-7771"),
        demo_user(3, "Clementine Bauch", "Samantha", "Nathan@yesenia.net",
            Some("Douglas Extension"), None, "McKenziehaven", "59590-4157"),
        demo_user(4, "Patricia Lebsack", "Karianne", "Julianne.OConner@kory.org",
            Some("Hoeger Mall"), Some("Apt. 692"), "Gwenborough", "53919-4257"),
        demo_user(5, "Chelsey Dietrich", "Kamren", "Lucio_Hettinger@annie.ca",
            None, None, "Wisokyburgh", "33263"),
        demo_user(6, "Dennis Schulist", "Leopoldo_Corkery", "Karley_Dach@jasper.info",
            Some("Norberto Crossing"), Some("Apt. 950"), "Gwenborough", "23505-1337"),
        demo_user(7, "Kurtis Weissnat", "Elwyn.Skiles", "Telly.Hoeger@billy.biz",
            Some("Rex Trail"), None, "Howemouth", "58804-1099"),
        demo_user(8, "Nicholas Runolfsdottir V", "Maxime_Nienow", "Sherwood@rosamond.me",
            Some("Ellsworth Summit"), Some("Suite 729"), "Wisokyburgh", "45169"),
    ]
}

/// Generate demo items: prices as numbers, decimal strings, null and absent
pub fn generate_demo_items() -> Vec<RawItem> {
    vec![
        demo_item(1, "Desk Lamp", Some("LED lamp with adjustable arm"), Some(json!("24.50"))),
        demo_item(2, "Notebook", None, Some(json!(3.75))),
        demo_item(3, "Fountain Pen", Some("Steel nib, black ink"), Some(json!(42))),
        demo_item(4, "Sample Pack", Some("Free with any order"), Some(JsonValue::Null)),
        demo_item(5, "Gift Card", None, None),
    ]
}
