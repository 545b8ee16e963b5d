//! User domain model

use serde::{Deserialize, Serialize};

use super::fields::{deserialize_id, deserialize_optional_text};

/// A user record as returned by the users endpoint
///
/// Every field except `id` may be absent or null on the wire; the cleaner
/// decides which gaps get defaults and which are fatal.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawUser {
    /// User ID (API returns number, we accept both)
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub street: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub suite: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub zipcode: Option<String>,
}

impl RawUser {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// A cleaned user: every field populated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
}

impl User {
    /// Domain part of the email address
    ///
    /// The text after the first `@`, up to the next `@` if there is one.
    /// Returns None when the address has no `@` at all.
    pub fn email_domain(&self) -> Option<&str> {
        self.email.split('@').nth(1)
    }
}

/// A user row as it appears in the report: the cleaned user plus the
/// derived email domain and the number of users sharing its city
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserReportRow {
    #[serde(flatten)]
    pub user: User,
    pub email_domain: String,
    pub user_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_email(email: &str) -> User {
        User {
            id: "1".to_string(),
            name: "Leanne Graham".to_string(),
            username: "Bret".to_string(),
            email: email.to_string(),
            street: "Kulas Light".to_string(),
            suite: "Apt. 556".to_string(),
            city: "Gwenborough".to_string(),
            zipcode: "92998-3874".to_string(),
        }
    }

    #[test]
    fn test_email_domain() {
        assert_eq!(user_with_email("Sincere@april.biz").email_domain(), Some("april.biz"));
        assert_eq!(user_with_email("a@b@c").email_domain(), Some("b"));
        assert_eq!(user_with_email("trailing@").email_domain(), Some(""));
        assert_eq!(user_with_email("no-at-sign").email_domain(), None);
    }

    #[test]
    fn test_raw_user_accepts_numeric_id_and_missing_fields() {
        let raw: RawUser = serde_json::from_str(
            r#"{"id": 7, "name": "Kurtis", "street": null, "zipcode": 58804}"#,
        )
        .unwrap();
        assert_eq!(raw.id, "7");
        assert_eq!(raw.name.as_deref(), Some("Kurtis"));
        assert_eq!(raw.street, None);
        assert_eq!(raw.suite, None);
        assert_eq!(raw.zipcode.as_deref(), Some("58804"));
    }

    #[test]
    fn test_report_row_serializes_flat() {
        let row = UserReportRow {
            user: user_with_email("Sincere@april.biz"),
            email_domain: "april.biz".to_string(),
            user_count: 2,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["city"], "Gwenborough");
        assert_eq!(json["email_domain"], "april.biz");
        assert_eq!(json["user_count"], 2);
    }
}
