//! XML report writer
//!
//! Renders the sorted user rows and the item rows into one document:
//! a `Users` root holding a `User` element per row, followed by an `Items`
//! element holding an `Item` per item. Every field becomes a child element
//! whose text is the field's string form.

use std::io::Write;
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::domain::result::{Error, Result};
use crate::domain::{Item, UserReportRow};

pub const USERS_TAG: &str = "Users";
pub const USER_TAG: &str = "User";
pub const ITEMS_TAG: &str = "Items";
pub const ITEM_TAG: &str = "Item";

/// A row that can be written as a flat XML element
pub trait XmlRecord {
    /// (element name, text) pairs in output order
    fn fields(&self) -> Vec<(&'static str, String)>;
}

impl XmlRecord for UserReportRow {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.user.id.clone()),
            ("name", self.user.name.clone()),
            ("username", self.user.username.clone()),
            ("email", self.user.email.clone()),
            ("street", self.user.street.clone()),
            ("suite", self.user.suite.clone()),
            ("city", self.user.city.clone()),
            ("zipcode", self.user.zipcode.clone()),
            ("email_domain", self.email_domain.clone()),
            ("user_count", self.user_count.to_string()),
        ]
    }
}

impl XmlRecord for Item {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.clone()),
            ("name", self.name.clone()),
            ("description", self.description.clone()),
            ("price", float_text(self.price)),
        ]
    }
}

/// Text form of a float; always carries a fractional part (`0.0`, `12.5`)
///
/// Magnitudes outside 1e-4..1e16 switch to exponent form without a
/// sign or zero padding (`1e16`, `1e-7`). Two-decimal prices never get there.
pub fn float_text(value: f64) -> String {
    format!("{:?}", value)
}

/// Render the report document to bytes
pub fn render_report(users: &[UserReportRow], items: &[Item], indent: bool) -> Result<Vec<u8>> {
    let mut writer = if indent {
        Writer::new_with_indent(Vec::new(), b' ', 2)
    } else {
        Writer::new(Vec::new())
    };

    emit(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)),
    )?;
    emit(&mut writer, Event::Start(BytesStart::new(USERS_TAG)))?;

    for row in users {
        write_record(&mut writer, USER_TAG, row)?;
    }

    emit(&mut writer, Event::Start(BytesStart::new(ITEMS_TAG)))?;
    for item in items {
        write_record(&mut writer, ITEM_TAG, item)?;
    }
    emit(&mut writer, Event::End(BytesEnd::new(ITEMS_TAG)))?;

    emit(&mut writer, Event::End(BytesEnd::new(USERS_TAG)))?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}

/// Render the report and write it to `path`
///
/// The document is written to a temporary file next to the target and then
/// renamed over it, so a failed run never leaves a truncated report.
pub fn write_report(
    path: &Path,
    users: &[UserReportRow],
    items: &[Item],
    indent: bool,
) -> Result<u64> {
    let contents = render_report(users, items, indent)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(&contents)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| {
        Error::report(format!("Failed to write {}: {}", path.display(), e.error))
    })?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "report written");
    Ok(contents.len() as u64)
}

fn write_record<R: XmlRecord>(writer: &mut Writer<Vec<u8>>, tag: &str, record: &R) -> Result<()> {
    emit(writer, Event::Start(BytesStart::new(tag)))?;
    for (name, text) in record.fields() {
        emit(writer, Event::Start(BytesStart::new(name)))?;
        emit(writer, Event::Text(BytesText::new(&text)))?;
        emit(writer, Event::End(BytesEnd::new(name)))?;
    }
    emit(writer, Event::End(BytesEnd::new(tag)))
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| Error::report(format!("Failed to serialize XML: {}", e)))
}
