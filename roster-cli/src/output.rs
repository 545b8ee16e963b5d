//! Terminal output for report runs

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use roster_core::ReportSummary;

pub fn success(msg: &str) {
    println!("{}", msg.green());
}

pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Bold section title
pub fn heading(title: &str) {
    println!("{}", title.bold());
}

/// Table with the shared preset
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Two-column table of labelled values
pub fn key_value_table(rows: Vec<(&str, String)>) -> Table {
    let mut table = create_table();
    for (label, value) in rows {
        table.add_row(vec![label.to_string(), value]);
    }
    table
}

/// Label/value rows describing a finished report run
pub fn summary_rows(summary: &ReportSummary) -> Vec<(&'static str, String)> {
    let cities = summary
        .cities
        .iter()
        .map(|(city, count)| format!("{} ({})", city, count))
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        ("Source", summary.source.clone()),
        ("Users", summary.users.to_string()),
        ("Items", summary.items.to_string()),
        ("Cities", if cities.is_empty() { "-".to_string() } else { cities }),
        ("Bytes written", summary.bytes_written.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use roster_core::CityAggregate;

    use super::*;

    fn summary(cities: &[&str]) -> ReportSummary {
        ReportSummary {
            source: "demo".to_string(),
            output_path: PathBuf::from("report.xml"),
            users: cities.len(),
            items: 2,
            cities: CityAggregate::from_cities(cities.iter().copied()),
            bytes_written: 512,
        }
    }

    #[test]
    fn test_summary_rows_list_cities_in_order() {
        let rows = summary_rows(&summary(&["NYC", "LA", "NYC"]));

        assert_eq!(rows[0], ("Source", "demo".to_string()));
        assert_eq!(rows[1], ("Users", "3".to_string()));
        assert_eq!(rows[3], ("Cities", "LA (1), NYC (2)".to_string()));
        assert_eq!(rows[4], ("Bytes written", "512".to_string()));
    }

    #[test]
    fn test_summary_rows_without_users() {
        let rows = summary_rows(&summary(&[]));
        assert_eq!(rows[3], ("Cities", "-".to_string()));
    }
}
