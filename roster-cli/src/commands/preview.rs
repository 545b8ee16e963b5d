//! Preview command - show the transformed data without writing a report

use anyhow::Result;

use roster_core::adapters::xml::float_text;

use super::{get_context, SourceArgs};
use crate::output;

pub fn run(source: &SourceArgs, json: bool) -> Result<()> {
    let ctx = get_context(source)?;
    let data = ctx.report_service.build()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    output::heading("Users");
    if data.users.is_empty() {
        output::warning("No users returned.");
    } else {
        let mut table = output::create_table();
        table.set_header(vec!["ID", "Name", "Username", "Email domain", "City", "Users in city"]);
        for row in &data.users {
            table.add_row(vec![
                row.user.id.clone(),
                row.user.name.clone(),
                row.user.username.clone(),
                row.email_domain.clone(),
                row.user.city.clone(),
                row.user_count.to_string(),
            ]);
        }
        println!("{}", table);
    }
    println!();

    if !data.cities.is_empty() {
        output::heading("Users per city");
        let mut table = output::create_table();
        table.set_header(vec!["City", "Users"]);
        for (city, count) in data.cities.iter() {
            table.add_row(vec![city.to_string(), count.to_string()]);
        }
        println!("{}", table);
        println!();
    }

    output::heading("Items");
    if data.items.is_empty() {
        output::warning("No items returned.");
    } else {
        let mut table = output::create_table();
        table.set_header(vec!["ID", "Name", "Description", "Price"]);
        for item in &data.items {
            table.add_row(vec![
                item.id.clone(),
                item.name.clone(),
                item.description.clone(),
                float_text(item.price),
            ]);
        }
        println!("{}", table);
    }

    Ok(())
}
