//! Config command - show the effective configuration

use anyhow::Result;

use super::{get_roster_dir, load_config, SourceArgs};
use crate::output;

pub fn run(source: &SourceArgs, json: bool) -> Result<()> {
    let config = load_config(source)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    output::heading("Roster Configuration");
    println!();

    let table = output::key_value_table(vec![
        ("Settings directory", get_roster_dir().display().to_string()),
        ("Users endpoint", config.users_endpoint()?.to_string()),
        ("Items endpoint", config.items_endpoint()?.to_string()),
        ("Output", config.output_path.display().to_string()),
        ("Timeout", format!("{}s", config.timeout_secs)),
        ("Indent", config.indent.to_string()),
    ]);
    println!("{}", table);

    if source.demo {
        println!();
        output::warning("Demo mode: the API endpoints above are not contacted.");
    }

    Ok(())
}
