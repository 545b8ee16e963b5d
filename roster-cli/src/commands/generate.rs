//! Generate command - run the pipeline and write the XML report

use std::path::PathBuf;

use anyhow::{Context, Result};

use super::{get_context, SourceArgs};
use crate::output;

pub fn run(source: &SourceArgs, output_path: Option<PathBuf>, compact: bool, json: bool) -> Result<()> {
    let ctx = get_context(source)?;
    let output_path = output_path.unwrap_or_else(|| ctx.config.output_path.clone());

    let service = if compact {
        ctx.report_service.with_indent(false)
    } else {
        ctx.report_service
    };

    let summary = service
        .generate(&output_path)
        .with_context(|| format!("Failed to generate {}", output_path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    output::success(&format!("XML report generated: {}", summary.output_path.display()));
    println!("{}", output::key_value_table(output::summary_rows(&summary)));

    if summary.users == 0 {
        output::warning("No users were returned; the report only lists items.");
    }

    Ok(())
}
