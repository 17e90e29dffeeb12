//! Export the roster to a file.
//!
//! CSV is the primary format; a markdown class summary and the statistics
//! as JSON are also available.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::statistics::ClassStatistics;
use gradebook_core::store::StudentStore;
use gradebook_report::csv::write_csv_export;
use gradebook_report::summary::write_markdown_summary;

use crate::prompt::Console;

/// Append `ext` unless the name already ends with it.
fn with_extension(name: &str, ext: &str) -> PathBuf {
    if name.ends_with(ext) {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{name}{ext}"))
    }
}

pub fn execute<R: BufRead, W: Write>(
    store: &mut StudentStore,
    console: &mut Console<R, W>,
) -> Result<()> {
    console.say("\n--- Export Data ---")?;
    console.say("1. CSV roster")?;
    console.say("2. Markdown summary")?;
    console.say("3. JSON statistics")?;
    let format = console.line("Choose format: ")?;

    let filename = console.line("Enter filename: ")?;

    let outcome = match format.as_str() {
        "2" => {
            let path = with_extension(&filename, ".md");
            write_markdown_summary(store, &path).map(|()| path)
        }
        "3" => {
            let path = with_extension(&filename, ".json");
            let stats = ClassStatistics::compute(store);
            serde_json::to_string_pretty(&stats)
                .map_err(anyhow::Error::from)
                .and_then(|json| {
                    std::fs::write(&path, json)?;
                    Ok(path)
                })
        }
        _ => {
            let path = with_extension(&filename, ".csv");
            write_csv_export(store, &path).map(|()| path)
        }
    };

    match outcome {
        Ok(path) => {
            tracing::info!("export written to {}", path.display());
            console.say(format!("Data exported successfully to: {}", path.display()))?;
        }
        Err(e) => console.say(format!("Failed to export data: {e:#}"))?,
    }

    Ok(())
}
