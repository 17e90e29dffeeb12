//! CSV roster export.
//!
//! One header row, then one row per student in store order with the
//! record-level summary: id, identity fields, GPA and average grade to two
//! decimal places, and the at-risk flag. Consumers assume plain UTF-8 with
//! no embedded commas, so commas in free-text fields are flattened to
//! spaces before writing.

use std::path::Path;

use anyhow::{Context, Result};

use gradebook_core::store::StudentStore;

const HEADER: &str = "student_id,name,email,age,gpa,average_grade,at_risk";

/// Strip field-separator characters a consumer could misparse.
fn sanitize(field: &str) -> String {
    field.replace([',', '\n', '\r'], " ")
}

/// Render the roster as CSV text, rows in store order.
pub fn render_csv(store: &StudentStore) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');

    for student in store.all() {
        out.push_str(&format!(
            "{},{},{},{},{:.2},{:.2},{}\n",
            sanitize(student.id()),
            sanitize(student.name()),
            sanitize(student.email()),
            student.age(),
            student.gpa(),
            student.average_grade(),
            student.is_at_risk(),
        ));
    }
    out
}

/// Write the CSV export, creating parent directories as needed.
pub fn write_csv_export(store: &StudentStore, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render_csv(store))
        .with_context(|| format!("failed to write CSV export to {}", path.display()))?;
    Ok(())
}
