//! Markdown class summary.
//!
//! A human-readable artifact built from the same aggregates the console
//! statistics view shows, plus a per-student roster table and an at-risk
//! section.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

use gradebook_core::statistics::ClassStatistics;
use gradebook_core::store::StudentStore;

/// Escape characters that would break a markdown table cell.
fn md_escape(s: &str) -> String {
    s.replace('|', "\\|")
}

/// Generate the markdown summary for the current roster.
pub fn generate_markdown(store: &StudentStore) -> String {
    let stats = ClassStatistics::compute(store);
    let mut md = String::new();

    md.push_str("# Class Summary\n\n");
    md.push_str(&format!(
        "Generated: {}\n\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));

    md.push_str(&format!(
        "**{} students** | average GPA {:.2} | {} at risk ({:.1}%)\n\n",
        stats.total_students, stats.average_gpa, stats.at_risk_count, stats.at_risk_percent
    ));

    if stats.total_students == 0 {
        md.push_str("No students in the system.\n");
        return md;
    }

    md.push_str("## Roster\n\n");
    md.push_str("| ID | Name | Email | Age | GPA | Avg Grade | Standing |\n");
    md.push_str("|----|------|-------|-----|-----|-----------|----------|\n");
    for s in store.sorted_by_name() {
        let standing = if s.is_at_risk() { "At risk" } else { "Good" };
        md.push_str(&format!(
            "| {} | {} | {} | {} | {:.2} | {:.2}% | {} |\n",
            md_escape(s.id()),
            md_escape(s.name()),
            md_escape(s.email()),
            s.age(),
            s.gpa(),
            s.average_grade(),
            standing
        ));
    }
    md.push('\n');

    if let (Some(h), Some(l)) = (&stats.highest_gpa, &stats.lowest_gpa) {
        md.push_str(&format!(
            "Highest GPA: **{:.2}** ({}, {}) — Lowest GPA: **{:.2}** ({}, {})\n\n",
            h.gpa,
            md_escape(&h.name),
            md_escape(&h.student_id),
            l.gpa,
            md_escape(&l.name),
            md_escape(&l.student_id)
        ));
    }

    let at_risk = store.at_risk();
    if !at_risk.is_empty() {
        md.push_str("## At-Risk Students\n\n");
        for s in &at_risk {
            md.push_str(&format!(
                "- {} ({}) — GPA {:.2}\n",
                md_escape(s.name()),
                md_escape(s.id()),
                s.gpa()
            ));
        }
    }

    md
}

/// Write the markdown summary, creating parent directories as needed.
pub fn write_markdown_summary(store: &StudentStore, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, generate_markdown(store))
        .with_context(|| format!("failed to write summary to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradebook_core::model::Student;

    fn roster() -> StudentStore {
        let mut store = StudentStore::new();
        for (id, name, score) in [("S001", "Bob", 95.0), ("S002", "Alice", 55.0)] {
            store
                .add(Student::new(id, name, format!("{id}@example.edu"), 20))
                .unwrap();
            store.add_grade(id, "Math", score).unwrap();
        }
        store
    }

    #[test]
    fn empty_roster_summary() {
        let md = generate_markdown(&StudentStore::new());
        assert!(md.contains("**0 students**"));
        assert!(md.contains("No students in the system."));
        assert!(!md.contains("## Roster"));
    }

    #[test]
    fn roster_table_is_name_sorted() {
        let md = generate_markdown(&roster());
        let alice = md.find("| S002 | Alice").unwrap();
        let bob = md.find("| S001 | Bob").unwrap();
        assert!(alice < bob);
        assert!(md.contains("## At-Risk Students"));
        assert!(md.contains("- Alice (S002) — GPA 0.00"));
    }

    #[test]
    fn pipes_in_names_are_escaped() {
        let mut store = StudentStore::new();
        store
            .add(Student::new("S001", "A|B", "ab@example.edu", 20))
            .unwrap();
        let md = generate_markdown(&store);
        assert!(md.contains("A\\|B"));
    }

    #[test]
    fn writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.md");
        write_markdown_summary(&roster(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("# Class Summary"));
    }
}
