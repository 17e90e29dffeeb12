//! One module per menu action.

pub mod add;
pub mod at_risk;
pub mod delete;
pub mod export;
pub mod grade;
pub mod list;
pub mod search;
pub mod stats;
pub mod transcript;
pub mod update;

use comfy_table::{Cell, Table};
use gradebook_core::model::Student;

/// Build the shared roster table used by list, search, and at-risk views.
pub(crate) fn student_table(students: &[&Student]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "ID", "Name", "Email", "Age", "GPA", "Avg Grade", "Status",
    ]);

    for s in students {
        let status = if s.is_at_risk() { "At risk" } else { "Good" };
        table.add_row(vec![
            Cell::new(s.id()),
            Cell::new(s.name()),
            Cell::new(s.email()),
            Cell::new(s.age()),
            Cell::new(format!("{:.2}", s.gpa())),
            Cell::new(format!("{:.2}%", s.average_grade())),
            Cell::new(status),
        ]);
    }

    table
}
