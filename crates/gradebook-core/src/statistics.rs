//! Aggregate statistics over the whole record store.
//!
//! Everything here is computed on demand from the store's current state.
//! Empty-store cases are guarded explicitly; no aggregate ever divides by
//! zero.

use serde::{Deserialize, Serialize};

use crate::store::StudentStore;

/// Class-wide aggregates derived from every record in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassStatistics {
    /// Number of records in the store.
    pub total_students: usize,
    /// Mean of every student's GPA, 0.0 when the store is empty.
    pub average_gpa: f64,
    /// Students whose GPA falls below the at-risk threshold.
    pub at_risk_count: usize,
    /// At-risk share of the roster, in percent, 0.0 when empty.
    pub at_risk_percent: f64,
    /// Highest individual GPA, `None` when the store is empty.
    pub highest_gpa: Option<GpaExtreme>,
    /// Lowest individual GPA, `None` when the store is empty.
    pub lowest_gpa: Option<GpaExtreme>,
}

/// One end of the GPA range, with the student it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpaExtreme {
    pub student_id: String,
    pub name: String,
    pub gpa: f64,
}

impl ClassStatistics {
    /// Compute aggregates from the store's current state.
    ///
    /// When several students share the extreme GPA, the one with the
    /// smallest id is reported, so repeated calls agree.
    pub fn compute(store: &StudentStore) -> Self {
        let students = store.all();
        if students.is_empty() {
            return Self {
                total_students: 0,
                average_gpa: 0.0,
                at_risk_count: 0,
                at_risk_percent: 0.0,
                highest_gpa: None,
                lowest_gpa: None,
            };
        }

        let count = students.len();
        let gpa_sum: f64 = students.iter().map(|s| s.gpa()).sum();
        let at_risk_count = students.iter().filter(|s| s.is_at_risk()).count();

        let mut by_gpa: Vec<_> = students
            .iter()
            .map(|s| (s.gpa(), s.id(), s.name()))
            .collect();
        by_gpa.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(b.1)));

        let extreme = |(gpa, id, name): &(f64, &str, &str)| GpaExtreme {
            student_id: id.to_string(),
            name: name.to_string(),
            gpa: *gpa,
        };
        let lowest = by_gpa.first().map(extreme);
        // Highest: scan from the top of the sorted list, but prefer the
        // smallest id among equal GPAs.
        let top_gpa = by_gpa.last().map(|e| e.0);
        let highest = top_gpa.and_then(|top| {
            by_gpa
                .iter()
                .find(|(gpa, _, _)| gpa.total_cmp(&top).is_eq())
                .map(extreme)
        });

        Self {
            total_students: count,
            average_gpa: gpa_sum / count as f64,
            at_risk_count,
            at_risk_percent: at_risk_count as f64 * 100.0 / count as f64,
            highest_gpa: highest,
            lowest_gpa: lowest,
        }
    }

    /// Render the console statistics report.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("\n========== CLASS STATISTICS ==========\n");
        out.push_str(&format!("Total Students: {}\n", self.total_students));
        out.push_str(&format!("Average GPA: {:.2}\n", self.average_gpa));

        if self.total_students == 0 {
            out.push_str("No students in the system.\n");
        } else {
            out.push_str(&format!(
                "At-Risk Students: {} ({:.1}%)\n",
                self.at_risk_count, self.at_risk_percent
            ));
            if let Some(h) = &self.highest_gpa {
                out.push_str(&format!(
                    "Highest GPA: {:.2} - {} ({})\n",
                    h.gpa, h.name, h.student_id
                ));
            }
            if let Some(l) = &self.lowest_gpa {
                out.push_str(&format!(
                    "Lowest GPA: {:.2} - {} ({})\n",
                    l.gpa, l.name, l.student_id
                ));
            }
        }
        out.push_str("======================================\n");
        out
    }
}
