//! The student record entity.
//!
//! A [`Student`] owns its identity fields and a per-subject grade map. GPA,
//! average grade, and at-risk status are always derived from the current
//! grade map; nothing is cached, so reads are always consistent with the
//! latest mutation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::GradebookError;
use crate::grading::{self, AT_RISK_GPA};

/// A single student record with per-subject grades.
///
/// The id is immutable after construction; name, email, and age may change.
/// Grade iteration order is the map's order (sorted by subject), which keeps
/// transcripts deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    id: String,
    name: String,
    email: String,
    age: u32,
    #[serde(default)]
    grades: BTreeMap<String, f64>,
}

impl Student {
    /// Create a record with an empty grade map.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        age: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            age,
            grades: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    /// Record a score for a subject, overwriting any previous score.
    ///
    /// Scores outside [0, 100] are rejected before any mutation.
    pub fn add_grade(
        &mut self,
        subject: impl Into<String>,
        score: f64,
    ) -> Result<(), GradebookError> {
        if !grading::is_valid_score(score) {
            return Err(GradebookError::GradeOutOfRange(score));
        }
        self.grades.insert(subject.into(), score);
        Ok(())
    }

    /// Snapshot of the grade map. The returned map is independent of the
    /// record's internal state; mutating it cannot bypass score validation.
    pub fn grades(&self) -> BTreeMap<String, f64> {
        self.grades.clone()
    }

    pub fn grade_count(&self) -> usize {
        self.grades.len()
    }

    /// Grade point average over all recorded subjects, 0.0 with no grades.
    pub fn gpa(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        let total: f64 = self.grades.values().copied().map(grading::gpa_points).sum();
        total / self.grades.len() as f64
    }

    /// Arithmetic mean of raw scores, 0.0 with no grades.
    pub fn average_grade(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        self.grades.values().sum::<f64>() / self.grades.len() as f64
    }

    /// A student is at risk when their GPA falls below 2.0.
    pub fn is_at_risk(&self) -> bool {
        self.gpa() < AT_RISK_GPA
    }

    /// Render the full transcript: identity header, one line per subject,
    /// then the derived summary. With no grades the summary is omitted.
    pub fn transcript(&self) -> String {
        let mut out = String::new();
        out.push_str("\n========== STUDENT TRANSCRIPT ==========\n");
        out.push_str(&format!("Student ID: {}\n", self.id));
        out.push_str(&format!("Name: {}\n", self.name));
        out.push_str(&format!("Email: {}\n", self.email));
        out.push_str(&format!("Age: {}\n\n", self.age));
        out.push_str("GRADES:\n");
        out.push_str("----------------------------------------\n");

        if self.grades.is_empty() {
            out.push_str("No grades recorded\n");
        } else {
            for (subject, &score) in &self.grades {
                out.push_str(&format!(
                    "{subject:<20}: {score:>6.2}% ({})\n",
                    grading::letter_grade(score)
                ));
            }
            out.push_str("----------------------------------------\n");
            out.push_str(&format!("Average Grade: {:.2}%\n", self.average_grade()));
            out.push_str(&format!("GPA: {:.2} / 4.0\n", self.gpa()));
            let standing = if self.is_at_risk() {
                "AT RISK - Needs Support"
            } else {
                "Good Standing"
            };
            out.push_str(&format!("Status: {standing}\n"));
        }
        out.push_str("========================================\n");
        out
    }
}
