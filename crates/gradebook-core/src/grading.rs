//! Grade conversion policy.
//!
//! Raw scores live on a 0-100 percentage scale. GPA points and letter grades
//! are both derived from the same piecewise partition with inclusive lower
//! bounds at 60/70/80/90, so the two conversions always agree on which band
//! a score falls in.

/// A GPA below this value marks a student as at risk.
pub const AT_RISK_GPA: f64 = 2.0;

/// Returns `true` if `score` is an acceptable raw grade.
pub fn is_valid_score(score: f64) -> bool {
    (0.0..=100.0).contains(&score)
}

/// Convert a raw score to GPA points on the 0.0-4.0 scale.
pub fn gpa_points(score: f64) -> f64 {
    if score >= 90.0 {
        4.0
    } else if score >= 80.0 {
        3.0
    } else if score >= 70.0 {
        2.0
    } else if score >= 60.0 {
        1.0
    } else {
        0.0
    }
}

/// Convert a raw score to its letter grade.
pub fn letter_grade(score: f64) -> &'static str {
    if score >= 90.0 {
        "A"
    } else if score >= 80.0 {
        "B"
    } else if score >= 70.0 {
        "C"
    } else if score >= 60.0 {
        "D"
    } else {
        "F"
    }
}
