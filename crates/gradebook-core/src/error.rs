//! Record store error types.
//!
//! Every failure in the core is recoverable and surfaced to the caller as a
//! typed result. Defined here so the CLI layer can match on the variant and
//! phrase its message without string matching.

use thiserror::Error;

/// Errors that can occur when mutating or querying the record store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradebookError {
    /// A grade outside the accepted [0, 100] range was rejected before any
    /// mutation took place.
    #[error("grade {0} is out of range (must be between 0 and 100)")]
    GradeOutOfRange(f64),

    /// The referenced student id is not present in the store.
    #[error("no student with id '{0}'")]
    StudentNotFound(String),

    /// An add was attempted with an id that is already registered.
    #[error("student id '{0}' is already registered")]
    DuplicateStudentId(String),
}

impl GradebookError {
    /// Returns `true` if this error rejected caller-supplied input, as
    /// opposed to referencing a record that does not exist.
    pub fn is_validation(&self) -> bool {
        matches!(self, GradebookError::GradeOutOfRange(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let e = GradebookError::GradeOutOfRange(101.0);
        assert!(e.to_string().contains("101"));
        assert!(e.is_validation());

        let e = GradebookError::StudentNotFound("S042".into());
        assert!(e.to_string().contains("S042"));
        assert!(!e.is_validation());

        let e = GradebookError::DuplicateStudentId("S001".into());
        assert!(e.to_string().contains("already registered"));
    }
}
