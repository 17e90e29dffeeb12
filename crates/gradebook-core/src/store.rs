//! The in-memory student record store.
//!
//! Records are keyed by student id in a `HashMap`; a parallel id vector
//! preserves insertion order so listings and search results come back in a
//! deterministic order. The store is single-threaded by design and holds no
//! lock; an owning caller drives every operation to completion.

use std::collections::HashMap;

use crate::error::GradebookError;
use crate::model::Student;

/// Owns the collection of student records.
///
/// Invariant: `students` and `order` always hold exactly the same id set,
/// and no two entries share an id.
#[derive(Debug, Default)]
pub struct StudentStore {
    students: HashMap<String, Student>,
    order: Vec<String>,
}

impl StudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Look up a record by id. Absence is an expected condition for callers,
    /// so this returns `None` rather than an error.
    pub fn get(&self, id: &str) -> Option<&Student> {
        self.students.get(id)
    }

    /// Insert a new record. There is no overwrite path; adding an existing
    /// id fails and leaves the original record unchanged.
    pub fn add(&mut self, student: Student) -> Result<(), GradebookError> {
        if self.students.contains_key(student.id()) {
            return Err(GradebookError::DuplicateStudentId(student.id().to_string()));
        }
        self.order.push(student.id().to_string());
        self.students.insert(student.id().to_string(), student);
        Ok(())
    }

    /// Replace the three mutable identity fields, preserving id and grades.
    pub fn update(
        &mut self,
        id: &str,
        name: impl Into<String>,
        email: impl Into<String>,
        age: u32,
    ) -> Result<(), GradebookError> {
        let student = self
            .students
            .get_mut(id)
            .ok_or_else(|| GradebookError::StudentNotFound(id.to_string()))?;
        student.set_name(name);
        student.set_email(email);
        student.set_age(age);
        Ok(())
    }

    /// Remove a record, returning it.
    pub fn remove(&mut self, id: &str) -> Result<Student, GradebookError> {
        let student = self
            .students
            .remove(id)
            .ok_or_else(|| GradebookError::StudentNotFound(id.to_string()))?;
        self.order.retain(|entry| entry != id);
        Ok(student)
    }

    /// Record a grade for the referenced student.
    pub fn add_grade(
        &mut self,
        id: &str,
        subject: impl Into<String>,
        score: f64,
    ) -> Result<(), GradebookError> {
        let student = self
            .students
            .get_mut(id)
            .ok_or_else(|| GradebookError::StudentNotFound(id.to_string()))?;
        student.add_grade(subject, score)
    }

    /// All records in insertion order.
    pub fn all(&self) -> Vec<&Student> {
        self.order
            .iter()
            .filter_map(|id| self.students.get(id))
            .collect()
    }

    /// All records ordered by name, ascending and case-sensitive. The sort
    /// is stable, so records with equal names keep their insertion order.
    pub fn sorted_by_name(&self) -> Vec<&Student> {
        let mut students = self.all();
        students.sort_by(|a, b| a.name().cmp(b.name()));
        students
    }

    /// All records ordered by descending GPA. Equal GPAs are broken by id
    /// ascending, so the ordering is deterministic across calls.
    pub fn sorted_by_gpa(&self) -> Vec<&Student> {
        let mut students = self.all();
        students.sort_by(|a, b| {
            b.gpa()
                .total_cmp(&a.gpa())
                .then_with(|| a.id().cmp(b.id()))
        });
        students
    }

    /// Case-insensitive substring match on name, in insertion order. An
    /// empty term matches every student.
    pub fn search_by_name(&self, term: &str) -> Vec<&Student> {
        let needle = term.to_lowercase();
        self.all()
            .into_iter()
            .filter(|s| s.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Students whose GPA is below the at-risk threshold, insertion order.
    pub fn at_risk(&self) -> Vec<&Student> {
        self.all().into_iter().filter(|s| s.is_at_risk()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(names: &[(&str, &str)]) -> StudentStore {
        let mut store = StudentStore::new();
        for (id, name) in names {
            store
                .add(Student::new(*id, *name, format!("{id}@example.edu"), 20))
                .unwrap();
        }
        store
    }

    #[test]
    fn add_and_get() {
        let store = store_with(&[("S001", "Alice")]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("S001").unwrap().name(), "Alice");
        assert!(store.get("S999").is_none());
    }

    #[test]
    fn duplicate_add_fails_and_preserves_original() {
        let mut store = store_with(&[("S001", "Alice")]);
        let err = store
            .add(Student::new("S001", "Impostor", "x@example.edu", 33))
            .unwrap_err();
        assert_eq!(err, GradebookError::DuplicateStudentId("S001".into()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("S001").unwrap().name(), "Alice");
    }

    #[test]
    fn update_replaces_mutable_fields_only() {
        let mut store = store_with(&[("S001", "Alice")]);
        store.add_grade("S001", "Math", 95.0).unwrap();

        store.update("S001", "Alicia", "alicia@example.edu", 21).unwrap();

        let s = store.get("S001").unwrap();
        assert_eq!(s.name(), "Alicia");
        assert_eq!(s.email(), "alicia@example.edu");
        assert_eq!(s.age(), 21);
        assert_eq!(s.grades()["Math"], 95.0);
    }

    #[test]
    fn update_absent_id_fails() {
        let mut store = StudentStore::new();
        assert_eq!(
            store.update("S404", "Nobody", "n@example.edu", 20),
            Err(GradebookError::StudentNotFound("S404".into()))
        );
    }

    #[test]
    fn remove_absent_id_leaves_store_unchanged() {
        let mut store = store_with(&[("S001", "Alice")]);
        assert_eq!(
            store.remove("S404").unwrap_err(),
            GradebookError::StudentNotFound("S404".into())
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_returns_the_record() {
        let mut store = store_with(&[("S001", "Alice"), ("S002", "Bob")]);
        let removed = store.remove("S001").unwrap();
        assert_eq!(removed.name(), "Alice");
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].id(), "S002");
    }

    #[test]
    fn add_grade_validates_before_delegating() {
        let mut store = store_with(&[("S001", "Alice")]);
        assert_eq!(
            store.add_grade("S404", "Math", 90.0),
            Err(GradebookError::StudentNotFound("S404".into()))
        );
        assert_eq!(
            store.add_grade("S001", "Math", 120.0),
            Err(GradebookError::GradeOutOfRange(120.0))
        );
        assert_eq!(store.get("S001").unwrap().grade_count(), 0);
    }

    #[test]
    fn all_preserves_insertion_order() {
        let store = store_with(&[("S003", "Carol"), ("S001", "Alice"), ("S002", "Bob")]);
        let ids: Vec<&str> = store.all().iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["S003", "S001", "S002"]);
    }

    #[test]
    fn sorted_by_name_is_ascending() {
        let store = store_with(&[("S001", "Bob"), ("S002", "Alice"), ("S003", "Eve")]);
        let names: Vec<&str> = store.sorted_by_name().iter().map(|s| s.name()).collect();
        assert_eq!(names, ["Alice", "Bob", "Eve"]);
    }

    #[test]
    fn sorted_by_name_ties_keep_insertion_order() {
        let store = store_with(&[("S002", "Alice"), ("S001", "Alice")]);
        let ids: Vec<&str> = store.sorted_by_name().iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["S002", "S001"]);
    }

    #[test]
    fn sorted_by_gpa_descends_with_id_tiebreak() {
        let mut store = store_with(&[("S002", "Bob"), ("S001", "Alice"), ("S003", "Eve")]);
        store.add_grade("S001", "Math", 95.0).unwrap(); // 4.0
        store.add_grade("S002", "Math", 72.0).unwrap(); // 2.0
        store.add_grade("S003", "Math", 75.0).unwrap(); // 2.0, ties with S002

        let ids: Vec<&str> = store.sorted_by_gpa().iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["S001", "S002", "S003"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let store = store_with(&[("S001", "Alice"), ("S002", "Bob"), ("S003", "Malia")]);
        let names: Vec<&str> = store
            .search_by_name("ali")
            .iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(names, ["Alice", "Malia"]);
    }

    #[test]
    fn empty_search_term_matches_everyone() {
        let store = store_with(&[("S001", "Alice"), ("S002", "Bob")]);
        assert_eq!(store.search_by_name("").len(), 2);
    }

    #[test]
    fn at_risk_filters_by_gpa_threshold() {
        let mut store = store_with(&[("S001", "Alice"), ("S002", "Bob")]);
        store.add_grade("S001", "Math", 95.0).unwrap();
        store.add_grade("S002", "History", 55.0).unwrap();

        let ids: Vec<&str> = store.at_risk().iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["S002"]);
    }
}
