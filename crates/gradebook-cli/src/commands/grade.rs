//! Add or overwrite a grade for one subject.

use std::io::{BufRead, Write};

use anyhow::Result;

use gradebook_core::store::StudentStore;

use crate::prompt::Console;

pub fn execute<R: BufRead, W: Write>(
    store: &mut StudentStore,
    console: &mut Console<R, W>,
) -> Result<()> {
    console.say("\n--- Add/Update Grade ---")?;
    let id = console.line("Enter Student ID: ")?;

    let Some(student) = store.get(&id) else {
        console.say("Student not found!")?;
        return Ok(());
    };
    console.say(format!("Student: {}", student.name()))?;

    let subject = console.line("Enter Subject Name: ")?;
    let score = console.read_f64("Enter Grade (0-100): ")?;

    match store.add_grade(&id, subject, score) {
        Ok(()) => {
            let gpa = store.get(&id).map(|s| s.gpa()).unwrap_or_default();
            console.say("Grade added successfully.")?;
            console.say(format!("Updated GPA: {gpa:.2}"))?;
        }
        Err(e) => console.say(format!("Failed to add grade: {e}"))?,
    }

    Ok(())
}
