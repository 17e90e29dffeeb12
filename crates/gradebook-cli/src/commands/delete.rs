//! Delete a student record after confirmation.

use std::io::{BufRead, Write};

use anyhow::Result;

use gradebook_core::store::StudentStore;

use crate::prompt::Console;

pub fn execute<R: BufRead, W: Write>(
    store: &mut StudentStore,
    console: &mut Console<R, W>,
) -> Result<()> {
    console.say("\n--- Delete Student ---")?;
    let id = console.line("Enter Student ID: ")?;

    let Some(student) = store.get(&id) else {
        console.say("Student not found!")?;
        return Ok(());
    };
    console.say(format!(
        "Student to delete: {} ({})",
        student.name(),
        student.id()
    ))?;

    let confirm = console.line("Are you sure? (yes/no): ")?;
    if !confirm.eq_ignore_ascii_case("yes") {
        console.say("Deletion cancelled.")?;
        return Ok(());
    }

    match store.remove(&id) {
        Ok(removed) => console.say(format!("Deleted student {}.", removed.id()))?,
        Err(e) => console.say(format!("Failed to delete student: {e}"))?,
    }

    Ok(())
}
