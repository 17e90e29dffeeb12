//! Update a student's mutable identity fields.

use std::io::{BufRead, Write};

use anyhow::Result;

use gradebook_core::store::StudentStore;

use crate::prompt::Console;

pub fn execute<R: BufRead, W: Write>(
    store: &mut StudentStore,
    console: &mut Console<R, W>,
) -> Result<()> {
    console.say("\n--- Update Student Information ---")?;
    let id = console.line("Enter Student ID: ")?;

    let Some(student) = store.get(&id) else {
        console.say("Student not found!")?;
        return Ok(());
    };
    let (current_name, current_email, current_age) = (
        student.name().to_string(),
        student.email().to_string(),
        student.age(),
    );

    console.say("Enter new information (press Enter to keep current value):")?;

    let mut name = console.line(&format!("New Name [{current_name}]: "))?;
    if name.is_empty() {
        name = current_name;
    }

    let mut email = console.line(&format!("New Email [{current_email}]: "))?;
    if email.is_empty() {
        email = current_email;
    }

    let age = loop {
        let entry = console.line(&format!("New Age [{current_age}]: "))?;
        if entry.is_empty() {
            break current_age;
        }
        match entry.parse() {
            Ok(value) => break value,
            Err(_) => console.say("Invalid input. Please enter a number.")?,
        }
    };

    match store.update(&id, name, email, age) {
        Ok(()) => console.say("Student updated successfully.")?,
        Err(e) => console.say(format!("Failed to update student: {e}"))?,
    }

    Ok(())
}
