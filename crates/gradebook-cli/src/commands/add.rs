//! Add a new student record.

use std::io::{BufRead, Write};

use anyhow::Result;

use gradebook_core::model::Student;
use gradebook_core::store::StudentStore;

use crate::prompt::Console;

pub fn execute<R: BufRead, W: Write>(
    store: &mut StudentStore,
    console: &mut Console<R, W>,
) -> Result<()> {
    console.say("\n--- Add New Student ---")?;

    let id = console.line("Enter Student ID: ")?;
    if store.get(&id).is_some() {
        console.say("Error: student ID already exists!")?;
        return Ok(());
    }

    let name = console.line("Enter Name: ")?;
    let email = console.line("Enter Email: ")?;
    let age = console.read_u32("Enter Age: ")?;

    match store.add(Student::new(id, name, email, age)) {
        Ok(()) => console.say("Student added successfully.")?,
        Err(e) => console.say(format!("Failed to add student: {e}"))?,
    }

    Ok(())
}
