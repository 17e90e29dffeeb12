//! Print one student's transcript.

use std::io::{BufRead, Write};

use anyhow::Result;

use gradebook_core::store::StudentStore;

use crate::prompt::Console;

pub fn execute<R: BufRead, W: Write>(
    store: &mut StudentStore,
    console: &mut Console<R, W>,
) -> Result<()> {
    console.say("\n--- View Student Transcript ---")?;
    let id = console.line("Enter Student ID: ")?;

    match store.get(&id) {
        Some(student) => write!(console.writer(), "{}", student.transcript())?,
        None => console.say("Student not found!")?,
    }

    Ok(())
}
