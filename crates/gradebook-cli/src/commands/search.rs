//! Search students by name.

use std::io::{BufRead, Write};

use anyhow::Result;

use gradebook_core::store::StudentStore;

use crate::commands::student_table;
use crate::prompt::Console;

pub fn execute<R: BufRead, W: Write>(
    store: &mut StudentStore,
    console: &mut Console<R, W>,
) -> Result<()> {
    console.say("\n--- Search Student ---")?;
    let term = console.line("Enter student name (or part of it): ")?;

    let results = store.search_by_name(&term);
    if results.is_empty() {
        console.say(format!("No students found matching: {term}"))?;
    } else {
        console.say(format!("\nSearch Results ({} found):", results.len()))?;
        writeln!(console.writer(), "{}", student_table(&results))?;
    }

    Ok(())
}
