//! List all students with a sort choice.

use std::io::{BufRead, Write};

use anyhow::Result;

use gradebook_core::store::StudentStore;

use crate::commands::student_table;
use crate::prompt::Console;

pub fn execute<R: BufRead, W: Write>(
    store: &mut StudentStore,
    console: &mut Console<R, W>,
) -> Result<()> {
    console.say("\n--- All Students ---")?;
    console.say("1. Sort by Name")?;
    console.say("2. Sort by GPA")?;
    console.say("3. Default order")?;

    let choice = console.line("Choose sorting option: ")?;
    let students = match choice.as_str() {
        "1" => store.sorted_by_name(),
        "2" => store.sorted_by_gpa(),
        _ => store.all(),
    };

    if students.is_empty() {
        console.say("No students in the system.")?;
    } else {
        console.say(format!("\nTotal Students: {}", students.len()))?;
        writeln!(console.writer(), "{}", student_table(&students))?;
    }

    Ok(())
}
