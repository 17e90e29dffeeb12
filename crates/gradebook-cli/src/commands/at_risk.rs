//! List students below the at-risk GPA threshold.

use std::io::{BufRead, Write};

use anyhow::Result;

use gradebook_core::store::StudentStore;

use crate::commands::student_table;
use crate::prompt::Console;

pub fn execute<R: BufRead, W: Write>(
    store: &mut StudentStore,
    console: &mut Console<R, W>,
) -> Result<()> {
    console.say("\n--- At-Risk Students (GPA < 2.0) ---")?;

    let at_risk = store.at_risk();
    if at_risk.is_empty() {
        console.say("No at-risk students found. All students are in good standing!")?;
    } else {
        console.say(format!("Found {} at-risk student(s):", at_risk.len()))?;
        writeln!(console.writer(), "{}", student_table(&at_risk))?;
        console.say("These students may need academic support or counseling.")?;
    }

    Ok(())
}
