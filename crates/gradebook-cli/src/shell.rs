//! The interactive menu loop.

use std::io::{BufRead, Write};

use anyhow::Result;

use gradebook_core::store::StudentStore;

use crate::commands;
use crate::prompt::Console;

const BANNER: &str = "\
==============================================
  GRADEBOOK - Student Record Tracker
  Academic performance at a glance
==============================================";

const MENU: &str = "
========== MAIN MENU ==========
1.  Add New Student
2.  View All Students
3.  Search Student
4.  Update Student Information
5.  Delete Student
6.  Add/Update Grade
7.  View Student Transcript
8.  View At-Risk Students
9.  View Class Statistics
10. Export Data
0.  Exit
===============================";

/// Run the menu loop until the user exits or input ends.
pub fn run<R: BufRead, W: Write>(
    store: &mut StudentStore,
    console: &mut Console<R, W>,
) -> Result<()> {
    console.say(BANNER)?;

    loop {
        console.say(MENU)?;
        let Some(choice) = console.try_line("Enter your choice: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => commands::add::execute(store, console)?,
            "2" => commands::list::execute(store, console)?,
            "3" => commands::search::execute(store, console)?,
            "4" => commands::update::execute(store, console)?,
            "5" => commands::delete::execute(store, console)?,
            "6" => commands::grade::execute(store, console)?,
            "7" => commands::transcript::execute(store, console)?,
            "8" => commands::at_risk::execute(store, console)?,
            "9" => commands::stats::execute(store, console)?,
            "10" => commands::export::execute(store, console)?,
            "0" => {
                console.say("\nThank you for using Gradebook!")?;
                break;
            }
            _ => console.say("Invalid choice. Please try again.")?,
        }
    }

    Ok(())
}
