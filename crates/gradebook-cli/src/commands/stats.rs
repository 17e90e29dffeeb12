//! Print the class statistics report.

use std::io::{BufRead, Write};

use anyhow::Result;

use gradebook_core::statistics::ClassStatistics;
use gradebook_core::store::StudentStore;

use crate::prompt::Console;

pub fn execute<R: BufRead, W: Write>(
    store: &mut StudentStore,
    console: &mut Console<R, W>,
) -> Result<()> {
    let stats = ClassStatistics::compute(store);
    write!(console.writer(), "{}", stats.to_text())?;
    Ok(())
}
