// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text report of a finished search.

use std::io::{self, Write};

use crate::search::SearchOutcome;

/// Write the number of curves found, then one Gauss code per line.
///
/// ```text
/// 2 exceptional curves (plain, length 6)
/// [1] [2] [3] [1] [2] [3]
/// ...
/// ```
pub fn write_report<W: Write>(writer: &mut W, outcome: &SearchOutcome) -> io::Result<()> {
    writeln!(
        writer,
        "{} exceptional curves ({}, length {})",
        outcome.curves.len(),
        outcome.config.criterion,
        outcome.config.arc_length
    )?;
    for code in &outcome.curves {
        writeln!(writer, "{}", code)?;
    }
    Ok(())
}
