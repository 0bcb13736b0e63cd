//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod list;
mod output;

pub use check::CheckReport;
pub use generate::GenerateReport;
pub use list::{ListReport, RecordSummary};
pub use output::{Report, TerminalOutput};

/// "1 record", "2 records"
pub(crate) fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
