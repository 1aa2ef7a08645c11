//!
//! The conversion summary.
//!

use std::path::Path;

use colored::Colorize;

///
/// The conversion summary.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    /// The number of comparisons written to the report.
    pub converted: usize,
    /// The number of malformed lines skipped.
    pub skipped: usize,
}

impl Summary {
    ///
    /// Prints the summary to the terminal.
    ///
    pub fn print(&self, output_path: &Path) {
        println!(
            "    {} {} comparisons written to {output_path:?}",
            "Finished".bright_green().bold(),
            self.converted,
        );
        if self.skipped > 0 {
            println!(
                "     {} {} malformed lines",
                "Skipped".bright_yellow().bold(),
                self.skipped,
            );
        }
    }
}
