//!
//! Serializing the report to CSV.
//!

#[cfg(test)]
mod tests;

use std::fmt::Write;

use crate::model::comparison::Comparison;
use crate::model::report::entry::Entry;
use crate::model::report::Report;

///
/// Serializes the report to CSV in the following format:
/// DEX,PAIR,ACTION,AVERAGE[,"EST. COST"]
///
/// Values are written as is, without quoting.
///
#[derive(Default)]
pub struct Csv {
    /// The CSV string.
    pub content: String,
}

impl Csv {
    /// The header without the cost column.
    pub const HEADER: &'static str = "DEX,PAIR,ACTION,AVERAGE";

    /// The header with the cost column.
    pub const HEADER_WITH_COST: &'static str = r#"DEX,PAIR,ACTION,AVERAGE,"EST. COST""#;

    ///
    /// Estimate the length of a CSV line.
    ///
    fn estimate_csv_line_length() -> usize {
        let identifier_fields = 3;
        let identifier_estimated_max_length = 16;
        let number_fields = 2;
        let number_field_estimated_max_length = 15;
        identifier_fields * identifier_estimated_max_length
            + number_fields * number_field_estimated_max_length
    }

    ///
    /// Estimate the size of the CSV file.
    ///
    fn estimate_csv_size(report: &Report) -> usize {
        (report.len() + 1) * Self::estimate_csv_line_length()
    }
}

impl From<&Report> for Csv {
    fn from(report: &Report) -> Csv {
        let mut content = String::with_capacity(Self::estimate_csv_size(report));
        content.push_str(if report.estimates_cost() {
            Self::HEADER_WITH_COST
        } else {
            Self::HEADER
        });
        content.push('\n');

        for Entry {
            comparison:
                Comparison {
                    dex,
                    pair,
                    action,
                    average_digits,
                    ..
                },
            cost,
        } in report.entries.iter()
        {
            write!(&mut content, "{dex},{pair},{action},{average_digits}").expect("Always valid");
            if let Some(cost) = cost {
                write!(&mut content, ",{cost}").expect("Always valid");
            }
            content.push('\n');
        }

        Self { content }
    }
}
