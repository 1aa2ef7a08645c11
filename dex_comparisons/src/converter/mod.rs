//!
//! The gas comparisons converter.
//!

pub mod summary;


use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;

use colored::Colorize;

use crate::config::Config;
use crate::input::error::Error as InputError;
use crate::input::Input;
use crate::model::report::Report;
use crate::output::Output;

use self::summary::Summary;

///
/// The gas comparisons converter.
///
/// Reads the fuzz test log, builds the report, and writes it in one pass.
///
#[derive(Debug)]
pub struct Converter {
    /// The configuration.
    config: Config,
    /// Whether the terminal output is suppressed.
    quiet: bool,
}

impl Converter {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(config: Config, quiet: bool) -> Self {
        Self { config, quiet }
    }

    ///
    /// Runs the conversion from the configured input path to the configured output path.
    ///
    /// Nothing is written if the input cannot be read completely.
    ///
    pub fn run(&self) -> anyhow::Result<Summary> {
        let input = Input::<BufReader<File>>::try_from(self.config.input_path.as_path())?;
        if !self.quiet {
            println!(
                "  {} {:?} into {:?}",
                "Converting".bright_green().bold(),
                self.config.input_path,
                self.config.output_path,
            );
        }

        let (report, summary) = self.read(input)?;
        let output = self.render(&report);
        if let Err(error) = output.write_to_file(self.config.output_path.as_path()) {
            if !self.quiet {
                eprintln!("       {} to write the report", "Failed".bright_red().bold());
            }
            return Err(error);
        }

        if !self.quiet {
            summary.print(self.config.output_path.as_path());
        }
        Ok(summary)
    }

    ///
    /// Reads the input into a report.
    ///
    /// Malformed lines abort the reading, unless skipping is enabled.
    ///
    pub fn read<R>(&self, input: Input<R>) -> Result<(Report, Summary), InputError>
    where
        R: BufRead,
    {
        let mut report = Report::new(self.config.estimator());
        let mut summary = Summary::default();

        for result in input.comparisons(self.config.runs) {
            match result {
                Ok(comparison) => report.push(comparison),
                Err(error) if error.is_line() && self.config.skip_malformed => {
                    if !self.quiet {
                        eprintln!("     {} {error}", "Warning".bright_yellow().bold());
                    }
                    summary.skipped += 1;
                }
                Err(error) => return Err(error),
            }
        }

        summary.converted = report.len();
        Ok((report, summary))
    }

    ///
    /// Renders the report in the configured format.
    ///
    pub fn render(&self, report: &Report) -> Output {
        Output::from((report, self.config.output_format))
    }
}
