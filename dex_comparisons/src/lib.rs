//!
//! The DEX gas comparisons converter library.
//!

pub mod config;
pub mod converter;
pub mod input;
pub mod model;
pub mod output;

pub use crate::config::fees::Fees as FeesConfig;
pub use crate::config::Config;
pub use crate::converter::summary::Summary as ConversionSummary;
pub use crate::converter::Converter;
pub use crate::input::error::Error as InputError;
pub use crate::input::line::parse as parse_line;
pub use crate::input::line::Error as LineError;
pub use crate::input::Input;
pub use crate::model::comparison::Comparison;
pub use crate::model::cost::Cost;
pub use crate::model::cost::Estimator as CostEstimator;
pub use crate::model::report::Report;
pub use crate::output::csv::Csv as CsvOutput;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::json::Json as JsonOutput;
pub use crate::output::Output;

/// The process exit code on success.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The process exit code on failure.
pub const EXIT_CODE_FAILURE: i32 = 1;

/// The default input log path.
pub const DEFAULT_INPUT_PATH: &str = ".dex-comparisons";

/// The default output report path.
pub const DEFAULT_OUTPUT_PATH: &str = "./.dex-comparisons.csv";

/// The default expected number of fuzz runs per test.
pub const DEFAULT_RUNS: u64 = 5000;
