//!
//! The converter configuration.
//!

pub mod fees;


use std::path::Path;
use std::path::PathBuf;

use crate::model::cost::Estimator;
use crate::output::format::Format;

use self::fees::Fees;

///
/// The converter configuration.
///
/// Missing fields in a configuration file take their default values.
///
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The fuzz test log path.
    pub input_path: PathBuf,
    /// The report path.
    pub output_path: PathBuf,
    /// The expected number of fuzz runs per test. `None` accepts any.
    pub runs: Option<u64>,
    /// Whether the report gets an estimated cost column.
    pub estimate_cost: bool,
    /// The report format.
    pub output_format: Format,
    /// Whether malformed lines are skipped instead of aborting the conversion.
    pub skip_malformed: bool,
    /// The fee assumptions for the cost column.
    pub fees: Fees,
}

impl Config {
    ///
    /// Checks the configuration values.
    ///
    pub fn validate(self) -> anyhow::Result<Self> {
        self.fees.validate()?;
        Ok(self)
    }

    ///
    /// Returns the cost estimator, if the cost column is enabled.
    ///
    pub fn estimator(&self) -> Option<Estimator> {
        self.estimate_cost.then(|| Estimator::from(&self.fees))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(crate::DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(crate::DEFAULT_OUTPUT_PATH),
            runs: Some(crate::DEFAULT_RUNS),
            estimate_cost: true,
            output_format: Format::default(),
            skip_malformed: false,
            fees: Fees::default(),
        }
    }
}

impl TryFrom<&Path> for Config {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("Configuration file {path:?} reading: {error}"))?;
        let config: Self = serde_json::from_str(text.as_str())
            .map_err(|error| anyhow::anyhow!("Configuration file {path:?} parsing: {error}"))?;
        config.validate()
    }
}
