//!
//! The DEX gas comparisons converter arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The DEX gas comparisons converter arguments.
///
/// Every option is optional: without arguments, `.dex-comparisons` is converted
/// into `./.dex-comparisons.csv` with the cost column.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// JSON configuration file. Command line options take precedence over it.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Fuzz test log file.
    #[arg(short, long)]
    pub input_path: Option<PathBuf>,

    /// Report file.
    #[arg(short, long)]
    pub output_path: Option<PathBuf>,

    /// Report format: `csv` or `json`.
    #[arg(long)]
    pub output_format: Option<dex_comparisons::OutputFormat>,

    /// Expected number of fuzz runs per test.
    #[arg(long, conflicts_with = "any_runs")]
    pub runs: Option<u64>,

    /// Accepts any number of fuzz runs per test.
    #[arg(long)]
    pub any_runs: bool,

    /// Omits the estimated cost column.
    #[arg(long)]
    pub no_cost: bool,

    /// Base fee per gas unit in gwei.
    #[arg(long)]
    pub base_fee_gwei: Option<f64>,

    /// Priority fee per gas unit in gwei.
    #[arg(long)]
    pub priority_fee_gwei: Option<f64>,

    /// Price of one ether in USD.
    #[arg(long)]
    pub eth_price_usd: Option<f64>,

    /// Skips malformed lines with a warning instead of aborting.
    #[arg(long)]
    pub skip_malformed: bool,
}

impl Arguments {
    ///
    /// Builds the configuration: defaults, then the configuration file, then the command line.
    ///
    pub fn into_config(self) -> anyhow::Result<dex_comparisons::Config> {
        let mut config = match self.config {
            Some(path) => dex_comparisons::Config::try_from(path.as_path())?,
            None => dex_comparisons::Config::default(),
        };

        if let Some(input_path) = self.input_path {
            config.input_path = input_path;
        }
        if let Some(output_path) = self.output_path {
            config.output_path = output_path;
        }
        if let Some(output_format) = self.output_format {
            config.output_format = output_format;
        }
        if self.any_runs {
            config.runs = None;
        } else if let Some(runs) = self.runs {
            config.runs = Some(runs);
        }
        if self.no_cost {
            config.estimate_cost = false;
        }
        if let Some(base_fee_gwei) = self.base_fee_gwei {
            config.fees.base_fee_gwei = base_fee_gwei;
        }
        if let Some(priority_fee_gwei) = self.priority_fee_gwei {
            config.fees.priority_fee_gwei = priority_fee_gwei;
        }
        if let Some(eth_price_usd) = self.eth_price_usd {
            config.fees.eth_price_usd = eth_price_usd;
        }
        if self.skip_malformed {
            config.skip_malformed = true;
        }

        config.validate()
    }
}
