//!
//! Tests for the DEX gas comparisons converter binary.
//!

#![cfg(test)]

use clap::Parser;

use super::arguments::Arguments;

const LINE: &str = "contract IntegrationTestGasComparisons:testFuzz_uniswap_usdceth_swap(uint256)(runs: 5000, μ: 120000, ~: 119000)\n";

fn arguments(arguments: &[&str]) -> Arguments {
    Arguments::try_parse_from(std::iter::once("dex-comparisons").chain(arguments.iter().copied()))
        .expect("Always valid")
}

#[test]
fn no_arguments_is_default() {
    let config = arguments(&[]).into_config().expect("Always valid");
    assert_eq!(config, dex_comparisons::Config::default());
}

#[test]
fn overrides() {
    let config = arguments(&[
        "--runs",
        "256",
        "--no-cost",
        "--output-format",
        "json",
        "-i",
        "log.txt",
        "--eth-price-usd",
        "2500.5",
        "--skip-malformed",
    ])
    .into_config()
    .expect("Always valid");
    assert_eq!(config.runs, Some(256));
    assert!(!config.estimate_cost);
    assert_eq!(config.output_format, dex_comparisons::OutputFormat::Json);
    assert_eq!(config.input_path, std::path::PathBuf::from("log.txt"));
    assert_eq!(config.fees.eth_price_usd, 2500.5);
    assert!(config.skip_malformed);
}

#[test]
fn any_runs() {
    let config = arguments(&["--any-runs"]).into_config().expect("Always valid");
    assert_eq!(config.runs, None);
}

#[test]
fn error_runs_conflict() {
    let result = Arguments::try_parse_from(["dex-comparisons", "--runs", "256", "--any-runs"]);
    assert!(result.is_err());
}

#[test]
fn error_unknown_format() {
    let result = Arguments::try_parse_from(["dex-comparisons", "--output-format", "xlsx"]);
    assert!(result.is_err());
}

#[test]
fn error_negative_fee() {
    let result = arguments(&["--base-fee-gwei=-1"]).into_config();
    assert!(result.is_err());
}

#[test]
fn exit_code_success() {
    let directory = tempfile::tempdir().expect("Always valid");
    let input_path = directory.path().join(".dex-comparisons");
    let output_path = directory.path().join(".dex-comparisons.csv");
    std::fs::write(input_path.as_path(), LINE).expect("Always valid");

    let arguments = arguments(&[
        "--quiet",
        "-i",
        input_path.to_str().expect("Always valid"),
        "-o",
        output_path.to_str().expect("Always valid"),
    ]);
    let exit_code = super::exit_code(super::main_inner(arguments));
    assert_eq!(exit_code, dex_comparisons::EXIT_CODE_SUCCESS);
    assert_eq!(exit_code, 0);

    let content = std::fs::read_to_string(output_path).expect("Always valid");
    assert_eq!(
        content,
        "DEX,PAIR,ACTION,AVERAGE,\"EST. COST\"\nUNISWAP,USDCETH,SWAP,120000,$5.58\n"
    );
}

#[test]
fn exit_code_failure_malformed() {
    let directory = tempfile::tempdir().expect("Always valid");
    let input_path = directory.path().join(".dex-comparisons");
    let output_path = directory.path().join(".dex-comparisons.csv");
    std::fs::write(
        input_path.as_path(),
        "contract IntegrationTestGasComparisons:uniswap_usdceth_swap(uint256)(runs: 5000, μ: 1, ~: 1)\n",
    )
    .expect("Always valid");

    let arguments = arguments(&[
        "--quiet",
        "-i",
        input_path.to_str().expect("Always valid"),
        "-o",
        output_path.to_str().expect("Always valid"),
    ]);
    let exit_code = super::exit_code(super::main_inner(arguments));
    assert_eq!(exit_code, dex_comparisons::EXIT_CODE_FAILURE);
    assert_eq!(exit_code, 1);
    assert!(!output_path.exists());
}

#[test]
fn exit_code_failure_write() {
    let directory = tempfile::tempdir().expect("Always valid");
    let input_path = directory.path().join(".dex-comparisons");
    let output_path = directory.path().join("missing").join("report.csv");
    std::fs::write(input_path.as_path(), LINE).expect("Always valid");

    let arguments = arguments(&[
        "--quiet",
        "-i",
        input_path.to_str().expect("Always valid"),
        "-o",
        output_path.to_str().expect("Always valid"),
    ]);
    let exit_code = super::exit_code(super::main_inner(arguments));
    assert_eq!(exit_code, 1);
}
