//!
//! The CSV report tests.
//!

use super::Csv;
use crate::input::line::parse;
use crate::model::comparison::Comparison;
use crate::model::cost::Estimator;
use crate::model::report::Report;

fn swap() -> Comparison {
    Comparison::new("uniswap", "usdceth", "swap", 5000, 120000, Some(119000))
}

#[test]
fn without_cost() {
    let mut report = Report::new(None);
    report.push(swap());
    let csv = Csv::from(&report);
    assert_eq!(
        csv.content,
        "DEX,PAIR,ACTION,AVERAGE\nUNISWAP,USDCETH,SWAP,120000\n"
    );
}

#[test]
fn with_cost() {
    let mut report = Report::new(Some(Estimator::default()));
    report.push(swap());
    report.push(Comparison::new("wells", "beanweth", "shift", 5000, 1_000_000, Some(1)));
    report.push(Comparison::new("wells", "beanweth", "sync", 5000, 0, None));
    let csv = Csv::from(&report);
    assert_eq!(
        csv.content,
        "DEX,PAIR,ACTION,AVERAGE,\"EST. COST\"\n\
         UNISWAP,USDCETH,SWAP,120000,$5.58\n\
         WELLS,BEANWETH,SHIFT,1000000,$46.50\n\
         WELLS,BEANWETH,SYNC,0,$0.00\n"
    );
}

#[test]
fn empty_report_has_header() {
    let csv = Csv::from(&Report::new(Some(Estimator::default())));
    assert_eq!(csv.content, "DEX,PAIR,ACTION,AVERAGE,\"EST. COST\"\n");
}

#[test]
fn average_written_as_logged() {
    let line = "IntegrationTestGasComparisons:testFuzz_uniswap_usdceth_swap(uint256)(runs: 5000, μ: 0120000, ~: 1)";
    let mut report = Report::new(Some(Estimator::default()));
    report.push(parse(line, Some(5000)).expect("Always valid"));
    let csv = Csv::from(&report);
    assert_eq!(
        csv.content,
        "DEX,PAIR,ACTION,AVERAGE,\"EST. COST\"\nUNISWAP,USDCETH,SWAP,0120000,$5.58\n"
    );
}
