//! Runs the reverser against input/expected-output pairs, the way the contest
//! platform grades a submission: outputs are compared after trimming, and a
//! failed run reports its error text as the output.

use crate::core::codec::solve;
use crate::domain::model::{CaseResult, JudgeReport, TestCase};

pub fn evaluate_case(case: &TestCase) -> CaseResult {
    let output = match solve(&case.input) {
        Ok(out) => out.trim().to_string(),
        Err(e) => {
            tracing::debug!("Case failed to run: {}", e);
            e.to_string()
        }
    };
    let expected = case.expected.trim().to_string();
    let passed = output == expected;

    CaseResult {
        input: case.input.clone(),
        output,
        expected,
        passed,
    }
}

pub fn evaluate(cases: &[TestCase]) -> JudgeReport {
    let results: Vec<CaseResult> = cases.iter().map(evaluate_case).collect();
    let report = JudgeReport::from_results(results);
    tracing::info!("{}/{} cases passed", report.passed, report.total);
    report
}

/// Human-readable summary, one line per case.
pub fn render_report(report: &JudgeReport) -> String {
    let mut lines = Vec::with_capacity(report.results.len() + 1);
    for (i, result) in report.results.iter().enumerate() {
        if result.passed {
            lines.push(format!("case {}: passed", i + 1));
        } else {
            lines.push(format!(
                "case {}: FAILED (expected {:?}, got {:?})",
                i + 1,
                result.expected,
                result.output
            ));
        }
    }
    lines.push(format!("{}/{} passed", report.passed, report.total));
    lines.join("\n")
}
