use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// Fixed-length sequence of arbitrary-precision integers, owned by one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    pub elements: Vec<BigInt>,
}

impl Sequence {
    pub fn new(elements: Vec<BigInt>) -> Self {
        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn as_slice(&self) -> &[BigInt] {
        &self.elements
    }

    pub fn as_mut_slice(&mut self) -> &mut [BigInt] {
        &mut self.elements
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestCase {
    pub input: String,
    // 題目檔用 `output`，評測請求用 `expected`
    #[serde(alias = "output")]
    pub expected: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestCaseFile {
    #[serde(default)]
    pub cases: Vec<TestCase>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaseResult {
    pub input: String,
    pub output: String,
    pub expected: String,
    pub passed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JudgeReport {
    pub results: Vec<CaseResult>,
    pub passed: usize,
    pub total: usize,
    pub all_passed: bool,
}

impl JudgeReport {
    pub fn from_results(results: Vec<CaseResult>) -> Self {
        let passed = results.iter().filter(|r| r.passed).count();
        let total = results.len();
        Self {
            results,
            passed,
            total,
            all_passed: passed == total,
        }
    }
}
