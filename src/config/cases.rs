use crate::domain::model::{TestCase, TestCaseFile};
use crate::utils::error::{ReverseError, Result};
use std::path::Path;

/// Loads `{"cases": [{"input": ..., "output": ...}]}`.
pub fn load_test_cases<P: AsRef<Path>>(path: P) -> Result<Vec<TestCase>> {
    let content = std::fs::read_to_string(&path).map_err(ReverseError::IoError)?;
    parse_test_cases(&content)
}

pub fn parse_test_cases(content: &str) -> Result<Vec<TestCase>> {
    let file: TestCaseFile = serde_json::from_str(content)?;
    Ok(file.cases)
}
