use crate::utils::error::{ReverseError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(ReverseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ReverseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_optional_path(field_name: &str, path: Option<&str>) -> Result<()> {
    match path {
        Some(path) => validate_path(field_name, path),
        None => Ok(()),
    }
}

/// Rejects an output path that points at the input file, which would be truncated before it is read.
pub fn validate_distinct_paths(input: Option<&str>, output: Option<&str>) -> Result<()> {
    let (Some(input), Some(output)) = (input, output) else {
        return Ok(());
    };

    let same = match (Path::new(input).canonicalize(), Path::new(output).canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => Path::new(input) == Path::new(output),
    };

    if same {
        return Err(ReverseError::InvalidConfigValueError {
            field: "output".to_string(),
            value: output.to_string(),
            reason: "Output path must differ from the input path".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ReverseError::MissingConfigError {
        field: field_name.to_string(),
    })
}
