//! Validation system for configuration values
//!
//! Each config section implements the `ConfigSection` trait which includes validation.

pub use crate::error::ValidationError;
use std::path::Path;

/// Trait for configuration sections that can validate themselves
pub trait ConfigSection: Default {
    /// Validates the configuration section
    ///
    /// Returns a list of validation errors. Empty list means valid.
    fn validate(&self) -> Result<(), Vec<ValidationError>>;
}

/// Common validators for config values
pub struct Validator;

impl Validator {
    /// Validates that a path is not empty
    pub fn not_empty_path(path: &Path, field: &str) -> Result<(), ValidationError> {
        if path.as_os_str().is_empty() {
            Err(ValidationError::new(field, "must not be empty"))
        } else {
            Ok(())
        }
    }

    /// Validates that a path is an existing file
    pub fn is_file(path: &Path, field: &str) -> Result<(), ValidationError> {
        if !path.is_file() {
            Err(ValidationError::with_value(
                field,
                "file does not exist",
                path.display(),
            ))
        } else {
            Ok(())
        }
    }

    /// Validates that a path, if it exists, is a directory
    pub fn directory_or_absent(path: &Path, field: &str) -> Result<(), ValidationError> {
        if path.exists() && !path.is_dir() {
            Err(ValidationError::with_value(
                field,
                "path exists but is not a directory",
                path.display(),
            ))
        } else {
            Ok(())
        }
    }

    /// Collects multiple validation results into a single result
    pub fn collect_errors(
        results: Vec<Result<(), ValidationError>>,
    ) -> Result<(), Vec<ValidationError>> {
        let errors: Vec<ValidationError> = results.into_iter().filter_map(|r| r.err()).collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
