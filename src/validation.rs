//! Field validation ahead of writes.
//!
//! Rules live on the entity models as `#[validate(...)]` attributes. This
//! module runs them and flattens the result into a list of [`Violation`]s so a
//! caller can report every problem with a record at once.

use serde::Serialize;
use std::fmt;
use validator::{Validate, ValidationError};

/// A single failed rule, paired with the field it applies to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Name of the offending field
    pub field: String,
    /// Human-readable reason
    pub message: String,
}

impl Violation {
    /// Builds a violation from a field name and a reason.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The violation reported when a name is already taken.
    #[must_use]
    pub fn name_exists() -> Self {
        Self::new("name", "Name exists")
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.field, self.message)
    }
}

/// Runs every rule declared on `record` and returns all failures, ordered by
/// field name. An empty vector means the record is valid.
#[must_use]
pub fn check<T: Validate>(record: &T) -> Vec<Violation> {
    let Err(errors) = record.validate() else {
        return Vec::new();
    };

    let mut violations: Vec<Violation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                Violation::new(field.to_string(), message)
            })
        })
        .collect();
    violations.sort_by(|a, b| a.field.cmp(&b.field));
    violations
}

/// Rejects empty and whitespace-only text.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some("The field is required".into());
        return Err(error);
    }
    Ok(())
}
