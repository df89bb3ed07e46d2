//! Shared validation helpers and the server-side validation policy.
//!
//! Field bounds are declared on the validated structs with `validator`
//! derives; this module covers what the derives cannot express: required
//! field detection across several fields at once, optional minimum lengths
//! that depend on [`ValidationPolicy`], and flattening `ValidationErrors`
//! into a single human-readable message.

use validator::ValidationErrors;

use crate::error::CoreError;

/// Knobs controlling how strictly incoming records are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Enforce the minimum lengths the web client applies before submitting
    /// (title 5, description 20, contributor name 2, content 50).
    pub strict: bool,
    /// Reject strands whose `threadId` does not name an existing thread.
    pub require_existing_thread: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            strict: false,
            require_existing_thread: true,
        }
    }
}

/// Trim an optional text field. Blank values collapse to `None`.
pub fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Build the "x, y and z are required" error for a list of missing fields.
///
/// Returns `Ok(())` when nothing is missing.
pub fn require(missing: &[&str]) -> Result<(), CoreError> {
    match missing {
        [] => Ok(()),
        [one] => Err(CoreError::InvalidArgument(format!("{one} is required"))),
        [init @ .., last] => Err(CoreError::InvalidArgument(format!(
            "{} and {last} are required",
            init.join(", ")
        ))),
    }
}

/// Check a minimum character count (only consulted in strict mode).
pub fn check_min_chars(field: &str, value: &str, min: usize) -> Result<(), CoreError> {
    if value.chars().count() < min {
        return Err(CoreError::InvalidArgument(format!(
            "{field} must be at least {min} characters"
        )));
    }
    Ok(())
}

/// Flatten derive-level errors into one message, fields in name order.
pub fn to_core_error(errors: ValidationErrors) -> CoreError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let message = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid ({})", e.code),
            })
        })
        .collect::<Vec<_>>()
        .join("; ");

    CoreError::InvalidArgument(message)
}
