//! Client-side validation of drafts
//!
//! Drafts derive [`validator::Validate`]; this module turns the crate's error
//! report into a [`ValidationError`] with one entry per failing field, sorted by
//! field name so messages are stable.

use crate::core::error::{FieldValidationError, ValidationError};
use validator::{Validate, ValidationErrors};

/// Validate a draft before it is sent to the backend
pub fn validate_draft<D: Validate>(draft: &D) -> Result<(), ValidationError> {
    draft.validate().map_err(into_validation_error)
}

fn into_validation_error(errors: ValidationErrors) -> ValidationError {
    let mut fields: Vec<FieldValidationError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| FieldValidationError {
                field: field.to_string(),
                message: err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| default_message(&err.code)),
            })
        })
        .collect();
    fields.sort_by(|a, b| a.field.cmp(&b.field));
    ValidationError::FieldErrors(fields)
}

fn default_message(code: &str) -> String {
    match code {
        "length" => "is required".to_string(),
        "email" => "must be a valid email address".to_string(),
        "range" => "is out of range".to_string(),
        other => format!("failed '{}' check", other),
    }
}
