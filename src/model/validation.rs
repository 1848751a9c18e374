//! Field checks shared by the supplier and product payloads.
//!
//! Payloads declare their rules with `#[derive(Validate)]`; this module turns
//! a failed run into the single [`FieldError`] the API reports.

use validator::ValidationErrors;

/// A payload that cannot become a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Missing required fields to save the {entity}: {}", .missing.join(", "))]
    Missing {
        entity: &'static str,
        missing: Vec<&'static str>,
    },
    #[error("The email {0} is not a valid address")]
    InvalidEmail(String),
}

/// Blank text counts as absent. A present value is kept exactly as sent.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Wire names of the fields that failed `required`.
///
/// `fields` pairs each struct field with its wire name, in reporting order.
pub(crate) fn missing_fields(
    fields: &[(&'static str, &'static str)],
    errors: &ValidationErrors,
) -> Vec<&'static str> {
    let by_field = errors.field_errors();
    fields
        .iter()
        .filter(|(field, _)| {
            by_field
                .get(*field)
                .is_some_and(|errs| errs.iter().any(|e| e.code == "required"))
        })
        .map(|(_, wire)| *wire)
        .collect()
}
