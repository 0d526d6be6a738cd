use crate::domain::errors::ValidationError;

/// Rejects required text fields that are present but blank
///
/// # Example
/// ```
/// use starwars_api::domain::validation::require_text;
///
/// assert!(require_text("name", "Luke Skywalker").is_ok());
/// assert!(require_text("name", "   ").is_err());
/// ```
pub fn require_text(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// Same as [`require_text`] for fields of a partial update
pub fn require_text_if_present(field: &str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(value) => require_text(field, value),
        None => Ok(()),
    }
}
