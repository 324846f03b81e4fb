//! Input validation utilities

use validator::ValidationError;

/// Reject empty or whitespace-only strings
///
/// Used for natural keys, which must identify a record.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}
