use validator::{ValidateEmail, ValidationError};

/// Names end up in `|`-separated row files and single-line headers.
pub fn plain_text(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    if value.contains(['|', '\n', '\r']) {
        return Err(ValidationError::new("forbidden_character")
            .with_message("must not contain '|' or line breaks".into()));
    }
    Ok(())
}

/// An empty address is accepted; it clears the stored one.
pub fn email_or_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || value.validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new("email"))
    }
}

pub fn check_interval(start: u32, end: u32) -> Result<(), ValidationError> {
    if end <= start {
        return Err(ValidationError::new("interval")
            .with_message("end must be after start".into()));
    }
    Ok(())
}
