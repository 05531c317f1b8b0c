use validator::ValidationError;

pub mod edit_settings_dto;

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    match value.trim().is_empty() {
        true => Err(ValidationError::new("not_blank")),
        false => Ok(()),
    }
}
