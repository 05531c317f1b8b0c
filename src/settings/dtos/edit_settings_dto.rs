use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validate_not_blank;

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct EditSettingsDto {
    #[serde(default)]
    #[validate(custom(
        function = "validate_not_blank",
        message = "OpenAI API key is required."
    ))]
    pub openapi: String,
    #[serde(default)]
    #[validate(custom(
        function = "validate_not_blank",
        message = "Replicate API key is required."
    ))]
    pub replicateapi: String,
}

impl EditSettingsDto {
    pub fn sanitized(&self) -> Self {
        return Self {
            openapi: self.openapi.trim().to_string(),
            replicateapi: self.replicateapi.trim().to_string(),
        };
    }
}
