use serde::Deserialize;
use validator::Validate;

use crate::settings::dtos::validate_not_blank;

use super::sanitize_prompt;

/// Body of `POST /api/video`. `api` is the caller's Replicate key.
#[derive(Clone, Deserialize, Validate)]
pub struct GenerateVideoDto {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 1000,
        message = "prompt must be between 1 and 1000 characters."
    ))]
    pub prompt: String,
    #[validate(custom(
        function = "validate_not_blank",
        message = "Replicate API key is required."
    ))]
    pub api: Option<String>,
}

impl GenerateVideoDto {
    pub fn sanitized(&self) -> Self {
        return Self {
            prompt: sanitize_prompt(&self.prompt),
            api: self.api.as_ref().map(|api| api.trim().to_string()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_strips_newlines_and_whitespace() {
        let dto = GenerateVideoDto {
            prompt: "  a cat\r\n surfing a wave \n".to_string(),
            api: Some(" r8_key ".to_string()),
        }
        .sanitized();

        assert_eq!(dto.prompt, "a cat surfing a wave");
        assert_eq!(dto.api.as_deref(), Some("r8_key"));
    }

    #[test]
    fn rejects_empty_and_oversized_prompts() {
        let empty = GenerateVideoDto {
            prompt: String::new(),
            api: Some("r8_key".to_string()),
        };
        let oversized = GenerateVideoDto {
            prompt: "a".repeat(1001),
            api: Some("r8_key".to_string()),
        };

        assert!(empty.validate().is_err());
        assert!(oversized.validate().is_err());
    }

    #[test]
    fn rejects_blank_api_key() {
        let dto = GenerateVideoDto {
            prompt: "a dog".to_string(),
            api: Some("  ".to_string()),
        };

        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("api"));
    }

    #[test]
    fn null_api_key_deserializes_as_none() {
        let dto: GenerateVideoDto =
            serde_json::from_str(r#"{ "prompt": "a dog", "api": null }"#).unwrap();

        assert!(dto.api.is_none());
        assert!(dto.validate().is_ok());
    }
}
