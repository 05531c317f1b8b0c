use serde::Deserialize;
use validator::Validate;

use super::sanitize_prompt;

/// Body of the video page form; the key comes from local storage.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct VideoFormDto {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 1000,
        message = "prompt must be between 1 and 1000 characters."
    ))]
    pub prompt: String,
}

impl VideoFormDto {
    pub fn sanitized(&self) -> Self {
        return Self {
            prompt: sanitize_prompt(&self.prompt),
        };
    }
}
