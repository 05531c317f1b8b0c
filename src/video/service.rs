use secrecy::SecretString;
use validator::Validate;

use crate::{
    app::{env::Envy, models::api_error::ApiError},
    settings::{self, enums::api_key_name::ApiKeyName},
    AppState,
};

use super::{
    apis::replicate,
    dtos::{generate_video_dto::GenerateVideoDto, video_form_dto::VideoFormDto},
    errors::VideoApiError,
};

/// Generates with the key supplied in the request. Callers validate the dto.
pub async fn generate_video(dto: &GenerateVideoDto, envy: &Envy) -> Result<Vec<String>, ApiError> {
    let Some(api) = &dto.api else {
        return Err(VideoApiError::MissingApiKey.value());
    };

    let replicate_api_key = SecretString::from(api.to_string());

    replicate::service::generate_video(&dto.prompt, &replicate_api_key, envy).await
}

/// Generates with the Replicate key from local storage.
pub async fn generate_video_with_stored_key(
    form: &VideoFormDto,
    state: &AppState,
) -> Result<Vec<String>, ApiError> {
    let form = form.sanitized();
    form.validate()?;

    let Some(replicate_api_key) =
        settings::service::get_api_key(ApiKeyName::REPLICATE, &state.key_store).await
    else {
        return Err(VideoApiError::MissingApiKey.value());
    };

    replicate::service::generate_video(&form.prompt, &replicate_api_key, &state.envy).await
}
