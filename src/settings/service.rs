use secrecy::{ExposeSecret, SecretString};

use crate::app::models::api_error::ApiError;

use super::{
    dtos::edit_settings_dto::EditSettingsDto, enums::api_key_name::ApiKeyName,
    errors::SettingsApiError,
    models::{key_store::KeyStore, settings_status::SettingsStatus},
};

pub async fn get_settings_status(key_store: &KeyStore) -> SettingsStatus {
    SettingsStatus {
        openapi: key_store.contains(ApiKeyName::OPENAI).await,
        replicateapi: key_store.contains(ApiKeyName::REPLICATE).await,
    }
}

/// Stores both keys. Callers validate the dto first.
pub async fn save_settings(
    dto: &EditSettingsDto,
    key_store: &KeyStore,
) -> Result<SettingsStatus, ApiError> {
    let result = key_store
        .set_items(&[
            (ApiKeyName::OPENAI, dto.openapi.as_str()),
            (ApiKeyName::REPLICATE, dto.replicateapi.as_str()),
        ])
        .await;

    match result {
        Ok(_) => {
            tracing::info!("saved api keys to {:?}", key_store.path());
            Ok(get_settings_status(key_store).await)
        }
        Err(e) => {
            tracing::error!("save_settings failed: {}", e);
            Err(SettingsApiError::StorageFailed.value())
        }
    }
}

pub async fn clear_settings(key_store: &KeyStore) -> Result<SettingsStatus, ApiError> {
    match key_store.remove_items(&ApiKeyName::ALL).await {
        Ok(_) => {
            tracing::info!("cleared api keys from {:?}", key_store.path());
            Ok(get_settings_status(key_store).await)
        }
        Err(e) => {
            tracing::error!("clear_settings failed: {}", e);
            Err(SettingsApiError::StorageFailed.value())
        }
    }
}

/// Reads a stored key, treating a blank value as absent.
pub async fn get_api_key(name: &str, key_store: &KeyStore) -> Option<SecretString> {
    let key = key_store.get_item(name).await?;

    match key.expose_secret().trim().is_empty() {
        true => None,
        false => Some(key),
    }
}
