use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum SettingsApiError {
    StorageFailed,
}

impl SettingsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::StorageFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to write API keys to local storage.".to_string(),
            },
        }
    }
}
