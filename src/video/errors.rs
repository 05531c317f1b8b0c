use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum VideoApiError {
    MissingApiKey,
    InvalidApiKey,
    ReplicateUnreachable,
    ReplicateUnavailable,
    ReplicateRejected,
    MalformedResponse,
    GenerationFailed,
    GenerationTimedOut,
    NoOutput,
}

impl VideoApiError {
    /// Whether asking Replicate again may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::ReplicateUnreachable | Self::ReplicateUnavailable)
    }

    pub fn value(&self) -> ApiError {
        match *self {
            Self::MissingApiKey => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Replicate API key is required.".to_string(),
            },
            Self::InvalidApiKey => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Replicate API key contains invalid characters.".to_string(),
            },
            Self::ReplicateUnreachable => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to reach Replicate.".to_string(),
            },
            Self::ReplicateUnavailable => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Replicate is unavailable.".to_string(),
            },
            Self::ReplicateRejected => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Replicate rejected the request.".to_string(),
            },
            Self::MalformedResponse => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Replicate returned an unexpected response.".to_string(),
            },
            Self::GenerationFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Video generation failed.".to_string(),
            },
            Self::GenerationTimedOut => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Video generation timed out.".to_string(),
            },
            Self::NoOutput => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Replicate generated no video.".to_string(),
            },
        }
    }
}
