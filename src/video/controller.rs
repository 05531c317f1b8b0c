use axum::{extract::State, http::StatusCode, response::Html, Form, Json};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::{generate_video_dto::GenerateVideoDto, video_form_dto::VideoFormDto},
    service,
    views::render_video_page,
};

pub async fn generate_video(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<GenerateVideoDto>,
) -> Result<Json<Vec<String>>, ApiError> {
    let dto = dto.sanitized();

    match dto.validate() {
        Ok(_) => match service::generate_video(&dto, &state.envy).await {
            Ok(urls) => Ok(Json(urls)),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

pub async fn get_video_page() -> Html<String> {
    Html(render_video_page(None))
}

/// Failures fall back to the empty state; the form is reset either way.
pub async fn generate_video_page(
    State(state): State<AppState>,
    Form(form): Form<VideoFormDto>,
) -> Html<String> {
    let video = match service::generate_video_with_stored_key(&form, &state).await {
        Ok(urls) => urls.into_iter().next(),
        Err(e) => {
            tracing::error!("generate_video_page failed: {}", e.message);
            None
        }
    };

    Html(render_video_page(video.as_deref()))
}
