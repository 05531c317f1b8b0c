use axum::{extract::State, http::StatusCode, response::Html, Form, Json};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::edit_settings_dto::EditSettingsDto, models::settings_status::SettingsStatus, service,
    views::render_settings_page,
};

pub async fn get_settings_page(State(state): State<AppState>) -> Html<String> {
    let status = service::get_settings_status(&state.key_store).await;

    Html(render_settings_page(&status, None, None))
}

pub async fn save_settings_page(
    State(state): State<AppState>,
    Form(dto): Form<EditSettingsDto>,
) -> (StatusCode, Html<String>) {
    let dto = dto.sanitized();

    if let Err(errors) = dto.validate() {
        let status = service::get_settings_status(&state.key_store).await;
        return (
            StatusCode::BAD_REQUEST,
            Html(render_settings_page(&status, Some(&errors), None)),
        );
    }

    match service::save_settings(&dto, &state.key_store).await {
        Ok(status) => (
            StatusCode::OK,
            Html(render_settings_page(&status, None, Some("Settings saved."))),
        ),
        Err(e) => {
            let status = service::get_settings_status(&state.key_store).await;
            (e.code, Html(render_settings_page(&status, None, Some(&e.message))))
        }
    }
}

pub async fn clear_settings_page(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    match service::clear_settings(&state.key_store).await {
        Ok(status) => (
            StatusCode::OK,
            Html(render_settings_page(&status, None, Some("API keys deleted."))),
        ),
        Err(e) => {
            let status = service::get_settings_status(&state.key_store).await;
            (e.code, Html(render_settings_page(&status, None, Some(&e.message))))
        }
    }
}

pub async fn get_settings(State(state): State<AppState>) -> Json<SettingsStatus> {
    Json(service::get_settings_status(&state.key_store).await)
}

pub async fn edit_settings(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<EditSettingsDto>,
) -> Result<Json<SettingsStatus>, ApiError> {
    let dto = dto.sanitized();

    match dto.validate() {
        Ok(_) => match service::save_settings(&dto, &state.key_store).await {
            Ok(status) => Ok(Json(status)),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

pub async fn delete_settings(
    State(state): State<AppState>,
) -> Result<Json<SettingsStatus>, ApiError> {
    service::clear_settings(&state.key_store).await.map(Json)
}
