use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::{
        header::{HOST, ORIGIN},
        HeaderMap, Method, Request,
    },
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    BoxError, Router,
};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::trace::TraceLayer;

use crate::{settings, video, AppState};

use super::{controller, errors::DefaultApiError, models::api_error::ApiError};

const BODY_LIMIT_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // app
        .route("/", get(controller::get_root))
        // settings
        .route(
            "/settings",
            get(settings::controller::get_settings_page)
                .post(settings::controller::save_settings_page),
        )
        .route(
            "/settings/delete",
            post(settings::controller::clear_settings_page),
        )
        .route(
            "/api/settings",
            get(settings::controller::get_settings)
                .put(settings::controller::edit_settings)
                .delete(settings::controller::delete_settings),
        )
        // video
        .route(
            "/video",
            get(video::controller::get_video_page).post(video::controller::generate_video_page),
        )
        .route("/api/video", post(video::controller::generate_video))
        // layers
        .layer(middleware::from_fn(reject_cross_origin))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_layer_error))
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(5, Duration::from_secs(1))),
        )
        .with_state(state)
}

async fn handle_layer_error(e: BoxError) -> ApiError {
    tracing::error!("layer error: {}", e);
    DefaultApiError::TooManyRequests.value()
}

/// Requests that change stored keys or spend credits must come from this
/// service's own pages. Requests without an `Origin` (curl, scripts) pass.
async fn reject_cross_origin<B>(request: Request<B>, next: Next<B>) -> Result<Response, ApiError> {
    let safe = matches!(
        *request.method(),
        Method::GET | Method::HEAD | Method::OPTIONS
    );

    if !safe && is_cross_origin(request.headers()) {
        tracing::warn!(
            "rejected cross-origin {} {} from {:?}",
            request.method(),
            request.uri(),
            request.headers().get(ORIGIN)
        );
        return Err(DefaultApiError::CrossOriginForbidden.value());
    }

    Ok(next.run(request).await)
}

fn is_cross_origin(headers: &HeaderMap) -> bool {
    let fetch_site = headers
        .get("sec-fetch-site")
        .and_then(|value| value.to_str().ok());
    if fetch_site == Some("cross-site") {
        return true;
    }

    let Some(origin) = headers.get(ORIGIN) else {
        return false;
    };

    // "null" and non-http origins never match
    let origin = origin.to_str().ok().and_then(|origin| {
        origin
            .strip_prefix("http://")
            .or_else(|| origin.strip_prefix("https://"))
    });
    let host = headers.get(HOST).and_then(|value| value.to_str().ok());

    match (origin, host) {
        (Some(origin), Some(host)) => !origin.eq_ignore_ascii_case(host),
        _ => true,
    }
}
