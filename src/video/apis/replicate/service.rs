use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use tokio::time::sleep;
use tokio_retry::{strategy::FixedInterval, RetryIf};

use crate::{
    app::{env::Envy, errors::DefaultApiError, models::api_error::ApiError},
    video::errors::VideoApiError,
};

use super::{
    enums::{
        replicate_model_version::ReplicateModelVersion,
        replicate_prediction_status::ReplicatePredictionStatus,
    },
    models::{input_spec::InputSpec, input_spec_zeroscope::InputSpecZeroscope},
    structs::replicate_predictions_response::ReplicatePredictionsResponse,
};

/// Runs one text-to-video prediction and returns its output urls.
///
/// The whole create and poll sequence, including requests that never get an
/// answer, is bounded by `replicate_timeout_secs`.
pub async fn generate_video(
    prompt: &str,
    replicate_api_key: &SecretString,
    envy: &Envy,
) -> Result<Vec<String>, ApiError> {
    let headers = provide_headers(replicate_api_key)?;
    let timeout = Duration::from_secs(envy.replicate_timeout_secs());

    let client = match reqwest::Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("generate_video failed to build client: {}", e);
            return Err(DefaultApiError::InternalServerError.value());
        }
    };

    let completion = await_prediction_completion(prompt, &headers, &client, envy);
    let prediction = match tokio::time::timeout(timeout, completion).await {
        Ok(result) => result?,
        Err(_) => {
            tracing::error!(
                "generate_video failed (ran out of time after {}s)",
                timeout.as_secs()
            );
            return Err(VideoApiError::GenerationTimedOut.value());
        }
    };

    match prediction.output {
        Some(urls) if !urls.is_empty() => Ok(urls),
        _ => {
            tracing::error!("generate_video failed (no output): {}", prediction.id);
            Err(VideoApiError::NoOutput.value())
        }
    }
}

fn provide_headers(replicate_api_key: &SecretString) -> Result<HeaderMap, ApiError> {
    let Ok(mut authorization) =
        HeaderValue::from_str(&format!("Token {}", replicate_api_key.expose_secret()))
    else {
        return Err(VideoApiError::InvalidApiKey.value());
    };
    authorization.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(header::AUTHORIZATION, authorization);

    Ok(headers)
}

async fn await_prediction_completion(
    prompt: &str,
    headers: &HeaderMap,
    client: &reqwest::Client,
    envy: &Envy,
) -> Result<ReplicatePredictionsResponse, ApiError> {
    let api_url = envy.replicate_api_url();
    let poll_interval = Duration::from_secs(envy.replicate_poll_interval_secs());

    let mut prediction = create_prediction(prompt, headers, client, api_url).await?;

    // unknown statuses keep polling until the timeout
    while !ReplicatePredictionStatus::from_value(&prediction.status)
        .map(|status| status.is_terminal())
        .unwrap_or(false)
    {
        tracing::debug!(
            "waiting for prediction {}, status: {}, get: {:?}",
            prediction.id,
            prediction.status,
            prediction.urls.as_ref().map(|urls| &urls.get)
        );
        sleep(poll_interval).await;

        prediction =
            get_prediction_by_id_with_retry(&prediction.id, headers, client, api_url, poll_interval)
                .await
                .map_err(|e| e.value())?;
    }

    if prediction.status != ReplicatePredictionStatus::Succeeded.value() {
        tracing::error!(
            "await_prediction_completion failed ({}): {} {:?} {:?}",
            prediction.status,
            prediction.id,
            prediction.error,
            prediction.logs
        );
        return Err(VideoApiError::GenerationFailed.value());
    }

    Ok(prediction)
}

/// Creates the prediction. Never retried: every accepted request is billed.
async fn create_prediction(
    prompt: &str,
    headers: &HeaderMap,
    client: &reqwest::Client,
    api_url: &str,
) -> Result<ReplicatePredictionsResponse, ApiError> {
    let input_spec = match provide_input_spec(prompt) {
        Ok(input_spec) => input_spec,
        Err(e) => {
            tracing::error!("create_prediction failed (1): {:?}", e);
            return Err(DefaultApiError::InternalServerError.value());
        }
    };

    let url = format!("{}/predictions", api_url);
    let result = client
        .post(url)
        .headers(headers.clone())
        .json(&input_spec)
        .send()
        .await;

    read_prediction_response("create_prediction", result)
        .await
        .map_err(|e| e.value())
}

/// Polls are retried only when Replicate could not be reached or answered
/// with a server error.
async fn get_prediction_by_id_with_retry(
    id: &str,
    headers: &HeaderMap,
    client: &reqwest::Client,
    api_url: &str,
    interval: Duration,
) -> Result<ReplicatePredictionsResponse, VideoApiError> {
    let retry_strategy = FixedInterval::new(interval).take(3);

    RetryIf::spawn(
        retry_strategy,
        move || async move { get_prediction_by_id(id, headers, client, api_url).await },
        |e: &VideoApiError| e.is_transient(),
    )
    .await
}

async fn get_prediction_by_id(
    id: &str,
    headers: &HeaderMap,
    client: &reqwest::Client,
    api_url: &str,
) -> Result<ReplicatePredictionsResponse, VideoApiError> {
    let url = format!("{}/predictions/{}", api_url, id);
    let result = client.get(url).headers(headers.clone()).send().await;

    read_prediction_response("get_prediction_by_id", result).await
}

async fn read_prediction_response(
    context: &str,
    result: Result<reqwest::Response, reqwest::Error>,
) -> Result<ReplicatePredictionsResponse, VideoApiError> {
    let res = match result {
        Ok(res) => res,
        Err(e) if e.is_timeout() => {
            tracing::warn!("{} (1): {:?}", context, e);
            return Err(VideoApiError::GenerationTimedOut);
        }
        Err(e) => {
            tracing::warn!("{} (1): {:?}", context, e);
            return Err(VideoApiError::ReplicateUnreachable);
        }
    };

    let status = res.status();

    match res.text().await {
        Ok(text) if status.is_server_error() => {
            tracing::warn!("{} (2): {} {:?}", context, status, text);
            Err(VideoApiError::ReplicateUnavailable)
        }
        Ok(text) if !status.is_success() => {
            tracing::warn!("{} (3): {} {:?}", context, status, text);
            Err(VideoApiError::ReplicateRejected)
        }
        Ok(text) => match serde_json::from_str(&text) {
            Ok(replicate_predictions_response) => Ok(replicate_predictions_response),
            Err(_) => {
                tracing::warn!("{} (4): {:?}", context, text);
                Err(VideoApiError::MalformedResponse)
            }
        },
        Err(e) => {
            tracing::warn!("{} (5): {:?}", context, e);
            Err(VideoApiError::ReplicateUnreachable)
        }
    }
}

fn provide_input_spec(prompt: &str) -> Result<InputSpec, serde_json::Error> {
    let input = serde_json::to_value(InputSpecZeroscope {
        prompt: prompt.to_string(),
    })?;

    Ok(InputSpec {
        version: ReplicateModelVersion::ZEROSCOPE_V2_XL.to_string(),
        input,
    })
}
