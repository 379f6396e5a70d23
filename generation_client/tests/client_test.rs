use std::time::Duration;

use axum::routing::post;
use axum::{Json, Router};
use generation_client::{
    GenerationError, VideoGenerationClient, cancel_channel, progress_channel,
};
use serde_json::{Value, json};
use types::{GenerationRequest, ProgressStatus, VideoStatus};

async fn spawn_api(response: Value, delay: Duration) -> String {
    let app = Router::new().route(
        "/generate-video",
        post(move |Json(_request): Json<Value>| {
            let response = response.clone();
            async move {
                tokio::time::sleep(delay).await;
                Json(response)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind mock API");
    let addr = listener.local_addr().expect("failed to get API addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock API error");
    });

    format!("http://{addr}")
}

fn request() -> GenerationRequest {
    GenerationRequest {
        prompt: "A cat on a roof".to_string(),
        model: "demo-model".to_string(),
        settings: None,
    }
}

#[tokio::test]
async fn successful_generation_completes_with_the_server_result() {
    let base_url = spawn_api(
        json!({
            "success": true,
            "videoId": "video_123_abc",
            "videoUrl": "https://example.com/out.mp4",
            "message": "Video generated successfully",
        }),
        Duration::ZERO,
    )
    .await;

    let client = VideoGenerationClient::new(base_url);
    let (progress_tx, progress_rx) = progress_channel();
    let (_cancel, cancel_rx) = cancel_channel();

    let video = client
        .generate(request(), &progress_tx, cancel_rx)
        .await
        .expect("generation should succeed");

    assert_eq!(video.id, "video_123_abc");
    assert_eq!(video.video_url, "https://example.com/out.mp4");
    assert_eq!(video.prompt, "A cat on a roof");
    assert_eq!(video.model, "demo-model");
    assert_eq!(video.status, VideoStatus::Completed);

    let last = progress_rx.borrow();
    assert_eq!(last.status, ProgressStatus::Completed);
    assert_eq!(last.progress, 100);
}

#[tokio::test]
async fn api_failure_surfaces_the_server_error() {
    let base_url = spawn_api(
        json!({
            "success": false,
            "videoId": "",
            "error": "Missing required fields: prompt and model",
        }),
        Duration::ZERO,
    )
    .await;

    let client = VideoGenerationClient::new(base_url);
    let (progress_tx, progress_rx) = progress_channel();
    let (_cancel, cancel_rx) = cancel_channel();

    let error = client
        .generate(request(), &progress_tx, cancel_rx)
        .await
        .expect_err("generation should fail");

    match error {
        GenerationError::Api(message) => {
            assert!(message.contains("Missing required fields"));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert_eq!(progress_rx.borrow().status, ProgressStatus::Failed);
}

#[tokio::test]
async fn cancellation_stops_waiting_before_the_server_replies() {
    let base_url = spawn_api(
        json!({"success": true, "videoId": "video_slow", "videoUrl": "https://example.com/slow.mp4"}),
        Duration::from_secs(30),
    )
    .await;

    let client = VideoGenerationClient::new(base_url);
    let (progress_tx, progress_rx) = progress_channel();
    let (cancel, cancel_rx) = cancel_channel();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        cancel.cancel();
    });

    let started = std::time::Instant::now();
    let error = client
        .generate(request(), &progress_tx, cancel_rx)
        .await
        .expect_err("generation should be cancelled");

    assert!(matches!(error, GenerationError::Cancelled));
    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(progress_rx.borrow().status, ProgressStatus::Failed);
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let base_url = spawn_api(
        json!({
            "success": true,
            "videoId": "video_456_def",
            "videoUrl": "https://example.com/out.webm",
        }),
        Duration::ZERO,
    )
    .await;

    let client = VideoGenerationClient::new(format!("{base_url}/"));
    let (progress_tx, _progress_rx) = progress_channel();
    let (_cancel, cancel_rx) = cancel_channel();

    let video = client
        .generate(request(), &progress_tx, cancel_rx)
        .await
        .expect("generation should succeed");

    assert_eq!(video.video_url, "https://example.com/out.webm");
}
