//! Drives one generation request against the video generation API while
//! publishing progress snapshots for a front end to render.
//!
//! Cancellation only stops the client from waiting; the in-flight upstream
//! call is not cancelled server-side.

use tokio::sync::{oneshot, watch};
use types::{
    GeneratedVideo, GenerationProgress, GenerationRequest, GenerationResult,
    ProgressStatus, VideoStatus,
};

pub struct VideoGenerationClient {
    http_client: reqwest::Client,
    base_url: String,
}

#[derive(Debug)]
pub enum GenerationError {
    /// The API could not be reached or its response could not be decoded.
    Transport(reqwest::Error),
    /// The API answered with `success=false`.
    Api(String),
    /// The caller stopped waiting.
    Cancelled,
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "transport error: {e}"),
            Self::Api(message) => write!(f, "generation failed: {message}"),
            Self::Cancelled => write!(f, "generation cancelled"),
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(e) => Some(e),
            _ => None,
        }
    }
}

/// Sending half of a cancellation signal. Dropping it keeps waiting.
pub struct CancelHandle(oneshot::Sender<()>);

impl CancelHandle {
    pub fn cancel(self) {
        _ = self.0.send(());
    }
}

#[must_use]
pub fn cancel_channel() -> (CancelHandle, oneshot::Receiver<()>) {
    let (tx, rx) = oneshot::channel();
    (CancelHandle(tx), rx)
}

/// Progress channel primed with the idle snapshot.
#[must_use]
pub fn progress_channel() -> (
    watch::Sender<GenerationProgress>,
    watch::Receiver<GenerationProgress>,
) {
    watch::channel(GenerationProgress::idle())
}

impl VideoGenerationClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            http_client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Submit one generation request and wait for the result, publishing
    /// progress snapshots along the way.
    ///
    /// # Errors
    ///
    /// Returns an error if the API cannot be reached, answers with
    /// `success=false`, or the caller cancels while waiting.
    pub async fn generate(
        &self,
        request: GenerationRequest,
        progress: &watch::Sender<GenerationProgress>,
        mut cancel: oneshot::Receiver<()>,
    ) -> Result<GeneratedVideo, GenerationError> {
        publish(
            progress,
            ProgressStatus::Preparing,
            10,
            "Preparing generation request...",
        );

        let url = format!("{}/generate-video", self.base_url);
        let pending = self.http_client.post(url).json(&request).send();

        publish(
            progress,
            ProgressStatus::Generating,
            30,
            "Generating video with AI model...",
        );

        let response = tokio::select! {
            response = pending => {
                response.map_err(|e| fail(progress, GenerationError::Transport(e)))?
            }
            _ = &mut cancel => {
                publish(progress, ProgressStatus::Failed, 0, "Generation cancelled");
                return Err(GenerationError::Cancelled);
            }
        };

        publish(
            progress,
            ProgressStatus::Processing,
            80,
            "Processing generation result...",
        );

        // Validation and upstream failures come back as a GenerationResult
        // body too, so decode before looking at success.
        let result: GenerationResult = response
            .json()
            .await
            .map_err(|e| fail(progress, GenerationError::Transport(e)))?;

        if !result.success {
            let message = result
                .error
                .unwrap_or_else(|| "video generation failed".to_string());
            return Err(fail(progress, GenerationError::Api(message)));
        }

        let Some(video_url) = result.video_url else {
            return Err(fail(
                progress,
                GenerationError::Api("result is missing a video URL".to_string()),
            ));
        };

        publish(
            progress,
            ProgressStatus::Completed,
            100,
            "Video generated successfully!",
        );

        Ok(GeneratedVideo {
            id: result.video_id,
            video_url,
            thumbnail_url: None,
            created_at: chrono::Utc::now().to_rfc3339(),
            duration: request.settings.as_ref().and_then(|s| s.duration),
            prompt: request.prompt,
            model: request.model,
            status: VideoStatus::Completed,
        })
    }
}

fn fail(
    progress: &watch::Sender<GenerationProgress>,
    error: GenerationError,
) -> GenerationError {
    tracing::error!("{error}");
    publish(progress, ProgressStatus::Failed, 0, &error.to_string());
    error
}

fn publish(
    progress: &watch::Sender<GenerationProgress>,
    status: ProgressStatus,
    percent: u8,
    message: &str,
) {
    // A send only fails when every receiver is gone; progress is advisory.
    _ = progress.send(GenerationProgress {
        status,
        progress: percent,
        message: message.to_string(),
        estimated_time_remaining: None,
    });
}
