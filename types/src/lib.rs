use serde::{Deserialize, Serialize};

/// Body of `POST /generate-video`.
///
/// `prompt` and `model` default to empty strings when absent so that
/// validation can report missing fields with a 400 instead of a
/// deserialization rejection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub prompt: String,

    #[serde(default)]
    pub model: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<GenerationSettings>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GenerationSettings {
    /// Requested clip length in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

/// Response body of `POST /generate-video`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub success: bool,

    pub video_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Client-side record of one generation. Not persisted server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedVideo {
    pub id: String,

    pub prompt: String,

    pub model: String,

    pub video_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    pub created_at: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,

    pub status: VideoStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoStatus {
    Generating,

    Completed,

    Failed,
}

/// Progress snapshot published by the client lifecycle driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationProgress {
    pub status: ProgressStatus,

    /// Percent complete, 0-100.
    pub progress: u8,

    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time_remaining: Option<f64>,
}

impl GenerationProgress {
    #[must_use]
    pub fn idle() -> Self {
        Self {
            status: ProgressStatus::Idle,
            progress: 0,
            message: String::new(),
            estimated_time_remaining: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    Idle,

    Preparing,

    Generating,

    Processing,

    Completed,

    Failed,
}

/// Metadata for one entry in the model catalog (`GET /models`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiModel {
    pub id: String,

    pub name: String,

    pub description: String,

    /// Longest clip the model will accept, in seconds.
    pub max_duration: u32,

    pub is_available: bool,

    pub capabilities: Vec<String>,
}
