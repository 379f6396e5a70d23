use axum::Json;
use axum::response::IntoResponse;
use tracing::instrument;
use types::AiModel;

/// Static catalog of the models the front end can offer in its dropdown.
#[instrument]
pub async fn list() -> impl IntoResponse {
    Json(catalog())
}

pub(crate) fn catalog() -> Vec<AiModel> {
    vec![
        AiModel {
            id: "videogen-pro".to_string(),
            name: "VideoGen Pro".to_string(),
            description: "High-fidelity generation with cinematic motion"
                .to_string(),
            max_duration: 300,
            is_available: true,
            capabilities: vec![
                "text-to-video".to_string(),
                "1080p".to_string(),
                "4k".to_string(),
            ],
        },
        AiModel {
            id: "videogen-fast".to_string(),
            name: "VideoGen Fast".to_string(),
            description: "Lower latency drafts for quick iteration".to_string(),
            max_duration: 60,
            is_available: true,
            capabilities: vec!["text-to-video".to_string(), "720p".to_string()],
        },
        AiModel {
            id: "videogen-stylized".to_string(),
            name: "VideoGen Stylized".to_string(),
            description: "Experimental stylized and animated output".to_string(),
            max_duration: 120,
            is_available: false,
            capabilities: vec![
                "text-to-video".to_string(),
                "stylized".to_string(),
            ],
        },
    ]
}
