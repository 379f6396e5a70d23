//! Wire shapes for the upstream chat completions endpoint, and construction
//! of the generation instruction sent to it.

use serde::{Deserialize, Serialize};
use types::GenerationRequest;

pub const DEFAULT_DURATION_SECONDS: u32 = 30;
pub const DEFAULT_RESOLUTION: &str = "1920x1080";
pub const DEFAULT_STYLE: &str = "cinematic";

#[derive(Serialize, Debug)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<CompletionMessage>,
}

#[derive(Serialize, Debug)]
pub struct CompletionMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

#[derive(Deserialize, Debug)]
pub struct CompletionChoice {
    #[serde(default)]
    pub message: Option<CompletionChoiceMessage>,
}

#[derive(Deserialize, Debug)]
pub struct CompletionChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Text of the first choice, if the payload carries one at all.
    #[must_use]
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first()?.message.as_ref()?.content.as_deref()
    }
}

/// Wrap a generation request into the single user message the completion
/// endpoint expects.
#[must_use]
pub fn build_request(request: &GenerationRequest) -> CompletionRequest {
    CompletionRequest {
        model: request.model.clone(),
        messages: vec![CompletionMessage {
            role: "user",
            content: build_instruction(request),
        }],
    }
}

/// Build the natural-language instruction embedding the prompt and the
/// resolved settings, applying defaults for anything the caller omitted.
#[must_use]
pub fn build_instruction(request: &GenerationRequest) -> String {
    let settings = request.settings.clone().unwrap_or_default();
    let duration = settings.duration.unwrap_or(DEFAULT_DURATION_SECONDS);
    let resolution = settings.resolution.as_deref().unwrap_or(DEFAULT_RESOLUTION);
    let style = settings.style.as_deref().unwrap_or(DEFAULT_STYLE);

    format!(
        "Generate a high-quality video based on the following description. \
         Focus on cinematic quality, smooth motion, and visual appeal.\n\n\
         Video Settings:\n\
         - Duration: {duration} seconds\n\
         - Resolution: {resolution}\n\
         - Style: {style}\n\n\
         User Prompt: {prompt}\n\n\
         Generate a professional-quality video that matches this description \
         with smooth motion, appropriate pacing, and high visual fidelity.",
        prompt = request.prompt,
    )
}
