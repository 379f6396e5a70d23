use video_generation_api::{AppState, Config};

#[tokio::main]
async fn main() -> Result<(), axum::BoxError> {
    // Initialize the application context (which also initializes tracing)
    let state = vg_app::create_app_context::<AppState, Config>()
        .await
        .expect("failed to load config");

    video_generation_api::run(state).await
}
