use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub http_client: reqwest::Client,
}

impl vg_app::ContextProvider<Config> for AppState {
    async fn new(config: Config) -> Self {
        let mut authorization = HeaderValue::from_str(&format!(
            "Bearer {}",
            config.completion_api_key.expose_secret()
        ))
        .expect("completion api key is not a valid header value");
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static("customerid"),
            HeaderValue::from_str(&config.completion_customer_id)
                .expect("customer id is not a valid header value"),
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.completion_timeout_seconds))
            .build()
            .expect("failed to build upstream HTTP client");

        Self {
            config,
            http_client,
        }
    }
}
