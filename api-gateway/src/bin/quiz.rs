//! Quiz Lambda - scenario generation and personality analysis.
//!
//! Endpoints:
//! - GET /healthcheck - Static liveness probe
//! - POST /generate - Generate a scenario with two actions from a theme
//! - POST /analyze - Summarize the user's personality from their choices

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde_json::json;
use shared::http::{error_response, json_response};
use shared::models::{AnalyzeRequest, GenerateRequest};
use shared::{parse_body, prompt, scenario, theme, Config, GeminiClient};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Application state
struct AppState {
    gemini: GeminiClient,
}

impl AppState {
    async fn new() -> Result<Self, Error> {
        let config = Config::from_env()?;

        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let secrets_client = aws_sdk_secretsmanager::Client::new(&aws_config);
        let api_key = shared::get_secret(&secrets_client, &config.gemini_secret_arn).await?;

        Ok(Self {
            gemini: GeminiClient::new(reqwest::Client::new(), api_key, config.gemini_model),
        })
    }
}

async fn handler(state: Arc<AppState>, event: Request) -> Result<Response<Body>, Error> {
    let method = event.method().as_str();
    let path = event.uri().path();

    info!("Quiz request: {} {}", method, path);

    match (method, path) {
        ("GET", "/healthcheck") => json_response(200, &json!({ "status": "ok" })),

        ("POST", "/generate") => {
            let request: GenerateRequest = parse_body!(event.body());

            if !theme::is_valid(&request.themes) {
                return error_response(400, theme::INVALID_THEME_MESSAGE);
            }

            let completion = match state
                .gemini
                .complete(&prompt::scenario(&request.themes))
                .await
            {
                Ok(text) => text,
                Err(e) => {
                    error!("Scenario completion failed: {}", e);
                    return error_response(e.status_code(), e.to_string());
                }
            };

            match scenario::parse(&completion) {
                Ok(parsed) => json_response(200, &parsed),
                // Parse failure is a soft condition: the model answered, just
                // not in the expected shape. Report it in the payload so the
                // frontend can distinguish it from a failed model call.
                Err(e) => json_response(200, &json!({ "error": e.to_string() })),
            }
        }

        ("POST", "/analyze") => {
            let request: AnalyzeRequest = parse_body!(event.body());

            if !theme::is_valid(&request.themes) {
                return error_response(400, theme::INVALID_THEME_MESSAGE);
            }

            let prompt_text =
                prompt::analysis(request.personality_mode, &request.choices, &request.avoided);
            match state.gemini.complete(&prompt_text).await {
                Ok(analysis) => json_response(200, &json!({ "analysis": analysis })),
                Err(e) => {
                    error!("Analysis completion failed: {}", e);
                    error_response(e.status_code(), e.to_string())
                }
            }
        }

        _ => error_response(404, "not found"),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState::new().await?);
    let state_clone = state.clone();

    run(service_fn(move |event| {
        let state = state_clone.clone();
        async move { handler(state, event).await }
    }))
    .await
}
