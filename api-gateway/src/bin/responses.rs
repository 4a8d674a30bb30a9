//! Responses Lambda - persistence of finished quiz results.
//!
//! Endpoints:
//! - POST /save_response - Save a theme/analysis pair
//! - GET /responses - List saved results, most recent first

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde_json::json;
use shared::http::{error_response, json_response};
use shared::models::SaveResponseRequest;
use shared::{db, parse_body, Config, ResponseStore};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Application state
struct AppState {
    store: ResponseStore,
}

impl AppState {
    async fn new() -> Result<Self, Error> {
        let config = Config::from_env()?;

        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let secrets_client = aws_sdk_secretsmanager::Client::new(&aws_config);
        let creds = shared::get_database_credentials(&secrets_client, &config.db_secret_arn).await?;

        let pool = db::create_pool(&config, &creds).await?;

        Ok(Self {
            store: ResponseStore::new(pool),
        })
    }
}

async fn handler(state: Arc<AppState>, event: Request) -> Result<Response<Body>, Error> {
    let method = event.method().as_str();
    let path = event.uri().path();

    info!("Responses request: {} {}", method, path);

    match (method, path) {
        ("POST", "/save_response") => {
            let request: SaveResponseRequest = parse_body!(event.body());

            match state
                .store
                .save(&request.theme, &request.analysis, &request.personality_mode)
                .await
            {
                Ok(id) => json_response(
                    200,
                    &json!({ "message": format!("response saved with id {}", id) }),
                ),
                Err(e) => {
                    error!("Save failed: {}", e);
                    error_response(e.status_code(), e.to_string())
                }
            }
        }

        ("GET", "/responses") => match state.store.list_all().await {
            Ok(rows) => json_response(200, &rows),
            Err(e) => {
                error!("List failed: {}", e);
                error_response(e.status_code(), e.to_string())
            }
        },

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
