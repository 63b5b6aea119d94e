//! HTTP transport for the triage bot
//!
//! Axum server exposing `POST /chat` plus a plain `GET /health`. `/chat`
//! always answers 200 with `{"response": ...}`; a body without a usable
//! `message` gets the prompt asking for symptoms instead of an error.

use crate::chatbot::TriageBot;
use crate::config::Config;
use crate::error::{Result, TriageError};
use crate::nlp::{PosTagger, SentimentScorer};
use axum::{
    Json, Router,
    body::{Body, Bytes},
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::{sync::Arc, time::Duration};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
};

/// Body of `POST /chat`
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    /// Lenient parse: anything that is not an object with a string `message`
    /// becomes an empty request.
    pub fn from_body(body: &[u8]) -> Self {
        let value: serde_json::Value = match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!("Unusable /chat body ({}), treating as empty", e);
                return Self::default();
            }
        };
        Self {
            message: value
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned),
        }
    }
}

/// Response of `POST /chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Health check endpoint
pub async fn health_handler() -> impl IntoResponse {
    "ok"
}

/// Chat endpoint
pub async fn chat_handler<T, S>(
    State(bot): State<Arc<TriageBot<T, S>>>,
    body: Bytes,
) -> Json<ChatResponse>
where
    T: PosTagger + 'static,
    S: SentimentScorer + 'static,
{
    let request = ChatRequest::from_body(&body);
    let response = bot.reply_to_message(request.message.as_deref());
    Json(ChatResponse { response })
}

async fn log_request(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = std::time::Instant::now();
    let resp = next.run(req).await;
    tracing::info!(
        %method,
        path = %path,
        status = resp.status().as_u16(),
        latency_ms = start.elapsed().as_millis() as u64,
        "http request"
    );
    resp
}

/// Build the application router
pub fn router<T, S>(config: &Config, bot: Arc<TriageBot<T, S>>) -> Router
where
    T: PosTagger + 'static,
    S: SentimentScorer + 'static,
{
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/chat", post(chat_handler::<T, S>))
        .with_state(bot)
        .layer(TimeoutLayer::new(Duration::from_millis(
            config.server.request_timeout_ms,
        )));

    let app = if config.server.cors_permissive {
        app.layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
    } else {
        app
    };

    app.layer(middleware::from_fn(log_request))
}

/// Start the HTTP server and serve until the process is stopped
pub async fn start_http_server<T, S>(config: &Config, bot: Arc<TriageBot<T, S>>) -> Result<()>
where
    T: PosTagger + 'static,
    S: SentimentScorer + 'static,
{
    let app = router(config, bot);

    let listener = tokio::net::TcpListener::bind(config.server.http_bind)
        .await
        .map_err(|e| TriageError::Server {
            message: format!("Failed to bind HTTP listener on {}: {}", config.server.http_bind, e),
        })?;

    tracing::info!("Starting HTTP server on {} (chat at /chat)", config.server.http_bind);

    axum::serve(listener, app)
        .await
        .map_err(|e| TriageError::Server {
            message: e.to_string(),
        })?;

    Ok(())
}
