use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::{debug, error, info};

use crate::error::GatewayError;
use crate::template::expand;
use crate::AppState;

use super::models::{ApiError, GenerateRequest, GenerateResponse};

pub const PROMPT_REQUIRED: &str = "Prompt is required";

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn generate(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<GenerateResponse>, GatewayError> {
    // Parsed by hand so a missing Content-Type header is not an error.
    let result = match serde_json::from_slice::<GenerateRequest>(&body) {
        Ok(request) => generate_completion(&state, request).await,
        Err(err) => Err(GatewayError::Internal(Some(err.to_string()))),
    };

    result.map(Json).map_err(|err| {
        match &err {
            GatewayError::Validation(reason) => {
                debug!(kind = err.kind(), %reason, "rejected generate request")
            }
            _ => error!(kind = err.kind(), reason = err.message(), "error generating prompt"),
        }
        err
    })
}

/// Validates the request, expands the template and asks the bridge for a
/// completion. The bridge runs on its own task so a panic inside it surfaces
/// as an internal error instead of tearing down the connection.
pub async fn generate_completion(
    state: &AppState,
    request: GenerateRequest,
) -> Result<GenerateResponse, GatewayError> {
    let prompt = match request.prompt {
        Some(Value::String(prompt)) if !prompt.trim().is_empty() => prompt,
        _ => return Err(GatewayError::Validation(PROMPT_REQUIRED.to_string())),
    };

    let parameters = request
        .parameters
        .ok_or_else(|| invalid_parameters(["parameters is required".to_string()]))?
        .validate()
        .map_err(|violations| invalid_parameters(violations.iter().map(ToString::to_string)))?;

    let instruction = expand(&prompt, &parameters);
    let bridge = Arc::clone(&state.bridge);

    let completion = tokio::spawn(async move { bridge.complete(&instruction).await })
        .await
        .map_err(|err| {
            error!(panicked = err.is_panic(), "completion task failed: {err}");
            GatewayError::Internal(None)
        })??;

    info!(completion_len = completion.len(), "generated system prompt");
    Ok(GenerateResponse { completion })
}

fn invalid_parameters(violations: impl IntoIterator<Item = String>) -> GatewayError {
    let details: Vec<String> = violations.into_iter().collect();
    GatewayError::Validation(format!("Invalid parameters: {}", details.join("; ")))
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError {
            error: "Not found".to_string(),
            status: StatusCode::NOT_FOUND.as_u16(),
        }),
    )
        .into_response()
}
