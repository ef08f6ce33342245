use std::error::Error;
use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::ApiError;
use crate::bridge::BridgeError;

pub const FALLBACK_MESSAGE: &str = "Failed to generate prompt";

/// Every way a generation request can fail, as seen by the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The client sent something it can fix.
    Validation(String),
    /// The completion provider failed or could not be reached.
    Upstream(String),
    /// Anything else. Carries no message when nothing useful is known.
    Internal(Option<String>),
}

impl GatewayError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "ValidationError",
            Self::Upstream(_) => "UpstreamError",
            Self::Internal(_) => "InternalError",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation(message) | Self::Upstream(message) => message,
            Self::Internal(message) => message.as_deref().unwrap_or(FALLBACK_MESSAGE),
        }
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind(), self.message())
    }
}

impl Error for GatewayError {}

impl From<BridgeError> for GatewayError {
    fn from(err: BridgeError) -> Self {
        Self::Upstream(err.to_string())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ApiError {
            error: self.message().to_string(),
            status: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}
