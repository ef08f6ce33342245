use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::params::RawParameters;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Kept loose so that any non-text or blank value gets the same answer.
    #[serde(default)]
    pub prompt: Option<Value>,
    #[serde(default)]
    pub parameters: Option<RawParameters>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub completion: String,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub status: u16,
}
