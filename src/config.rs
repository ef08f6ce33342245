use std::env;

use crate::bridge::{BridgeConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};

pub struct AppConfig {
    pub bind_addr: String,
    pub port: u16,
    pub bridge: BridgeConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3000);

        let api_key = env::var("GEMINI_AI_API").unwrap_or_default();
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url = env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        // Unset or unparsable leaves the outbound call without a deadline.
        let timeout_ms = env::var("GEMINI_TIMEOUT_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok());

        Self {
            bind_addr,
            port,
            bridge: BridgeConfig::new(api_key)
                .with_model(model)
                .with_base_url(base_url)
                .with_timeout_ms(timeout_ms),
        }
    }
}
