use std::sync::Arc;

use prompt_genie::{build_app, run_server, AppConfig, AppState, GeminiBridge};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // A missing .env file is fine; the process environment still applies.
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("prompt_genie=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    if !config.bridge.has_api_key() {
        warn!("GEMINI_AI_API is not set; every generation request will fail");
    }
    info!(model = config.bridge.model(), "using Gemini model");

    let state = Arc::new(AppState::new(GeminiBridge::new(config.bridge)));
    let app = build_app(state);

    run_server(app, &config.bind_addr, config.port).await
}
