pub mod api;
pub mod bridge;
pub mod config;
pub mod error;
pub mod params;
pub mod template;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use bridge::{BridgeConfig, BridgeError, CompletionBridge, GeminiBridge};
pub use config::AppConfig;
pub use error::GatewayError;
pub use params::{PromptParameters, RawParameters};
pub use template::expand;

#[derive(Clone)]
pub struct AppState {
    pub bridge: Arc<dyn CompletionBridge>,
}

impl AppState {
    pub fn new(bridge: impl CompletionBridge + 'static) -> Self {
        Self {
            bridge: Arc::new(bridge),
        }
    }
}

pub fn build_app(state: Arc<AppState>) -> Router {
    api::router(state).layer(TraceLayer::new_for_http())
}

pub async fn run_server(app: Router, bind_addr: &str, port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind((bind_addr, port)).await?;
    info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await
}
