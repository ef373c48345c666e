use crate::{ConfigService, ExposurePolicy};
use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

pub struct SettingsState {
    pub config_service: Arc<ConfigService>,
}

/// Read-only view of the active server configuration
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SettingsResponse {
    /// Address the HTTP server is bound to
    pub address: String,
    /// Active exposure policy: "all" or "allow-list"
    pub exposure_mode: String,
    /// Keys admitted by the allow-list, when one is active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_keys: Option<Vec<String>>,
    /// Dotenv file loaded before the snapshot was captured, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_file: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(get_settings),
    components(schemas(SettingsResponse)),
    info(
        title = "Settings API",
        description = "Read-only access to the active server configuration.",
        version = "1.0.0"
    )
)]
pub struct SettingsApiDoc;

pub fn configure_routes() -> Router<Arc<SettingsState>> {
    Router::new().route("/settings", get(get_settings))
}

/// Get the active server configuration
#[utoipa::path(
    tag = "Settings",
    get,
    path = "/settings",
    responses(
        (status = 200, description = "Active server configuration", body = SettingsResponse),
    )
)]
async fn get_settings(State(app_state): State<Arc<SettingsState>>) -> impl IntoResponse {
    let config = app_state.config_service.get_server_config();

    let allowed_keys = match &config.exposure {
        ExposurePolicy::All => None,
        ExposurePolicy::AllowList(keys) => Some(keys.clone()),
    };

    Json(SettingsResponse {
        address: config.address.clone(),
        exposure_mode: config.exposure.mode_name().to_string(),
        allowed_keys,
        env_file: config
            .env_file
            .as_ref()
            .map(|p| p.display().to_string()),
    })
}
