//! Environment Plugin implementation for the Envlens plugin system
//!
//! This plugin provides the environment-snapshot functionality including:
//! - SnapshotService capture through the configured exposure policy
//! - The variables and export HTTP endpoints

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use envlens_config::ConfigService;
use envlens_core::plugin::{
    EnvlensPlugin, PluginContext, PluginError, PluginRoutes, ServiceRegistrationContext,
};
use utoipa::{openapi::OpenApi, OpenApi as OpenApiTrait};

use crate::handlers::{create_env_app_state, EnvApiDoc};
use crate::services::SnapshotService;
use crate::configure_routes;

/// Environment Plugin exposing the process-environment snapshot
pub struct EnvPlugin;

impl EnvPlugin {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvlensPlugin for EnvPlugin {
    fn name(&self) -> &'static str {
        "env"
    }

    fn register_services<'a>(
        &'a self,
        context: &'a ServiceRegistrationContext,
    ) -> Pin<Box<dyn Future<Output = Result<(), PluginError>> + Send + 'a>> {
        Box::pin(async move {
            let config_service = context.require_service::<ConfigService>();

            // The one snapshot of this serving session
            let snapshot_service =
                Arc::new(SnapshotService::capture(config_service.exposure_policy()));
            context.register_service(snapshot_service);

            tracing::debug!("Environment plugin services registered successfully");
            Ok(())
        })
    }

    fn configure_routes(&self, context: &PluginContext) -> Option<PluginRoutes> {
        let snapshot_service = context.require_service::<SnapshotService>();

        let state = create_env_app_state(snapshot_service);
        let routes = configure_routes().with_state(state);

        Some(PluginRoutes { router: routes })
    }

    fn openapi_schema(&self) -> Option<OpenApi> {
        Some(EnvApiDoc::openapi())
    }
}
