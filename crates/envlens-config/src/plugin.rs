//! Config Plugin implementation for the Envlens plugin system
//!
//! This plugin provides configuration management functionality including:
//! - Server configuration access for other plugins
//! - The read-only settings endpoint

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use envlens_core::plugin::{
    EnvlensPlugin, PluginContext, PluginError, PluginRoutes, ServiceRegistrationContext,
};
use utoipa::{openapi::OpenApi, OpenApi as OpenApiTrait};

use crate::handler::SettingsState;
use crate::{configure_routes, ConfigService, ServerConfig, SettingsApiDoc};

/// Config Plugin for exposing the server configuration
pub struct ConfigPlugin {
    server_config: Arc<ServerConfig>,
}

impl ConfigPlugin {
    pub fn new(server_config: Arc<ServerConfig>) -> Self {
        Self { server_config }
    }
}

impl EnvlensPlugin for ConfigPlugin {
    fn name(&self) -> &'static str {
        "config"
    }

    fn register_services<'a>(
        &'a self,
        context: &'a ServiceRegistrationContext,
    ) -> Pin<Box<dyn Future<Output = Result<(), PluginError>> + Send + 'a>> {
        Box::pin(async move {
            let config_service = Arc::new(ConfigService::new(self.server_config.clone()));
            context.register_service(config_service);

            tracing::debug!("Config plugin services registered successfully");
            Ok(())
        })
    }

    fn configure_routes(&self, context: &PluginContext) -> Option<PluginRoutes> {
        let config_service = context.require_service::<ConfigService>();

        let settings_state = Arc::new(SettingsState { config_service });

        let routes = configure_routes().with_state(settings_state);

        Some(PluginRoutes { router: routes })
    }

    fn openapi_schema(&self) -> Option<OpenApi> {
        Some(SettingsApiDoc::openapi())
    }
}
