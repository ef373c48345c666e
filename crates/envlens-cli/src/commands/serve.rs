use std::future::IntoFuture;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use clap::Args;
use envlens_config::{ConfigPlugin, ServerConfig};
use envlens_core::plugin::PluginManager;
use envlens_env::EnvPlugin;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Args)]
pub struct ServeCommand {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1:3000", env = "ENVLENS_ADDRESS")]
    pub address: String,

    /// Comma-separated allow-list of variable keys to expose.
    /// When absent, the full process environment is exposed.
    #[arg(long, env = "ENVLENS_EXPOSE_ONLY")]
    pub expose_only: Option<String>,

    /// Dotenv file to load before the snapshot is captured
    #[arg(long, env = "ENVLENS_ENV_FILE")]
    pub env_file: Option<PathBuf>,
}

impl ServeCommand {
    pub fn execute(self) -> anyhow::Result<()> {
        // Load the dotenv file before the snapshot capture reads the
        // environment, so its variables are part of the session
        if let Some(path) = &self.env_file {
            dotenvy::from_path(path)
                .with_context(|| format!("Failed to load env file {}", path.display()))?;
            info!("Loaded env file {}", path.display());
        }

        let config = Arc::new(ServerConfig::new(
            self.address.clone(),
            self.expose_only.clone(),
            self.env_file.clone(),
        )?);

        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(start_server(config))
    }
}

/// Initialize the plugin system and run the HTTP server until shutdown
async fn start_server(config: Arc<ServerConfig>) -> anyhow::Result<()> {
    let mut plugin_manager = PluginManager::new();

    // Register plugins in dependency order:
    // 1. ConfigPlugin - provides the server configuration
    debug!("Registering ConfigPlugin");
    plugin_manager.register_plugin(Box::new(ConfigPlugin::new(config.clone())));

    // 2. EnvPlugin - captures the snapshot (depends on config)
    debug!("Registering EnvPlugin");
    plugin_manager.register_plugin(Box::new(EnvPlugin::new()));

    plugin_manager
        .initialize_plugins()
        .await
        .map_err(|e| anyhow::anyhow!("Plugin initialization failed: {}", e))?;
    debug!("All plugins initialized successfully");

    let api_doc = plugin_manager
        .get_unified_openapi()
        .map_err(|e| anyhow::anyhow!("Failed to build unified OpenAPI schema: {}", e))?;

    let app = plugin_manager
        .build_application()
        .map_err(|e| anyhow::anyhow!("Failed to build application: {}", e))?
        .merge(Router::new().merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api_doc),
        ))
        .fallback(envlens_web::serve_asset)
        .layer(TraceLayer::new_for_http());

    info!("Plugin system initialized successfully with embedded viewer page");

    let listener = TcpListener::bind(&config.address).await?;
    info!("Envlens server listening on {}", config.address);

    axum::serve(listener, app).into_future().await?;
    info!("Envlens server exited");
    Ok(())
}
