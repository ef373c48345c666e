mod handler;
mod service;
pub mod plugin;

pub use handler::{configure_routes, SettingsApiDoc, SettingsState};
pub use plugin::ConfigPlugin;
pub use service::{ConfigError, ConfigService, ExposurePolicy, ServerConfig};
