use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::services::{Category, CategoryStat, FilterMode, SnapshotService};

pub struct AppState {
    pub snapshot_service: Arc<SnapshotService>,
}

pub fn create_env_app_state(snapshot_service: Arc<SnapshotService>) -> Arc<AppState> {
    Arc::new(AppState { snapshot_service })
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListVariablesQuery {
    /// Filter string matched against variable keys
    #[serde(default)]
    pub filter: String,
    /// Filter mode: "substring" (default) or "regex"
    #[serde(default)]
    pub mode: FilterMode,
    /// Restrict the view to one category
    pub category: Option<Category>,
    /// Reveal secret-classified values instead of masking them
    #[serde(default)]
    pub show_secrets: bool,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExportQuery {
    /// Filter string matched against variable keys
    #[serde(default)]
    pub filter: String,
    /// Filter mode: "substring" (default) or "regex"
    #[serde(default)]
    pub mode: FilterMode,
    /// Restrict the export to one category
    pub category: Option<Category>,
}

/// One table row of the viewer
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EnvVarRow {
    pub key: String,
    /// Value as displayed: masked when secret-classified and visibility is off
    pub value: String,
    pub category: Category,
    pub is_secret: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListVariablesResponse {
    /// Number of variables in the snapshot, before filtering
    pub total: usize,
    /// Rows visible under the current filter, category, and visibility state
    pub entries: Vec<EnvVarRow>,
    /// Per-category totals over the full snapshot
    pub stats: Vec<CategoryStat>,
}
