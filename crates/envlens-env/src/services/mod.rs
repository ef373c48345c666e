pub mod classify;
pub mod export;
pub mod filter;
pub mod mask;
pub mod snapshot_service;
pub mod types;

pub use classify::{categorize, is_secret};
pub use export::{export_filename, render_export};
pub use filter::{filter_entries, FilterMode};
pub use mask::mask_value;
pub use snapshot_service::SnapshotService;
pub use types::{Category, CategoryStat, EnvVarEntry};
