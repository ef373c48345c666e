/*!
# Envlens Environment Crate

This crate provides the environment-snapshot domain of Envlens: capturing a
point-in-time copy of the server process environment and deriving everything
the viewer page displays from it.

## Features

- **Snapshot capture**: one immutable copy of the process environment per
  serving session, taken through the configured exposure policy
- **Classification**: every variable name maps to one of six fixed
  categories, plus an independent secret heuristic
- **Filtering**: substring or case-insensitive regex match on keys, with a
  fail-closed policy for invalid patterns
- **Masking**: display-only masking of secret-classified values
- **Export**: `KEY=<JSON string>` text serialization of the visible rows

## API Endpoints

- `GET /env/variables?filter=&mode=&category=&show_secrets=` - filtered,
  masked rows plus per-category statistics
- `GET /env/export?filter=&mode=&category=` - text attachment of the
  visible rows; 204 when nothing is visible
*/

pub mod handlers;
pub mod plugin;
pub mod services;

#[cfg(test)]
mod tests;

pub use handlers::{configure_routes, AppState, EnvApiDoc};
pub use plugin::EnvPlugin;
pub use services::{
    categorize, export_filename, filter_entries, is_secret, mask_value, render_export, Category,
    CategoryStat, EnvVarEntry, FilterMode, SnapshotService,
};
