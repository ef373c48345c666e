use super::types::{Category, EnvVarEntry};

/// Serialize the visible entries to the export text payload.
///
/// One line per entry, `KEY=<value as a double-quoted JSON string>`,
/// newline-joined. Values are written raw (not masked): re-parsing each line
/// recovers the original pairs exactly. All-or-nothing; there are no partial
/// failure modes.
pub fn render_export(entries: &[&EnvVarEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{}={}", e.key, serde_json::Value::String(e.value.clone())))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Download filename for the current view, named for the active category.
pub fn export_filename(category: Option<Category>) -> String {
    let suffix = category.map_or("all", |c| c.as_str());
    format!("env-variables-{suffix}.txt")
}
