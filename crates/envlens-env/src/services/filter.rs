use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use super::types::{Category, EnvVarEntry};

/// How the filter string is matched against variable keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum FilterMode {
    #[default]
    Substring,
    Regex,
}

/// Select the entries to display.
///
/// The optional category restriction narrows the candidate set first; an
/// empty filter string passes all candidates. Substring matching is
/// case-insensitive on the key. Regex patterns are compiled
/// case-insensitively; a pattern that fails to compile is logged and yields
/// an empty result set instead of an error, so malformed user input never
/// reaches the rendering path. Input order is preserved.
pub fn filter_entries<'a>(
    entries: &'a [EnvVarEntry],
    filter: &str,
    mode: FilterMode,
    category: Option<Category>,
) -> Vec<&'a EnvVarEntry> {
    let candidates = entries
        .iter()
        .filter(|e| category.map_or(true, |c| e.category == c));

    if filter.is_empty() {
        return candidates.collect();
    }

    match mode {
        FilterMode::Substring => {
            let needle = filter.to_lowercase();
            candidates
                .filter(|e| e.key.to_lowercase().contains(&needle))
                .collect()
        }
        FilterMode::Regex => match RegexBuilder::new(filter).case_insensitive(true).build() {
            Ok(re) => candidates.filter(|e| re.is_match(&e.key)).collect(),
            Err(err) => {
                warn!("Invalid regex filter {:?}: {}", filter, err);
                Vec::new()
            }
        },
    }
}
