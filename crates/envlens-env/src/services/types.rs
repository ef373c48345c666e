use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Classification bucket assigned to a variable name.
///
/// The set is closed; every key maps to exactly one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    NextPublic,
    ApiKeys,
    Database,
    System,
    Development,
    Other,
}

impl Category {
    /// All categories, in the order the stat panel displays them.
    pub const ALL: [Category; 6] = [
        Category::NextPublic,
        Category::ApiKeys,
        Category::Database,
        Category::System,
        Category::Development,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::NextPublic => "next-public",
            Category::ApiKeys => "api-keys",
            Category::Database => "database",
            Category::System => "system",
            Category::Development => "development",
            Category::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified environment variable, derived from the snapshot at capture
/// time and never stored anywhere else.
#[derive(Debug, Clone, Serialize)]
pub struct EnvVarEntry {
    pub key: String,
    pub value: String,
    pub category: Category,
    pub is_secret: bool,
}

/// Per-category totals over the full snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryStat {
    pub category: Category,
    pub count: usize,
    pub secret_count: usize,
}
