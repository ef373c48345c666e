use super::types::Category;

/// Name fragments that mark a variable as secret-classified.
const SECRET_TOKENS: [&str; 5] = ["SECRET", "PASSWORD", "API_KEY", "TOKEN", "PRIVATE"];

const API_KEY_TOKENS: [&str; 4] = ["API_KEY", "SECRET", "TOKEN", "PASSWORD"];
const DATABASE_TOKENS: [&str; 4] = ["DATABASE", "DB_", "REDIS", "MONGO"];
const SYSTEM_TOKENS: [&str; 4] = ["NODE_", "PATH", "HOME", "USER"];
const DEVELOPMENT_TOKENS: [&str; 4] = ["DEV", "DEBUG", "LOG_", "HOT_RELOAD"];

/// Assign a category to a variable name.
///
/// Patterns are evaluated in a fixed priority order against the upper-cased
/// key; the first match wins. Pure and total: every key maps to exactly one
/// category.
pub fn categorize(key: &str) -> Category {
    let upper_key = key.to_uppercase();

    if upper_key.starts_with("NEXT_PUBLIC_") {
        return Category::NextPublic;
    }
    if API_KEY_TOKENS.iter().any(|t| upper_key.contains(t)) {
        return Category::ApiKeys;
    }
    if DATABASE_TOKENS.iter().any(|t| upper_key.contains(t)) {
        return Category::Database;
    }
    if SYSTEM_TOKENS.iter().any(|t| upper_key.contains(t)) {
        return Category::System;
    }
    if DEVELOPMENT_TOKENS.iter().any(|t| upper_key.contains(t)) {
        return Category::Development;
    }

    Category::Other
}

/// Whether a variable name matches the sensitive-token heuristic.
///
/// Evaluated independently of [`categorize`]; a key can be secret-classified
/// in any category.
pub fn is_secret(key: &str) -> bool {
    let upper_key = key.to_uppercase();
    SECRET_TOKENS.iter().any(|t| upper_key.contains(t))
}
