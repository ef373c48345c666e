use envlens_config::ExposurePolicy;
use tracing::{debug, info};

use super::classify::{categorize, is_secret};
use super::types::{Category, CategoryStat, EnvVarEntry};

/// Immutable, point-in-time copy of the process environment.
///
/// Captured once per serving session, before the server accepts
/// connections, and passed into the handlers at construction time - the
/// environment is never read mid-request. Entries are held key-sorted
/// lexicographically ascending, the order every view preserves.
pub struct SnapshotService {
    entries: Vec<EnvVarEntry>,
}

impl SnapshotService {
    /// Capture the current process environment through an exposure policy.
    ///
    /// This is the only place in the codebase that reads `std::env::vars()`.
    pub fn capture(policy: &ExposurePolicy) -> Self {
        let service = Self::from_vars(std::env::vars(), policy);
        info!(
            "Captured {} environment variables under '{}' exposure policy",
            service.len(),
            policy.mode_name()
        );
        service
    }

    /// Build a snapshot from an explicit mapping.
    ///
    /// Used by tests to inject fixtures; `capture` delegates here.
    pub fn from_vars(
        vars: impl IntoIterator<Item = (String, String)>,
        policy: &ExposurePolicy,
    ) -> Self {
        let mut entries: Vec<EnvVarEntry> = vars
            .into_iter()
            .filter(|(key, _)| policy.admits(key))
            .map(|(key, value)| EnvVarEntry {
                category: categorize(&key),
                is_secret: is_secret(&key),
                key,
                value,
            })
            .collect();

        entries.sort_by(|a, b| a.key.cmp(&b.key));
        debug!("Snapshot holds {} entries after policy filtering", entries.len());

        Self { entries }
    }

    /// All snapshot entries, key-sorted ascending.
    pub fn entries(&self) -> &[EnvVarEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count and secret count per category over the full snapshot.
    ///
    /// Always lists all six categories, including empty ones, in display
    /// order.
    pub fn category_stats(&self) -> Vec<CategoryStat> {
        Category::ALL
            .iter()
            .map(|&category| {
                let in_category = self.entries.iter().filter(|e| e.category == category);
                let (count, secret_count) =
                    in_category.fold((0, 0), |(count, secrets), entry| {
                        (count + 1, secrets + usize::from(entry.is_secret))
                    });

                CategoryStat {
                    category,
                    count,
                    secret_count,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<(String, String)> {
        [
            ("DATABASE_URL", "postgres://u:p@host/db"),
            ("NEXT_PUBLIC_X", "1"),
            ("API_KEY", "abcd1234efgh"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn entries_are_key_sorted() {
        let snapshot = SnapshotService::from_vars(fixture(), &ExposurePolicy::All);
        let keys: Vec<&str> = snapshot.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["API_KEY", "DATABASE_URL", "NEXT_PUBLIC_X"]);
    }

    #[test]
    fn classification_happens_at_capture() {
        let snapshot = SnapshotService::from_vars(fixture(), &ExposurePolicy::All);
        let categories: Vec<Category> =
            snapshot.entries().iter().map(|e| e.category).collect();
        assert_eq!(
            categories,
            vec![Category::ApiKeys, Category::Database, Category::NextPublic]
        );
        assert!(snapshot.entries()[0].is_secret);
        assert!(!snapshot.entries()[1].is_secret);
    }

    #[test]
    fn allow_list_policy_narrows_capture() {
        let policy = ExposurePolicy::allow_list_from_str("DATABASE_URL").unwrap();
        let snapshot = SnapshotService::from_vars(fixture(), &policy);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.entries()[0].key, "DATABASE_URL");
    }

    #[test]
    fn stats_cover_all_categories() {
        let snapshot = SnapshotService::from_vars(fixture(), &ExposurePolicy::All);
        let stats = snapshot.category_stats();
        assert_eq!(stats.len(), 6);

        let api_keys = stats
            .iter()
            .find(|s| s.category == Category::ApiKeys)
            .unwrap();
        assert_eq!(api_keys.count, 1);
        assert_eq!(api_keys.secret_count, 1);

        let system = stats.iter().find(|s| s.category == Category::System).unwrap();
        assert_eq!(system.count, 0);
        assert_eq!(system.secret_count, 0);
    }
}
