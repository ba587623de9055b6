//! Published version catalog

use crate::version::key::{VersionKey, parse_version};
use crate::version::selector::select_from_sorted;

/// A published version together with its parsed key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub version: String,
    pub key: VersionKey,
}

/// Published versions that carry a valid key, sorted ascending by key.
///
/// Sorting is stable, so entries with equal keys keep the order they were
/// given in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionCatalog {
    entries: Vec<CatalogEntry>,
}

impl VersionCatalog {
    /// Build a catalog, dropping versions without any digit run
    pub fn from_versions<I, S>(versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<CatalogEntry> = versions
            .into_iter()
            .map(Into::into)
            .filter_map(|version| {
                parse_version(&version).map(|key| CatalogEntry { version, key })
            })
            .collect();

        entries.sort_by(|a, b| a.key.cmp(&b.key));

        Self { entries }
    }

    /// Version strings in ascending order
    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.version.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry with the greatest key (the last one when several are equal)
    pub fn latest(&self) -> Option<&str> {
        self.entries.last().map(|e| e.version.as_str())
    }

    /// Pick the published version that should serve `requested`.
    ///
    /// Exact key match first, then the smallest version above, then the
    /// greatest version below. Returns `None` when `requested` has no key or
    /// the catalog is empty.
    pub fn select_closest(&self, requested: &str) -> Option<&str> {
        let requested = parse_version(requested)?;
        select_from_sorted(&requested, &self.entries).map(|e| e.version.as_str())
    }
}
