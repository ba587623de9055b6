//! Nearest published version selection

use std::cmp::Ordering;

use crate::version::catalog::{CatalogEntry, VersionCatalog};
use crate::version::key::VersionKey;

/// Select from entries already sorted ascending by key.
///
/// Scans upward and stops at the first entry at or above `requested`; if every
/// entry is below, the last one (the highest) wins.
pub(crate) fn select_from_sorted<'a>(
    requested: &VersionKey,
    sorted: &'a [CatalogEntry],
) -> Option<&'a CatalogEntry> {
    sorted
        .iter()
        .find(|entry| entry.key.cmp(requested) != Ordering::Less)
        .or_else(|| sorted.last())
}

/// Select the closest published version for `requested` among `candidates`.
///
/// Candidates without any digit run are ignored. Policy: exact match, else
/// the nearest version above, else the highest version below.
pub fn select_closest<I, S>(requested: &str, candidates: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    VersionCatalog::from_versions(candidates)
        .select_closest(requested)
        .map(str::to_string)
}
