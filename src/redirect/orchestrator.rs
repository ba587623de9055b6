//! Fetch, plan and navigate
//!
//! Glues the manifest source, the planner and the navigation capability
//! together. Fetch failures never escape: the request stays where it is.

use tracing::{debug, info, warn};

use crate::config::RedirectConfig;
use crate::redirect::location::Location;
use crate::redirect::planner::{RedirectDecision, is_in_scope, plan_redirect};
use crate::version::catalog::VersionCatalog;
use crate::version::manifest::{ManifestSource, resolve_manifest_url};

/// Redirect the current location to the closest published version, if needed.
///
/// `location` is `None` when there is no navigable document (e.g. headless
/// runs), in which case nothing happens.
///
/// Returns the URL navigated to, or `None` when no navigation took place.
pub async fn attempt_redirect(
    source: &dyn ManifestSource,
    location: Option<&dyn Location>,
    config: &RedirectConfig,
) -> Option<String> {
    let Some(location) = location else {
        debug!("No navigable location, skipping redirect");
        return None;
    };

    let path = location.current_path();
    if !is_in_scope(&path, &config.doc_prefix) {
        debug!("Path {} is outside /{}/, skipping redirect", path, config.doc_prefix);
        return None;
    }

    let origin = location.origin();
    let manifest_url = match resolve_manifest_url(&origin, &config.manifest_url) {
        Ok(url) => url,
        Err(e) => {
            warn!("Cannot locate version manifest: {}", e);
            return None;
        }
    };

    let versions = match source.fetch_versions(&manifest_url).await {
        Ok(versions) => versions,
        Err(e) => {
            warn!("Failed to fetch version manifest {}: {}", manifest_url, e);
            return None;
        }
    };

    let catalog = VersionCatalog::from_versions(versions);
    debug!("Catalog holds {} published versions", catalog.len());

    match plan_redirect(&path, &catalog, &config.doc_prefix) {
        RedirectDecision::NoRedirect => None,
        RedirectDecision::Redirect { path: new_path } => {
            let target = format!(
                "{}{}{}",
                origin,
                new_path,
                location.current_query_and_fragment()
            );
            info!("Redirecting {} to {}", path, target);
            location.navigate_to(&target);
            Some(target)
        }
    }
}
