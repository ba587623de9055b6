//! Version manifest fetching

#[cfg(test)]
use mockall::automock;

use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::version::error::ManifestError;

/// A single element of the manifest array.
///
/// Published versions appear either as bare strings or as objects carrying a
/// `name` field. Anything else deserializes into `Other` and is skipped.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ManifestEntry {
    Name(String),
    Named { name: String },
    Other(serde_json::Value),
}

impl ManifestEntry {
    pub fn into_version(self) -> Option<String> {
        match self {
            ManifestEntry::Name(name) | ManifestEntry::Named { name } => Some(name),
            ManifestEntry::Other(_) => None,
        }
    }
}

/// Collect version identifiers from decoded manifest entries
pub fn versions_from_entries(entries: Vec<ManifestEntry>) -> Vec<String> {
    entries
        .into_iter()
        .filter_map(ManifestEntry::into_version)
        .collect()
}

/// Resolve the configured manifest location against the current origin.
///
/// `manifest_url` may be absolute (`https://host/versions.json`) or a path
/// (`/javadoc/versions.json`).
pub fn resolve_manifest_url(origin: &str, manifest_url: &str) -> Result<String, ManifestError> {
    if let Ok(absolute) = Url::parse(manifest_url) {
        return Ok(absolute.to_string());
    }

    let base = Url::parse(origin).map_err(|e| ManifestError::InvalidUrl(e.to_string()))?;
    base.join(manifest_url)
        .map(|url| url.to_string())
        .map_err(|e| ManifestError::InvalidUrl(e.to_string()))
}

/// Source of the published version list
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ManifestSource: Send + Sync {
    /// Fetches every version identifier listed in the manifest
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Version identifiers in manifest order
    /// * `Err(ManifestError)` - If the request fails or the body is not a JSON array
    async fn fetch_versions(&self, manifest_url: &str) -> Result<Vec<String>, ManifestError>;
}

/// Manifest source backed by a plain HTTP GET
pub struct HttpManifestSource {
    client: reqwest::Client,
}

impl HttpManifestSource {
    pub fn new(timeout: Duration) -> Result<Self, ManifestError> {
        let client = reqwest::Client::builder()
            .user_agent("version-redirect")
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl ManifestSource for HttpManifestSource {
    async fn fetch_versions(&self, manifest_url: &str) -> Result<Vec<String>, ManifestError> {
        let response = self.client.get(manifest_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Manifest request returned status {}: {}", status, manifest_url);
            return Err(ManifestError::UnexpectedStatus(status));
        }

        let entries: Vec<ManifestEntry> = response.json().await.map_err(|e| {
            warn!("Failed to parse version manifest: {}", e);
            ManifestError::InvalidResponse(e.to_string())
        })?;

        let versions = versions_from_entries(entries);
        debug!("Manifest {} lists {} versions", manifest_url, versions.len());

        Ok(versions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use rstest::rstest;

    fn source() -> HttpManifestSource {
        HttpManifestSource::new(Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn versions_from_entries_accepts_strings_and_named_objects() {
        let entries: Vec<ManifestEntry> = serde_json::from_str(
            r#"["5.2.0", {"name": "5.1.2", "url": "/javadoc/5.1.2/"}, 42, null, {"name": 7}, {"label": "x"}, "latest"]"#,
        )
        .unwrap();

        assert_eq!(
            versions_from_entries(entries),
            vec!["5.2.0".to_string(), "5.1.2".to_string(), "latest".to_string()]
        );
    }

    #[rstest]
    #[case("https://docs.example.org", "/javadoc/versions.json", "https://docs.example.org/javadoc/versions.json")]
    #[case("http://localhost:8080", "/v.json", "http://localhost:8080/v.json")]
    #[case("https://docs.example.org", "https://cdn.example.org/versions.json", "https://cdn.example.org/versions.json")]
    fn resolve_manifest_url_joins_paths_onto_origin(
        #[case] origin: &str,
        #[case] manifest_url: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(resolve_manifest_url(origin, manifest_url).unwrap(), expected);
    }

    #[test]
    fn resolve_manifest_url_rejects_unusable_origin() {
        let result = resolve_manifest_url("not a url", "/javadoc/versions.json");
        assert!(matches!(result, Err(ManifestError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn fetch_versions_returns_manifest_entries_in_order() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/javadoc/versions.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"["5.2.0", {"name": "5.1.2"}, "latest", {"name": "4.3.16"}]"#)
            .create_async()
            .await;

        let url = format!("{}/javadoc/versions.json", server.url());
        let result = source().fetch_versions(&url).await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            result,
            vec![
                "5.2.0".to_string(),
                "5.1.2".to_string(),
                "latest".to_string(),
                "4.3.16".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn fetch_versions_returns_unexpected_status_for_non_success() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/javadoc/versions.json")
            .with_status(503)
            .create_async()
            .await;

        let url = format!("{}/javadoc/versions.json", server.url());
        let result = source().fetch_versions(&url).await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(ManifestError::UnexpectedStatus(status)) if status.as_u16() == 503
        ));
    }

    #[tokio::test]
    async fn fetch_versions_returns_invalid_response_for_non_array_body() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/javadoc/versions.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"versions": ["5.2.0"]}"#)
            .create_async()
            .await;

        let url = format!("{}/javadoc/versions.json", server.url());
        let result = source().fetch_versions(&url).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(ManifestError::InvalidResponse(_))));
    }
}
