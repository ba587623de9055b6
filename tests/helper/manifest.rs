//! Manifest source test doubles

use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Url;

use version_redirect::redirect::location::UrlLocation;
use version_redirect::version::error::ManifestError;
use version_redirect::version::manifest::ManifestSource;

/// Manifest source that serves a fixed version list and records requested URLs
pub struct StaticManifestSource {
    versions: Vec<String>,
    requests: Mutex<Vec<String>>,
}

impl StaticManifestSource {
    pub fn new(versions: Vec<&str>) -> Self {
        Self {
            versions: versions.into_iter().map(|v| v.to_string()).collect(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ManifestSource for StaticManifestSource {
    async fn fetch_versions(&self, manifest_url: &str) -> Result<Vec<String>, ManifestError> {
        self.requests.lock().unwrap().push(manifest_url.to_string());
        Ok(self.versions.clone())
    }
}

/// Manifest source whose fetch always fails
pub struct FailingManifestSource;

#[async_trait]
impl ManifestSource for FailingManifestSource {
    async fn fetch_versions(&self, _manifest_url: &str) -> Result<Vec<String>, ManifestError> {
        Err(ManifestError::InvalidResponse("connection reset".to_string()))
    }
}

/// Build a URL-backed location for `url`
pub fn location(url: &str) -> UrlLocation {
    UrlLocation::new(Url::parse(url).unwrap())
}
