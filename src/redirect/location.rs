//! Navigation capability

#[cfg(test)]
use mockall::automock;

use std::sync::Mutex;

use reqwest::Url;

/// The document location a redirect is performed on.
///
/// Implementations must navigate with replace semantics: the location being
/// left must not remain in any history.
#[cfg_attr(test, automock)]
pub trait Location: Send + Sync {
    /// Scheme, host and port, without a trailing slash (e.g. `https://docs.example.org`)
    fn origin(&self) -> String;

    /// Path of the current document, starting with `/`
    fn current_path(&self) -> String;

    /// `?query#fragment` of the current document, each part only if present
    fn current_query_and_fragment(&self) -> String;

    /// Replace the current document with `url`
    fn navigate_to(&self, url: &str);
}

/// Location backed by a parsed URL.
///
/// Navigation records the target instead of leaving the process, so the
/// caller can report it.
#[derive(Debug)]
pub struct UrlLocation {
    url: Url,
    navigated: Mutex<Option<String>>,
}

impl UrlLocation {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            navigated: Mutex::new(None),
        }
    }

    /// The URL last navigated to, if any
    pub fn navigated_to(&self) -> Option<String> {
        self.navigated.lock().ok().and_then(|slot| slot.clone())
    }
}

impl Location for UrlLocation {
    fn origin(&self) -> String {
        self.url.origin().ascii_serialization()
    }

    fn current_path(&self) -> String {
        self.url.path().to_string()
    }

    fn current_query_and_fragment(&self) -> String {
        let mut suffix = String::new();
        if let Some(query) = self.url.query() {
            suffix.push('?');
            suffix.push_str(query);
        }
        if let Some(fragment) = self.url.fragment() {
            suffix.push('#');
            suffix.push_str(fragment);
        }
        suffix
    }

    fn navigate_to(&self, url: &str) {
        if let Ok(mut slot) = self.navigated.lock() {
            *slot = Some(url.to_string());
        }
    }
}
