//! Shared test utilities

mod manifest;

pub use manifest::{FailingManifestSource, StaticManifestSource, location};
