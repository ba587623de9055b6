//! Version-aware documentation redirects
//!
//! Routes requests for a documentation version that was never published (or
//! was removed) to the closest version that exists.
//!
//! # Modules
//!
//! - [`version`]: Version keys, the published catalog and closest-version selection
//! - [`redirect`]: Path planning and the fetch-plan-navigate orchestration
//! - [`config`]: Redirect configuration and data directory paths

pub mod config;
pub mod redirect;
pub mod version;
