//! Version parsing, ordering and selection
//!
//! This module turns loosely formatted version strings into comparable keys and
//! picks the published version that should serve a request.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Manifest   │────▶│   Catalog   │────▶│  Selector   │
//! │  (fetch)    │     │  (sorted)   │     │  (closest)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │     Key     │
//!                     │   (parse)   │
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`key`]: Digit-run version keys and their padded ordering
//! - [`catalog`]: Sorted set of published versions
//! - [`selector`]: Nearest-at-or-above, else highest-below selection
//! - [`manifest`]: Manifest source trait and HTTP implementation
//! - [`error`]: Error types for manifest fetching

pub mod catalog;
pub mod error;
pub mod key;
pub mod manifest;
pub mod selector;
