//! Redirect layer
//!
//! Decides whether a documentation request must move to another published
//! version and performs the move through an injected [`location::Location`].
//!
//! # Modules
//!
//! - [`planner`]: Pure path rewriting
//! - [`location`]: Navigation capability and its URL-backed implementation
//! - [`orchestrator`]: Manifest fetch, planning and navigation

pub mod location;
pub mod orchestrator;
pub mod planner;
