//! # CLI Module
//!
//! This module provides the command-line operations of the service binary.
//! Besides running the HTTP server (wired directly in `main`), the binary can
//! execute the recommendation pipeline once from the terminal, which is
//! useful for smoke-testing credentials and tags without standing up the
//! service.
//!
//! ## Commands
//!
//! - [`recommend`] - Resolves tracks for a set of tags and prints the
//!   resulting references.

mod recommend;

pub use recommend::recommend;
