//! # API Module
//!
//! This module provides the HTTP endpoints of the recommendation service.
//!
//! ## Endpoints
//!
//! ### Recommendations
//!
//! - [`recommendations`] - `POST /recommendations`: turns a set of mood/genre
//!   tags into a bounded list of resolved track references by running the
//!   full aggregation/resolution pipeline.
//!
//! ### Playlists
//!
//! - [`save_playlist`] - `POST /playlists`: persists resolved references as a
//!   private playlist on the streaming platform using the caller-supplied
//!   user token.
//!
//! ### Monitoring
//!
//! - [`health`] - `GET /health`: application status and version information
//!   for monitoring systems and load balancers.
//!
//! ## Error Contract
//!
//! Handlers return `400` with a short message for caller mistakes (missing
//! tags, missing uris/token) and a generic `500` body for internal failures.
//! The detailed cause is logged server-side and never returned to the
//! caller.
//!
//! ## Architecture
//!
//! Built on the [Axum](https://docs.rs/axum) web framework; each endpoint is
//! an async function wired into the router in [`crate::server`]. The shared
//! credential cache reaches the recommendations handler through an
//! `Extension` layer.

mod health;
mod playlist;
mod recommendations;

pub use health::health;
pub use playlist::save_playlist;
pub use recommendations::recommendations;
