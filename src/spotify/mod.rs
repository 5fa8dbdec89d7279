//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API that the
//! recommendation service needs: the service-level credential exchange, track
//! search, user profile lookup, and playlist management. It handles all HTTP
//! communication, authentication headers, and error mapping for that surface.
//!
//! ## Architecture
//!
//! The module follows a feature-based organization where each submodule
//! handles a specific domain of Spotify API functionality:
//!
//! ```text
//! Application Layer (API handlers, CLI, recommendation engine)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client-credentials exchange)
//!     ├── Track Search (best-match resolution)
//!     ├── User Profiles (playlist owner lookup)
//!     └── Playlist Operations (create, append)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! Two unrelated credentials flow through this module:
//!
//! - The **service credential** obtained by [`auth::ClientCredentials`]
//!   through the `client_credentials` grant. It authenticates track search
//!   and is cached process-wide by
//!   [`crate::management::CredentialCache`].
//! - The **user token** supplied by the caller of the publish operation. It
//!   authenticates profile lookup and playlist writes and is never stored;
//!   obtaining it (authorization-code flow) is outside this service.
//!
//! ## Error Handling
//!
//! Every function maps its failures onto the variant of
//! [`crate::error::ServiceError`] matching its pipeline stage, keeping the
//! reqwest error text as the logged cause. There are no automatic retries:
//! a transient upstream failure fails the surrounding request.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Service credential exchange
//! - `GET /search` - Best-match track search
//! - `GET /me` - Profile of the token's user
//! - `POST /users/{user_id}/playlists` - Create a private playlist
//! - `POST /playlists/{playlist_id}/tracks` - Batch-append tracks

pub mod auth;
pub mod playlist;
pub mod search;
pub mod users;
