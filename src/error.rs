//! Error taxonomy for the recommendation service.
//!
//! Every fallible step of the pipeline maps onto exactly one variant so the
//! request boundary can decide between a 400 (caller mistake) and a generic
//! 500 (internal failure) without inspecting message strings.

use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The client-credentials exchange against the token endpoint failed.
    #[error("credential exchange failed: {0}")]
    Credential(String),

    /// A tag's top-tracks lookup failed; the whole aggregation fails with it.
    #[error("tag lookup failed: {0}")]
    Aggregation(String),

    /// A track-search call against the streaming platform failed.
    #[error("track search failed: {0}")]
    Resolution(String),

    /// Creating the playlist container failed; no tracks were appended.
    #[error("playlist creation failed: {0}")]
    PlaylistCreate(String),

    /// Appending tracks failed after the playlist was created. The empty
    /// playlist is left in place.
    #[error("adding tracks to playlist failed: {0}")]
    PlaylistTrackAppend(String),

    /// Missing or malformed caller input.
    #[error("{0}")]
    Validation(String),
}

impl ServiceError {
    /// The HTTP status this error surfaces as at the request boundary.
    ///
    /// Validation failures are the caller's fault (400); everything else is
    /// an internal failure reported as a generic 500 with the detailed cause
    /// kept in the server log.
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
