//! Tag-indexed catalog client (Last.fm Web API).
//!
//! The catalog is the source of candidate tracks: for a normalized mood or
//! genre tag it returns the tag's most popular tracks. Candidates are not yet
//! verified to exist on the streaming platform; that happens later in the
//! resolution stage. The API nests its JSON awkwardly and omits the `tracks`
//! container entirely for unknown tags, so the response types default every
//! level to empty rather than failing deserialization.

use crate::{
    Res, config,
    error::ServiceError,
    types::{CandidateTrack, TagTracksResponse},
    utils,
};

/// Fetches the top tracks for a single tag from the catalog.
///
/// Issues one `tag.getTopTracks` request with the configured API key and a
/// fixed per-tag limit, and flattens the response into candidate pairs.
///
/// # Arguments
///
/// * `tag` - Normalized tag to look up; semantic correctness is not checked
/// * `limit` - Maximum number of tracks the catalog should return
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<CandidateTrack>)` - The tag's top tracks; empty when the tag is
///   unknown to the catalog
/// - `Err(ServiceError::Aggregation)` - Network error, non-success status, or
///   a malformed response body
pub async fn top_tracks(tag: &str, limit: u32) -> Res<Vec<CandidateTrack>> {
    let response = utils::http_client()
        .get(&config::lastfm_api_url())
        .query(&[
            ("method", "tag.getTopTracks".to_string()),
            ("tag", tag.to_string()),
            ("api_key", config::lastfm_api_key()),
            ("format", "json".to_string()),
            ("limit", limit.to_string()),
        ])
        .send()
        .await
        .map_err(|e| ServiceError::Aggregation(e.to_string()))?
        .error_for_status()
        .map_err(|e| ServiceError::Aggregation(e.to_string()))?;

    let json = response
        .json::<TagTracksResponse>()
        .await
        .map_err(|e| ServiceError::Aggregation(e.to_string()))?;

    let tracks = json.tracks.map(|list| list.track).unwrap_or_default();

    Ok(tracks
        .into_iter()
        .map(|track| CandidateTrack {
            name: track.name,
            artist: track.artist.name,
        })
        .collect())
}
