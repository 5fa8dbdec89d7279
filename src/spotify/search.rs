use crate::{Res, config, error::ServiceError, types::SearchResponse, utils};

/// Searches the streaming platform for the best match of a candidate track.
///
/// Issues a single track search with the query `"{name} {artist}"` (the
/// artist is omitted when absent) and a result limit of 1, returning the
/// canonical external URL of the match if one exists.
///
/// # Arguments
///
/// * `token` - Service-level access token for bearer authentication
/// * `name` - Track title as reported by the catalog
/// * `artist` - Artist name as reported by the catalog; may be empty
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Some(url))` - The external URL of the best match
/// - `Ok(None)` - The platform knows no matching track; not an error
/// - `Err(ServiceError::Resolution)` - Network error, non-success status, or
///   a malformed response body
///
/// # Rate Limits
///
/// The search endpoint is rate limited per credential. Callers walk their
/// candidates sequentially; this function performs exactly one request and
/// never retries.
pub async fn find_track(token: &str, name: &str, artist: &str) -> Res<Option<String>> {
    let query = if artist.is_empty() {
        name.to_string()
    } else {
        format!("{} {}", name, artist)
    };

    let api_url = format!("{uri}/search", uri = &config::spotify_api_url());

    let response = utils::http_client()
        .get(&api_url)
        .bearer_auth(token)
        .query(&[("q", query.as_str()), ("type", "track"), ("limit", "1")])
        .send()
        .await
        .map_err(|e| ServiceError::Resolution(e.to_string()))?
        .error_for_status()
        .map_err(|e| ServiceError::Resolution(e.to_string()))?;

    let json = response
        .json::<SearchResponse>()
        .await
        .map_err(|e| ServiceError::Resolution(e.to_string()))?;

    Ok(json
        .tracks
        .items
        .into_iter()
        .next()
        .and_then(|track| track.external_urls.spotify))
}
