use crate::{
    Res, config,
    error::ServiceError,
    types::{AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, CreatePlaylistResponse},
    utils,
};

/// Creates a private playlist owned by the given user.
///
/// # Arguments
///
/// * `token` - Per-user access token for bearer authentication
/// * `user_id` - Platform id of the playlist owner
/// * `name` - Display name for the new playlist
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(CreatePlaylistResponse)` - The new playlist's id and external URL
/// - `Err(ServiceError::PlaylistCreate)` - Network error, non-success status,
///   or a malformed response body
pub async fn create(token: &str, user_id: &str, name: &str) -> Res<CreatePlaylistResponse> {
    let api_url = format!(
        "{uri}/users/{id}/playlists",
        uri = &config::spotify_api_url(),
        id = user_id
    );

    let request = CreatePlaylistRequest {
        name: name.to_string(),
        description: "Songs based on your mood".to_string(),
        public: false,
    };

    let response = utils::http_client()
        .post(&api_url)
        .bearer_auth(token)
        .json(&request)
        .send()
        .await
        .map_err(|e| ServiceError::PlaylistCreate(e.to_string()))?
        .error_for_status()
        .map_err(|e| ServiceError::PlaylistCreate(e.to_string()))?;

    let playlist = response
        .json::<CreatePlaylistResponse>()
        .await
        .map_err(|e| ServiceError::PlaylistCreate(e.to_string()))?;

    Ok(playlist)
}

/// Appends track references to an existing playlist in a single batch call.
///
/// The references are sent in the order given and end up in that order in the
/// playlist.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(AddTracksResponse)` - The playlist snapshot after the append
/// - `Err(ServiceError::PlaylistTrackAppend)` - Network error, non-success
///   status, or a malformed response body
pub async fn add_tracks(
    token: &str,
    playlist_id: &str,
    uris: Vec<String>,
) -> Res<AddTracksResponse> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_api_url(),
        id = playlist_id
    );

    let request = AddTracksRequest { uris };

    let response = utils::http_client()
        .post(&api_url)
        .bearer_auth(token)
        .json(&request)
        .send()
        .await
        .map_err(|e| ServiceError::PlaylistTrackAppend(e.to_string()))?
        .error_for_status()
        .map_err(|e| ServiceError::PlaylistTrackAppend(e.to_string()))?;

    let snapshot = response
        .json::<AddTracksResponse>()
        .await
        .map_err(|e| ServiceError::PlaylistTrackAppend(e.to_string()))?;

    Ok(snapshot)
}

/// Publishes a playlist: create the container, then append all references.
///
/// The two calls form the unit of publishing; a created playlist is always
/// immediately followed by an append attempt against its id. If creation
/// fails no append is attempted. If the append fails the created playlist is
/// left in place, empty, and the error is surfaced as
/// [`ServiceError::PlaylistTrackAppend`]; there is no compensating delete.
///
/// # Returns
///
/// The external (open-in-app) URL of the playlist, only on full success.
pub async fn publish(token: &str, user_id: &str, name: &str, uris: Vec<String>) -> Res<String> {
    let playlist = create(token, user_id, name).await?;
    let playlist_url = playlist.external_urls.spotify.clone().unwrap_or_default();

    add_tracks(token, &playlist.id, uris).await?;

    Ok(playlist_url)
}
