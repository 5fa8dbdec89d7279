use crate::{Res, config, error::ServiceError, types::UserProfile, utils};

/// Resolves the profile of the user a token belongs to.
///
/// The publish endpoint uses this to determine the playlist owner from the
/// caller-supplied user token instead of requiring an explicit owner id in
/// the request. Failure maps to [`ServiceError::PlaylistCreate`]: without an
/// owner the playlist cannot be created, and no playlist call has been made
/// yet at this point.
pub async fn me(token: &str) -> Res<UserProfile> {
    let api_url = format!("{uri}/me", uri = &config::spotify_api_url());

    let response = utils::http_client()
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| ServiceError::PlaylistCreate(e.to_string()))?
        .error_for_status()
        .map_err(|e| ServiceError::PlaylistCreate(e.to_string()))?;

    let profile = response
        .json::<UserProfile>()
        .await
        .map_err(|e| ServiceError::PlaylistCreate(e.to_string()))?;

    Ok(profile)
}
