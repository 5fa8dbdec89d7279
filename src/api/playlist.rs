use axum::{Json, http::StatusCode};
use serde_json::{Value, json};

use crate::{spotify, types::SavePlaylistRequest, warning};

const DEFAULT_PLAYLIST_NAME: &str = "Mood Picks";

/// Handles `POST /playlists`.
///
/// Saves previously resolved track references as a private playlist on the
/// streaming platform, on behalf of the user whose access token accompanies
/// the request. The playlist owner is resolved from that token. Missing
/// references or token fail with 400 before any network call; a failure
/// after the playlist container was created leaves it behind, empty.
pub async fn save_playlist(Json(payload): Json<SavePlaylistRequest>) -> (StatusCode, Json<Value>) {
    if payload.uris.is_empty() || payload.access_token.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Missing data" })),
        );
    }

    let name = payload
        .name
        .unwrap_or_else(|| DEFAULT_PLAYLIST_NAME.to_string());

    let user = match spotify::users::me(&payload.access_token).await {
        Ok(user) => user,
        Err(e) => {
            warning!("Failed to save playlist: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to save playlist" })),
            );
        }
    };

    match spotify::playlist::publish(&payload.access_token, &user.id, &name, payload.uris).await {
        Ok(playlist_url) => (
            StatusCode::OK,
            Json(json!({ "success": true, "playlistUrl": playlist_url })),
        ),
        Err(e) => {
            warning!("Failed to save playlist: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to save playlist" })),
            )
        }
    }
}
