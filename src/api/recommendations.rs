use std::sync::Arc;

use axum::{Extension, Json, http::StatusCode};
use serde_json::{Value, json};

use crate::{management::CredentialCache, recommend, types::RecommendationsRequest, warning};

/// Handles `POST /recommendations`.
///
/// Takes a set of mood/genre tags and responds with a bounded list of
/// resolved track references. An empty or missing tag list is a 400; any
/// internal failure surfaces as a generic 500 while the detailed cause goes
/// to the server log.
pub async fn recommendations(
    Extension(cache): Extension<Arc<CredentialCache>>,
    Json(payload): Json<RecommendationsRequest>,
) -> (StatusCode, Json<Value>) {
    if payload.tags.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Missing or invalid \"tags\"" })),
        );
    }

    match recommend::recommend(&cache, &payload.tags).await {
        Ok(recommendation) => {
            if recommendation.skipped > 0 {
                warning!(
                    "Skipped {} candidates during resolution",
                    recommendation.skipped
                );
            }

            (
                StatusCode::OK,
                Json(json!({ "tracks": recommendation.tracks })),
            )
        }
        Err(e) if e.status() == StatusCode::BAD_REQUEST => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": e.to_string() })),
        ),
        Err(e) => {
            warning!("Error fetching track recommendations: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch recommendations." })),
            )
        }
    }
}
