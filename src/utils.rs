use std::{collections::HashSet, time::Duration};

use rand::seq::SliceRandom;
use reqwest::Client;

use crate::types::CandidateTrack;

const HTTP_TIMEOUT_SECS: u64 = 10;

/// HTTP client for external calls, with a bounded per-request timeout.
/// The service has no retry or backoff of its own, so a hung upstream must
/// not hang the request forever.
pub fn http_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()
        .expect("failed to build HTTP client")
}

/// Normalizes a raw tag: lowercase, whitespace collapsed to hyphens.
/// Returns `None` when nothing remains. Semantic correctness is not checked.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let tag = raw
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();

    if tag.is_empty() { None } else { Some(tag) }
}

/// Equality key for candidate dedup: `lowercase(name)-lowercase(artist)`.
pub fn track_key(track: &CandidateTrack) -> String {
    format!(
        "{}-{}",
        track.name.to_lowercase(),
        track.artist.to_lowercase()
    )
}

/// Uniform Fisher-Yates permutation of the candidate pool.
pub fn shuffle_tracks(tracks: &mut Vec<CandidateTrack>) {
    tracks.shuffle(&mut rand::rng());
}

/// Keeps the first occurrence of each equality key, preserving order among
/// survivors.
pub fn dedupe_tracks(tracks: &mut Vec<CandidateTrack>) {
    let mut seen_keys = HashSet::new();
    tracks.retain(|track| seen_keys.insert(track_key(track)));
}
