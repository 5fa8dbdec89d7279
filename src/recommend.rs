//! The recommendation pipeline.
//!
//! Tags flow through four stages: aggregation (top tracks per tag from the
//! catalog), shuffle, dedup, and resolution (best-match search against the
//! streaming platform, bounded at [`MAX_RESULTS`]). Candidate and resolved
//! tracks are ephemeral, scoped to one request; the only state shared across
//! requests is the credential cache the resolver consults.
//!
//! The catalog and searcher sit behind small traits so the pipeline can be
//! exercised against scripted fakes, the same pattern the credential cache
//! uses for its exchanger.

use async_trait::async_trait;

use crate::{
    Res,
    error::ServiceError,
    lastfm,
    management::CredentialCache,
    spotify,
    types::CandidateTrack,
    utils, warning,
};

/// Per-tag limit for catalog top-track requests.
pub const TAG_TRACK_LIMIT: u32 = 50;

/// Upper bound on resolved references per request.
pub const MAX_RESULTS: usize = 5;

/// Source of candidate tracks for a tag.
#[async_trait]
pub trait TagCatalog: Send + Sync {
    async fn top_tracks(&self, tag: &str, limit: u32) -> Res<Vec<CandidateTrack>>;
}

/// The production catalog, backed by the Last.fm Web API.
#[derive(Debug, Default)]
pub struct LastfmCatalog;

#[async_trait]
impl TagCatalog for LastfmCatalog {
    async fn top_tracks(&self, tag: &str, limit: u32) -> Res<Vec<CandidateTrack>> {
        lastfm::top_tracks(tag, limit).await
    }
}

/// Best-match lookup of a candidate on the streaming platform.
#[async_trait]
pub trait TrackSearcher: Send + Sync {
    async fn find_track(&self, token: &str, candidate: &CandidateTrack) -> Res<Option<String>>;
}

/// The production searcher, backed by the Spotify search endpoint.
#[derive(Debug, Default)]
pub struct SpotifySearcher;

#[async_trait]
impl TrackSearcher for SpotifySearcher {
    async fn find_track(&self, token: &str, candidate: &CandidateTrack) -> Res<Option<String>> {
        spotify::search::find_track(token, &candidate.name, &candidate.artist).await
    }
}

/// Outcome of a resolution walk: the resolved references plus the number of
/// candidates skipped because their search call failed.
#[derive(Debug)]
pub struct Recommendation {
    pub tracks: Vec<String>,
    pub skipped: usize,
}

/// Collects the candidate pool for a set of tags.
///
/// One catalog request per tag, in the order given; the returned pool is the
/// flat concatenation of the per-tag responses and may contain duplicates,
/// both within and across tags. A failure fetching any tag's tracks fails the
/// entire aggregation; there is no partial-result policy.
///
/// # Errors
///
/// - [`ServiceError::Validation`] when `tags` is empty
/// - [`ServiceError::Aggregation`] when any tag lookup fails
pub async fn aggregate(catalog: &dyn TagCatalog, tags: &[String]) -> Res<Vec<CandidateTrack>> {
    if tags.is_empty() {
        return Err(ServiceError::Validation(
            "missing or empty tag list".to_string(),
        ));
    }

    let mut candidates = Vec::new();
    for tag in tags {
        let mut tracks = catalog.top_tracks(tag, TAG_TRACK_LIMIT).await?;
        candidates.append(&mut tracks);
    }

    Ok(candidates)
}

/// Resolves ordered candidates against the streaming platform.
///
/// Walks the list sequentially, fetching the shared service credential
/// before each search, and stops as soon as `max_results` references have
/// been collected or the list is exhausted. Fewer than `max_results` is a
/// valid, non-error outcome. Sequential on purpose: the search endpoint is
/// rate limited per credential, and "first N good matches" keeps its meaning
/// only in order.
///
/// A failed search skips that candidate and continues; the skip count is
/// reported on the returned [`Recommendation`]. A failed credential refresh
/// aborts the walk immediately, before any further search call.
pub async fn resolve(
    cache: &CredentialCache,
    searcher: &dyn TrackSearcher,
    candidates: &[CandidateTrack],
    max_results: usize,
) -> Res<Recommendation> {
    let mut tracks = Vec::new();
    let mut skipped = 0;

    for candidate in candidates {
        if tracks.len() >= max_results {
            break;
        }

        let token = cache.get().await?;

        match searcher.find_track(&token, candidate).await {
            Ok(Some(url)) => tracks.push(url),
            Ok(None) => {}
            Err(e) => {
                skipped += 1;
                warning!(
                    "Skipping candidate \"{}\" by \"{}\": {}",
                    candidate.name,
                    candidate.artist,
                    e
                );
            }
        }
    }

    Ok(Recommendation { tracks, skipped })
}

/// Runs the full pipeline for a set of raw tags.
///
/// Tags are normalized first (lowercased, whitespace collapsed to hyphens,
/// empties dropped); candidates are then aggregated, shuffled, deduplicated,
/// and resolved against the production catalog and searcher.
pub async fn recommend(cache: &CredentialCache, tags: &[String]) -> Res<Recommendation> {
    let tags: Vec<String> = tags
        .iter()
        .filter_map(|tag| utils::normalize_tag(tag))
        .collect();

    let mut candidates = aggregate(&LastfmCatalog, &tags).await?;
    utils::shuffle_tracks(&mut candidates);
    utils::dedupe_tracks(&mut candidates);

    resolve(cache, &SpotifySearcher, &candidates, MAX_RESULTS).await
}
