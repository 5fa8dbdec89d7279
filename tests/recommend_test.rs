use std::collections::{HashMap, HashSet};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use chrono::DateTime;

use moodlist::Res;
use moodlist::error::ServiceError;
use moodlist::management::{Clock, CredentialCache, CredentialExchanger};
use moodlist::recommend::{TagCatalog, TrackSearcher, aggregate, resolve};
use moodlist::types::{CandidateTrack, TokenResponse};

// Helper function to create a test candidate
fn create_test_track(name: &str, artist: &str) -> CandidateTrack {
    CandidateTrack {
        name: name.to_string(),
        artist: artist.to_string(),
    }
}

// Scripted catalog: fixed pool per tag, one optional always-failing tag.
struct FakeCatalog {
    pools: HashMap<String, Vec<CandidateTrack>>,
    fail_tag: Option<String>,
    calls: Arc<AtomicUsize>,
}

impl FakeCatalog {
    fn new(pools: Vec<(&str, Vec<CandidateTrack>)>) -> Self {
        FakeCatalog {
            pools: pools
                .into_iter()
                .map(|(tag, tracks)| (tag.to_string(), tracks))
                .collect(),
            fail_tag: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn failing_on(mut self, tag: &str) -> Self {
        self.fail_tag = Some(tag.to_string());
        self
    }
}

#[async_trait]
impl TagCatalog for FakeCatalog {
    async fn top_tracks(&self, tag: &str, _limit: u32) -> Res<Vec<CandidateTrack>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_tag.as_deref() == Some(tag) {
            return Err(ServiceError::Aggregation(format!(
                "tag \"{}\" lookup failed",
                tag
            )));
        }

        Ok(self.pools.get(tag).cloned().unwrap_or_default())
    }
}

// Scripted searcher: every candidate matches unless its name is listed as a
// miss (no match) or a failure (search error).
struct FakeSearcher {
    misses: HashSet<String>,
    failures: HashSet<String>,
    calls: Arc<AtomicUsize>,
}

impl FakeSearcher {
    fn new() -> Self {
        FakeSearcher {
            misses: HashSet::new(),
            failures: HashSet::new(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn missing(mut self, name: &str) -> Self {
        self.misses.insert(name.to_string());
        self
    }

    fn failing_on(mut self, name: &str) -> Self {
        self.failures.insert(name.to_string());
        self
    }
}

#[async_trait]
impl TrackSearcher for FakeSearcher {
    async fn find_track(&self, _token: &str, candidate: &CandidateTrack) -> Res<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.failures.contains(&candidate.name) {
            return Err(ServiceError::Resolution("search returned 500".to_string()));
        }

        if self.misses.contains(&candidate.name) {
            return Ok(None);
        }

        Ok(Some(format!(
            "https://open.example.com/track/{}",
            candidate.name
        )))
    }
}

struct FakeExchanger {
    fail: bool,
}

#[async_trait]
impl CredentialExchanger for FakeExchanger {
    async fn exchange(&self) -> Res<TokenResponse> {
        if self.fail {
            return Err(ServiceError::Credential(
                "token endpoint returned 503".to_string(),
            ));
        }

        Ok(TokenResponse {
            access_token: "service-token".to_string(),
            expires_in: 3600,
        })
    }
}

fn fixed_clock() -> Clock {
    let at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    Box::new(move || at)
}

fn test_cache(fail: bool) -> CredentialCache {
    CredentialCache::with_clock(Box::new(FakeExchanger { fail }), fixed_clock())
}

#[tokio::test]
async fn test_aggregate_flattens_tags_in_request_order() {
    let calm = vec![create_test_track("A", "X"), create_test_track("B", "Y")];
    let happy = vec![create_test_track("C", "Z")];
    let catalog = FakeCatalog::new(vec![("calm", calm.clone()), ("happy", happy.clone())]);

    let tags = vec!["calm".to_string(), "happy".to_string()];
    let candidates = aggregate(&catalog, &tags).await.unwrap();

    // One flat pool, tag order preserved as request order
    assert_eq!(candidates.len(), 3);
    assert_eq!(candidates[..2], calm[..]);
    assert_eq!(candidates[2..], happy[..]);
    assert_eq!(catalog.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_aggregate_keeps_duplicates_across_tags() {
    let pool = vec![create_test_track("A", "B")];
    let catalog = FakeCatalog::new(vec![("calm", pool.clone()), ("chill", pool.clone())]);

    let tags = vec!["calm".to_string(), "chill".to_string()];
    let candidates = aggregate(&catalog, &tags).await.unwrap();

    // Aggregation itself does not deduplicate
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0], candidates[1]);
}

#[tokio::test]
async fn test_aggregate_rejects_empty_tag_list() {
    let catalog = FakeCatalog::new(vec![]);

    let err = aggregate(&catalog, &[]).await.unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(catalog.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_aggregate_fails_entirely_when_one_tag_fails() {
    let calm = vec![create_test_track("A", "X")];
    let catalog = FakeCatalog::new(vec![("calm", calm)]).failing_on("happy");

    let tags = vec!["calm".to_string(), "happy".to_string()];
    let err = aggregate(&catalog, &tags).await.unwrap_err();

    // No partial-result policy: the caller sees one aggregate error
    assert!(matches!(err, ServiceError::Aggregation(_)));
}

#[tokio::test]
async fn test_resolve_stops_at_max_results() {
    let candidates: Vec<CandidateTrack> = (0..10)
        .map(|i| create_test_track(&format!("Track {}", i), "Artist"))
        .collect();
    let cache = test_cache(false);
    let searcher = FakeSearcher::new();

    let recommendation = resolve(&cache, &searcher, &candidates, 5).await.unwrap();

    // Exactly five references from five search calls; the walk stops early
    assert_eq!(recommendation.tracks.len(), 5);
    assert_eq!(recommendation.skipped, 0);
    assert_eq!(searcher.calls.load(Ordering::SeqCst), 5);
}

#[tokio::test]
async fn test_resolve_returns_fewer_when_candidates_run_out() {
    let candidates = vec![
        create_test_track("A", "X"),
        create_test_track("B", "Y"),
        create_test_track("C", "Z"),
    ];
    let cache = test_cache(false);
    let searcher = FakeSearcher::new();

    let recommendation = resolve(&cache, &searcher, &candidates, 5).await.unwrap();

    // Fewer than max_results is a valid, non-error outcome
    assert_eq!(recommendation.tracks.len(), 3);
    assert_eq!(searcher.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_resolve_skips_failed_searches_and_counts_them() {
    let candidates = vec![
        create_test_track("A", "X"),
        create_test_track("B", "Y"),
        create_test_track("C", "Z"),
    ];
    let cache = test_cache(false);
    let searcher = FakeSearcher::new().failing_on("B");

    let recommendation = resolve(&cache, &searcher, &candidates, 5).await.unwrap();

    // The failing candidate is skipped, the rest still resolve
    assert_eq!(
        recommendation.tracks,
        vec![
            "https://open.example.com/track/A".to_string(),
            "https://open.example.com/track/C".to_string(),
        ]
    );
    assert_eq!(recommendation.skipped, 1);
}

#[tokio::test]
async fn test_resolve_does_not_count_unmatched_candidates_as_skipped() {
    let candidates = vec![create_test_track("A", "X"), create_test_track("B", "Y")];
    let cache = test_cache(false);
    let searcher = FakeSearcher::new().missing("A");

    let recommendation = resolve(&cache, &searcher, &candidates, 5).await.unwrap();

    // No match is not a failure
    assert_eq!(
        recommendation.tracks,
        vec!["https://open.example.com/track/B".to_string()]
    );
    assert_eq!(recommendation.skipped, 0);
}

#[tokio::test]
async fn test_resolve_aborts_on_credential_failure_before_any_search() {
    let candidates = vec![create_test_track("A", "X"), create_test_track("B", "Y")];
    let cache = test_cache(true);
    let searcher = FakeSearcher::new();

    let err = resolve(&cache, &searcher, &candidates, 5).await.unwrap_err();

    assert!(matches!(err, ServiceError::Credential(_)));
    assert_eq!(searcher.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_resolve_with_zero_max_results_makes_no_calls() {
    let candidates = vec![create_test_track("A", "X")];
    let cache = test_cache(false);
    let searcher = FakeSearcher::new();

    let recommendation = resolve(&cache, &searcher, &candidates, 0).await.unwrap();

    assert!(recommendation.tracks.is_empty());
    assert_eq!(searcher.calls.load(Ordering::SeqCst), 0);
}
