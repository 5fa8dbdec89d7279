use moodlist::types::CandidateTrack;
use moodlist::utils::*;

// Helper function to create a test candidate
fn create_test_track(name: &str, artist: &str) -> CandidateTrack {
    CandidateTrack {
        name: name.to_string(),
        artist: artist.to_string(),
    }
}

#[test]
fn test_normalize_tag() {
    // Whitespace collapses to single hyphens
    assert_eq!(
        normalize_tag("  Chill   Out  "),
        Some("chill-out".to_string())
    );

    // Already-normal tags pass through unchanged
    assert_eq!(normalize_tag("calm"), Some("calm".to_string()));

    // Mixed case is lowered
    assert_eq!(normalize_tag("Lo-Fi Beats"), Some("lo-fi-beats".to_string()));

    // Empty and whitespace-only inputs are rejected
    assert_eq!(normalize_tag(""), None);
    assert_eq!(normalize_tag("   "), None);
}

#[test]
fn test_track_key_is_case_insensitive() {
    let track = create_test_track("Weightless", "Marconi Union");
    assert_eq!(track_key(&track), "weightless-marconi union");

    // Same pair in different casing produces the same key
    let shouty = create_test_track("WEIGHTLESS", "MARCONI UNION");
    assert_eq!(track_key(&track), track_key(&shouty));

    // Different artist produces a different key
    let cover = create_test_track("Weightless", "Someone Else");
    assert_ne!(track_key(&track), track_key(&cover));
}

#[test]
fn test_shuffle_tracks_is_a_permutation() {
    let mut tracks: Vec<CandidateTrack> = (0..20)
        .map(|i| create_test_track(&format!("Track {}", i), &format!("Artist {}", i)))
        .collect();
    let original = tracks.clone();

    shuffle_tracks(&mut tracks);

    // Same length, same elements
    assert_eq!(tracks.len(), original.len());

    let mut sorted_shuffled = tracks.clone();
    sorted_shuffled.sort_by_key(track_key);
    let mut sorted_original = original.clone();
    sorted_original.sort_by_key(track_key);
    assert_eq!(sorted_shuffled, sorted_original);
}

#[test]
fn test_shuffle_tracks_handles_trivial_inputs() {
    let mut empty: Vec<CandidateTrack> = Vec::new();
    shuffle_tracks(&mut empty);
    assert!(empty.is_empty());

    let mut single = vec![create_test_track("A", "B")];
    shuffle_tracks(&mut single);
    assert_eq!(single, vec![create_test_track("A", "B")]);
}

#[test]
fn test_dedupe_tracks_keeps_first_occurrence() {
    let mut tracks = vec![
        create_test_track("A", "X"),
        create_test_track("B", "Y"),
        create_test_track("a", "x"), // duplicate of the first, different case
        create_test_track("C", "Z"),
        create_test_track("B", "Y"), // exact duplicate
    ];

    dedupe_tracks(&mut tracks);

    // Should keep the first occurrence of each key, in order
    assert_eq!(
        tracks,
        vec![
            create_test_track("A", "X"),
            create_test_track("B", "Y"),
            create_test_track("C", "Z"),
        ]
    );
}

#[test]
fn test_dedupe_tracks_collapses_duplicate_tag_pools() {
    // Two tags returning the identical track produce two raw candidates
    let mut tracks = vec![create_test_track("A", "B"), create_test_track("A", "B")];
    assert_eq!(tracks.len(), 2);

    dedupe_tracks(&mut tracks);

    // Exactly one survives
    assert_eq!(tracks, vec![create_test_track("A", "B")]);
}

#[test]
fn test_shuffle_then_dedupe_represents_every_key_once() {
    use std::collections::HashSet;

    let mut tracks = vec![
        create_test_track("A", "X"),
        create_test_track("B", "Y"),
        create_test_track("A", "X"),
        create_test_track("C", "Z"),
        create_test_track("c", "z"),
        create_test_track("B", "Y"),
    ];

    let input_keys: HashSet<String> = tracks.iter().map(track_key).collect();

    shuffle_tracks(&mut tracks);
    dedupe_tracks(&mut tracks);

    let output_keys: HashSet<String> = tracks.iter().map(track_key).collect();

    // No two survivors share a key, and every input key is represented
    assert_eq!(tracks.len(), output_keys.len());
    assert_eq!(output_keys, input_keys);
}
