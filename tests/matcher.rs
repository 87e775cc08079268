use webmify::media::matcher::{similarity, Matcher, RatioMatcher};
use webmify::media::MediaFile;

fn files(names: &[&str]) -> Vec<MediaFile> {
    names.iter().map(|n| MediaFile::new(*n)).collect()
}

#[test]
fn test_identical_strings_score_one() {
    assert_eq!(similarity("ep1.mkv", "ep1.mkv"), 1.0);
}

#[test]
fn test_empty_strings_are_identical() {
    assert_eq!(similarity("", ""), 1.0);
}

#[test]
fn test_disjoint_strings_score_zero() {
    assert_eq!(similarity("abc", "xyz"), 0.0);
}

#[test]
fn test_extension_change_scores_above_cutoff() {
    // same stem, different container — the case reconciliation depends on
    assert!(similarity("ep1.mkv", "ep1.webm") >= 0.6);
}

#[test]
fn test_best_match_finds_same_stem_counterpart() {
    let matcher = RatioMatcher::default();
    let candidates = files(&["ep1.webm", "ep2.webm", "ep3.webm"]);
    let matched = matcher.best_match("ep2.mkv", &candidates).unwrap();
    assert_eq!(matched.name, "ep2.webm");
}

#[test]
fn test_best_match_rejects_dissimilar_names() {
    let matcher = RatioMatcher::default();
    let candidates = files(&["completely-different-show.webm"]);
    assert!(matcher.best_match("ep1.mkv", &candidates).is_none());
}

#[test]
fn test_best_match_empty_candidates() {
    let matcher = RatioMatcher::default();
    assert!(matcher.best_match("ep1.mkv", &[]).is_none());
}

#[test]
fn test_custom_threshold() {
    let strict = RatioMatcher::with_threshold(0.95);
    let candidates = files(&["ep1.webm"]);
    assert!(strict.best_match("ep1.mkv", &candidates).is_none());

    let lax = RatioMatcher::with_threshold(0.1);
    assert!(lax.best_match("ep1.mkv", &candidates).is_some());
}

#[test]
fn test_long_episode_names() {
    let matcher = RatioMatcher::default();
    let candidates = files(&[
        "Some Show - S04E05 - The One Before.webm",
        "Some Show - S04E06 - The One After.webm",
    ]);
    let matched = matcher
        .best_match("Some Show - S04E06 - The One After.mkv", &candidates)
        .unwrap();
    assert_eq!(matched.name, "Some Show - S04E06 - The One After.webm");
}
