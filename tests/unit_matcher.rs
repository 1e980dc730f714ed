// tests/unit_matcher.rs
use speclink_core::matcher::{LinkMatcher, Resolution, DEFAULT_SIMILARITY_THRESHOLD};

fn matcher(ids: &[&str]) -> LinkMatcher {
    LinkMatcher::new(ids.iter().copied(), DEFAULT_SIMILARITY_THRESHOLD)
}

#[test]
fn test_exact_match_after_normalization() {
    let m = matcher(&["Alpha Spec", "Beta Spec", "Gamma"]);
    assert_eq!(m.resolve("alpha_spec.xlsx"), Resolution::Exact("Alpha Spec".into()));
    assert_eq!(m.resolve("Beta Spec_v3"), Resolution::Exact("Beta Spec".into()));
}

#[test]
fn test_fuzzy_match_above_threshold() {
    let m = matcher(&["Alpha Spec", "Beta Spec"]);
    match m.resolve("Alpha Spek") {
        Resolution::Fuzzy { target, score } => {
            assert_eq!(target, "Alpha Spec");
            assert!((score - 0.9).abs() < 1e-12, "score was {score}");
        }
        other => panic!("expected fuzzy match, got {other:?}"),
    }
}

#[test]
fn test_fuzzy_respects_threshold() {
    let strict = LinkMatcher::new(["Alpha Spec"], 0.95);
    assert_eq!(
        strict.resolve("Alpha Spek"),
        Resolution::Unmatched {
            normalized: "alpha spek".into()
        }
    );
}

#[test]
fn test_unmatched_keeps_normalized_text() {
    let m = matcher(&["Alpha Spec"]);
    let r = m.resolve("Completely Different.xlsx");
    assert_eq!(r.target(), None);
    assert_eq!(
        r,
        Resolution::Unmatched {
            normalized: "completely different".into()
        }
    );
}

#[test]
fn test_fuzzy_tie_prefers_lowest_id() {
    let m = LinkMatcher::new(["abcY", "abcX"], 0.7);
    assert_eq!(
        m.resolve("abcz"),
        Resolution::Fuzzy {
            target: "abcX".into(),
            score: 0.75
        }
    );
}

#[test]
fn test_shared_key_prefers_lowest_id() {
    let m = matcher(&["Spec_2", "Spec_1"]);
    assert_eq!(m.resolve("Spec"), Resolution::Exact("Spec_1".into()));
    assert_eq!(m.resolve("Spec_3"), Resolution::Exact("Spec_1".into()));
}

#[test]
fn test_reference_naming_an_id_wins_over_shared_key() {
    let m = matcher(&["Spec_1", "Spec_2"]);
    assert_eq!(m.resolve("Spec_2"), Resolution::Exact("Spec_2".into()));
    assert_eq!(m.resolve(" spec_2.XLSX "), Resolution::Exact("Spec_2".into()));
    assert_eq!(m.resolve("Spec_1.xlsx"), Resolution::Exact("Spec_1".into()));
}

#[test]
fn test_non_ascii_fuzzy() {
    let m = matcher(&["機能仕様書ABCDEFGH"]);
    assert_eq!(m.resolve("機能仕様書ABCDEFGI").target(), Some("機能仕様書ABCDEFGH"));
}
