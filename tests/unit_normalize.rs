// tests/unit_normalize.rs
use speclink_core::normalize::normalize;

#[test]
fn test_trims_and_strips_extension() {
    assert_eq!(normalize("  Spec A.xlsx "), "spec a");
    assert_eq!(normalize("Spec A.PDF"), "spec a");
    assert_eq!(normalize("Spec A.xlsm"), "spec a");
}

#[test]
fn test_strips_date_and_version_suffixes() {
    assert_eq!(normalize("Spec_A_20200401.xlsx"), "spec a");
    assert_eq!(normalize("Spec_A_v2"), "spec a");
    assert_eq!(normalize("Spec_A_v2_20200401"), "spec a");
    assert_eq!(normalize("Spec-2020-04-01.pdf"), "spec");
    assert_eq!(normalize("Spec_A_3"), "spec a");
}

#[test]
fn test_collapses_separators() {
    assert_eq!(normalize("Spec__A"), "spec a");
    assert_eq!(normalize("Spec _ A"), "spec a");
    assert_eq!(normalize("A--B"), "a-b");
}

#[test]
fn test_preserves_japanese_text() {
    assert_eq!(normalize("機能仕様書　ABC_1.xlsx"), "機能仕様書 abc");
    assert_eq!(normalize("画面設計書"), "画面設計書");
}

#[test]
fn test_identity_fallback() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   "), "");
    assert_eq!(normalize(".pdf"), ".pdf");
    assert_eq!(normalize("_20200401"), "20200401");
}

#[test]
fn test_deterministic_and_stable() {
    for raw in ["Spec_A_v2.xlsx", "機能仕様書_20240101", "  mixed Case  "] {
        let key = normalize(raw);
        assert_eq!(normalize(raw), key, "same input must give same key");
        assert_eq!(normalize(&key), key, "key of {raw} should be a fixed point");
    }
}
