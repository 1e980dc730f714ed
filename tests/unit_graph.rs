// tests/unit_graph.rs
//! Graph construction invariants.

use speclink_core::error::LinkError;
use speclink_core::graph::{builder, DocumentGraph};
use speclink_core::matcher::DEFAULT_SIMILARITY_THRESHOLD;
use speclink_core::types::{Document, Link, MatchType, SourceDocument, UnmatchedLink};

fn src(id: &str, refs: &[&str]) -> SourceDocument {
    SourceDocument::new(id, refs.iter().map(|r| (*r).to_string()).collect())
}

fn doc(id: &str) -> Document {
    Document {
        id: id.into(),
        filename: format!("{id}.xlsx"),
        path: format!("corpus/{id}.xlsx"),
        normalized_name: id.to_lowercase(),
        raw_references: Vec::new(),
        resolved_link_count: 0,
    }
}

fn sample() -> DocumentGraph {
    builder::build(
        vec![
            src("Alpha", &["Beta", "Beta.xlsx", "Alpha", "Unknown Thing"]),
            src("Beta", &["Alpha_v2"]),
            src("Gamma", &[]),
        ],
        DEFAULT_SIMILARITY_THRESHOLD,
    )
    .unwrap()
}

#[test]
fn test_duplicate_references_collapse_to_one_edge() {
    let g = sample();
    assert_eq!(g.link_count(), 2);
    assert!(g.has_edge("Alpha", "Beta"));
    assert!(g.has_edge("Beta", "Alpha"));
    assert_eq!(g.link("Alpha", "Beta").unwrap().original_text, "Beta");
}

#[test]
fn test_self_reference_is_never_a_link() {
    let g = sample();
    assert!(!g.has_edge("Alpha", "Alpha"));
    assert!(
        g.unmatched_links().iter().all(|u| u.original_text != "Alpha"),
        "a self reference is resolved, then discarded"
    );
}

#[test]
fn test_unmatched_references_are_recorded() {
    let g = sample();
    assert_eq!(g.unmatched_links().len(), 1);
    let u = &g.unmatched_links()[0];
    assert_eq!(u.source_id, "Alpha");
    assert_eq!(u.original_text, "Unknown Thing");
    assert_eq!(u.normalized_text, "unknown thing");
}

#[test]
fn test_documents_keep_raw_references_and_counts() {
    let g = sample();
    let alpha = g.document("Alpha").unwrap();
    assert_eq!(alpha.raw_references.len(), 4);
    assert_eq!(alpha.resolved_link_count, 1);
    assert_eq!(alpha.normalized_name, "alpha");
    assert_eq!(g.document("Gamma").unwrap().resolved_link_count, 0);
    assert_eq!(g.ids().collect::<Vec<_>>(), vec!["Alpha", "Beta", "Gamma"]);
}

#[test]
fn test_out_neighbors() {
    let g = DocumentGraph::from_parts(
        vec![doc("A"), doc("B"), doc("C"), doc("D")],
        vec![Link::manual("A", "B"), Link::manual("A", "C"), Link::manual("B", "D")],
        Vec::new(),
    )
    .unwrap();
    assert_eq!(g.out_neighbors("A").into_iter().collect::<Vec<_>>(), vec!["B", "C"]);
    assert_eq!(g.out_neighbors("B").into_iter().collect::<Vec<_>>(), vec!["D"]);
    assert!(g.out_neighbors("D").is_empty());
}

#[test]
fn test_from_parts_drops_self_links_and_duplicates() {
    let g = DocumentGraph::from_parts(
        vec![doc("A"), doc("B")],
        vec![Link::manual("A", "A"), Link::manual("A", "B"), Link::manual("A", "B")],
        Vec::new(),
    )
    .unwrap();
    assert_eq!(g.link_count(), 1);
    assert_eq!(g.link("A", "B").unwrap().match_type, MatchType::Manual);
    assert_eq!(g.document("A").unwrap().resolved_link_count, 1);
}

#[test]
fn test_dangling_link_is_rejected() {
    let err = DocumentGraph::from_parts(vec![doc("A")], vec![Link::manual("A", "Z")], Vec::new())
        .unwrap_err();
    assert!(matches!(err, LinkError::DanglingLink { .. }));
}

#[test]
fn test_duplicate_document_is_rejected() {
    let err = DocumentGraph::from_parts(vec![doc("A"), doc("A")], Vec::new(), Vec::new()).unwrap_err();
    assert!(matches!(err, LinkError::DuplicateDocument(id) if id == "A"));
}

#[test]
fn test_empty_corpus_is_rejected() {
    let err = builder::build(Vec::new(), DEFAULT_SIMILARITY_THRESHOLD).unwrap_err();
    assert!(matches!(err, LinkError::EmptyCorpus));
}

#[test]
fn test_fuzzy_links_carry_score() {
    let g = builder::build(
        vec![src("Interface Spec", &[]), src("Other", &["Interface Spek"])],
        DEFAULT_SIMILARITY_THRESHOLD,
    )
    .unwrap();
    let link = g.link("Other", "Interface Spec").unwrap();
    assert_eq!(link.match_type, MatchType::Fuzzy);
    assert!(link.score.unwrap() >= DEFAULT_SIMILARITY_THRESHOLD);
}

#[test]
fn test_reference_reaches_document_sharing_a_key() {
    let g = builder::build(
        vec![src("Index", &["Spec_2"]), src("Spec_1", &[]), src("Spec_2", &[])],
        DEFAULT_SIMILARITY_THRESHOLD,
    )
    .unwrap();
    assert!(g.has_edge("Index", "Spec_2"));
    assert!(!g.has_edge("Index", "Spec_1"));
}

#[test]
fn test_orphan_unmatched_record_is_rejected() {
    let err = DocumentGraph::from_parts(
        vec![doc("A")],
        Vec::new(),
        vec![UnmatchedLink {
            source_id: "Gone".into(),
            original_text: "Lost".into(),
            normalized_text: "lost".into(),
        }],
    )
    .unwrap_err();
    assert!(matches!(err, LinkError::OrphanUnmatched { source_id, .. } if source_id == "Gone"));
}
