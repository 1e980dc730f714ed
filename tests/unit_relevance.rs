// tests/unit_relevance.rs
//! Component scores, weighting, and matrix invariants.

use speclink_core::error::LinkError;
use speclink_core::graph::DocumentGraph;
use speclink_core::relevance::{self, Metric, Weights};
use speclink_core::types::{Document, Link, MatchType};

const EPS: f64 = 1e-12;

fn doc(id: &str) -> Document {
    Document {
        id: id.into(),
        filename: id.into(),
        path: id.into(),
        normalized_name: id.to_lowercase(),
        raw_references: Vec::new(),
        resolved_link_count: 0,
    }
}

fn link(source: &str, target: &str, match_type: MatchType) -> Link {
    Link {
        source_id: source.into(),
        target_id: target.into(),
        original_text: target.into(),
        match_type,
        score: None,
    }
}

fn graph(ids: &[&str], edges: &[(&str, &str)]) -> DocumentGraph {
    DocumentGraph::from_parts(
        ids.iter().map(|id| doc(id)).collect(),
        edges.iter().map(|(s, t)| link(s, t, MatchType::Exact)).collect(),
        Vec::new(),
    )
    .unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn test_common_neighbors_worked_example() {
    let g = graph(
        &["A", "B", "C", "D", "E", "F"],
        &[("A", "C"), ("A", "D"), ("A", "E"), ("B", "D"), ("B", "E"), ("B", "F")],
    );
    let c = relevance::components(&g, "A", "B").unwrap();
    assert!(approx(c.common, 0.5), "2 shared of 4 total, got {}", c.common);
    assert!(approx(c.direct, 0.0));
    assert!(approx(c.bidirectional, 0.0));
}

#[test]
fn test_common_excludes_the_pair_itself() {
    // A -> B, A -> C, B -> C: with A and B removed, N(A) = {C}, N(B) = {C}.
    let g = graph(&["A", "B", "C"], &[("A", "B"), ("A", "C"), ("B", "C")]);
    let c = relevance::components(&g, "A", "B").unwrap();
    assert!(approx(c.common, 1.0));
}

#[test]
fn test_common_is_zero_without_neighbors() {
    let g = graph(&["A", "B"], &[]);
    let c = relevance::components(&g, "A", "B").unwrap();
    assert!(approx(c.common, 0.0));
}

#[test]
fn test_one_way_edge() {
    let g = graph(&["X", "Y"], &[("X", "Y")]);
    let xy = relevance::components(&g, "X", "Y").unwrap();
    let yx = relevance::components(&g, "Y", "X").unwrap();
    assert!(approx(xy.direct, 1.0));
    assert!(approx(yx.direct, 0.0));
    assert!(approx(xy.bidirectional, 0.5));
    assert!(approx(yx.bidirectional, 0.5));
}

#[test]
fn test_mutual_edge() {
    let g = graph(&["X", "Y"], &[("X", "Y"), ("Y", "X")]);
    let xy = relevance::components(&g, "X", "Y").unwrap();
    assert!(approx(xy.bidirectional, 1.0));
}

#[test]
fn test_combined_is_asymmetric_for_one_way_edges() {
    let g = graph(&["X", "Y"], &[("X", "Y")]);
    let m = relevance::score(&g, &Weights::default(), Metric::Combined).unwrap();
    assert!(approx(m.get("X", "Y").unwrap(), 0.65));
    assert!(approx(m.get("Y", "X").unwrap(), 0.15));
}

#[test]
fn test_diagonal_is_one_for_every_metric() {
    let g = graph(&["A", "B", "C"], &[("A", "B")]);
    for metric in [Metric::Direct, Metric::Bidirectional, Metric::CommonLinks, Metric::Combined] {
        let m = relevance::score(&g, &Weights::default(), metric).unwrap();
        for id in ["A", "B", "C"] {
            assert_eq!(m.get(id, id), Some(1.0), "{metric} diagonal for {id}");
        }
    }
}

#[test]
fn test_symmetric_components() {
    let g = graph(
        &["A", "B", "C", "D"],
        &[("A", "B"), ("B", "C"), ("C", "A"), ("A", "D"), ("D", "A"), ("B", "D")],
    );
    let ids = ["A", "B", "C", "D"];
    for a in ids {
        for b in ids {
            let ab = relevance::components(&g, a, b).unwrap();
            let ba = relevance::components(&g, b, a).unwrap();
            assert!(approx(ab.bidirectional, ba.bidirectional), "bidirectional {a},{b}");
            assert!(approx(ab.common, ba.common), "common {a},{b}");
            assert!((0.0..=1.0).contains(&ab.common));
        }
    }
}

#[test]
fn test_single_metric_selection() {
    let g = graph(&["X", "Y"], &[("X", "Y")]);
    let direct = relevance::score(&g, &Weights::default(), Metric::Direct).unwrap();
    assert_eq!(direct.get("X", "Y"), Some(1.0));
    assert_eq!(direct.get("Y", "X"), Some(0.0));
    let bi = relevance::score(&g, &Weights::default(), Metric::Bidirectional).unwrap();
    assert_eq!(bi.get("Y", "X"), Some(0.5));
}

#[test]
fn test_manual_links_score_like_exact_links() {
    let exact = graph(&["X", "Y"], &[("X", "Y")]);
    let manual = DocumentGraph::from_parts(
        vec![doc("X"), doc("Y")],
        vec![link("X", "Y", MatchType::Manual)],
        Vec::new(),
    )
    .unwrap();
    let a = relevance::score(&exact, &Weights::default(), Metric::Combined).unwrap();
    let b = relevance::score(&manual, &Weights::default(), Metric::Combined).unwrap();
    assert_eq!(a.fingerprint(), b.fingerprint());
}

#[test]
fn test_invalid_weights_fail_fast() {
    let g = graph(&["A"], &[]);
    let bad_sum = Weights {
        direct: 0.5,
        bidirectional: 0.3,
        common: 0.1,
    };
    assert!(matches!(
        relevance::score(&g, &bad_sum, Metric::Combined),
        Err(LinkError::InvalidWeights { .. })
    ));

    let negative = Weights {
        direct: 1.2,
        bidirectional: -0.2,
        common: 0.0,
    };
    assert!(matches!(negative.validate(), Err(LinkError::InvalidWeights { .. })));
}

#[test]
fn test_empty_graph_is_an_error() {
    let g = DocumentGraph::from_parts(Vec::new(), Vec::new(), Vec::new()).unwrap();
    assert!(matches!(
        relevance::score(&g, &Weights::default(), Metric::Combined),
        Err(LinkError::EmptyCorpus)
    ));
}

#[test]
fn test_scoring_is_deterministic() {
    let g = graph(
        &["A", "B", "C", "D", "E"],
        &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "E"), ("E", "A"), ("A", "C")],
    );
    let first = relevance::score(&g, &Weights::default(), Metric::Combined).unwrap();
    let second = relevance::score(&g, &Weights::default(), Metric::Combined).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.fingerprint(), second.fingerprint());
}

#[test]
fn test_unknown_document_in_components() {
    let g = graph(&["A"], &[]);
    assert!(matches!(
        relevance::components(&g, "A", "Nope"),
        Err(LinkError::UnknownDocument(id)) if id == "Nope"
    ));
}

#[test]
fn test_edges_above_threshold() {
    let g = graph(&["X", "Y", "Z"], &[("X", "Y")]);
    let m = relevance::score(&g, &Weights::default(), Metric::Combined).unwrap();
    let edges = m.edges_above(0.3);
    assert_eq!(edges.len(), 1);
    assert_eq!((edges[0].source.as_str(), edges[0].target.as_str()), ("X", "Y"));
}
