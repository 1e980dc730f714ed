// src/report/csv.rs
//! CSV exports of the relevance matrix and its edge list.
//!
//! Output starts with a UTF-8 BOM so spreadsheet tools detect the encoding
//! of Japanese document names.

use crate::relevance::{CooccurrenceMatrix, RelevanceEdge, RelevanceMatrix};
use std::fmt::Write;

const BOM: char = '\u{feff}';

/// Full matrix with ids as header row and first column.
#[must_use]
pub fn format_matrix(matrix: &RelevanceMatrix) -> String {
    let mut out = String::new();
    out.push(BOM);

    let header: Vec<String> = matrix.ids().iter().map(|id| escape_csv(id)).collect();
    let _ = writeln!(out, ",{}", header.join(","));

    for (i, id) in matrix.ids().iter().enumerate() {
        let cells: Vec<String> = matrix.row(i).iter().map(f64::to_string).collect();
        let _ = writeln!(out, "{},{}", escape_csv(id), cells.join(","));
    }
    out
}

/// Co-occurrence counts with reference keys as header row and first column.
#[must_use]
pub fn format_cooccurrence(matrix: &CooccurrenceMatrix) -> String {
    let mut out = String::new();
    out.push(BOM);

    let header: Vec<String> = matrix.keys().iter().map(|k| escape_csv(k)).collect();
    let _ = writeln!(out, ",{}", header.join(","));

    for (i, key) in matrix.keys().iter().enumerate() {
        let cells: Vec<String> = matrix.row(i).iter().map(usize::to_string).collect();
        let _ = writeln!(out, "{},{}", escape_csv(key), cells.join(","));
    }
    out
}

/// `source,target,relevance` rows.
#[must_use]
pub fn format_edges(edges: &[RelevanceEdge]) -> String {
    let mut out = String::new();
    out.push(BOM);
    out.push_str("source,target,relevance\n");
    for edge in edges {
        let _ = writeln!(
            out,
            "{},{},{}",
            escape_csv(&edge.source),
            escape_csv(&edge.target),
            edge.relevance
        );
    }
    out
}

fn escape_csv(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
