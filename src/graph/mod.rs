// src/graph/mod.rs
//! The document link graph: documents, resolved edges, and the unmatched log.

pub mod builder;
pub mod interchange;

use crate::error::{LinkError, Result};
use crate::types::{Document, Link, UnmatchedLink};
use std::collections::{BTreeMap, BTreeSet};

/// A simple directed graph over documents. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentGraph {
    documents: BTreeMap<String, Document>,
    /// Keyed by (source, target); one entry per edge.
    links: BTreeMap<(String, String), Link>,
    unmatched: Vec<UnmatchedLink>,
}

impl DocumentGraph {
    /// Assembles a graph, enforcing its invariants.
    ///
    /// Self-links are dropped and repeated `(source, target)` pairs collapse
    /// to the first link seen. Each document's `resolved_link_count` is
    /// recomputed from the surviving edges.
    ///
    /// # Errors
    /// Returns `DuplicateDocument` if two documents share an id,
    /// `DanglingLink` if a link endpoint is not a document and
    /// `OrphanUnmatched` if an unmatched record names an unknown source.
    pub fn from_parts(
        documents: Vec<Document>,
        links: Vec<Link>,
        unmatched: Vec<UnmatchedLink>,
    ) -> Result<Self> {
        let mut doc_map = BTreeMap::new();
        for doc in documents {
            if doc_map.contains_key(&doc.id) {
                return Err(LinkError::DuplicateDocument(doc.id));
            }
            doc_map.insert(doc.id.clone(), doc);
        }

        let mut link_map: BTreeMap<(String, String), Link> = BTreeMap::new();
        for link in links {
            if !doc_map.contains_key(&link.source_id) || !doc_map.contains_key(&link.target_id) {
                return Err(LinkError::DanglingLink {
                    source_id: link.source_id,
                    target_id: link.target_id,
                });
            }
            if link.is_self_link() {
                continue;
            }
            link_map
                .entry((link.source_id.clone(), link.target_id.clone()))
                .or_insert(link);
        }

        if let Some(orphan) = unmatched.iter().find(|u| !doc_map.contains_key(&u.source_id)) {
            return Err(LinkError::OrphanUnmatched {
                source_id: orphan.source_id.clone(),
                original_text: orphan.original_text.clone(),
            });
        }

        for doc in doc_map.values_mut() {
            doc.resolved_link_count = 0;
        }
        for (source, _) in link_map.keys() {
            if let Some(doc) = doc_map.get_mut(source) {
                doc.resolved_link_count += 1;
            }
        }

        Ok(Self {
            documents: doc_map,
            links: link_map,
            unmatched,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Document ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    #[must_use]
    pub fn document(&self, id: &str) -> Option<&Document> {
        self.documents.get(id)
    }

    /// Links ordered by (source, target).
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.links.values()
    }

    #[must_use]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn link(&self, source: &str, target: &str) -> Option<&Link> {
        self.links.get(&(source.to_string(), target.to_string()))
    }

    #[must_use]
    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.link(source, target).is_some()
    }

    #[must_use]
    pub fn unmatched_links(&self) -> &[UnmatchedLink] {
        &self.unmatched
    }

    /// Targets of the document's outgoing edges.
    #[must_use]
    pub fn out_neighbors(&self, id: &str) -> BTreeSet<&str> {
        self.links
            .range((id.to_string(), String::new())..)
            .take_while(|((source, _), _)| source == id)
            .map(|((_, target), _)| target.as_str())
            .collect()
    }
}
