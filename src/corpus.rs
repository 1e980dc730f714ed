// src/corpus.rs
//! Corpus discovery and the reference-reader seam.
//!
//! Extracting reference lists out of spreadsheets is not done here. A
//! [`ReferenceReader`] hands back the raw list for one document; the
//! bundled [`SidecarReader`] reads it from a plain-text file stored next to
//! the document (`Spec.xlsx` -> `Spec.xlsx.refs`, one reference per line).

use crate::config::CorpusConfig;
use crate::error::{LinkError, Result};
use crate::types::SourceDocument;
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::{DirEntry, WalkDir};

static NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[.\-]*\d[\d.\-]*$").unwrap_or_else(|_| panic!("Invalid Regex")));

/// Supplies the ordered raw reference strings of one document.
pub trait ReferenceReader {
    /// # Errors
    /// Returns error if the document's references exist but cannot be read.
    fn read_references(&self, document: &Path) -> Result<Vec<String>>;
}

/// Reads references from `<document>.<suffix>` text files.
#[derive(Debug, Clone)]
pub struct SidecarReader {
    suffix: String,
}

impl SidecarReader {
    #[must_use]
    pub fn new(suffix: impl Into<String>) -> Self {
        Self { suffix: suffix.into() }
    }

    #[must_use]
    pub fn sidecar_path(&self, document: &Path) -> PathBuf {
        let mut name = document.as_os_str().to_owned();
        name.push(".");
        name.push(&self.suffix);
        PathBuf::from(name)
    }
}

impl ReferenceReader for SidecarReader {
    fn read_references(&self, document: &Path) -> Result<Vec<String>> {
        let path = self.sidecar_path(document);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(|e| LinkError::io(e, &path))?;
        Ok(content.lines().map(str::to_string).collect())
    }
}

/// Finds source documents under `root`, sorted by path.
///
/// Hidden entries and office lock files (`~$...`) are skipped.
///
/// # Errors
/// Returns error if the directory walk fails.
pub fn discover(root: &Path, config: &CorpusConfig) -> Result<Vec<PathBuf>> {
    let extensions: HashSet<String> = config
        .extensions
        .iter()
        .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
        .collect();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden_or_lock(e));

    let mut paths = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && has_extension(entry.path(), &extensions) {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}

fn is_hidden_or_lock(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || name.starts_with("~$")
}

fn has_extension(path: &Path, extensions: &HashSet<String>) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| extensions.contains(&e.to_ascii_lowercase()))
}

/// Discovers documents and reads their references.
///
/// # Errors
/// Returns error if discovery or any reader call fails.
pub fn load(
    root: &Path,
    config: &CorpusConfig,
    reader: &dyn ReferenceReader,
) -> Result<Vec<SourceDocument>> {
    discover(root, config)?
        .into_iter()
        .map(|path| {
            let references = clean_references(reader.read_references(&path)?);
            Ok(source_document(&path, references))
        })
        .collect()
}

fn source_document(path: &Path, references: Vec<String>) -> SourceDocument {
    let file_name = |p: &Path| p.file_name().map(|f| f.to_string_lossy().into_owned());
    SourceDocument {
        id: path
            .file_stem()
            .map_or_else(String::new, |s| s.to_string_lossy().into_owned()),
        filename: file_name(path).unwrap_or_default(),
        path: path.display().to_string(),
        references,
    }
}

/// Trims entries and drops blanks, `nan` cells and purely numeric cells,
/// then removes repeats keeping the first occurrence.
#[must_use]
pub fn clean_references<I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    raw.into_iter()
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty() && !r.eq_ignore_ascii_case("nan") && !NUMERIC_RE.is_match(r))
        .filter(|r| seen.insert(r.clone()))
        .collect()
}
