// src/normalize.rs
//! Canonical comparison keys for document names and raw references.
//!
//! `normalize` applies, in order:
//!
//! 1. Trim surrounding whitespace (including U+3000 ideographic space).
//! 2. Strip one trailing document extension (`.xlsx`, `.xlsm`, `.xls`,
//!    `.docx`, `.doc`, `.pdf`, `.eap`, `.csv`, `.txt`; case-insensitive).
//! 3. Repeatedly strip a trailing suffix introduced by `_` or `-`:
//!    a date (`20200401`, `2020-04-01`, `2020.04.01`), a version
//!    (`v2`, `V1.3`, `rev3`, `rev.3`) or a bare number (`_2`). A strip that
//!    would leave nothing is not applied.
//! 4. Turn every run of whitespace and `_` into one ASCII space, and every
//!    run of `-` into one `-`.
//! 5. Lowercase ASCII letters. Everything else (kana, kanji, full-width
//!    forms) is left untouched.
//!
//! If the result is empty the trimmed input is returned instead.

use regex::Regex;
use std::sync::LazyLock;

const EXTENSION_PATTERN: &str = r"(?i)\.(?:xlsx|xlsm|xls|docx|doc|pdf|eap|csv|txt)$";
const SUFFIX_PATTERN: &str =
    r"(?i)[_\-]+(?:\d{4}[\-_.]?\d{2}[\-_.]?\d{2}|v\d+(?:\.\d+)*|rev\.?\d+|\d+)$";

static EXTENSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EXTENSION_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex")));
static SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SUFFIX_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex")));
static SPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_]+").unwrap_or_else(|_| panic!("Invalid Regex")));
static HYPHEN_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}").unwrap_or_else(|_| panic!("Invalid Regex")));

/// Returns the comparison key for a raw name. Never fails.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    let stem = strip_extension(trimmed);
    let base = strip_suffixes(stem);

    let spaced = SPACE_RUN_RE.replace_all(base, " ");
    let collapsed = HYPHEN_RUN_RE.replace_all(&spaced, "-");
    let key = collapsed.trim().to_ascii_lowercase();

    if key.is_empty() {
        trimmed.to_string()
    } else {
        key
    }
}

/// Drops one trailing document extension unless it is the whole name.
pub(crate) fn strip_extension(name: &str) -> &str {
    match EXTENSION_RE.find(name) {
        Some(m) if m.start() > 0 => &name[..m.start()],
        _ => name,
    }
}

fn strip_suffixes(mut name: &str) -> &str {
    while let Some(m) = SUFFIX_RE.find(name) {
        if m.start() == 0 {
            break;
        }
        name = &name[..m.start()];
    }
    name
}
