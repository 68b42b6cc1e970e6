//! Bulk annotation: wrap plain-text occurrences of known terms as marked
//! inline code (`` `%term%` ``) so the render hook picks them up.
//!
//! This is a textual rewrite, not a markdown parser. Terms are matched
//! literally (escaped), case-insensitively, on word boundaries, with an
//! optional trailing `s` so plurals resolve through the singular entry.
//! Fenced blocks, inline code spans and `[[wikilinks]]` are left alone.

use regex::{Captures, Regex, RegexBuilder};
use std::sync::LazyLock;

/// Wraps a term inside the inline code span
pub const SENTINEL: char = '%';

const OPEN_MARK: &str = "`%";
const CLOSE_MARK: &str = "%`";

/// Regions that are never rewritten: fenced blocks, inline code, wikilinks
const PROTECTED_PATTERN: &str = r"(?s:```.*?```)|`[^`\n]*`|\[\[[^\]\n]*\]\]";

static MARKED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`%([^`\n]*?)%`").unwrap());

/// A whole marked span opened right after `[[`
static LINK_OPEN_MARKED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[`%([^`\n]*?)%`").unwrap());

/// A whole marked span closed right before `]]`
static LINK_CLOSE_MARKED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`%([^`\n]*?)%`\]\]").unwrap());

/// Wrap every whole-word occurrence of a known term
pub fn mark_terms<I, S>(text: &str, known_terms: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut terms: Vec<String> = known_terms
        .into_iter()
        .map(|t| t.as_ref().trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    if terms.is_empty() {
        return text.to_string();
    }

    // Longest first so "dog food" wins over "dog" at the same position. The
    // boundaries live inside each alternative, so a longer term that only
    // matches part of a word falls through to the shorter ones.
    terms.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    terms.dedup();

    let alternation = terms
        .iter()
        .map(|t| term_pattern(t))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!("(?P<skip>{})|(?P<term>{})", PROTECTED_PATTERN, alternation);

    let re = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re,
        Err(e) => {
            log::warn!("[GLOSSARY] Could not build term pattern ({} terms): {}", terms.len(), e);
            return text.to_string();
        }
    };

    let marked = re.replace_all(text, |caps: &Captures| {
        match caps.name("term") {
            Some(m) => format!("{}{}{}", OPEN_MARK, m.as_str(), CLOSE_MARK),
            None => caps[0].to_string(),
        }
    });

    cleanup(&marked)
}

/// Escaped term with its edges anchored against word characters.
///
/// A word-character edge needs `\b`; a symbol edge (`c++`) needs `\B`, which
/// after or before a symbol means the neighbour is not a word character
/// either. `_` counts as a word character, so `cat_food` holds no `cat`.
fn term_pattern(term: &str) -> String {
    let escaped = regex::escape(term);
    let lead = match term.chars().next() {
        Some(c) if is_word_char(c) => r"\b",
        _ => r"\B",
    };
    match term.chars().next_back() {
        Some(c) if is_word_char(c) => format!(r"{}{}s?\b", lead, escaped),
        _ => format!(r"{}{}\B", lead, escaped),
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Collapse doubled markers and pull whole marked spans out of link brackets.
///
/// Link repairs only fire on a complete `` `%X%` `` pair, so a stray `]]`
/// next to a fresh mark never leaves half a marker behind.
pub fn cleanup(text: &str) -> String {
    let text = text.replace("`%`%", "`%");
    let text = LINK_OPEN_MARKED_RE.replace_all(&text, "[[$1");
    let text = text.replace("%`%`", "%`");
    LINK_CLOSE_MARKED_RE.replace_all(&text, "$1]]").into_owned()
}

/// Inverse of [`mark_terms`]: replace every `` `%X%` `` with `X`
pub fn unmark_terms(text: &str) -> String {
    MARKED_RE.replace_all(text, "$1").into_owned()
}

/// Path of the generated copy for a document (`notes/a.md` -> `notes/a_copy.md`)
pub fn copy_path(path: &str) -> String {
    derived_path(path, "_copy")
}

/// Insert `suffix` before the `.md` extension (appending one if missing)
pub fn derived_path(path: &str, suffix: &str) -> String {
    let stem = path.strip_suffix(".md").unwrap_or(path);
    format!("{}{}.md", stem, suffix)
}
