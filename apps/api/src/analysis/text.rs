//! Text normalization and keyword extraction.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::catalog::TechCatalog;

/// English stop words excluded from extracted keyword lists. Includes generic
/// resume filler ("experience", "skills") that carries no matching signal.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "up", "about", "into", "through", "during", "before", "after", "above", "below",
    "between", "among", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "must", "can", "i",
    "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your", "his",
    "its", "our", "their", "this", "that", "these", "those", "am", "work", "working", "experience",
    "years", "year", "including", "using", "used", "use", "also", "well", "good", "great",
    "excellent", "strong", "skills", "skill", "ability", "able", "knowledge",
];

/// Keyword lists are capped at this many entries per text.
pub const MAX_KEYWORDS: usize = 50;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Lowercases, replaces every non-word/non-space character with a space, and
/// collapses whitespace runs. Empty input yields an empty string.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, " ");
    let collapsed = WHITESPACE.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}

fn is_candidate(token: &str) -> bool {
    token.len() > 2 && token.chars().all(|c| c.is_ascii_alphabetic())
}

/// The full token set of a text: normalized tokens, length > 2, alphabetic
/// only. Stop words stay in; the indicator scorers match words ("experience",
/// "years") that the keyword extractor filters out.
pub fn token_set(text: &str) -> HashSet<String> {
    normalize(text)
        .split_whitespace()
        .filter(|token| is_candidate(token))
        .map(str::to_string)
        .collect()
}

/// Extracts the keyword list for one text: stop-word-filtered tokens in order
/// of first appearance, unioned with catalog terms found as substrings of the
/// raw text, deduplicated, capped at [`MAX_KEYWORDS`].
pub fn extract_keywords(text: &str, catalog: &TechCatalog) -> Vec<String> {
    let normalized = normalize(text);
    let mut seen: HashSet<&str> = HashSet::new();
    let mut keywords = Vec::new();

    for token in normalized.split_whitespace() {
        if is_candidate(token) && !STOP_WORDS.contains(&token) && seen.insert(token) {
            keywords.push(token.to_string());
        }
    }

    // Catalog terms are matched against the raw text, not the stripped one:
    // "node.js" and "c++" never survive tokenization.
    for skill in catalog.skills_in(text) {
        if seen.insert(skill) {
            keywords.push(skill.to_string());
        }
    }

    keywords.truncate(MAX_KEYWORDS);
    keywords
}
