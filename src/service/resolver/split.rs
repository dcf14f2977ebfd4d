use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::util::text;

/// Separators between combined place references. The word "and" only counts
/// on its own, so names like "Shandong" survive intact.
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[/&+,]|\band\b").expect("invalid separator pattern"));

/// Break a combined reference like "Antwerp/Rotterdam" into individual
/// candidate tokens: each piece normalized, empties dropped, duplicates
/// removed with first-seen order kept.
pub fn split_compound(input: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tokens = Vec::new();

    for piece in SEPARATORS.split(input) {
        let token = text::normalize(piece);
        if token.is_empty() {
            continue;
        }
        if seen.insert(token.clone()) {
            tokens.push(token);
        }
    }

    tokens
}
