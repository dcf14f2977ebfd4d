//! Free-text canonicalization and identifier shape checks.
//!
//! Everything that touches raw place references goes through [`normalize`]
//! before any matching or storage, so the resolver and the alias table agree
//! on one canonical form.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

static SEPARATOR_SPACING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*([/&+,])\s*").expect("valid regex"));

/// Quote pairs stripped from fully quoted input, one layer only.
const QUOTE_PAIRS: [(&str, &str); 4] = [
    ("\"", "\""),
    ("'", "'"),
    ("\u{201C}", "\u{201D}"),
    ("\u{2018}", "\u{2019}"),
];

/// Canonicalize a free-text place reference.
///
/// Trims surrounding whitespace, strips one layer of surrounding straight
/// or curly quotes, collapses whitespace runs to single spaces, and removes
/// spaces immediately around the separator characters `/`, `&`, `+` and
/// `,`. Case is preserved. Empty input normalizes to an empty string.
pub fn normalize(raw: &str) -> String {
    let stripped = strip_quotes(raw.trim()).trim();
    let collapsed = WHITESPACE.replace_all(stripped, " ");

    SEPARATOR_SPACING.replace_all(&collapsed, "$1").into_owned()
}

/// The lookup key for the alias table: normalized, then lowercased.
pub fn alias_key(raw: &str) -> String {
    normalize(raw).to_lowercase()
}

fn strip_quotes(value: &str) -> &str {
    for (open, close) in QUOTE_PAIRS {
        if let Some(inner) = value
            .strip_prefix(open)
            .and_then(|rest| rest.strip_suffix(close))
        {
            return inner;
        }
    }

    value
}

/// Whether the input has the shape of a 5-character UN/LOCODE.
pub fn is_unlocode_shape(value: &str) -> bool {
    value.len() == 5 && value.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Whether the input has the shape of a 3-letter IATA code.
pub fn is_iata_shape(value: &str) -> bool {
    value.len() == 3 && value.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Whether the input has the shape of a 4-letter ICAO code.
pub fn is_icao_shape(value: &str) -> bool {
    value.len() == 4 && value.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Whether the input has the shape of a generic carrier-style code
/// (2-6 alphanumeric characters).
pub fn is_code_shape(value: &str) -> bool {
    (2..=6).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Extract the first parenthesized code-shaped group, e.g. the `NLRTM` in
/// `"Rotterdam (NLRTM)"`. Returns `None` when there is no parenthesized
/// group or its contents are not code-shaped.
pub fn parenthetical_code(value: &str) -> Option<&str> {
    let open = value.find('(')?;
    let rest = &value[open + 1..];
    let close = rest.find(')')?;
    let inner = rest[..close].trim();

    is_code_shape(inner).then_some(inner)
}

/// Escape `%`, `_` and `\` so user text can be embedded in a LIKE pattern
/// with `\` as the escape character.
pub fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}
