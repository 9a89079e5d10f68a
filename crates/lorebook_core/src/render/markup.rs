//! Markdown-lite expansion for note bodies.
//!
//! # Responsibility
//! - Escape raw body text, then expand the small markup dialect notes use:
//!   `#`/`##`/`###` headings, `**bold**`, `*em*`, backtick code spans,
//!   blank-line paragraph breaks and single-newline line breaks.
//!
//! # Invariants
//! - Escaping runs before expansion, so body text can never inject tags.
//! - Expansion order is fixed: headings narrowest first, then inline spans,
//!   then paragraph/line breaks.

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING3_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^### (.*)$").expect("valid h3 regex"));
static HEADING2_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^## (.*)$").expect("valid h2 regex"));
static HEADING1_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^# (.*)$").expect("valid h1 regex"));
static BOLD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid bold regex"));
static EM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").expect("valid em regex"));
static CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").expect("valid code regex"));

/// Escapes the characters with markup meaning (`&`, `<`, `>`, `"`).
pub fn escape_html(src: &str) -> String {
    let mut escaped = String::with_capacity(src.len());
    for ch in src.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Expands a note body into formatted text wrapped in paragraph tags.
pub fn to_html(src: &str) -> String {
    let escaped = escape_html(src);
    let pass = HEADING3_RE.replace_all(&escaped, "<h3>$1</h3>");
    let pass = HEADING2_RE.replace_all(&pass, "<h2>$1</h2>");
    let pass = HEADING1_RE.replace_all(&pass, "<h1>$1</h1>");
    let pass = BOLD_RE.replace_all(&pass, "<strong>$1</strong>");
    let pass = EM_RE.replace_all(&pass, "<em>$1</em>");
    let pass = CODE_RE.replace_all(&pass, "<code>$1</code>");
    let body = pass.replace("\n\n", "</p><p>").replace('\n', "<br/>");
    format!("<p>{body}</p>")
}
