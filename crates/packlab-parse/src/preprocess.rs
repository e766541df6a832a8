//! Lenient cleanup for AI-generated pack JSON.

use regex::Regex;
use std::sync::LazyLock;

static TRAILING_COMMA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*([}\]])").expect("static regex must compile"));
static BLOCK_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*[\s\S]*?\*/").expect("static regex must compile"));
static LINE_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)//.*$").expect("static regex must compile"));

/// Normalize raw pack text before JSON parsing. Pure and total.
///
/// Each pass trims whitespace, strips a leading byte-order mark, removes
/// trailing commas before `}` or `]`, replaces single quotes with double
/// quotes, and strips `/* */` and `// ...` comments. Passes repeat until the
/// text stops changing, so stripping a comment can expose a trailing comma
/// and still end up clean.
///
/// The quote substitution has no string-boundary awareness: a value such as
/// `"it's correct"` comes out corrupted. This is a known limitation of the
/// heuristic, kept for compatibility with the packs it was tuned on.
pub fn preprocess(raw: &str) -> String {
    let mut cleaned = raw.to_string();
    loop {
        let next = preprocess_once(&cleaned);
        if next == cleaned {
            return cleaned;
        }
        cleaned = next;
    }
}

fn preprocess_once(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('\u{feff}').unwrap_or(trimmed);
    let without_commas = TRAILING_COMMA_RE.replace_all(trimmed, "$1");
    let quoted = without_commas.replace('\'', "\"");
    let without_blocks = BLOCK_COMMENT_RE.replace_all(&quoted, "");
    LINE_COMMENT_RE.replace_all(&without_blocks, "").into_owned()
}
