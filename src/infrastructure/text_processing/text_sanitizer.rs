use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static HYPHEN_LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<head>\w)-[ \t]*\r?\n[ \t]*(?P<tail>\w)").unwrap());

/// Normalizes extracted document text before it is interpolated into a
/// prompt. NFKC folds the ligatures PDF extractors love to emit; words
/// hyphenated across line breaks are rejoined. Whitespace runs collapse to
/// single spaces while paragraph breaks survive.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw.nfkc().collect();
    let joined = HYPHEN_LINE_BREAK.replace_all(&normalized, "$head$tail");

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();

    for line in joined.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() {
            current.push('\n');
        }
        current.push_str(&collapse_whitespace(trimmed));
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }

    paragraphs.join("\n\n")
}

fn collapse_whitespace(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut in_gap = false;

    for ch in line.chars() {
        if ch.is_whitespace() {
            if !in_gap {
                out.push(' ');
                in_gap = true;
            }
        } else {
            out.push(ch);
            in_gap = false;
        }
    }

    out
}
