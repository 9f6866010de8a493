use std::sync::LazyLock;

use regex::Regex;

/// Portaria heading as it appears in normalized gazette text:
/// "PORTARIA Nº 1482 - 14/07/2025." — number and date captured.
pub static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"PORTARIA N[ºo°] (\d+) - (\d{2}/\d{2}/\d{4})\.").unwrap());

/// Only portarias containing this phrase are of interest; everything else in
/// the edition is discarded. Matched case-insensitively.
pub const TARGET_PHRASE: &str = "calculados sobre a média das contribuições";

/// Split normalized text into per-portaria blocks.
///
/// Each block runs from one heading to the start of the next (or end of text),
/// heading included, and is kept only if it contains the target phrase. Text
/// before the first heading never belongs to a block.
pub fn split_blocks(normalized: &str) -> Vec<String> {
    let headings: Vec<regex::Match> = HEADING_RE.find_iter(normalized).collect();

    let mut blocks = Vec::new();
    for (i, heading) in headings.iter().enumerate() {
        let end = headings
            .get(i + 1)
            .map_or(normalized.len(), |next| next.start());
        let block = normalized[heading.start()..end].trim();
        if contains_target_phrase(block) {
            blocks.push(block.to_string());
        }
    }
    blocks
}

fn contains_target_phrase(block: &str) -> bool {
    block.to_lowercase().contains(TARGET_PHRASE)
}
