use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static WRAPPED_MATRICULA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d)-\s+(\d)").unwrap());

/// Collapse whitespace runs to single spaces, then rejoin matrículas that a
/// PDF line wrap split after the hyphen. Idempotent.
pub fn normalize(text: &str) -> String {
    let collapsed = WHITESPACE_RE.replace_all(text.trim(), " ");
    repair_wrapped_matricula(&collapsed)
}

/// Rejoin "1234567- 8-90" back into "1234567-8-90".
///
/// Observed in extracted gazette text when a matrícula breaks across lines
/// right after a hyphen. Deliberately narrow: the hyphen must be between two
/// digits, which keeps heading dates ("1482 - 14/07/2025") untouched.
fn repair_wrapped_matricula(text: &str) -> String {
    WRAPPED_MATRICULA_RE.replace_all(text, "$1-$2").to_string()
}
