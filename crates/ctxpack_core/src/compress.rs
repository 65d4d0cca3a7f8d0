use regex::Regex;
use std::sync::LazyLock;

// Block comments first so `/* // */` is removed as a whole.
static COMMENTS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s:/\*.*?\*/)|//.*").unwrap());

/// Strips comments and blank lines from source text.
///
/// The reduction is line-oriented and lossy: comment markers inside string or
/// regex literals are not recognized and get stripped too.
pub fn compress(code: &str) -> String {
    let stripped = COMMENTS.replace_all(code, "");
    stripped
        .split('\n')
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
