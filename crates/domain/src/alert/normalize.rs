/// Canonical comparison form of a raw alert message.
///
/// Lowercases, drops every character that is not alphanumeric, underscore,
/// whitespace, hyphen, period, colon, or parenthesis, collapses whitespace
/// runs to single spaces, and trims. The kept set determines edit-distance
/// comparability across alerts with differing punctuation, so it must not
/// drift.
///
/// Pure and total: any input produces a result, empty input produces the
/// empty string, and the function is idempotent.
pub fn normalize(message: &str) -> String {
    let filtered: String = message
        .to_lowercase()
        .chars()
        .filter(|&c| is_kept(c))
        .collect();

    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_kept(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c.is_whitespace() || matches!(c, '-' | '.' | ':' | '(' | ')')
}
