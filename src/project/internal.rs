//! Slug generation for repository names.

/// URL/path-safe form of a human-readable name, limited to `[a-z0-9-]`.
///
/// Transliterates to ASCII, lowercases, spells `@` as `at`, turns whitespace,
/// underscores and hyphen runs into a single `-`, drops anything else, and
/// trims separators from both ends. `"My Cool App"` becomes `"my-cool-app"`.
pub fn slug(name: &str) -> String {
    let ascii = deunicode::deunicode(name);
    let mut out = String::with_capacity(ascii.len());
    let mut separator = false;

    for c in ascii.chars() {
        if c == '@' {
            separator = true;
            push_word(&mut out, "at", &mut separator);
            separator = true;
        } else if c.is_ascii_alphanumeric() {
            let lower = c.to_ascii_lowercase().to_string();
            push_word(&mut out, &lower, &mut separator);
        } else if c.is_whitespace() || c == '-' || c == '_' {
            separator = true;
        }
    }

    out
}

/// Append `word`, preceded by a hyphen if a separator is pending.
fn push_word(out: &mut String, word: &str, separator: &mut bool) {
    if *separator && !out.is_empty() {
        out.push('-');
    }
    *separator = false;
    out.push_str(word);
}
