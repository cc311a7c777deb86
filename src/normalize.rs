const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Splits source text into trimmed statement lines, dropping blanks and
/// `'` comments.
pub fn source_lines(text: &str) -> Vec<&str> {
    text.split(LINE_BREAKS)
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('\''))
        .collect()
}
