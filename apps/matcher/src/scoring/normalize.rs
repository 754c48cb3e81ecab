/// Lowercases `text`, then replaces every character that is not an ASCII
/// letter, ASCII digit or space with a space.
///
/// Whitespace runs are kept as-is, so the output has the same number of
/// characters as the lowercased input. Applying it twice is a no-op.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == ' ' {
                c
            } else {
                ' '
            }
        })
        .collect()
}
