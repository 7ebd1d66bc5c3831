//! Display-time quote stripping.

/// Removes one matching pair of surrounding quotes from `field`.
///
/// Only a field of at least two characters whose first and last characters
/// are both `'` or both `"` is changed. Everything else is returned as is.
///
/// # Examples
///
/// ```
/// use csvmodel::strip_quotes;
///
/// assert_eq!(strip_quotes("'x'"), "x");
/// assert_eq!(strip_quotes("\"\""), "");
/// assert_eq!(strip_quotes("'x\""), "'x\"");
/// assert_eq!(strip_quotes("'"), "'");
/// ```
#[must_use]
pub fn strip_quotes(field: &str) -> &str {
    let mut chars = field.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first @ ('\'' | '"')), Some(last)) if first == last => {
            &field[first.len_utf8()..field.len() - last.len_utf8()]
        }
        _ => field,
    }
}
