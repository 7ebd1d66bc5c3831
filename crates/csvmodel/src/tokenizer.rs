//! Line tokenization.
//!
//! A line is consumed one field at a time. A field that starts with `'` or
//! `"` runs until the next quote immediately followed by the separator, so a
//! quoted field may contain the separator. Quotes anywhere else are ordinary
//! characters and there is no escaping. A quoted field that never closes
//! takes the rest of the line.
//!
//! ```
//! use csvmodel::tokenizer::split;
//!
//! assert_eq!(split("'a,b',c", ','), vec!["'a,b'", "c"]);
//! assert_eq!(split("1;2;3", ';'), vec!["1", "2", "3"]);
//! assert!(split("", ',').is_empty());
//! ```

const SINGLE_QUOTE: char = '\'';
const DOUBLE_QUOTE: char = '"';

/// Iterator over the fields of one line.
///
/// Created by [`fields`]. Yields borrowed slices of the input line.
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    rest: &'a str,
    separator: char,
    finished: bool,
}

/// Returns an iterator over the fields of `line`.
#[must_use]
pub fn fields(line: &str, separator: char) -> Fields<'_> {
    Fields {
        rest: line,
        separator,
        finished: false,
    }
}

/// Splits `line` into fields on `separator`.
///
/// An empty line yields no fields at all. A separator at the very end of the
/// line does not produce a trailing empty field.
#[must_use]
pub fn split(line: &str, separator: char) -> Vec<&str> {
    fields(line, separator).collect()
}

impl<'a> Iterator for Fields<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.rest.is_empty() {
            return None;
        }

        match field_end(self.rest, self.separator) {
            Some(end) => {
                let field = &self.rest[..end];
                self.rest = &self.rest[end + self.separator.len_utf8()..];
                Some(field)
            }
            None => {
                self.finished = true;
                Some(std::mem::take(&mut self.rest))
            }
        }
    }
}

impl std::iter::FusedIterator for Fields<'_> {}

/// Byte offset of the separator that ends the leading field of `rest`.
fn field_end(rest: &str, separator: char) -> Option<usize> {
    match rest.chars().next() {
        Some(quote @ (SINGLE_QUOTE | DOUBLE_QUOTE)) => {
            find_quote_before(rest, quote, separator).map(|at| at + quote.len_utf8())
        }
        _ => rest.find(separator),
    }
}

/// Finds the first `quote` that is immediately followed by `separator`.
///
/// The search starts at offset zero, so the opening quote itself closes the
/// field when the separator follows it directly.
fn find_quote_before(haystack: &str, quote: char, separator: char) -> Option<usize> {
    let mut chars = haystack.char_indices().peekable();
    while let Some((at, c)) = chars.next() {
        if c == quote && chars.peek().is_some_and(|&(_, next)| next == separator) {
            return Some(at);
        }
    }
    None
}
