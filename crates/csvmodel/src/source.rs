//! Line-oriented input suppliers.
//!
//! The model pulls its input through the [`LineSource`] trait, one line at a
//! time and strictly forward. Two suppliers ship with the crate:
//!
//! - [`ReaderSource`] wraps any [`BufRead`] and strips line terminators.
//! - [`LinesSource`] wraps an iterator of already-split lines.

use crate::error::Result;
use std::io::{BufRead, BufReader, Read};
use std::iter::Peekable;

/// A forward-only supplier of text lines.
///
/// Lines returned by [`read_line`](Self::read_line) carry no line
/// terminator. An exhausted source is a valid, empty input and not an error.
pub trait LineSource {
    /// Returns `true` once no more lines are available.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input could not be inspected.
    fn at_end(&mut self) -> Result<bool>;

    /// Reads the next line, or an empty string if the source is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input could not be read or is not
    /// valid UTF-8.
    fn read_line(&mut self) -> Result<String>;
}

/// Line source over a buffered reader.
///
/// Tracks line numbers (1-based counting, 0 before any line is read) so
/// callers can relate diagnostics back to the input.
///
/// # Examples
///
/// ```
/// use csvmodel::source::{LineSource, ReaderSource};
///
/// let mut source = ReaderSource::new("a,b\r\nc,d\n".as_bytes());
/// assert_eq!(source.read_line().unwrap(), "a,b");
/// assert_eq!(source.read_line().unwrap(), "c,d");
/// assert!(source.at_end().unwrap());
/// assert_eq!(source.line_number(), 2);
/// ```
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    /// Number of lines read so far.
    line_number: usize,
}

impl<R: BufRead> ReaderSource<R> {
    /// Creates a new `ReaderSource` over an already buffered reader.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
        }
    }

    /// Returns the 1-based number of the last line read, 0 before the first.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Consumes the source, returning the underlying reader.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> ReaderSource<BufReader<R>> {
    /// Wraps an unbuffered reader in a [`BufReader`].
    #[must_use]
    pub fn from_read(reader: R) -> Self {
        Self::new(BufReader::new(reader))
    }

    /// Wraps an unbuffered reader in a [`BufReader`] of the given capacity.
    #[must_use]
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self::new(BufReader::with_capacity(capacity, reader))
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn at_end(&mut self) -> Result<bool> {
        Ok(self.reader.fill_buf()?.is_empty())
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(line);
        }
        self.line_number += 1;

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

/// Line source over an in-memory sequence of lines.
///
/// Lines are taken as given; they are expected not to contain newlines.
///
/// # Examples
///
/// ```
/// use csvmodel::source::{LineSource, LinesSource};
///
/// let mut source = LinesSource::new(["x;y"]);
/// assert!(!source.at_end().unwrap());
/// assert_eq!(source.read_line().unwrap(), "x;y");
/// assert!(source.at_end().unwrap());
/// ```
pub struct LinesSource<I: Iterator> {
    lines: Peekable<I>,
}

impl<I> LinesSource<I>
where
    I: Iterator,
    I::Item: Into<String>,
{
    /// Creates a source yielding each item of `lines` as one line.
    pub fn new<L>(lines: L) -> Self
    where
        L: IntoIterator<IntoIter = I>,
    {
        Self {
            lines: lines.into_iter().peekable(),
        }
    }
}

impl<I> LineSource for LinesSource<I>
where
    I: Iterator,
    I::Item: Into<String>,
{
    fn at_end(&mut self) -> Result<bool> {
        Ok(self.lines.peek().is_none())
    }

    fn read_line(&mut self) -> Result<String> {
        Ok(self.lines.next().map(Into::into).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use rstest::rstest;
    use std::io::Cursor;

    fn drain(source: &mut impl LineSource) -> Vec<String> {
        let mut lines = Vec::new();
        while !source.at_end().unwrap() {
            lines.push(source.read_line().unwrap());
        }
        lines
    }

    #[test]
    fn new_reader_source_starts_at_line_zero() {
        let source = ReaderSource::new(Cursor::new(b""));
        assert_eq!(source.line_number(), 0);
    }

    #[rstest]
    #[case::lf("a\nb\n", vec!["a", "b"])]
    #[case::crlf("a\r\nb\r\n", vec!["a", "b"])]
    #[case::no_final_newline("a\nb", vec!["a", "b"])]
    #[case::blank_line("a\n\nb\n", vec!["a", "", "b"])]
    #[case::lone_carriage_return_kept("a\rb\n", vec!["a\rb"])]
    #[case::empty("", vec![])]
    fn reader_source_strips_terminators(#[case] input: &str, #[case] expected: Vec<&str>) {
        let mut source = ReaderSource::new(input.as_bytes());
        assert_eq!(drain(&mut source), expected);
        assert_eq!(source.line_number(), expected.len());
    }

    #[test]
    fn reader_source_read_past_end_returns_empty() {
        let mut source = ReaderSource::new(Cursor::new(b"x"));
        assert_eq!(source.read_line().unwrap(), "x");
        assert_eq!(source.read_line().unwrap(), "");
        assert_eq!(source.line_number(), 1);
    }

    #[test]
    fn reader_source_reports_invalid_utf8() {
        let mut source = ReaderSource::new(Cursor::new(vec![b'a', 0xff, b'\n']));
        let err = source.read_line().unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn from_read_and_with_capacity_buffer_the_reader() {
        let mut small = ReaderSource::with_capacity(&b"p,q\nr,s\n"[..], 2);
        assert_eq!(drain(&mut small), vec!["p,q", "r,s"]);

        let mut plain = ReaderSource::from_read(&b"t\n"[..]);
        assert_eq!(drain(&mut plain), vec!["t"]);
        assert_eq!(plain.into_inner().buffer().len(), 0);
    }

    #[test]
    fn lines_source_accepts_owned_and_borrowed_lines() {
        let mut borrowed = LinesSource::new(["a", "b"]);
        assert_eq!(drain(&mut borrowed), vec!["a", "b"]);

        let mut owned = LinesSource::new(vec!["c".to_string()]);
        assert_eq!(drain(&mut owned), vec!["c"]);
    }

    #[test]
    fn lines_source_empty_is_at_end() {
        let mut source = LinesSource::new(Vec::<String>::new());
        assert!(source.at_end().unwrap());
        assert_eq!(source.read_line().unwrap(), "");
    }
}
