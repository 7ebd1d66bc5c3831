//! The observable table model.
//!
//! [`TableModel`] owns one [`TabularStore`] and one header at a time. A parse
//! replaces both wholesale:
//!
//! 1. observers get `reset_begin`,
//! 2. the previous table, header and settings are dropped,
//! 3. the first line becomes the header (or the first data row),
//! 4. every further line becomes one data row, padded or cut to the
//!    established column count,
//! 5. observers get `reset_end`.
//!
//! Rows whose width differs from the column count are still admitted and
//! reported as [`Diagnostic`]s in the returned [`ParseReport`].

use crate::config::ParseConfig;
use crate::diagnostic::Diagnostic;
use crate::error::Result;
use crate::observer::{CellRange, ModelObserver, Orientation};
use crate::quote::strip_quotes;
use crate::source::{LineSource, LinesSource, ReaderSource};
use crate::store::TabularStore;
use crate::tokenizer;
use std::borrow::Cow;
use std::fmt;
use std::io::BufRead;
use tracing::{debug, trace, warn};

/// Outcome of a successful parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Number of data rows stored.
    pub rows: usize,
    /// Number of columns established by the header or first data row.
    pub columns: usize,
    /// Non-fatal findings, in input order.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseReport {
    /// Returns `true` if the parse produced no diagnostics.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Delimiter-separated text as an observable table.
///
/// # Examples
///
/// ```
/// use csvmodel::TableModel;
///
/// let mut model = TableModel::new();
/// let report = model.parse_lines(["a,b,c", "1,2,3", "4,5"], ',', true).unwrap();
///
/// assert_eq!(model.header(), ["a", "b", "c"]);
/// assert_eq!((model.row_count(), model.column_count()), (2, 3));
/// assert_eq!(model.data(1, 1), Some("5"));
/// assert_eq!(model.data(1, 2), None);
/// assert_eq!(report.diagnostics[0].row(), 1);
/// ```
pub struct TableModel {
    separator: Option<char>,
    has_header: bool,
    strip_quotes: bool,
    header: Vec<String>,
    store: TabularStore,
    observers: Vec<Box<dyn ModelObserver>>,
}

impl TableModel {
    /// Creates an empty model with quote stripping enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            separator: None,
            has_header: false,
            strip_quotes: true,
            header: Vec::new(),
            store: TabularStore::new(),
            observers: Vec::new(),
        }
    }

    /// Registers an observer. Observers are notified in registration order.
    pub fn subscribe(&mut self, observer: Box<dyn ModelObserver>) {
        self.observers.push(observer);
    }

    /// Separator used by the last parse, `None` after a clear.
    #[must_use]
    pub fn separator(&self) -> Option<char> {
        self.separator
    }

    /// Whether the last parse treated its first line as a header.
    #[must_use]
    pub fn has_header(&self) -> bool {
        self.has_header
    }

    /// Whether values are shown without their surrounding quotes.
    #[must_use]
    pub fn strip_quotes(&self) -> bool {
        self.strip_quotes
    }

    /// Turns quote stripping on or off.
    ///
    /// Stored values are not touched. When the flag actually changes,
    /// observers are told that every cell, and the header if there is one,
    /// may now display differently.
    pub fn set_strip_quotes(&mut self, on: bool) {
        if self.strip_quotes == on {
            return;
        }
        self.strip_quotes = on;
        debug!(strip_quotes = on, "display transform changed");

        if let Some(range) = CellRange::full(self.row_count(), self.column_count()) {
            self.notify(|observer| observer.display_changed(range));
        }
        if self.has_header && !self.header.is_empty() {
            let last = self.header.len() - 1;
            self.notify(|observer| observer.header_changed(Orientation::Horizontal, 0, last));
        }
    }

    /// Replaces the table with the content of `source`.
    ///
    /// `None` and an already exhausted source both produce an empty table.
    /// With `None` the model is left cleared and the requested separator and
    /// header flag are not recorded.
    /// Quote stripping keeps its current setting.
    ///
    /// # Errors
    ///
    /// Returns an error only if `source` fails to deliver a line. The model
    /// is then left empty and observers still receive `reset_end`.
    pub fn parse<S>(
        &mut self,
        source: Option<&mut S>,
        separator: char,
        has_header: bool,
    ) -> Result<ParseReport>
    where
        S: LineSource + ?Sized,
    {
        let config = ParseConfig::new(separator, has_header).with_strip_quotes(self.strip_quotes);
        self.parse_with_config(source, &config)
    }

    /// Replaces the table with the content of `source`, taking every setting
    /// from `config`.
    ///
    /// # Errors
    ///
    /// See [`parse`](Self::parse).
    pub fn parse_with_config<S>(
        &mut self,
        source: Option<&mut S>,
        config: &ParseConfig,
    ) -> Result<ParseReport>
    where
        S: LineSource + ?Sized,
    {
        self.notify(|observer| observer.reset_begin());
        self.reset_state();

        let Some(source) = source else {
            debug!("no input source, model cleared");
            self.notify(|observer| observer.reset_end());
            return Ok(ParseReport::default());
        };

        self.separator = Some(config.separator);
        self.has_header = config.has_header;
        self.strip_quotes = config.strip_quotes;
        debug!(
            separator = ?config.separator,
            has_header = config.has_header,
            "parse started"
        );

        let outcome = self.read_table(source, config.separator, config.has_header);
        if outcome.is_err() {
            self.reset_state();
        }

        self.notify(|observer| observer.reset_end());

        let diagnostics = outcome?;
        debug!(
            rows = self.row_count(),
            columns = self.column_count(),
            diagnostics = diagnostics.len(),
            "parse finished"
        );
        Ok(ParseReport {
            rows: self.row_count(),
            columns: self.column_count(),
            diagnostics,
        })
    }

    /// Parses an in-memory sequence of lines.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature matches [`parse`](Self::parse).
    pub fn parse_lines<I>(
        &mut self,
        lines: I,
        separator: char,
        has_header: bool,
    ) -> Result<ParseReport>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut source = LinesSource::new(lines);
        self.parse(Some(&mut source), separator, has_header)
    }

    /// Parses every line of a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the input is not valid UTF-8.
    pub fn parse_reader<R: BufRead>(
        &mut self,
        reader: R,
        separator: char,
        has_header: bool,
    ) -> Result<ParseReport> {
        let mut source = ReaderSource::new(reader);
        self.parse(Some(&mut source), separator, has_header)
    }

    /// Empties the table and forgets the separator and header flag.
    ///
    /// The [`strip_quotes`](Self::strip_quotes) display setting is kept, so
    /// a later [`parse`](Self::parse) shows values the same way as before.
    pub fn clear(&mut self) {
        self.notify(|observer| observer.reset_begin());
        self.reset_state();
        self.notify(|observer| observer.reset_end());
    }

    /// Number of data rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.store.row_count()
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.store.column_count()
    }

    /// Returns `true` if the table holds no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Raw header fields; empty when there is no header.
    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Read access to the underlying store, with values as parsed.
    #[must_use]
    pub fn store(&self) -> &TabularStore {
        &self.store
    }

    /// Displayed value of a cell.
    ///
    /// Returns `None` for out-of-range positions and for cells the row did
    /// not provide.
    #[must_use]
    pub fn data(&self, row: usize, column: usize) -> Option<&str> {
        let value = self.store.get(row, column)?.as_deref()?;
        Some(self.display(value))
    }

    /// Displayed label of column `section`, if there is a header that long.
    #[must_use]
    pub fn header_label(&self, section: usize) -> Option<&str> {
        if !self.has_header {
            return None;
        }
        self.header.get(section).map(|label| self.display(label))
    }

    /// Label of row `section`: its 1-based number.
    #[must_use]
    pub fn row_label(&self, section: usize) -> String {
        (section + 1).to_string()
    }

    /// Header label for either orientation.
    #[must_use]
    pub fn header_data(&self, section: usize, orientation: Orientation) -> Option<Cow<'_, str>> {
        match orientation {
            Orientation::Horizontal => self.header_label(section).map(Cow::Borrowed),
            Orientation::Vertical => Some(Cow::Owned(self.row_label(section))),
        }
    }

    fn display<'a>(&self, value: &'a str) -> &'a str {
        if self.strip_quotes {
            strip_quotes(value)
        } else {
            value
        }
    }

    fn notify(&mut self, mut deliver: impl FnMut(&mut dyn ModelObserver)) {
        for observer in &mut self.observers {
            deliver(observer.as_mut());
        }
    }

    fn reset_state(&mut self) {
        self.separator = None;
        self.has_header = false;
        self.header.clear();
        self.store.clear();
    }

    fn read_table<S>(
        &mut self,
        source: &mut S,
        separator: char,
        has_header: bool,
    ) -> Result<Vec<Diagnostic>>
    where
        S: LineSource + ?Sized,
    {
        let mut diagnostics = Vec::new();

        if source.at_end()? {
            debug!("input exhausted before the first line");
            return Ok(diagnostics);
        }

        let line = source.read_line()?;
        let fields = tokenizer::split(&line, separator);
        if has_header {
            trace!(fields = fields.len(), "header line");
            self.header = fields.into_iter().map(str::to_owned).collect();
            self.store.set_column_count(self.header.len());
        } else {
            trace!(row = 0, fields = fields.len(), "first data line");
            self.store.set_column_count(fields.len());
            self.append_row(&fields);
        }

        while !source.at_end()? {
            let line = source.read_line()?;
            let fields = tokenizer::split(&line, separator);
            let row = self.store.row_count();
            let expected = self.store.column_count();
            trace!(row, fields = fields.len(), "data line");

            if fields.len() != expected {
                let diagnostic = Diagnostic::RowWidthMismatch {
                    row,
                    expected,
                    actual: fields.len(),
                };
                warn!(diagnostic = ?diagnostic, "row width mismatch");
                diagnostics.push(diagnostic);
            }

            self.append_row(&fields);
        }

        Ok(diagnostics)
    }

    /// Adds a row and copies as many leading fields as there are columns.
    fn append_row(&mut self, fields: &[&str]) {
        let row = self.store.row_count();
        self.store.add_row();
        let columns = self.store.column_count();
        for (column, field) in fields.iter().take(columns).enumerate() {
            self.store.set_item(row, column, *field);
        }
    }
}

impl Default for TableModel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TableModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableModel")
            .field("separator", &self.separator)
            .field("has_header", &self.has_header)
            .field("strip_quotes", &self.strip_quotes)
            .field("header", &self.header)
            .field("store", &self.store)
            .field("observers", &self.observers.len())
            .finish()
    }
}
