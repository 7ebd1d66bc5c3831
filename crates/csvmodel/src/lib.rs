//! Delimiter-separated text parsed into an observable table model.
//!
//! The crate is built from a few small pieces:
//!
//! - [`tokenizer`] splits one line into fields with a narrow quoting rule.
//! - [`quote`] strips a matching pair of surrounding quotes for display.
//! - [`store`] is the growable row/column container backing the model.
//! - [`model`] drives a [`source::LineSource`] through the tokenizer, fills
//!   the store and header, and notifies [`observer::ModelObserver`]s.
//!
//! # Examples
//!
//! ```
//! use csvmodel::TableModel;
//!
//! let mut model = TableModel::new();
//! let report = model
//!     .parse_lines(["name,qty", "'bolt',4", "nut"], ',', true)
//!     .unwrap();
//!
//! assert_eq!(model.row_count(), 2);
//! assert_eq!(model.header_label(0), Some("name"));
//! assert_eq!(model.data(0, 0), Some("bolt"));
//! assert_eq!(report.diagnostics.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod diagnostic;
pub mod error;
pub mod model;
pub mod observer;
pub mod quote;
pub mod source;
pub mod store;
pub mod tokenizer;

pub use config::ParseConfig;
pub use diagnostic::Diagnostic;
pub use error::{Error, Result};
pub use model::{ParseReport, TableModel};
pub use observer::{CellRange, EventLog, ModelEvent, ModelObserver, Orientation};
pub use quote::strip_quotes;
pub use source::{LineSource, LinesSource, ReaderSource};
pub use store::{Cell, TabularStore};
pub use tokenizer::split;
