//! Change notifications for presentation layers.
//!
//! A [`TableModel`](crate::TableModel) tells its observers about structural
//! resets and display changes through the [`ModelObserver`] trait. All calls
//! are synchronous and happen on the thread that mutates the model.
//!
//! # Ordering
//!
//! Every parse or clear produces exactly one [`reset_begin`] followed by one
//! [`reset_end`]. Counts and cells must not be read in between; observers are
//! handed no model reference, so the borrow checker already rules that out.
//!
//! [`reset_begin`]: ModelObserver::reset_begin
//! [`reset_end`]: ModelObserver::reset_end
//!
//! # Examples
//!
//! ```
//! use csvmodel::{EventLog, ModelEvent, TableModel};
//!
//! let log = EventLog::new();
//! let mut model = TableModel::new();
//! model.subscribe(Box::new(log.clone()));
//!
//! model.clear();
//! assert_eq!(log.events(), vec![ModelEvent::ResetBegin, ModelEvent::ResetEnd]);
//! ```

use std::sync::{Arc, Mutex};

/// Which header a notification or lookup refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Column labels, taken from the header line.
    Horizontal,
    /// Row labels, numbered from 1.
    Vertical,
}

/// An inclusive rectangle of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    /// First row in the range.
    pub first_row: usize,
    /// Last row in the range (inclusive).
    pub last_row: usize,
    /// First column in the range.
    pub first_column: usize,
    /// Last column in the range (inclusive).
    pub last_column: usize,
}

impl CellRange {
    /// Returns the range covering a whole `rows` × `columns` table, or `None`
    /// if the table has no cells.
    #[must_use]
    pub fn full(rows: usize, columns: usize) -> Option<Self> {
        (rows > 0 && columns > 0).then(|| Self {
            first_row: 0,
            last_row: rows - 1,
            first_column: 0,
            last_column: columns - 1,
        })
    }
}

/// Receiver of model change notifications.
///
/// Every method has an empty default so implementors only override what
/// they care about.
pub trait ModelObserver {
    /// A structural reset is about to start.
    fn reset_begin(&mut self) {}

    /// The structural reset finished; counts are stable again.
    fn reset_end(&mut self) {}

    /// The displayed text of the cells in `range` changed.
    fn display_changed(&mut self, range: CellRange) {
        let _ = range;
    }

    /// The header labels from `first` to `last` (inclusive) changed.
    fn header_changed(&mut self, orientation: Orientation, first: usize, last: usize) {
        let _ = (orientation, first, last);
    }
}

/// One recorded notification, mirroring the [`ModelObserver`] callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelEvent {
    /// See [`ModelObserver::reset_begin`].
    ResetBegin,
    /// See [`ModelObserver::reset_end`].
    ResetEnd,
    /// See [`ModelObserver::display_changed`].
    DisplayChanged(CellRange),
    /// See [`ModelObserver::header_changed`].
    HeaderChanged {
        /// Which header changed.
        orientation: Orientation,
        /// First changed section.
        first: usize,
        /// Last changed section (inclusive).
        last: usize,
    },
}

/// An observer that records every notification it receives.
///
/// Clones share the same storage, so one clone can be handed to the model
/// while another is kept for inspection.
///
/// # Mutex Poisoning
///
/// All methods panic if the internal mutex is poisoned, which only happens
/// if another thread panicked while holding the lock.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<ModelEvent>>>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event.
    pub fn push(&self, event: ModelEvent) {
        self.events
            .lock()
            .expect("event log mutex should not be poisoned")
            .push(event);
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events
            .lock()
            .expect("event log mutex should not be poisoned")
            .len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of all recorded events in order.
    #[must_use]
    pub fn events(&self) -> Vec<ModelEvent> {
        self.events
            .lock()
            .expect("event log mutex should not be poisoned")
            .clone()
    }

    /// Removes and returns all recorded events.
    pub fn take(&self) -> Vec<ModelEvent> {
        std::mem::take(
            &mut *self
                .events
                .lock()
                .expect("event log mutex should not be poisoned"),
        )
    }

    /// Discards all recorded events.
    pub fn clear(&self) {
        self.events
            .lock()
            .expect("event log mutex should not be poisoned")
            .clear();
    }
}

impl ModelObserver for EventLog {
    fn reset_begin(&mut self) {
        self.push(ModelEvent::ResetBegin);
    }

    fn reset_end(&mut self) {
        self.push(ModelEvent::ResetEnd);
    }

    fn display_changed(&mut self, range: CellRange) {
        self.push(ModelEvent::DisplayChanged(range));
    }

    fn header_changed(&mut self, orientation: Orientation, first: usize, last: usize) {
        self.push(ModelEvent::HeaderChanged {
            orientation,
            first,
            last,
        });
    }
}
