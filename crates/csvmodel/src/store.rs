//! Growable row/column storage for parsed values.
//!
//! [`TabularStore`] keeps one owned buffer per row. Row and column counts
//! change independently, and every row is resized whenever the column count
//! changes, so each row always holds exactly
//! [`column_count`](TabularStore::column_count) cells.

/// A single stored value. `None` marks a cell that was never set, which is
/// distinct from a present empty string.
pub type Cell = Option<String>;

/// Row-major table of [`Cell`]s with independent row and column resizing.
///
/// # Panics
///
/// [`item_at`](Self::item_at) and [`set_item`](Self::set_item) do not check
/// bounds beyond Rust's own indexing. Keeping indices in range is the
/// caller's job; the model only calls them with validated positions.
///
/// # Examples
///
/// ```
/// use csvmodel::TabularStore;
///
/// let mut store = TabularStore::new();
/// store.set_column_count(2);
/// store.add_row();
/// store.set_item(0, 1, "b");
///
/// assert_eq!(store.item_at(0, 0), None);
/// assert_eq!(store.item_at(0, 1), Some("b"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabularStore {
    column_count: usize,
    rows: Vec<Vec<Cell>>,
}

impl TabularStore {
    /// Creates an empty store with no rows and no columns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of cells in every row.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Returns `true` if the store has no cells at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.column_count == 0
    }

    /// Resizes to `row_count` rows.
    ///
    /// New rows are filled with unset cells; shrinking drops trailing rows.
    pub fn set_row_count(&mut self, row_count: usize) {
        if row_count == self.rows.len() {
            return;
        }
        let column_count = self.column_count;
        self.rows.resize_with(row_count, || vec![None; column_count]);
    }

    /// Resizes every row to `column_count` cells.
    ///
    /// New cells are unset; shrinking truncates each row on the right.
    pub fn set_column_count(&mut self, column_count: usize) {
        if column_count == self.column_count {
            return;
        }
        self.column_count = column_count;
        for row in &mut self.rows {
            row.resize(column_count, None);
        }
    }

    /// Appends one row of unset cells.
    pub fn add_row(&mut self) {
        self.set_row_count(self.row_count() + 1);
    }

    /// Appends one unset cell to every row.
    pub fn add_column(&mut self) {
        self.set_column_count(self.column_count + 1);
    }

    /// Returns the value at (`row`, `column`), or `None` if it is unset.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[must_use]
    pub fn item_at(&self, row: usize, column: usize) -> Option<&str> {
        self.rows[row][column].as_deref()
    }

    /// Stores `value` at (`row`, `column`).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn set_item(&mut self, row: usize, column: usize, value: impl Into<String>) {
        self.rows[row][column] = Some(value.into());
    }

    /// Returns the cell at (`row`, `column`) if both indices are in range.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|cells| cells.get(column))
    }

    /// Returns the cells of `row`, if it exists.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Iterates over all rows in order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Drops all rows and resets the shape to 0 × 0.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.column_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    /// A 2 × 2 store with every cell set.
    #[fixture]
    fn filled() -> TabularStore {
        let mut store = TabularStore::new();
        store.set_column_count(2);
        store.set_row_count(2);
        for row in 0..2 {
            for column in 0..2 {
                store.set_item(row, column, format!("{row}{column}"));
            }
        }
        store
    }

    fn assert_rectangular(store: &TabularStore) {
        for row in store.rows() {
            assert_eq!(row.len(), store.column_count());
        }
    }

    #[test]
    fn new_store_is_empty() {
        let store = TabularStore::new();
        assert_eq!(store.row_count(), 0);
        assert_eq!(store.column_count(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn grown_store_has_unset_cells() {
        let mut store = TabularStore::new();
        store.set_row_count(3);
        store.set_column_count(2);
        assert_eq!(store.row_count(), 3);
        assert_eq!(store.column_count(), 2);
        assert!(store.rows().flatten().all(Option::is_none));
    }

    #[rstest]
    #[case::grow(4)]
    #[case::shrink(1)]
    #[case::to_zero(0)]
    fn set_column_count_resizes_every_row(filled: TabularStore, #[case] columns: usize) {
        let mut store = filled;
        store.set_column_count(columns);

        assert_eq!(store.column_count(), columns);
        assert_rectangular(&store);
        for row in 0..store.row_count() {
            for column in 2..columns {
                assert_eq!(store.item_at(row, column), None);
            }
        }
    }

    #[rstest]
    fn growing_columns_keeps_existing_values(filled: TabularStore) {
        let mut store = filled;
        store.set_column_count(3);
        assert_eq!(store.item_at(1, 1), Some("11"));
        let expected = [Some("10".to_string()), Some("11".to_string()), None];
        assert_eq!(store.row(1), Some(&expected[..]));
    }

    #[rstest]
    fn set_row_count_appends_padded_rows(filled: TabularStore) {
        let mut store = filled;
        store.set_row_count(5);

        assert_eq!(store.row_count(), 5);
        assert_rectangular(&store);
        for row in 2..5 {
            assert!(store.row(row).unwrap().iter().all(Option::is_none));
        }
        assert_eq!(store.item_at(0, 0), Some("00"));
    }

    #[rstest]
    fn set_row_count_shrinks_from_the_end(filled: TabularStore) {
        let mut store = filled;
        store.set_row_count(1);
        assert_eq!(store.row_count(), 1);
        assert_eq!(store.item_at(0, 1), Some("01"));
    }

    #[rstest]
    fn unchanged_counts_are_no_ops(filled: TabularStore) {
        let mut store = filled.clone();
        store.set_row_count(2);
        store.set_column_count(2);
        assert_eq!(store, filled);
    }

    #[test]
    fn add_row_uses_current_column_count() {
        let mut store = TabularStore::new();
        store.set_column_count(3);
        store.add_row();
        store.add_row();

        assert_eq!(store.row_count(), 2);
        assert_rectangular(&store);
    }

    #[rstest]
    fn add_column_pads_on_the_right(filled: TabularStore) {
        let mut store = filled;
        store.add_column();
        assert_eq!(store.column_count(), 3);
        assert_eq!(store.item_at(0, 2), None);
        assert_eq!(store.item_at(0, 1), Some("01"));
    }

    #[test]
    fn empty_string_is_distinct_from_unset() {
        let mut store = TabularStore::new();
        store.add_column();
        store.add_column();
        store.add_row();
        store.set_item(0, 0, "");
        assert_eq!(store.item_at(0, 0), Some(""));
        assert_eq!(store.item_at(0, 1), None);
    }

    #[rstest]
    fn get_returns_none_out_of_range(filled: TabularStore) {
        assert!(filled.get(0, 0).is_some());
        assert!(filled.get(2, 0).is_none());
        assert!(filled.get(0, 2).is_none());
    }

    #[rstest]
    #[should_panic(expected = "index out of bounds")]
    fn item_at_out_of_range_panics(filled: TabularStore) {
        let _ = filled.item_at(2, 0);
    }

    #[rstest]
    fn clear_resets_shape(filled: TabularStore) {
        let mut store = filled;
        store.clear();
        assert_eq!(store, TabularStore::new());

        store.clear();
        assert_eq!(store, TabularStore::new());

        store.set_column_count(1);
        store.add_row();
        assert_rectangular(&store);
    }
}
