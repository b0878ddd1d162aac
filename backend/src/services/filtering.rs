use log::debug;

use crate::error::InsightsResult;
use crate::models::{BookingRecord, FilterState};
use crate::store::RecordStore;

/// Records that satisfy one [`FilterState`], in store order.
///
/// Owns its records so a view outlives the lock or request that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView {
    filter: FilterState,
    records: Vec<BookingRecord>,
}

impl FilteredView {
    pub fn new(filter: FilterState, records: Vec<BookingRecord>) -> Self {
        Self { filter, records }
    }

    /// The filter this view was derived from.
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn records(&self) -> &[BookingRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BookingRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First `rows` matching records. Aggregation always uses the full view.
    pub fn preview(&self, rows: usize) -> &[BookingRecord] {
        &self.records[..rows.min(self.records.len())]
    }
}

impl<'a> IntoIterator for &'a FilteredView {
    type Item = &'a BookingRecord;
    type IntoIter = std::slice::Iter<'a, BookingRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Narrow the store to the records matching every predicate of `filter`.
///
/// The filter is validated first; an empty result is not an error.
pub fn apply_filter(store: &RecordStore, filter: &FilterState) -> InsightsResult<FilteredView> {
    filter.validate()?;

    let records: Vec<BookingRecord> = store
        .scan()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect();

    debug!(
        "Filter {:?} kept {} of {} records",
        filter,
        records.len(),
        store.len()
    );

    Ok(FilteredView::new(filter.clone(), records))
}
