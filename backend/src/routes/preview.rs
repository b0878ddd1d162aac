use serde::{Deserialize, Serialize};

use crate::models::{BookingRecord, FilterState};

// =========================================================
// Row preview types
// =========================================================

/// First rows of a filtered view, for the row-count preview control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewData {
    pub filter: FilterState,
    /// Records matching the filter, before truncation.
    pub total_matching: usize,
    pub rows: Vec<BookingRecord>,
}
