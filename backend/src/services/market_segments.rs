use std::collections::{BTreeMap, BTreeSet};

use crate::models::HotelType;
use crate::routes::market_segment::MarketSegmentRow;
use crate::services::filtering::FilteredView;

/// Guests per market segment for each hotel type present in the view.
///
/// Every segment gets a row for every hotel type present, with a zero count
/// where that hotel has no bookings in the segment. Ordered by count
/// descending, then segment name, then hotel type.
pub fn compute_market_segments(view: &FilteredView) -> Vec<MarketSegmentRow> {
    let mut hotels: BTreeSet<HotelType> = BTreeSet::new();
    let mut segments: BTreeSet<&str> = BTreeSet::new();
    let mut counts: BTreeMap<(&str, HotelType), usize> = BTreeMap::new();

    for record in view {
        hotels.insert(record.hotel);
        segments.insert(record.market_segment.as_str());
        *counts
            .entry((record.market_segment.as_str(), record.hotel))
            .or_default() += 1;
    }

    let mut rows: Vec<MarketSegmentRow> = segments
        .iter()
        .flat_map(|segment| {
            hotels.iter().map(|hotel| MarketSegmentRow {
                market_segment: segment.to_string(),
                hotel: *hotel,
                guest_count: counts.get(&(*segment, *hotel)).copied().unwrap_or(0),
            })
        })
        .collect();

    rows.sort_by(|a, b| b.guest_count.cmp(&a.guest_count));
    rows
}
