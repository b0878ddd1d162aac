use std::collections::BTreeMap;

use crate::models::HotelType;
use crate::routes::cancellation::CancellationRow;
use crate::services::filtering::FilteredView;

/// Canceled bookings per `(hotel, distribution_channel)`.
///
/// Ordered by count descending, then channel name, then hotel type.
pub fn compute_cancellations(view: &FilteredView) -> Vec<CancellationRow> {
    let mut counts: BTreeMap<(&str, HotelType), usize> = BTreeMap::new();
    for record in view.iter().filter(|r| r.is_canceled) {
        *counts
            .entry((record.distribution_channel.as_str(), record.hotel))
            .or_default() += 1;
    }

    let mut rows: Vec<CancellationRow> = counts
        .into_iter()
        .map(|((channel, hotel), cancellation_count)| CancellationRow {
            hotel,
            distribution_channel: channel.to_string(),
            cancellation_count,
        })
        .collect();

    // Map order already breaks ties by channel then hotel; the sort is stable.
    rows.sort_by(|a, b| b.cancellation_count.cmp(&a.cancellation_count));
    rows
}
