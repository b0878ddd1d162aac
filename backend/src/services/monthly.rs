use std::collections::BTreeMap;

use crate::models::HotelType;
use crate::routes::monthly::MonthlyGuestRow;
use crate::services::filtering::FilteredView;

/// Guests per arrival month for each hotel type present.
///
/// City rows come before Resort rows and months ascend within each hotel.
/// Months without arrivals are omitted.
pub fn compute_monthly(view: &FilteredView) -> Vec<MonthlyGuestRow> {
    let mut counts: BTreeMap<(HotelType, u8), usize> = BTreeMap::new();
    for record in view {
        *counts.entry((record.hotel, record.arrival_month)).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|((hotel, month), guest_count)| MonthlyGuestRow {
            hotel,
            month,
            guest_count,
        })
        .collect()
}

/// The series of a single hotel type.
pub fn series_for(rows: &[MonthlyGuestRow], hotel: HotelType) -> Vec<MonthlyGuestRow> {
    rows.iter().filter(|row| row.hotel == hotel).cloned().collect()
}
