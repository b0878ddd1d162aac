use std::collections::BTreeMap;

use crate::models::HotelType;
use crate::routes::geographic::GeographicRow;
use crate::services::filtering::FilteredView;

/// Count bookings per country, split by hotel type.
///
/// Records without a country are skipped. Rows come out ordered by country
/// code.
pub fn compute_geographic(view: &FilteredView) -> Vec<GeographicRow> {
    let mut counts: BTreeMap<&str, (usize, usize)> = BTreeMap::new();

    for record in view {
        let Some(country) = record.country.as_deref() else {
            continue;
        };
        let entry = counts.entry(country).or_default();
        match record.hotel {
            HotelType::CityHotel => entry.0 += 1,
            HotelType::ResortHotel => entry.1 += 1,
        }
    }

    counts
        .into_iter()
        .map(|(country, (city_count, resort_count))| GeographicRow {
            country: country.to_string(),
            city_count,
            resort_count,
            total: city_count + resort_count,
        })
        .collect()
}

/// Re-order rows for display: largest total first, ties by country code.
pub fn sort_by_total_desc(rows: &mut [GeographicRow]) {
    rows.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.country.cmp(&b.country)));
}
