use log::warn;
use std::collections::BTreeMap;

use crate::models::HotelType;
use crate::routes::price::{PriceBox, PriceByRoomTypeData};
use crate::services::filtering::FilteredView;

/// Box-plot whisker reach, in interquartile ranges.
const WHISKER_IQR: f64 = 1.5;

/// ADR distribution per `(reserved_room_type, hotel)` for realized stays.
///
/// Canceled records are always left out, whatever the filter says. Records
/// without a usable ADR are left out and counted.
pub fn compute_price_by_room_type(view: &FilteredView) -> PriceByRoomTypeData {
    let mut groups: BTreeMap<(&str, HotelType), Vec<f64>> = BTreeMap::new();
    let mut excluded_invalid_adr = 0;

    for record in view.iter().filter(|r| !r.is_canceled) {
        match record.adr {
            Some(adr) => groups
                .entry((record.reserved_room_type.as_str(), record.hotel))
                .or_default()
                .push(adr),
            None => excluded_invalid_adr += 1,
        }
    }

    if excluded_invalid_adr > 0 {
        warn!(
            "Excluded {} bookings without a usable ADR from the price distribution",
            excluded_invalid_adr
        );
    }

    let groups = groups
        .into_iter()
        .filter_map(|((room_type, hotel), values)| box_summary(room_type, hotel, values))
        .collect();

    PriceByRoomTypeData {
        groups,
        excluded_invalid_adr,
    }
}

/// Summarize one group. Returns `None` for an empty group.
fn box_summary(room_type: &str, hotel: HotelType, mut values: Vec<f64>) -> Option<PriceBox> {
    values.sort_by(|a, b| a.total_cmp(b));
    let min = *values.first()?;
    let max = *values.last()?;

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let q1 = quantile(&values, 0.25);
    let median = quantile(&values, 0.5);
    let q3 = quantile(&values, 0.75);

    let iqr = q3 - q1;
    let low_limit = q1 - WHISKER_IQR * iqr;
    let high_limit = q3 + WHISKER_IQR * iqr;

    let inside = |v: &f64| *v >= low_limit && *v <= high_limit;
    let lower_fence = values.iter().copied().find(inside).unwrap_or(min);
    let upper_fence = values.iter().rev().copied().find(inside).unwrap_or(max);
    let outliers = values.iter().copied().filter(|v| !inside(v)).collect();

    Some(PriceBox {
        reserved_room_type: room_type.to_string(),
        hotel,
        count,
        min,
        q1,
        median,
        q3,
        max,
        mean,
        lower_fence,
        upper_fence,
        outliers,
    })
}

/// Quantile of sorted, non-empty data with linear interpolation between
/// closest ranks.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}
