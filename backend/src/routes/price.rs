use serde::{Deserialize, Serialize};

use crate::models::HotelType;

// =========================================================
// Price distribution types + view id
// =========================================================

/// Box-plot summary of the average daily rate for one
/// `(reserved_room_type, hotel)` group of realized stays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBox {
    pub reserved_room_type: String,
    pub hotel: HotelType,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
    /// Smallest value within `q1 - 1.5 * IQR`.
    pub lower_fence: f64,
    /// Largest value within `q3 + 1.5 * IQR`.
    pub upper_fence: f64,
    /// Values beyond the fences, ascending.
    pub outliers: Vec<f64>,
}

/// Price distributions for the current filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceByRoomTypeData {
    pub groups: Vec<PriceBox>,
    /// Non-canceled records left out because their ADR is unusable.
    pub excluded_invalid_adr: usize,
}

/// View identifier for ADR distribution by room type
pub const PRICE_BY_ROOM_TYPE_VIEW: &str = "price-by-room-type";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_data_default_is_empty() {
        let data = PriceByRoomTypeData::default();
        assert!(data.groups.is_empty());
        assert_eq!(data.excluded_invalid_adr, 0);
    }
}
