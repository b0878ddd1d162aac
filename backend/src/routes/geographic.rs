use serde::{Deserialize, Serialize};

// =========================================================
// Geographic types + view id
// =========================================================

/// Booking counts for one country, split by hotel type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeographicRow {
    pub country: String,
    pub city_count: usize,
    pub resort_count: usize,
    /// Always `city_count + resort_count`.
    pub total: usize,
}

/// View identifier for the bookings-per-country map
pub const GEOGRAPHIC_VIEW: &str = "geographic";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geographic_row_serialization() {
        let row = GeographicRow {
            country: "PRT".to_string(),
            city_count: 1,
            resort_count: 1,
            total: 2,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["country"], "PRT");
        assert_eq!(json["total"], 2);
    }
}
