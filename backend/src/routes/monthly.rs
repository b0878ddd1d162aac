use serde::{Deserialize, Serialize};

use crate::models::HotelType;

// =========================================================
// Monthly series types + view ids
// =========================================================

/// Guests arriving in one month for one hotel type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyGuestRow {
    pub hotel: HotelType,
    /// Calendar month, 1 = January.
    pub month: u8,
    pub guest_count: usize,
}

/// View identifier for the resort-only monthly series
pub const MONTHLY_RESORT_VIEW: &str = "monthly-resort";
/// View identifier for the city-only monthly series
pub const MONTHLY_CITY_VIEW: &str = "monthly-city";
/// View identifier for both series together
pub const MONTHLY_COMBINED_VIEW: &str = "monthly-combined";
