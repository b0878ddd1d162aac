use serde::{Deserialize, Serialize};

use crate::models::HotelType;

// =========================================================
// Market segment types + view id
// =========================================================

/// Guests in one market segment for one hotel type. A zero count means the
/// segment exists for another hotel type but not for this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSegmentRow {
    pub market_segment: String,
    pub hotel: HotelType,
    pub guest_count: usize,
}

/// View identifier for guests grouped by market segment
pub const MARKET_SEGMENT_VIEW: &str = "market-segment";
