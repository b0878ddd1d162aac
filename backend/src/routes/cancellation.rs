use serde::{Deserialize, Serialize};

use crate::models::HotelType;

// =========================================================
// Cancellation channel types + view id
// =========================================================

/// Canceled bookings for one hotel type through one distribution channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancellationRow {
    pub hotel: HotelType,
    pub distribution_channel: String,
    pub cancellation_count: usize,
}

/// View identifier for cancellations by distribution channel
pub const CANCELLATION_CHANNEL_VIEW: &str = "cancellation-channel";
