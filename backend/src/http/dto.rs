//! Data Transfer Objects for the HTTP API.
//!
//! View payloads are re-exported from the api module since they already
//! derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    AggregatedView, CancellationRow, FilterState, GeographicRow, HotelType, LoadReport,
    MarketSegmentRow, MonthlyGuestRow, PreviewData, PriceBox, PriceByRoomTypeData, ViewId,
    ViewSnapshot,
};
use crate::error::InsightsResult;

/// Filter controls as query parameters. Absent parameters select everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterQuery {
    #[serde(default)]
    pub min_month: Option<u8>,
    #[serde(default)]
    pub max_month: Option<u8>,
    /// Country code or "All"
    #[serde(default)]
    pub country: Option<String>,
    /// "City Hotel", "Resort Hotel" or "All"
    #[serde(default)]
    pub hotel: Option<String>,
    #[serde(default)]
    pub include_canceled: Option<bool>,
    /// Number of records to return; read by the preview endpoint only.
    #[serde(default)]
    pub rows: Option<usize>,
}

impl FilterQuery {
    pub fn to_filter_state(&self) -> InsightsResult<FilterState> {
        FilterState::from_parts(
            self.min_month,
            self.max_month,
            self.country.as_deref(),
            self.hotel.as_deref(),
            self.include_canceled,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub record_count: usize,
    /// SHA-256 of the loaded dataset
    pub checksum: String,
}

/// Values the dashboard controls can take.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOptionsResponse {
    pub hotel_types: Vec<HotelType>,
    pub countries: Vec<String>,
    /// Earliest and latest arrival month in the data, absent when empty.
    pub month_bounds: Option<(u8, u8)>,
    pub views: Vec<ViewId>,
    pub default_preview_rows: usize,
    pub max_preview_rows: usize,
    pub load_report: LoadReport,
}
