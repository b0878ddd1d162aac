//! Public API surface of the hotel insights backend.
//!
//! This file gathers the view row types and the types callers need to select
//! and filter views. All types derive Serialize/Deserialize for JSON
//! serialization.

pub use crate::error::{InsightsError, InsightsResult};
pub use crate::models::{
    BookingRecord, CountryFilter, FilterState, HotelFilter, HotelType, MonthRange,
};
pub use crate::routes::cancellation::CancellationRow;
pub use crate::routes::geographic::GeographicRow;
pub use crate::routes::market_segment::MarketSegmentRow;
pub use crate::routes::monthly::MonthlyGuestRow;
pub use crate::routes::preview::PreviewData;
pub use crate::routes::price::PriceBox;
pub use crate::routes::price::PriceByRoomTypeData;
pub use crate::services::registry::{AggregatedView, ViewId, ViewSnapshot};
pub use crate::store::{LoadOptions, LoadReport};
