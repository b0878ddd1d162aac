//! View selection and consistent snapshots.
//!
//! Every view in a snapshot is derived from the same [`FilteredView`], so
//! the geographic and monthly numbers always describe the same records.

use log::debug;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{InsightsError, InsightsResult};
use crate::models::{FilterState, HotelType};
use crate::routes::cancellation::{CancellationRow, CANCELLATION_CHANNEL_VIEW};
use crate::routes::geographic::{GeographicRow, GEOGRAPHIC_VIEW};
use crate::routes::market_segment::{MarketSegmentRow, MARKET_SEGMENT_VIEW};
use crate::routes::monthly::{
    MonthlyGuestRow, MONTHLY_CITY_VIEW, MONTHLY_COMBINED_VIEW, MONTHLY_RESORT_VIEW,
};
use crate::routes::preview::PreviewData;
use crate::routes::price::{PriceByRoomTypeData, PRICE_BY_ROOM_TYPE_VIEW};
use crate::services::cancellations::compute_cancellations;
use crate::services::filtering::{apply_filter, FilteredView};
use crate::services::geographic::compute_geographic;
use crate::services::market_segments::compute_market_segments;
use crate::services::monthly::{compute_monthly, series_for};
use crate::services::price_distribution::compute_price_by_room_type;
use crate::store::RecordStore;

/// Identifier of a selectable view.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ViewId {
    Geographic,
    MonthlyResort,
    MonthlyCity,
    MonthlyCombined,
    CancellationChannel,
    MarketSegment,
    PriceByRoomType,
}

impl ViewId {
    pub const ALL: [ViewId; 7] = [
        ViewId::Geographic,
        ViewId::MonthlyResort,
        ViewId::MonthlyCity,
        ViewId::MonthlyCombined,
        ViewId::CancellationChannel,
        ViewId::MarketSegment,
        ViewId::PriceByRoomType,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Geographic => GEOGRAPHIC_VIEW,
            ViewId::MonthlyResort => MONTHLY_RESORT_VIEW,
            ViewId::MonthlyCity => MONTHLY_CITY_VIEW,
            ViewId::MonthlyCombined => MONTHLY_COMBINED_VIEW,
            ViewId::CancellationChannel => CANCELLATION_CHANNEL_VIEW,
            ViewId::MarketSegment => MARKET_SEGMENT_VIEW,
            ViewId::PriceByRoomType => PRICE_BY_ROOM_TYPE_VIEW,
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        ViewId::ALL
            .into_iter()
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| InsightsError::UnknownView(s.to_string()))
    }
}

impl TryFrom<String> for ViewId {
    type Error = InsightsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ViewId> for String {
    fn from(id: ViewId) -> Self {
        id.as_str().to_string()
    }
}

/// Rows of one view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "rows", rename_all = "kebab-case")]
pub enum AggregatedView {
    Geographic(Vec<GeographicRow>),
    MonthlySeries(Vec<MonthlyGuestRow>),
    CancellationChannel(Vec<CancellationRow>),
    MarketSegment(Vec<MarketSegmentRow>),
    PriceByRoomType(PriceByRoomTypeData),
}

impl AggregatedView {
    /// True when the view has nothing to show.
    pub fn is_empty(&self) -> bool {
        match self {
            AggregatedView::Geographic(rows) => rows.is_empty(),
            AggregatedView::MonthlySeries(rows) => rows.is_empty(),
            AggregatedView::CancellationChannel(rows) => rows.is_empty(),
            AggregatedView::MarketSegment(rows) => rows.is_empty(),
            AggregatedView::PriceByRoomType(data) => data.groups.is_empty(),
        }
    }
}

/// Compute one view from a filtered view.
pub fn compute_view(view: &FilteredView, id: ViewId) -> AggregatedView {
    match id {
        ViewId::Geographic => AggregatedView::Geographic(compute_geographic(view)),
        ViewId::MonthlyResort => {
            AggregatedView::MonthlySeries(series_for(&compute_monthly(view), HotelType::ResortHotel))
        }
        ViewId::MonthlyCity => {
            AggregatedView::MonthlySeries(series_for(&compute_monthly(view), HotelType::CityHotel))
        }
        ViewId::MonthlyCombined => AggregatedView::MonthlySeries(compute_monthly(view)),
        ViewId::CancellationChannel => {
            AggregatedView::CancellationChannel(compute_cancellations(view))
        }
        ViewId::MarketSegment => AggregatedView::MarketSegment(compute_market_segments(view)),
        ViewId::PriceByRoomType => AggregatedView::PriceByRoomType(compute_price_by_room_type(view)),
    }
}

/// Every view for one filter, derived from a single filtered view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    pub filter: FilterState,
    /// Records that passed the filter.
    pub record_count: usize,
    pub views: BTreeMap<ViewId, AggregatedView>,
}

impl ViewSnapshot {
    pub fn get(&self, id: ViewId) -> Option<&AggregatedView> {
        self.views.get(&id)
    }
}

pub fn compute_snapshot(view: &FilteredView) -> ViewSnapshot {
    let views = ViewId::ALL
        .into_iter()
        .map(|id| (id, compute_view(view, id)))
        .collect();

    ViewSnapshot {
        filter: view.filter().clone(),
        record_count: view.len(),
        views,
    }
}

/// Serves views over a shared store, remembering the last snapshot.
#[derive(Debug)]
pub struct ViewRegistry {
    store: Arc<RecordStore>,
    last: Mutex<Option<Arc<ViewSnapshot>>>,
}

impl ViewRegistry {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self {
            store,
            last: Mutex::new(None),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// All views for `filter`. Repeated calls with the same filter reuse the
    /// previous snapshot.
    pub fn snapshot(&self, filter: &FilterState) -> InsightsResult<Arc<ViewSnapshot>> {
        if let Some(cached) = self.last.lock().as_ref() {
            if cached.filter == *filter {
                debug!("Reusing view snapshot for {:?}", filter);
                return Ok(Arc::clone(cached));
            }
        }

        let view = apply_filter(&self.store, filter)?;
        let snapshot = Arc::new(compute_snapshot(&view));
        *self.last.lock() = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// One view for `filter`.
    pub fn view(&self, id: ViewId, filter: &FilterState) -> InsightsResult<AggregatedView> {
        let snapshot = self.snapshot(filter)?;
        // `compute_snapshot` fills every id in `ViewId::ALL`.
        Ok(snapshot.views[&id].clone())
    }

    /// The first `rows` records matching `filter`.
    pub fn preview(&self, filter: &FilterState, rows: usize) -> InsightsResult<PreviewData> {
        let view = apply_filter(&self.store, filter)?;
        Ok(PreviewData {
            filter: filter.clone(),
            total_matching: view.len(),
            rows: view.preview(rows).to_vec(),
        })
    }
}
