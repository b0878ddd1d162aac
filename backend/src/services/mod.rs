//! Service layer: the filter engine and the view computations.
//!
//! Every function here is pure over a [`RecordStore`](crate::store::RecordStore)
//! or a [`FilteredView`]; the [`ViewRegistry`] ties them together for callers
//! that select views by identifier.

pub mod cancellations;
pub mod filtering;
pub mod geographic;
pub mod market_segments;
pub mod monthly;
pub mod price_distribution;
pub mod registry;

#[cfg(test)]
mod aggregators_tests;
#[cfg(test)]
mod filtering_tests;

pub use cancellations::compute_cancellations;
pub use filtering::{apply_filter, FilteredView};
pub use geographic::{compute_geographic, sort_by_total_desc};
pub use market_segments::compute_market_segments;
pub use monthly::{compute_monthly, series_for};
pub use price_distribution::compute_price_by_room_type;
pub use registry::{compute_snapshot, compute_view, AggregatedView, ViewId, ViewRegistry, ViewSnapshot};
