//! Output shapes of every dashboard view.
//!
//! Each submodule holds the rows one view produces and the identifier the
//! view is selected by. The computations live in [`crate::services`].

pub mod cancellation;
pub mod geographic;
pub mod market_segment;
pub mod monthly;
pub mod preview;
pub mod price;
