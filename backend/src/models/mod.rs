//! Domain model: normalized booking records and the filter predicates
//! applied to them.

pub mod booking;
pub mod filter;

pub use booking::*;
pub use filter::*;
