//! Parsers for the hotel booking export.
//!
//! - [`csv_parser`]: read the CSV with polars, validate the schema and convert
//!   rows into typed [`BookingRecord`](crate::models::BookingRecord)s
//! - [`month`]: month-name normalization for `arrival_date_month`
//!
//! # Example
//!
//! ```no_run
//! use hotel_insights::parsing::{dataframe_to_records, read_bookings_csv, InvalidRowPolicy};
//!
//! let bytes = std::fs::read("hotel_bookings.csv").expect("read csv");
//! let df = read_bookings_csv(&bytes).expect("valid booking table");
//! let parsed = dataframe_to_records(&df, InvalidRowPolicy::Reject).expect("records");
//! println!("{} records, {} rejected", parsed.records.len(), parsed.rejected.len());
//! ```

pub mod csv_parser;
pub mod month;


pub use csv_parser::{
    dataframe_to_records, ensure_required_columns, normalize_columns, read_bookings_csv,
    InvalidRowPolicy, ParsedBookings, RowIssue, REQUIRED_COLUMNS,
};
pub use month::{month_name, parse_month_name};
