//! Month-name normalization for the `arrival_date_month` column.

use chrono::Month;

/// Parse a calendar month name into its number (1 = January).
///
/// Full names are the expected input ("July"); three-letter abbreviations
/// ("Jul") are accepted as well. Matching ignores case and surrounding
/// whitespace. Anything else yields `None`: callers must reject the row
/// rather than default to an arbitrary month.
pub fn parse_month_name(value: &str) -> Option<u8> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<Month>()
        .ok()
        .map(|month| month.number_from_month() as u8)
}

/// English name of a month number, if it is within 1..=12.
pub fn month_name(month: u8) -> Option<&'static str> {
    let month = Month::try_from(month).ok()?;
    Some(month.name())
}
