use log::warn;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::Cursor;

use super::month::parse_month_name;
use crate::error::{InsightsError, InsightsResult};
use crate::models::{BookingRecord, HotelType};

pub const HOTEL: &str = "hotel";
pub const IS_CANCELED: &str = "is_canceled";
pub const ARRIVAL_DATE_MONTH: &str = "arrival_date_month";
pub const COUNTRY: &str = "country";
pub const DISTRIBUTION_CHANNEL: &str = "distribution_channel";
pub const MARKET_SEGMENT: &str = "market_segment";
pub const RESERVED_ROOM_TYPE: &str = "reserved_room_type";
pub const ADR: &str = "adr";

/// Columns every input table must carry. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    HOTEL,
    IS_CANCELED,
    ARRIVAL_DATE_MONTH,
    COUNTRY,
    DISTRIBUTION_CHANNEL,
    MARKET_SEGMENT,
    RESERVED_ROOM_TYPE,
    ADR,
];

const TEXT_COLUMNS: [&str; 6] = [
    HOTEL,
    ARRIVAL_DATE_MONTH,
    COUNTRY,
    DISTRIBUTION_CHANNEL,
    MARKET_SEGMENT,
    RESERVED_ROOM_TYPE,
];

/// Placeholder the booking exports use for an unknown country.
const NULL_MARKER: &str = "NULL";

/// Rows logged individually before the remaining issues are only counted.
const MAX_LOGGED_ISSUES: usize = 10;

/// What to do with a row whose values cannot be normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidRowPolicy {
    /// Drop the row and record it in the load report.
    #[default]
    Reject,
    /// Abort the whole load with a parse error.
    Fail,
}

/// A row dropped during normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowIssue {
    /// Zero-based data row index (the header line is not counted).
    pub row: usize,
    pub column: String,
    pub value: Option<String>,
    pub reason: String,
}

/// Typed records plus everything that was dropped or degraded on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedBookings {
    pub records: Vec<BookingRecord>,
    pub rejected: Vec<RowIssue>,
    /// Accepted rows whose `adr` could not be read as a non-negative number.
    pub invalid_adr_rows: usize,
    pub total_rows: usize,
}

/// Read a booking CSV held in memory into a DataFrame with normalized column
/// types.
///
/// Every column is read as text and typed afterwards by
/// [`normalize_columns`], so a malformed `adr` or `is_canceled` value
/// anywhere in the file degrades that row instead of failing the read.
pub fn read_bookings_csv(bytes: &[u8]) -> InsightsResult<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(bytes.to_vec()))
        .finish()?;

    normalize_columns(df)
}

/// Fail with a schema error when any required column is absent.
pub fn ensure_required_columns(df: &DataFrame) -> InsightsResult<()> {
    let present: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|name| !present.iter().any(|p| p == name))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(InsightsError::schema(missing))
    }
}

/// Keep only the required columns and cast them to the types the record
/// conversion expects. Text columns become String, `adr` becomes Float64
/// with unparseable values turned into nulls. `is_canceled` keeps its
/// inferred type; [`cancellation_flags`] handles each encoding.
pub fn normalize_columns(df: DataFrame) -> InsightsResult<DataFrame> {
    ensure_required_columns(&df)?;

    let mut exprs: Vec<Expr> = TEXT_COLUMNS
        .iter()
        .map(|name| col(*name).cast(DataType::String))
        .collect();
    exprs.push(col(IS_CANCELED));
    exprs.push(col(ADR).cast(DataType::Float64));

    let df = df.lazy().select(exprs).collect()?;
    Ok(df)
}

/// Convert a normalized DataFrame into booking records.
pub fn dataframe_to_records(
    df: &DataFrame,
    policy: InvalidRowPolicy,
) -> InsightsResult<ParsedBookings> {
    ensure_required_columns(df)?;

    let hotels = text_column(df, HOTEL)?;
    let months = text_column(df, ARRIVAL_DATE_MONTH)?;
    let countries = text_column(df, COUNTRY)?;
    let channels = text_column(df, DISTRIBUTION_CHANNEL)?;
    let segments = text_column(df, MARKET_SEGMENT)?;
    let room_types = text_column(df, RESERVED_ROOM_TYPE)?;
    let adr_values = df.column(ADR)?.as_materialized_series().cast(&DataType::Float64)?;
    let adr_values = adr_values.f64()?;
    let canceled = cancellation_flags(df.column(IS_CANCELED)?)?;

    let height = df.height();
    let mut parsed = ParsedBookings {
        records: Vec::with_capacity(height),
        total_rows: height,
        ..Default::default()
    };

    for i in 0..height {
        let record = convert_row(
            i,
            hotels.get(i),
            months.get(i),
            canceled[i],
            [channels.get(i), segments.get(i), room_types.get(i)],
        );

        let (hotel, arrival_month, is_canceled, [channel, segment, room_type]) = match record {
            Ok(fields) => fields,
            Err(issue) => {
                if policy == InvalidRowPolicy::Fail {
                    return Err(InsightsError::parse(issue.row, issue.column, issue.reason));
                }
                if parsed.rejected.len() < MAX_LOGGED_ISSUES {
                    warn!(
                        "Rejecting booking row {}: column '{}' {} (value: {:?})",
                        issue.row, issue.column, issue.reason, issue.value
                    );
                }
                parsed.rejected.push(issue);
                continue;
            }
        };

        let adr = adr_values.get(i).filter(|v| v.is_finite() && *v >= 0.0);
        if adr.is_none() {
            parsed.invalid_adr_rows += 1;
        }

        parsed.records.push(BookingRecord {
            hotel,
            arrival_month,
            country: normalize_country(countries.get(i)),
            is_canceled,
            distribution_channel: channel.to_string(),
            market_segment: segment.to_string(),
            reserved_room_type: room_type.to_string(),
            adr,
        });
    }

    if parsed.rejected.len() > MAX_LOGGED_ISSUES {
        warn!(
            "{} further booking rows rejected (not logged individually)",
            parsed.rejected.len() - MAX_LOGGED_ISSUES
        );
    }

    Ok(parsed)
}

type RowFields<'a> = (HotelType, u8, bool, [&'a str; 3]);

fn convert_row<'a>(
    row: usize,
    hotel: Option<&str>,
    month: Option<&str>,
    canceled: Option<bool>,
    text: [Option<&'a str>; 3],
) -> Result<RowFields<'a>, RowIssue> {
    let issue = |column: &str, value: Option<&str>, reason: String| RowIssue {
        row,
        column: column.to_string(),
        value: value.map(str::to_string),
        reason,
    };

    let hotel_value = hotel.ok_or_else(|| issue(HOTEL, None, "is missing".to_string()))?;
    let hotel = hotel_value
        .parse::<HotelType>()
        .map_err(|e| issue(HOTEL, Some(hotel_value), e))?;

    let month_value =
        month.ok_or_else(|| issue(ARRIVAL_DATE_MONTH, None, "is missing".to_string()))?;
    let arrival_month = parse_month_name(month_value).ok_or_else(|| {
        issue(
            ARRIVAL_DATE_MONTH,
            Some(month_value),
            format!("has unrecognized month name '{}'", month_value),
        )
    })?;

    let is_canceled = canceled.ok_or_else(|| {
        issue(
            IS_CANCELED,
            None,
            "is missing or not a 0/1 or true/false flag".to_string(),
        )
    })?;

    let names = [DISTRIBUTION_CHANNEL, MARKET_SEGMENT, RESERVED_ROOM_TYPE];
    let mut values = [""; 3];
    for (slot, (value, name)) in values.iter_mut().zip(text.iter().zip(names)) {
        *slot = value.ok_or_else(|| issue(name, None, "is missing".to_string()))?;
    }

    Ok((hotel, arrival_month, is_canceled, values))
}

fn text_column<'a>(df: &'a DataFrame, name: &str) -> InsightsResult<&'a StringChunked> {
    Ok(df.column(name)?.as_materialized_series().str()?)
}

/// Decode the cancellation flag whether the CSV stored it as 0/1 integers,
/// booleans or text.
fn cancellation_flags(column: &Column) -> InsightsResult<Vec<Option<bool>>> {
    let series = column.as_materialized_series();
    let flags: Vec<Option<bool>> = match series.dtype() {
        DataType::Boolean => series.bool()?.into_iter().collect(),
        DataType::String => series
            .str()?
            .into_iter()
            .map(|v| v.and_then(parse_flag))
            .collect(),
        _ => {
            let ints = series.cast(&DataType::Int64)?;
            ints.i64()?
                .into_iter()
                .map(|v| match v {
                    Some(0) => Some(false),
                    Some(1) => Some(true),
                    _ => None,
                })
                .collect()
        }
    };
    Ok(flags)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

fn normalize_country(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NULL_MARKER) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_encodings() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag(" True "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("no"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_normalize_country_treats_null_marker_as_missing() {
        assert_eq!(normalize_country(Some("PRT")), Some("PRT".to_string()));
        assert_eq!(normalize_country(Some(" GBR ")), Some("GBR".to_string()));
        assert_eq!(normalize_country(Some("NULL")), None);
        assert_eq!(normalize_country(Some("")), None);
        assert_eq!(normalize_country(None), None);
    }

    #[test]
    fn test_convert_row_reports_first_problem() {
        let ok = convert_row(
            0,
            Some("Resort Hotel"),
            Some("July"),
            Some(false),
            [Some("TA/TO"), Some("Direct"), Some("A")],
        );
        let (hotel, month, canceled, text) = ok.unwrap();
        assert_eq!(hotel, HotelType::ResortHotel);
        assert_eq!(month, 7);
        assert!(!canceled);
        assert_eq!(text, ["TA/TO", "Direct", "A"]);

        let bad_month = convert_row(
            3,
            Some("City Hotel"),
            Some("Jully"),
            Some(true),
            [Some("TA/TO"), Some("Direct"), Some("A")],
        )
        .unwrap_err();
        assert_eq!(bad_month.row, 3);
        assert_eq!(bad_month.column, ARRIVAL_DATE_MONTH);
        assert_eq!(bad_month.value.as_deref(), Some("Jully"));

        let missing_segment = convert_row(
            5,
            Some("City Hotel"),
            Some("May"),
            Some(true),
            [Some("TA/TO"), None, Some("A")],
        )
        .unwrap_err();
        assert_eq!(missing_segment.column, MARKET_SEGMENT);
    }
}
