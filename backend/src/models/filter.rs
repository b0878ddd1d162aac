//! Filter predicates selected by the dashboard controls.
//!
//! A [`FilterState`] is a plain value: it is produced per interaction, passed
//! into the filter engine and never holds a reference to the records it is
//! applied to. Its defaults select the whole record store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::booking::{BookingRecord, HotelType};
use crate::error::{InsightsError, InsightsResult};

pub const FIRST_MONTH: u8 = 1;
pub const LAST_MONTH: u8 = 12;

/// Inclusive arrival-month window, always satisfying
/// `1 <= min <= max <= 12`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MonthRangeInput")]
pub struct MonthRange {
    min: u8,
    max: u8,
}

#[derive(Deserialize)]
struct MonthRangeInput {
    #[serde(default = "default_first_month")]
    min: u8,
    #[serde(default = "default_last_month")]
    max: u8,
}

fn default_first_month() -> u8 {
    FIRST_MONTH
}

fn default_last_month() -> u8 {
    LAST_MONTH
}

impl MonthRange {
    pub fn new(min: u8, max: u8) -> InsightsResult<Self> {
        if !(FIRST_MONTH..=LAST_MONTH).contains(&min) || !(FIRST_MONTH..=LAST_MONTH).contains(&max)
        {
            return Err(InsightsError::invalid_filter(format!(
                "month range {}..={} is outside {}..={}",
                min, max, FIRST_MONTH, LAST_MONTH
            )));
        }
        if min > max {
            return Err(InsightsError::invalid_filter(format!(
                "month range minimum {} is greater than maximum {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    pub fn full() -> Self {
        Self {
            min: FIRST_MONTH,
            max: LAST_MONTH,
        }
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    pub fn contains(&self, month: u8) -> bool {
        (self.min..=self.max).contains(&month)
    }

    pub fn is_full(&self) -> bool {
        self.min == FIRST_MONTH && self.max == LAST_MONTH
    }
}

impl Default for MonthRange {
    fn default() -> Self {
        Self::full()
    }
}

impl TryFrom<MonthRangeInput> for MonthRange {
    type Error = InsightsError;

    fn try_from(input: MonthRangeInput) -> Result<Self, Self::Error> {
        MonthRange::new(input.min, input.max)
    }
}

/// Country predicate: everything, or one country code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CountryFilter {
    #[default]
    All,
    Country(String),
}

impl CountryFilter {
    /// Records without a country only pass the `All` filter.
    pub fn matches(&self, country: Option<&str>) -> bool {
        match self {
            CountryFilter::All => true,
            CountryFilter::Country(code) => {
                country.is_some_and(|c| c.eq_ignore_ascii_case(code))
            }
        }
    }
}

impl FromStr for CountryFilter {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InsightsError::invalid_filter(
                "country filter must be 'All' or a country code",
            ));
        }
        if trimmed.eq_ignore_ascii_case("all") {
            Ok(CountryFilter::All)
        } else {
            Ok(CountryFilter::Country(trimmed.to_string()))
        }
    }
}

impl TryFrom<String> for CountryFilter {
    type Error = InsightsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CountryFilter> for String {
    fn from(filter: CountryFilter) -> Self {
        filter.to_string()
    }
}

impl fmt::Display for CountryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountryFilter::All => f.write_str("All"),
            CountryFilter::Country(code) => f.write_str(code),
        }
    }
}

/// Hotel predicate: both hotel types, or only one of them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HotelFilter {
    #[default]
    All,
    Only(HotelType),
}

impl HotelFilter {
    pub fn matches(&self, hotel: HotelType) -> bool {
        match self {
            HotelFilter::All => true,
            HotelFilter::Only(selected) => *selected == hotel,
        }
    }
}

impl FromStr for HotelFilter {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(HotelFilter::All);
        }
        s.parse::<HotelType>()
            .map(HotelFilter::Only)
            .map_err(InsightsError::invalid_filter)
    }
}

impl TryFrom<String> for HotelFilter {
    type Error = InsightsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HotelFilter> for String {
    fn from(filter: HotelFilter) -> Self {
        filter.to_string()
    }
}

impl fmt::Display for HotelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HotelFilter::All => f.write_str("All"),
            HotelFilter::Only(hotel) => f.write_str(hotel.label()),
        }
    }
}

/// The combined set of narrowing predicates.
///
/// A record passes iff it satisfies the month range, country, hotel type and
/// cancellation predicates together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub month_range: MonthRange,
    pub country: CountryFilter,
    pub hotel_type: HotelFilter,
    pub include_canceled: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            month_range: MonthRange::full(),
            country: CountryFilter::All,
            hotel_type: HotelFilter::All,
            include_canceled: true,
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from loosely typed control values. Absent values fall
    /// back to the defaults.
    pub fn from_parts(
        min_month: Option<u8>,
        max_month: Option<u8>,
        country: Option<&str>,
        hotel_type: Option<&str>,
        include_canceled: Option<bool>,
    ) -> InsightsResult<Self> {
        let month_range = MonthRange::new(
            min_month.unwrap_or(FIRST_MONTH),
            max_month.unwrap_or(LAST_MONTH),
        )?;
        let country = country
            .map(str::parse::<CountryFilter>)
            .transpose()?
            .unwrap_or_default();
        let hotel_type = hotel_type
            .map(str::parse::<HotelFilter>)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            month_range,
            country,
            hotel_type,
            include_canceled: include_canceled.unwrap_or(true),
        })
    }

    pub fn with_month_range(mut self, min: u8, max: u8) -> InsightsResult<Self> {
        self.month_range = MonthRange::new(min, max)?;
        Ok(self)
    }

    pub fn with_country(mut self, country: CountryFilter) -> Self {
        self.country = country;
        self
    }

    pub fn with_hotel_type(mut self, hotel_type: HotelFilter) -> Self {
        self.hotel_type = hotel_type;
        self
    }

    pub fn with_include_canceled(mut self, include_canceled: bool) -> Self {
        self.include_canceled = include_canceled;
        self
    }

    /// Check the invariants that the field types alone cannot enforce.
    pub fn validate(&self) -> InsightsResult<()> {
        MonthRange::new(self.month_range.min(), self.month_range.max())?;
        if let CountryFilter::Country(code) = &self.country {
            if code.trim().is_empty() {
                return Err(InsightsError::invalid_filter(
                    "country filter must be 'All' or a country code",
                ));
            }
        }
        Ok(())
    }

    pub fn matches_month(&self, record: &BookingRecord) -> bool {
        self.month_range.contains(record.arrival_month)
    }

    pub fn matches_country(&self, record: &BookingRecord) -> bool {
        self.country.matches(record.country.as_deref())
    }

    pub fn matches_hotel(&self, record: &BookingRecord) -> bool {
        self.hotel_type.matches(record.hotel)
    }

    pub fn matches_cancellation(&self, record: &BookingRecord) -> bool {
        self.include_canceled || !record.is_canceled
    }

    pub fn matches(&self, record: &BookingRecord) -> bool {
        self.matches_month(record)
            && self.matches_country(record)
            && self.matches_hotel(record)
            && self.matches_cancellation(record)
    }

    /// True when the filter selects every record.
    pub fn is_unfiltered(&self) -> bool {
        self.month_range.is_full()
            && self.country == CountryFilter::All
            && self.hotel_type == HotelFilter::All
            && self.include_canceled
    }
}
