use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hotel category a reservation belongs to.
///
/// Ordering places `CityHotel` before `ResortHotel`; every aggregator relies on
/// it for deterministic output.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum HotelType {
    #[serde(rename = "City Hotel", alias = "CityHotel")]
    CityHotel,
    #[serde(rename = "Resort Hotel", alias = "ResortHotel")]
    ResortHotel,
}

impl HotelType {
    pub const ALL: [HotelType; 2] = [HotelType::CityHotel, HotelType::ResortHotel];

    /// Label used in the source table.
    pub fn label(&self) -> &'static str {
        match self {
            HotelType::CityHotel => "City Hotel",
            HotelType::ResortHotel => "Resort Hotel",
        }
    }
}

impl fmt::Display for HotelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HotelType {
    type Err = String;

    /// Accepts the table labels ("City Hotel"), the compact variant names
    /// ("CityHotel") and the short forms ("city"), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match compact.as_str() {
            "cityhotel" | "city" => Ok(HotelType::CityHotel),
            "resorthotel" | "resort" => Ok(HotelType::ResortHotel),
            _ => Err(format!(
                "unrecognized hotel type '{}'. Must be 'City Hotel' or 'Resort Hotel'",
                s
            )),
        }
    }
}

/// One reservation line after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub hotel: HotelType,
    /// Calendar month of arrival, 1 = January.
    pub arrival_month: u8,
    /// Country code; `None` when the source value was empty or "NULL".
    pub country: Option<String>,
    pub is_canceled: bool,
    pub distribution_channel: String,
    pub market_segment: String,
    pub reserved_room_type: String,
    /// Average daily rate. `None` when the source value was not a
    /// non-negative number.
    pub adr: Option<f64>,
}
