#![allow(dead_code)]

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Mutex;

use hotel_insights::models::{BookingRecord, HotelType};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Path of the sample export shipped with the tests.
pub fn sample_csv_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/hotel_bookings_sample.csv")
}

/// A non-canceled booking with neutral values; tweak fields as needed.
pub fn booking(hotel: HotelType, month: u8, country: Option<&str>) -> BookingRecord {
    BookingRecord {
        hotel,
        arrival_month: month,
        country: country.map(str::to_string),
        is_canceled: false,
        distribution_channel: "TA/TO".to_string(),
        market_segment: "Online TA".to_string(),
        reserved_room_type: "A".to_string(),
        adr: Some(100.0),
    }
}

pub fn canceled(mut record: BookingRecord) -> BookingRecord {
    record.is_canceled = true;
    record
}

/// The two-booking dataset used throughout the docs: a realized Resort stay
/// and a canceled City booking, both from Portugal in July.
pub fn two_record_scenario() -> Vec<BookingRecord> {
    let mut resort = booking(HotelType::ResortHotel, 7, Some("PRT"));
    resort.adr = Some(100.0);
    resort.distribution_channel = "Direct".to_string();

    let mut city = canceled(booking(HotelType::CityHotel, 7, Some("PRT")));
    city.adr = Some(80.0);
    city.distribution_channel = "TA".to_string();

    vec![resort, city]
}
