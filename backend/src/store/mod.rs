//! Immutable, load-once record store.
//!
//! The store owns every normalized [`BookingRecord`] for the process
//! lifetime. It has no update or delete operations; share it behind an
//! `Arc` for concurrent readers.

pub mod checksum;

use log::{info, warn};
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

use crate::error::InsightsResult;
use crate::models::BookingRecord;
use crate::parsing::{
    dataframe_to_records, month_name, normalize_columns, read_bookings_csv, InvalidRowPolicy,
    RowIssue,
};

pub use checksum::calculate_checksum;

/// Options controlling how a raw table becomes a store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub invalid_rows: InvalidRowPolicy,
}

impl LoadOptions {
    /// Abort on the first row that cannot be normalized.
    pub fn strict() -> Self {
        Self {
            invalid_rows: InvalidRowPolicy::Fail,
        }
    }
}

/// Summary of a load: what was kept, what was dropped and why.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadReport {
    pub total_rows: usize,
    pub loaded_rows: usize,
    pub rejected: Vec<RowIssue>,
    /// Loaded rows whose ADR is unusable; they are left out of price
    /// distributions only.
    pub invalid_adr_rows: usize,
}

#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<BookingRecord>,
    checksum: String,
    report: LoadReport,
}

impl RecordStore {
    /// Build a store from a raw table (any column order, extra columns
    /// allowed).
    pub fn load(table: DataFrame, options: LoadOptions) -> InsightsResult<Self> {
        let table = normalize_columns(table)?;
        Self::from_normalized(&table, options, None)
    }

    /// Build a store from CSV bytes. The checksum covers the raw bytes.
    pub fn from_csv_bytes(bytes: &[u8], options: LoadOptions) -> InsightsResult<Self> {
        let table = read_bookings_csv(bytes)?;
        Self::from_normalized(&table, options, Some(calculate_checksum(bytes)))
    }

    /// Read and load a CSV file.
    pub fn from_csv_path<P: AsRef<Path>>(path: P, options: LoadOptions) -> InsightsResult<Self> {
        let path = path.as_ref();
        info!("Loading booking records from {}", path.display());
        let bytes = std::fs::read(path)?;
        Self::from_csv_bytes(&bytes, options)
    }

    /// Wrap already-normalized records.
    pub fn from_records(records: Vec<BookingRecord>) -> Self {
        let checksum = records_checksum(&records);
        let report = LoadReport {
            total_rows: records.len(),
            loaded_rows: records.len(),
            rejected: Vec::new(),
            invalid_adr_rows: records.iter().filter(|r| r.adr.is_none()).count(),
        };
        Self {
            records,
            checksum,
            report,
        }
    }

    fn from_normalized(
        table: &DataFrame,
        options: LoadOptions,
        checksum: Option<String>,
    ) -> InsightsResult<Self> {
        let parsed = dataframe_to_records(table, options.invalid_rows)?;
        let report = LoadReport {
            total_rows: parsed.total_rows,
            loaded_rows: parsed.records.len(),
            rejected: parsed.rejected,
            invalid_adr_rows: parsed.invalid_adr_rows,
        };

        info!(
            "Loaded {} booking records from {} rows",
            report.loaded_rows, report.total_rows
        );
        if !report.rejected.is_empty() {
            warn!("Rejected {} booking rows during load", report.rejected.len());
        }
        if report.invalid_adr_rows > 0 {
            warn!(
                "{} booking rows have no usable ADR and are excluded from price distributions",
                report.invalid_adr_rows
            );
        }

        let checksum = checksum.unwrap_or_else(|| records_checksum(&parsed.records));
        let store = Self {
            records: parsed.records,
            checksum,
            report,
        };
        if let Some((first, last)) = store.month_bounds() {
            info!(
                "Arrivals span {} to {}",
                month_name(first).unwrap_or("?"),
                month_name(last).unwrap_or("?")
            );
        }
        Ok(store)
    }

    /// Restartable scan over every record in load order.
    pub fn scan(&self) -> std::slice::Iter<'_, BookingRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[BookingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct country codes, sorted. Records without a country are skipped.
    pub fn countries(&self) -> Vec<String> {
        self.scan()
            .filter_map(|r| r.country.as_deref())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Earliest and latest arrival month present, or `None` for an empty
    /// store.
    pub fn month_bounds(&self) -> Option<(u8, u8)> {
        let min = self.scan().map(|r| r.arrival_month).min()?;
        let max = self.scan().map(|r| r.arrival_month).max()?;
        Some((min, max))
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.report
    }
}

fn records_checksum(records: &[BookingRecord]) -> String {
    calculate_checksum(&serde_json::to_vec(records).unwrap_or_default())
}
