//! Error types for loading, filtering and aggregating booking data.
//!
//! Conditions that merely mean "no data" (an empty filtered view, a group with
//! zero members) are never represented here; they surface as empty results.

use polars::prelude::PolarsError;

/// Result type for library operations
pub type InsightsResult<T> = Result<T, InsightsError>;

/// Error type for the booking insights pipeline
#[derive(Debug, thiserror::Error)]
pub enum InsightsError {
    /// One or more required columns are absent from the input table.
    /// Fatal: the load is aborted.
    #[error("Schema error: missing required column(s): {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    /// A row holds a value that cannot be normalized (unknown month name,
    /// unknown hotel name, missing cancellation flag).
    #[error("Parse error at row {row}, column '{column}': {message}")]
    Parse {
        row: usize,
        column: String,
        message: String,
    },

    /// Filter values violate the month ordering invariant or carry an
    /// unrecognized enumerated value.
    #[error("Invalid filter state: {message}")]
    InvalidFilterState { message: String },

    /// The requested view identifier is not registered.
    #[error("Unknown view: '{0}'")]
    UnknownView(String),

    /// Configuration file or environment override could not be used.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The CSV reader or a column cast failed.
    #[error("Table error: {0}")]
    Table(#[from] PolarsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InsightsError {
    /// Create a schema error listing the missing columns.
    pub fn schema<I, S>(missing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Schema {
            missing: missing.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a row-level parse error.
    pub fn parse(row: usize, column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            row,
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create an invalid filter state error.
    pub fn invalid_filter(message: impl Into<String>) -> Self {
        Self::InvalidFilterState {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether the error was caused by caller-supplied input rather than by
    /// the dataset or the environment.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidFilterState { .. } | Self::UnknownView(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_lists_columns() {
        let err = InsightsError::schema(["adr", "country"]);
        assert_eq!(
            err.to_string(),
            "Schema error: missing required column(s): adr, country"
        );
    }

    #[test]
    fn test_parse_error_display() {
        let err = InsightsError::parse(4, "arrival_date_month", "unrecognized month 'Jully'");
        let msg = err.to_string();
        assert!(msg.contains("row 4"));
        assert!(msg.contains("arrival_date_month"));
        assert!(msg.contains("Jully"));
    }

    #[test]
    fn test_client_error_classification() {
        assert!(InsightsError::invalid_filter("min > max").is_client_error());
        assert!(InsightsError::UnknownView("pie".into()).is_client_error());
        assert!(!InsightsError::schema(["hotel"]).is_client_error());
        assert!(!InsightsError::config("bad port").is_client_error());
    }
}
