use std::num::ParseIntError;

use thiserror::Error;

use crate::models::{ReportType, Statistic};

pub type Result<T> = std::result::Result<T, TransferError>;

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("{report} report is empty")]
    EmptyReport { report: ReportType },

    #[error("required statistic {statistic} is missing from the classified report data")]
    MissingRequiredSeries { statistic: Statistic },

    #[error("statistic {statistic} has {actual} values, expected {expected}")]
    SeriesLengthMismatch {
        statistic: Statistic,
        expected: usize,
        actual: usize,
    },

    #[error("every reporting period was trimmed away as trailing zeroes")]
    NoReportingPeriods,

    #[error("field value '{value}' is not an integer")]
    InvalidFieldValue {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("fetch of {report} report failed: {message}")]
    Fetch { report: ReportType, message: String },

    #[error("push to series '{series_id}' failed: {message}")]
    Push { series_id: String, message: String },
}
