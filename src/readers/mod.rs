//! Contract for the collaborator that retrieves raw report fields from the
//! Kontaktregister registry.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::{KontaktregisterField, ReportType};

/// Fetches the raw fields of one report for the half-open range `[from, to)`.
///
/// Implementations own all transport concerns; failures surface as
/// [`TransferError::Fetch`](crate::TransferError::Fetch). An empty result is
/// valid here — the transfer run decides whether that aborts the run.
pub trait KontaktregisterFetch {
    fn perform(
        &self,
        report: ReportType,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<KontaktregisterField>>;
}
