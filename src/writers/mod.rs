//! Contract for the collaborator that delivers mapped points to the
//! statistics ingest service.

use crate::error::Result;
use crate::models::TimeSeriesPoint;

/// Durably stores points under a series id at the destination system.
///
/// Failure modes (network, auth, duplicates) are the implementation's
/// concern; they surface as [`TransferError::Push`](crate::TransferError::Push).
pub trait StatisticsPush {
    fn perform(&self, series_id: &str, points: &[TimeSeriesPoint]) -> Result<()>;
}
