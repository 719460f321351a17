use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::{Result, TransferError};
use crate::models::{ClassificationTable, KontaktregisterField, ReportType};
use crate::processors::{remove_trailing_zeroes, FieldClassifier, MissingChannelData, StatisticsMapper};
use crate::readers::KontaktregisterFetch;
use crate::utils::constants::KONTAKTREGISTER_SERIES_ID;
use crate::writers::StatisticsPush;

/// Outcome of one completed transfer run.
#[derive(Debug, Clone)]
pub struct TransferSummary {
    pub points_pushed: usize,
    pub warnings: Vec<MissingChannelData>,
}

/// Orchestrates one transfer run: fetch both reports, merge and trim them,
/// map the result to points and hand those to the push collaborator.
pub struct DataTransfer<F, P> {
    fetch: F,
    push: P,
    classifier: FieldClassifier,
    mapper: StatisticsMapper,
}

impl<F: KontaktregisterFetch, P: StatisticsPush> DataTransfer<F, P> {
    pub fn new(fetch: F, push: P, table: ClassificationTable) -> Self {
        Self {
            fetch,
            push,
            classifier: FieldClassifier::new(table),
            mapper: StatisticsMapper::new(),
        }
    }

    /// Run one transfer for the half-open range `[from, to)`.
    ///
    /// An empty report aborts the run before any mapping work; nothing is
    /// pushed unless the whole report set maps cleanly.
    pub fn transfer(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<TransferSummary> {
        let d5_report = self.fetch.perform(ReportType::D5, from, to)?;
        let d7_report = self.fetch.perform(ReportType::D7, from, to)?;
        if d5_report.is_empty() {
            return Err(TransferError::EmptyReport {
                report: ReportType::D5,
            });
        }
        if d7_report.is_empty() {
            return Err(TransferError::EmptyReport {
                report: ReportType::D7,
            });
        }

        let mut merged: Vec<KontaktregisterField> = d5_report;
        merged.extend(d7_report);
        let before = merged.first().map_or(0, |f| f.values.len());
        let fields = remove_trailing_zeroes(&merged);
        let trimmed_periods = before - fields.first().map_or(0, |f| f.values.len());
        info!(
            fields = fields.len(),
            trimmed_periods, "prepared report fields for mapping"
        );

        let measurements = self.classifier.classify(&fields)?;
        let mapped = self.mapper.map(&measurements, from)?;
        self.push.perform(KONTAKTREGISTER_SERIES_ID, &mapped.points)?;
        info!(
            points = mapped.points.len(),
            warnings = mapped.warnings.len(),
            series = KONTAKTREGISTER_SERIES_ID,
            "transfer complete"
        );

        Ok(TransferSummary {
            points_pushed: mapped.points.len(),
            warnings: mapped.warnings,
        })
    }
}
