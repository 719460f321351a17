use std::fmt;

use chrono::{DateTime, Duration, Utc};
use tracing::error;

use crate::error::{Result, TransferError};
use crate::models::{Measurement, Statistic, TimeSeriesPoint};
use crate::processors::classifier::ClassifiedMeasurements;

/// Digital mailbox channels feeding the registered-mailbox composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailboxChannel {
    Digipost,
    Eboks,
}

impl fmt::Display for MailboxChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MailboxChannel::Digipost => "Digipost",
            MailboxChannel::Eboks => "eBoks",
        })
    }
}

/// Non-fatal gap in one mailbox channel at a single reporting hour.
///
/// Returned to the caller instead of being buried in a log statement, so the
/// outcome of a run can be asserted on directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingChannelData {
    pub channel: MailboxChannel,
    pub hour: usize,
}

/// Result of mapping one classified report set.
#[derive(Debug, Clone)]
pub struct MappedSeries {
    pub points: Vec<TimeSeriesPoint>,
    pub warnings: Vec<MissingChannelData>,
}

/// Maps classified measurements into one time series point per reporting hour.
#[derive(Debug, Default)]
pub struct StatisticsMapper;

impl StatisticsMapper {
    pub fn new() -> Self {
        Self
    }

    /// Produce one point per reporting hour, starting at `from`.
    ///
    /// The series recorded for D5.1 drives the number of points; D5.1, D5.5
    /// and D5.6 must be present, and every classified series must have the
    /// same length.
    pub fn map(
        &self,
        measurements: &ClassifiedMeasurements,
        from: DateTime<Utc>,
    ) -> Result<MappedSeries> {
        let reference = require(measurements, Statistic::D5_1)?;
        require(measurements, Statistic::D5_5)?;
        require(measurements, Statistic::D5_6)?;
        for (statistic, series) in measurements {
            if series.len() != reference.len() {
                return Err(TransferError::SeriesLengthMismatch {
                    statistic: *statistic,
                    expected: reference.len(),
                    actual: series.len(),
                });
            }
        }
        if reference.is_empty() {
            return Err(TransferError::NoReportingPeriods);
        }

        let mut points = Vec::with_capacity(reference.len());
        let mut warnings = Vec::new();
        for hour in 0..reference.len() {
            points.push(TimeSeriesPoint::new(
                from + Duration::hours(hour as i64),
                measurements_for_hour(measurements, hour, &mut warnings),
            ));
        }

        Ok(MappedSeries { points, warnings })
    }
}

fn measurements_for_hour(
    measurements: &ClassifiedMeasurements,
    hour: usize,
    warnings: &mut Vec<MissingChannelData>,
) -> Vec<Measurement> {
    let mut result: Vec<Measurement> = Statistic::PRIMARY
        .iter()
        .filter_map(|statistic| {
            measurements
                .get(statistic)
                .map(|series| Measurement::new(statistic.statistic_id(), series[hour]))
        })
        .collect();

    let reserved = measurements[&Statistic::D5_5][hour] + measurements[&Statistic::D5_6][hour];
    result.push(Measurement::new(Statistic::D5_5_6.statistic_id(), reserved));

    let digipost = match measurements.get(&Statistic::D7_3) {
        Some(series) => series[hour],
        None => {
            error!(hour, channel = %MailboxChannel::Digipost, "missing channel data, defaulting to 0");
            warnings.push(MissingChannelData {
                channel: MailboxChannel::Digipost,
                hour,
            });
            0
        }
    };

    // Old and new eBoks organization numbers can both report inside the
    // migration window; their counts are added, not replaced.
    let current = measurements.get(&Statistic::D7_4).map(|s| s[hour]);
    let legacy = measurements.get(&Statistic::D7_4_OLD).map(|s| s[hour]);
    let eboks = match (current, legacy) {
        (None, None) => {
            error!(hour, channel = %MailboxChannel::Eboks, "missing channel data, defaulting to 0");
            warnings.push(MissingChannelData {
                channel: MailboxChannel::Eboks,
                hour,
            });
            0
        }
        _ => current.unwrap_or(0) + legacy.unwrap_or(0),
    };

    result.push(Measurement::new(
        Statistic::D7_3_4.statistic_id(),
        digipost + eboks,
    ));
    result
}

fn require<'a>(
    measurements: &'a ClassifiedMeasurements,
    statistic: Statistic,
) -> Result<&'a Vec<i64>> {
    measurements
        .get(&statistic)
        .ok_or(TransferError::MissingRequiredSeries { statistic })
}
